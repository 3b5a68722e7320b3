pub mod pacer;
pub mod transformer;
pub mod warn_writer;

pub use pacer::{FixedDelay, NoDelay, Pacer};
pub use transformer::{answer_letter, transform_question};
pub use warn_writer::WarnWriter;
