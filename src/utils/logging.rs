//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数
use anyhow::Result;
use std::fs;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::ImportResult;

/// 初始化 tracing
///
/// `RUST_LOG` 优先；否则为 `info`，`verbose` 时为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n阅读题导入日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 单份文档的日志文件摘要行
pub fn summary_line(document: &str, result: &ImportResult) -> String {
    format!(
        "[{}] {} | 总数 {} | 成功 {} | 失败 {} | 试卷 {}",
        chrono::Local::now().format("%H:%M:%S"),
        document,
        result.total_questions,
        result.created_questions,
        result.failed_questions,
        result.test_id.as_deref().unwrap_or("-")
    )
}

/// 记录程序启动信息
///
/// # 参数
/// - `base_url`: API 地址
/// - `delay_ms`: 请求间隔
pub fn log_startup(base_url: &str, delay_ms: u64) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 阅读题批量导入");
    info!("🌐 API 地址: {}", base_url);
    info!("⏱️ 请求间隔: {}ms", delay_ms);
    info!("{}", "=".repeat(60));
}

/// 记录文档加载信息
pub fn log_documents_loaded(total: usize, dry_run: bool) {
    info!("✓ 找到 {} 份待导入的文档", total);
    if dry_run {
        info!("💡 dry-run 模式：只检查，不发送请求\n");
    }
}

/// 记录单份文档完成信息
pub fn log_document_complete(document_index: usize, result: &ImportResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "[文档 {}] 题目统计: 成功 {}, 失败 {}, 总计 {}",
        document_index, result.created_questions, result.failed_questions, result.total_questions
    );
    for error in &result.errors {
        info!("[文档 {}]   {}", document_index, error);
    }
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功导入的文档数量
/// - `failed`: 导入中断的文档数量
/// - `total`: 文档总数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(success: usize, failed: usize, total: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("蜜蜂采蜜", 2), "蜜蜂...");
        assert_eq!(truncate_text("bees", 10), "bees");
    }

    #[test]
    fn test_summary_line_without_test() {
        let mut result = ImportResult::new(1);
        result.record_failed(1, "boom");
        let line = summary_line("bees.toml", &result);
        assert!(line.ends_with("bees.toml | 总数 1 | 成功 0 | 失败 1 | 试卷 -"));
    }

    #[test]
    fn test_log_file_header_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();
        append_log_line(path, "first").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("阅读题导入日志"));
        assert!(content.ends_with("first\n"));
    }
}
