use anyhow::Result;
use clap::{Parser, Subcommand};
use reading_passage_import::config::{ApiBinding, Config};
use reading_passage_import::orchestrator::{seed, App, ImportOptions};
use reading_passage_import::logger;
use std::path::PathBuf;
use std::process::ExitCode;

/// 阅读理解文档批量导入
#[derive(Parser, Debug)]
#[command(name = "reading-import", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 详细日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 导入文档（未指定文件时导入 PASSAGE_FOLDER 下的所有文档）
    Import {
        /// TOML / JSON 文档
        files: Vec<PathBuf>,

        /// 调用方式：session | token
        #[arg(long, env = "API_BINDING", value_parser = parse_binding)]
        binding: Option<ApiBinding>,

        /// 请求间隔（毫秒）
        #[arg(long, env = "REQUEST_DELAY_MS")]
        delay_ms: Option<u64>,

        /// 只检查文档，不发送请求
        #[arg(long)]
        dry_run: bool,

        /// 把结果写成 JSON 报告
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 检查文档中的答案是否都在选项里
    Check {
        files: Vec<PathBuf>,
    },
    /// 把 JSON 请求体原样 POST 到指定资源
    Seed {
        /// 资源路径，例如 tests
        resource: String,
        /// JSON 请求体文件
        payload: PathBuf,
    },
}

fn parse_binding(s: &str) -> Result<ApiBinding, String> {
    s.parse().map_err(|e| format!("{}", e))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logger::init(config.verbose_logging);

    match cli.command {
        Command::Import {
            files,
            binding,
            delay_ms,
            dry_run,
            report,
        } => {
            if let Some(binding) = binding {
                config.api_binding = binding;
            }
            if let Some(delay_ms) = delay_ms {
                config.request_delay_ms = delay_ms;
            }
            let options = ImportOptions {
                dry_run,
                report_path: report,
            };
            run_import(config, &files, &options).await
        }
        Command::Check { files } => {
            let options = ImportOptions {
                dry_run: true,
                report_path: None,
            };
            run_import(config, &files, &options).await
        }
        Command::Seed { resource, payload } => {
            let response = seed(&config, &resource, &payload).await?;
            println!("{}", response.status);
            println!("{}", response.body);
            Ok(exit_code(response.is_success()))
        }
    }
}

async fn run_import(config: Config, files: &[PathBuf], options: &ImportOptions) -> Result<ExitCode> {
    let app = if options.dry_run {
        config.validate()?;
        App::for_check(config)
    } else {
        App::initialize(config)?
    };
    let stats = app.run(files, options).await?;

    Ok(exit_code(stats.failed == 0))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_flag_overrides_environment() {
        std::env::set_var("API_BINDING", "bogus");

        let cli = Cli::try_parse_from(["reading-import", "import", "--binding", "token"]).unwrap();
        match cli.command {
            Command::Import { binding, .. } => assert_eq!(binding, Some(ApiBinding::Token)),
            other => panic!("unexpected command: {:?}", other),
        }

        // 没有命令行参数时才读取环境变量
        assert!(Cli::try_parse_from(["reading-import", "import"]).is_err());

        std::env::remove_var("API_BINDING");
    }

    #[test]
    fn test_exit_code_follows_outcome() {
        assert_eq!(format!("{:?}", exit_code(true)), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{:?}", exit_code(false)), format!("{:?}", ExitCode::FAILURE));
    }
}
