use std::path::PathBuf;

use clap::Parser;
use measurements::{app, config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "measurements")]
#[command(about = "질량/압력/온도/체적 단위 변환기", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 로그 상세도 (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: app::Command,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match try_run(&cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("오류: {err}");
            std::process::exit(1);
        }
    }
}

fn try_run(cli: &Cli) -> Result<String, app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    app::run(&cli.command, &cfg)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
