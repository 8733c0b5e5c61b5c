use std::path::PathBuf;
use std::process::ExitCode;

use carport_roi::app::{self, Session};
use carport_roi::config::{self, DEFAULT_CONFIG_PATH};
use carport_roi::i18n::{resolve_language, Catalog};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

/// 카포트 태양광/충전 투자 회수 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 표시 언어 (cs, en, de). 지정하지 않으면 설정 파일과 시스템 로케일을 따른다.
    #[arg(long)]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 태양광 카포트 절감액과 회수 기간 계산
    Solar {
        parking_spots: String,
        solar_power: String,
        electricity_price: String,
    },
    /// 충전 카포트 수익과 회수 기간 계산
    Charging {
        /// 카포트 모델 번호 (0부터)
        #[arg(long, default_value_t = 0)]
        model: usize,
        /// 하루 AC 충전 횟수
        #[arg(long)]
        ac: Option<String>,
        /// 하루 DC 충전 횟수
        #[arg(long)]
        dc: Option<String>,
        /// 전력망 전기 요금
        #[arg(long)]
        grid_price: Option<String>,
    },
    /// 문의 폼 검증
    Contact {
        name: String,
        email: String,
        message: String,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청한 계산기를 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match try_run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default(&args.config)?;
    let language = resolve_language(args.lang.as_deref(), Some(cfg.language.as_str()));
    let catalog = Catalog::with_pack_dir(cfg.locales_dir.as_deref())?;
    tracing::debug!(%language, config = %cfg.path().display(), "session ready");
    let mut session = Session::new(cfg, catalog, language);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Solar {
            parking_spots,
            solar_power,
            electricity_price,
        } => {
            app::run_solar(&session, &parking_spots, &solar_power, &electricity_price);
        }
        Command::Charging {
            model,
            ac,
            dc,
            grid_price,
        } => {
            app::run_charging(
                &session,
                model,
                ac.as_deref(),
                dc.as_deref(),
                grid_price.as_deref(),
            );
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            app::run_contact(&session, &name, &email, &message);
        }
        Command::Interactive => app::run(&mut session)?,
    }
    Ok(())
}
