use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unit_converter::quantity::Category;
use unit_converter::{app, config, conversion, format};

/// 카테고리별 단위 변환 도구. 서브커맨드 없이 실행하면 대화형 메뉴가 열린다.
#[derive(Parser)]
#[command(name = "unit-converter", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 값을 다른 단위로 변환하고 결과를 출력한다
    Convert {
        /// 카테고리 이름 (length, weight, temperature, ...)
        category: String,
        /// 변환할 값
        quantity: f64,
        /// 입력 단위 이름
        from_unit: String,
        /// 변환 단위 이름
        to_unit: String,
    },
    /// 카테고리에 속한 단위 목록을 출력한다
    Units {
        /// 카테고리 이름. 생략하면 전체를 출력한다
        category: Option<String>,
    },
}

/// 프로그램의 엔트리 포인트. 로깅을 초기화한 뒤 요청된 커맨드를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unit_converter=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Convert {
            category,
            quantity,
            from_unit,
            to_unit,
        }) => {
            let cat = conversion::parse_category(&category)?;
            let result = conversion::convert(cat, quantity, &from_unit, &to_unit)?;
            println!("{}", format::format_result(result));
        }
        Some(Command::Units { category }) => match category {
            Some(name) => {
                let cat = conversion::parse_category(&name)?;
                println!("{}", conversion::unit_names(cat).join(", "));
            }
            None => {
                for cat in Category::ALL {
                    println!("{}: {}", cat.name(), conversion::unit_names(cat).join(", "));
                }
            }
        },
        None => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)?;
        }
    }
    Ok(())
}
