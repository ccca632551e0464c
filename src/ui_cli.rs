use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::format;
use crate::quantity::Category;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    UnitList,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Converter ===");
    println!("1) 단위 변환");
    println!("2) 단위 목록");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::UnitList),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    print_category_options();
    let cat = read_category(cfg.default_category)?;
    println!("단위: {}", conversion::unit_names(cat).join(", "));
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: meters, celsius): ")?;
    let to_unit = read_line("변환 단위(ex: feet, fahrenheit): ")?;
    match conversion::convert(cat, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{value} {} = {} {}",
            from_unit.trim(),
            format::format_result(result),
            to_unit.trim()
        ),
        Err(ConversionError::NotFound(_)) => println!("잘못된 단위 선택입니다."),
        Err(ConversionError::InvalidQuantity(_)) => println!("유효한 숫자를 입력하세요."),
    }
    cfg.default_category = cat;
    Ok(())
}

/// 카테고리별 단위 목록을 출력한다.
pub fn handle_unit_list() -> Result<(), AppError> {
    println!("\n-- 단위 목록 --");
    for cat in Category::ALL {
        println!("{}: {}", cat.name(), conversion::unit_names(cat).join(", "));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 기본 카테고리: {}", cfg.default_category.name());
    print_category_options();
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim().parse::<u32>().ok().and_then(map_category) {
        Some(cat) => {
            cfg.default_category = cat;
            println!("기본 카테고리가 {} 로 설정되었습니다.", cat.name());
        }
        None => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn print_category_options() {
    println!("1) 길이  2) 무게  3) 온도  4) 시간");
    println!("5) 체적  6) 속도  7) 압력  8) 면적");
}

fn read_category(default: Category) -> Result<Category, AppError> {
    loop {
        let sel = read_line(&format!("항목 번호를 입력(엔터 시 {}): ", default.name()))?;
        let t = sel.trim();
        if t.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = t.parse::<u32>() {
            if let Some(cat) = map_category(n) {
                return Ok(cat);
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

fn map_category(n: u32) -> Option<Category> {
    match n {
        1 => Some(Category::Length),
        2 => Some(Category::Weight),
        3 => Some(Category::Temperature),
        4 => Some(Category::Time),
        5 => Some(Category::Volume),
        6 => Some(Category::Speed),
        7 => Some(Category::Pressure),
        8 => Some(Category::Area),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
