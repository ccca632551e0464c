//! 변환 결과 표시용 포맷 정책.

/// 결과 값을 표시 문자열로 만든다.
///
/// 절대값이 0.001 미만이거나 10000 초과이면 가수 소수점 4자리의 지수 표기,
/// 그 외에는 소수점 4자리 고정 표기를 사용한다. 0은 지수 표기 범위에
/// 걸리지만 고정 표기(`0.0000`)로 처리한다.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return format!("{value:.4}");
    }
    let abs = value.abs();
    if abs < 0.001 || abs > 10000.0 {
        format_scientific(value)
    } else {
        format!("{value:.4}")
    }
}

// `{:.4e}`는 지수부를 자리수 패딩 없이 출력하므로 (`1.0000e-9`) 부호 포함
// 2자리 지수 형식(`1.0000e-09`)으로 재조립한다.
fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.4e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
