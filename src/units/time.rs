/// 시간 단위. 내부 기준은 seconds이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// 선택 목록 순서의 단위 이름.
pub const NAMES: [&str; 4] = ["seconds", "minutes", "hours", "days"];

fn to_seconds(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Seconds => value,
        TimeUnit::Minutes => value / (1.0 / 60.0),
        TimeUnit::Hours => value / (1.0 / 3600.0),
        TimeUnit::Days => value / (1.0 / 86400.0),
    }
}

fn from_seconds(value_s: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Seconds => value_s,
        TimeUnit::Minutes => value_s * (1.0 / 60.0),
        TimeUnit::Hours => value_s * (1.0 / 3600.0),
        TimeUnit::Days => value_s * (1.0 / 86400.0),
    }
}

/// 시간을 다른 단위로 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_seconds(value, from);
    from_seconds(s, to)
}
