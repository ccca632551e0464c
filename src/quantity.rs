use serde::{Deserialize, Serialize};

/// 다루는 변환 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
    Volume,
    Speed,
    Pressure,
    Area,
}

impl Category {
    /// 전체 카테고리를 표시 순서대로 나열한다.
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Time,
        Category::Volume,
        Category::Speed,
        Category::Pressure,
        Category::Area,
    ];

    /// 카테고리 이름을 반환한다.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Time => "time",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Pressure => "pressure",
            Category::Area => "area",
        }
    }
}
