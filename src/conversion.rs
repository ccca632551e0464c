use crate::quantity::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 카테고리 또는 단위 이름
    NotFound(String),
    /// 유한하지 않은 수량 (NaN, ±무한대)
    InvalidQuantity(f64),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::NotFound(name) => {
                write!(f, "알 수 없는 카테고리 또는 단위: {name}")
            }
            ConversionError::InvalidQuantity(v) => write!(f, "유효하지 않은 수량: {v}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 카테고리 이름을 enum으로 변환한다.
pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    match s.to_lowercase().as_str() {
        "length" => Ok(Category::Length),
        "weight" => Ok(Category::Weight),
        "temperature" => Ok(Category::Temperature),
        "time" => Ok(Category::Time),
        "volume" => Ok(Category::Volume),
        "speed" => Ok(Category::Speed),
        "pressure" => Ok(Category::Pressure),
        "area" => Ok(Category::Area),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

/// 카테고리에 속한 단위 이름을 선택 목록 순서 그대로 반환한다.
pub fn unit_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::Length => &length::NAMES,
        Category::Weight => &weight::NAMES,
        Category::Temperature => &temperature::NAMES,
        Category::Time => &time::NAMES,
        Category::Volume => &volume::NAMES,
        Category::Speed => &speed::NAMES,
        Category::Pressure => &pressure::NAMES,
        Category::Area => &area::NAMES,
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 수량은 유한한 값이어야 하며 NaN/무한대는 `InvalidQuantity`로 거부한다.
/// 선형 카테고리는 입력을 기준 단위로 나눈 뒤 대상 배율을 곱하는 두 단계로
/// 계산하고, 온도는 단위 쌍별 공식을 그대로 적용한다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidQuantity(value));
    }
    let result = match category {
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            convert_length(value, from, to)
        }
        Category::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            convert_weight(value, from, to)
        }
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            convert_temperature(value, from, to)
        }
        Category::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            convert_time(value, from, to)
        }
        Category::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            convert_volume(value, from, to)
        }
        Category::Speed => {
            let from = parse_speed_unit(from_unit_str)?;
            let to = parse_speed_unit(to_unit_str)?;
            convert_speed(value, from, to)
        }
        Category::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            convert_pressure(value, from, to)
        }
        Category::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            convert_area(value, from, to)
        }
    };
    tracing::debug!(
        category = category.name(),
        from = from_unit_str,
        to = to_unit_str,
        value,
        result,
        "단위 변환"
    );
    Ok(result)
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "meters" | "meter" | "m" => Ok(LengthUnit::Meters),
        "feet" | "foot" | "ft" => Ok(LengthUnit::Feet),
        "inches" | "inch" | "in" => Ok(LengthUnit::Inches),
        "centimeters" | "centimeter" | "cm" => Ok(LengthUnit::Centimeters),
        "kilometers" | "kilometer" | "km" => Ok(LengthUnit::Kilometers),
        "miles" | "mile" | "mi" => Ok(LengthUnit::Miles),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kilograms" | "kilogram" | "kg" => Ok(WeightUnit::Kilograms),
        "pounds" | "pound" | "lb" | "lbs" => Ok(WeightUnit::Pounds),
        "ounces" | "ounce" | "oz" => Ok(WeightUnit::Ounces),
        "grams" | "gram" | "g" => Ok(WeightUnit::Grams),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "seconds" | "second" | "sec" | "s" => Ok(TimeUnit::Seconds),
        "minutes" | "minute" | "min" => Ok(TimeUnit::Minutes),
        "hours" | "hour" | "hr" | "h" => Ok(TimeUnit::Hours),
        "days" | "day" | "d" => Ok(TimeUnit::Days),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "liters" | "liter" | "litre" | "l" => Ok(VolumeUnit::Liters),
        "gallons" | "gallon" | "gal" => Ok(VolumeUnit::Gallons),
        "fluid ounces" | "fluid ounce" | "fl oz" | "floz" => Ok(VolumeUnit::FluidOunces),
        "milliliters" | "milliliter" | "ml" => Ok(VolumeUnit::Milliliters),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_speed_unit(s: &str) -> Result<SpeedUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "meters/second" | "m/s" | "mps" => Ok(SpeedUnit::MetersPerSecond),
        "kilometers/hour" | "km/h" | "kph" => Ok(SpeedUnit::KilometersPerHour),
        "miles/hour" | "mi/h" | "mph" => Ok(SpeedUnit::MilesPerHour),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pascals" | "pascal" | "pa" => Ok(PressureUnit::Pascals),
        "bars" | "bar" => Ok(PressureUnit::Bars),
        "atmospheres" | "atmosphere" | "atm" => Ok(PressureUnit::Atmospheres),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "square meters" | "square meter" | "m2" | "sqm" => Ok(AreaUnit::SquareMeters),
        "square feet" | "square foot" | "ft2" | "sqft" => Ok(AreaUnit::SquareFeet),
        "square inches" | "square inch" | "in2" | "sqin" => Ok(AreaUnit::SquareInches),
        "square centimeters" | "square centimeter" | "cm2" | "sqcm" => {
            Ok(AreaUnit::SquareCentimeters)
        }
        "hectares" | "hectare" | "ha" => Ok(AreaUnit::Hectares),
        "acres" | "acre" | "ac" => Ok(AreaUnit::Acres),
        _ => Err(ConversionError::NotFound(s.to_string())),
    }
}
