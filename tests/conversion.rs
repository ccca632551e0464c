//! 변환 테이블/해석 회귀 테스트. 카테고리별 기준쌍과 오류 경로를 검증한다.
use unit_converter::conversion::{convert, parse_category, unit_names, ConversionError};
use unit_converter::quantity::Category;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn length_reference_pairs() {
    let cases = [
        (1.0, "meters", "feet", 3.28084),
        (1.0, "feet", "meters", 0.3048),
        (100.0, "centimeters", "meters", 1.0),
        (1.0, "kilometers", "miles", 0.621371),
    ];
    for (value, from, to, expected) in cases {
        let result = convert(Category::Length, value, from, to).expect("length");
        assert_close(&format!("{value} {from} -> {to}"), result, expected, 1e-4);
    }
}

#[test]
fn weight_reference_pairs() {
    let kg = convert(Category::Weight, 1000.0, "grams", "kilograms").expect("g->kg");
    assert_eq!(kg, 1.0);

    let g = convert(Category::Weight, 1.0, "kilograms", "grams").expect("kg->g");
    assert_eq!(g, 1000.0);

    let oz = convert(Category::Weight, 1.0, "pounds", "ounces").expect("lb->oz");
    assert_close("1 pounds -> ounces", oz, 16.0, 1e-4);
}

#[test]
fn temperature_fixed_points() {
    let f = |v| convert(Category::Temperature, v, "celsius", "fahrenheit").expect("c->f");
    assert_eq!(f(0.0), 32.0);
    assert_eq!(f(100.0), 212.0);
    assert_eq!(f(-40.0), -40.0);

    let k = convert(Category::Temperature, 0.0, "celsius", "kelvin").expect("c->k");
    assert_eq!(k, 273.15);

    let c = convert(Category::Temperature, 50.0, "fahrenheit", "celsius").expect("f->c");
    assert_close("50 fahrenheit -> celsius", c, 10.0, 1e-9);

    let fk = convert(Category::Temperature, 50.0, "fahrenheit", "kelvin").expect("f->k");
    assert_close("50 fahrenheit -> kelvin", fk, 283.15, 1e-9);
}

#[test]
fn speed_pressure_time_volume_area_reference_pairs() {
    let kmh = convert(Category::Speed, 1.0, "meters/second", "kilometers/hour").expect("speed");
    assert_eq!(kmh, 3.6);

    let psi = convert(Category::Pressure, 1.0, "bars", "psi").expect("pressure");
    assert_close("1 bars -> psi", psi, 14.5038, 1e-4);

    let pa = convert(Category::Pressure, 1.0, "atmospheres", "pascals").expect("atm->pa");
    assert_close("1 atmospheres -> pascals", pa, 101325.0, 1e-4);

    let min = convert(Category::Time, 3600.0, "seconds", "minutes").expect("time");
    assert_close("3600 seconds -> minutes", min, 60.0, 1e-9);

    let ml = convert(Category::Volume, 1.0, "liters", "milliliters").expect("volume");
    assert_eq!(ml, 1000.0);

    let sqft = convert(Category::Area, 1.0, "square meters", "square feet").expect("area");
    assert_close("1 square meters -> square feet", sqft, 10.7639, 1e-4);
}

#[test]
fn same_unit_is_identity_for_base_units() {
    // 기준 단위는 배율이 1이라 두 단계 경로에서도 비트 단위로 보존된다.
    let cases = [
        (Category::Length, "meters"),
        (Category::Weight, "kilograms"),
        (Category::Time, "seconds"),
        (Category::Volume, "liters"),
        (Category::Speed, "meters/second"),
        (Category::Pressure, "pascals"),
        (Category::Area, "square meters"),
    ];
    for (cat, unit) in cases {
        let result = convert(cat, 10.0, unit, unit).expect("identity");
        assert_eq!(result, 10.0, "{} {unit}", cat.name());
    }
}

#[test]
fn same_unit_is_identity_for_temperature() {
    for unit in ["celsius", "fahrenheit", "kelvin"] {
        let result = convert(Category::Temperature, 10.0, unit, unit).expect("identity");
        assert_eq!(result, 10.0, "temperature {unit}");
    }
}

#[test]
fn round_trip_all_unit_pairs() {
    let quantity = 123.456;
    for cat in Category::ALL {
        let names = unit_names(cat);
        for from in names {
            for to in names {
                let out = convert(cat, quantity, from, to).expect("forward");
                let back = convert(cat, out, to, from).expect("back");
                assert_close(&format!("{} {from} <-> {to}", cat.name()), back, quantity, 1e-9);
            }
        }
    }
}

#[test]
fn zero_quantity_converts_to_zero() {
    let result = convert(Category::Length, 0.0, "meters", "feet").expect("zero");
    assert_eq!(result, 0.0);
}

#[test]
fn unit_names_are_ordered_and_resolvable() {
    assert_eq!(
        unit_names(Category::Length),
        ["meters", "feet", "inches", "centimeters", "kilometers", "miles"]
    );
    assert_eq!(
        unit_names(Category::Weight),
        ["kilograms", "pounds", "ounces", "grams"]
    );
    assert_eq!(
        unit_names(Category::Temperature),
        ["celsius", "fahrenheit", "kelvin"]
    );
    assert_eq!(unit_names(Category::Time), ["seconds", "minutes", "hours", "days"]);
    assert_eq!(
        unit_names(Category::Volume),
        ["liters", "gallons", "fluid ounces", "milliliters"]
    );
    assert_eq!(
        unit_names(Category::Speed),
        ["meters/second", "kilometers/hour", "miles/hour"]
    );
    assert_eq!(
        unit_names(Category::Pressure),
        ["pascals", "bars", "atmospheres", "psi"]
    );
    assert_eq!(
        unit_names(Category::Area),
        [
            "square meters",
            "square feet",
            "square inches",
            "square centimeters",
            "hectares",
            "acres"
        ]
    );

    // 목록에 실린 이름은 모두 변환 입력으로도 해석되어야 한다.
    for cat in Category::ALL {
        for name in unit_names(cat) {
            assert!(
                convert(cat, 1.0, name, name).is_ok(),
                "{} {name}",
                cat.name()
            );
        }
    }
}

#[test]
fn category_names_round_trip() {
    for cat in Category::ALL {
        let parsed = parse_category(cat.name()).expect("category");
        assert_eq!(parsed, cat);
    }
    assert!(matches!(
        parse_category("warp"),
        Err(ConversionError::NotFound(_))
    ));
}

#[test]
fn unknown_unit_is_not_found() {
    let err = convert(Category::Length, 1.0, "nonexistent", "meters").unwrap_err();
    assert!(matches!(err, ConversionError::NotFound(_)));

    let err = convert(Category::Length, 1.0, "meters", "nonexistent").unwrap_err();
    assert!(matches!(err, ConversionError::NotFound(_)));
}

#[test]
fn non_finite_quantity_is_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = convert(Category::Length, bad, "meters", "feet").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidQuantity(_)), "{bad}");
    }
}

#[test]
fn extreme_magnitudes_survive_the_two_step_path() {
    let small = convert(Category::Length, 0.000001, "meters", "kilometers").expect("small");
    assert_close("1e-6 meters -> kilometers", small, 1e-9, 1e-4);

    let large = convert(Category::Length, 1_000_000.0, "meters", "kilometers").expect("large");
    assert_close("1e6 meters -> kilometers", large, 1000.0, 1e-9);
}
