use pacer::{convert, DistanceUnit, Pace, PaceError, RawPace, TimeUnit, UnitCategory};

#[test]
fn ten_km_in_3000_s_is_a_five_minute_pace() {
    let pace = Pace::new(10.0, 3_000.0);
    assert_eq!(pace.pace(), 300.0);
    assert_eq!(pace.clock_string(), "00:05:00");
}

#[test]
fn mile_minute_input_normalises_to_seconds_per_km() {
    // 5 mi ≈ 8.0467 km, 1500 min = 90000 s.
    let pace = Pace::with_units(5.0, 1_500.0, DistanceUnit::Mile, TimeUnit::Minute);
    assert_eq!(pace.distance_unit(), DistanceUnit::Kilometer);
    assert_eq!(pace.time_unit(), TimeUnit::Second);
    assert!((pace.pace() - 90_000.0 / 8.0467).abs() < 1e-6);
}

#[test]
fn reformatting_to_miles_and_minutes() {
    let mut pace = Pace::new(10.0, 3_000.0);
    pace.format(DistanceUnit::Mile, TimeUnit::Minute);

    assert!((pace.distance() - 6.2137).abs() < 1e-4);
    assert_eq!(pace.time(), 50.0);
    assert!((pace.pace() - 8.047).abs() < 1e-3);
}

#[test]
fn conversion_roundtrips_recover_the_original_value() {
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            let back = convert(convert(42.195, from, to), to, from);
            assert!((back - 42.195).abs() < 1e-9);
        }
    }
    for from in TimeUnit::ALL {
        for to in TimeUnit::ALL {
            let back = convert(convert(7_200.0, from, to), to, from);
            assert!((back - 7_200.0).abs() < 1e-6);
        }
    }
}

#[test]
fn format_roundtrip_restores_the_original_pace() {
    let mut pace = Pace::with_units(21.0975, 5_400.0, DistanceUnit::Kilometer, TimeUnit::Second);
    let original = pace.pace();

    pace.format(DistanceUnit::Mile, TimeUnit::Hour)
        .format(DistanceUnit::Kilometer, TimeUnit::Second);

    assert!((pace.pace() - original).abs() < 1e-9);
}

#[test]
fn raw_boundary_covers_the_whole_error_taxonomy() {
    let missing = Pace::from_raw(&RawPace {
        time: Some("3000".into()),
        ..RawPace::default()
    })
    .unwrap_err();
    assert_eq!(
        missing,
        PaceError::RequiredParameterMissing { name: "distance" }
    );

    let bad_type = Pace::from_raw(&RawPace {
        distance: Some("10".into()),
        time: Some("soon".into()),
        ..RawPace::default()
    })
    .unwrap_err();
    assert!(matches!(bad_type, PaceError::InvalidType { name: "time", .. }));

    let bad_unit = Pace::from_raw(&RawPace {
        distance: Some("10".into()),
        time: Some("3000".into()),
        distance_unit: Some("yards".into()),
        ..RawPace::default()
    })
    .unwrap_err();
    assert_eq!(
        bad_unit,
        PaceError::InvalidUnit {
            category: UnitCategory::Distance,
            value: "yards".into(),
        }
    );
}

#[test]
fn failed_reformat_is_all_or_nothing() {
    let mut pace = Pace::new(10.0, 3_000.0);
    let before = pace;

    assert!(pace.format_raw(Some("mi"), Some("day")).is_err());
    assert_eq!(pace, before);

    assert!(pace.format_raw(None, Some("min")).is_err());
    assert_eq!(pace, before);
}

#[test]
fn zero_distance_is_an_infinite_pace_not_an_error() {
    let pace = Pace::new(0.0, 3_000.0);
    assert!(pace.pace().is_infinite());

    let from_raw = Pace::from_raw(&RawPace {
        distance: Some("0".into()),
        time: Some("3000".into()),
        ..RawPace::default()
    })
    .unwrap();
    assert!(from_raw.pace().is_infinite());
}

#[test]
fn clock_string_survives_unit_changes() {
    let mut pace = Pace::new(10.0, 3_000.0);
    let in_seconds = pace.clock_string();
    pace.format(DistanceUnit::Kilometer, TimeUnit::Hour);
    assert_eq!(pace.clock_string(), in_seconds);
}

#[cfg(feature = "serde")]
#[test]
fn serde_pace_keeps_the_legacy_camel_case_shape() {
    let pace = Pace::new(10.0, 3_000.0);
    let json = serde_json::to_string(&pace).unwrap();
    assert!(json.contains("distanceUnit"));
    assert!(json.contains("timeUnit"));

    let back: Pace = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pace(), pace.pace());
}
