// ==========================================
// 时刻表生成流水线集成测试
// ==========================================
// 测试目标: 配置 → 校验 → 枚举 → 投影 → 写出 全链路
// ==========================================


use chrono::NaiveTime;
use daytime_seed::engine::{enumerate, validate};
use daytime_seed::{pipeline, ConfigError, GenerateError};
use std::fs;
use test_helpers::{column_index, config_in, create_output_dir, read_csv};

#[test]
fn test_default_window_yields_1440_rows() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "00:00:00", "23:59:59", "1m");

    let report = pipeline::run(&config).expect("generation should succeed");
    assert_eq!(report.row_count, 1440);
    assert_eq!(report.output_path, dir.path().join("daytime.csv"));

    let (header, rows) = read_csv(&report.output_path).unwrap();
    assert_eq!(
        header,
        vec!["time_int", "time_string12", "time_string24", "hour", "minute", "second"]
    );
    assert_eq!(rows.len(), 1440);

    let idx = column_index(&header, "time_int");
    assert_eq!(rows.first().unwrap()[idx], "0");
    assert_eq!(rows.last().unwrap()[idx], "235900");
}

#[test]
fn test_row_count_and_strictly_increasing_time_int() {
    let cases = [
        ("00:00:00", "23:59:59", "1m"),
        ("06:15:00", "18:45:30", "7s"),
        ("00:00:01", "00:00:02", "1h"),
        ("12:00:00", "23:59:60", "90s"),
        ("000000", "235959", "1s"),
    ];

    for (start, end, step) in cases {
        let dir = create_output_dir();
        let config = config_in(dir.path(), start, end, step);
        let (spec, _) = validate(&config).unwrap();
        let expected =
            ((spec.end_seconds() - spec.start_seconds()) / spec.step_seconds()) as usize + 1;

        let report = pipeline::run(&config).unwrap();
        assert_eq!(report.row_count, expected, "{start}..{end} step {step}");

        let rows: Vec<_> = enumerate(&spec).collect();
        assert_eq!(rows.len(), expected);
        for pair in rows.windows(2) {
            assert!(pair[0].time_int < pair[1].time_int);
            let a = pair[0].hour * 3600 + pair[0].minute * 60 + pair[0].second;
            let b = pair[1].hour * 3600 + pair[1].minute * 60 + pair[1].second;
            assert_eq!(b - a, spec.step_seconds());
        }
    }
}

#[test]
fn test_time_string24_roundtrip() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "00:00:00", "23:59:59", "37s");
    let (spec, _) = validate(&config).unwrap();

    for row in enumerate(&spec) {
        let parsed = NaiveTime::parse_from_str(&row.time_string24, "%H:%M:%S").unwrap();
        assert_eq!(Some(parsed), row.to_naive_time());
        let expected_12 = parsed.format("%I:%M:%S %p").to_string();
        assert_eq!(row.time_string12, expected_12);
    }
}

#[test]
fn test_idempotent_output() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "08:00:00", "17:00:00", "5m");

    let first = pipeline::run(&config).unwrap();
    let bytes_first = fs::read(&first.output_path).unwrap();
    let second = pipeline::run(&config).unwrap();
    let bytes_second = fs::read(&second.output_path).unwrap();

    assert_eq!(bytes_first, bytes_second);
}

#[test]
fn test_leap_second_end_is_accepted() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "23:59:00", "23:59:60", "1s");

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.row_count, 61);

    let (header, rows) = read_csv(&report.output_path).unwrap();
    let last = rows.last().unwrap();
    assert_eq!(last[column_index(&header, "time_string24")], "23:59:60");
    assert_eq!(last[column_index(&header, "time_string12")], "11:59:60 PM");
    assert_eq!(last[column_index(&header, "time_int")], "235960");
}

#[test]
fn test_leap_second_outside_end_of_day_is_rejected() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "00:00:00", "22:59:60", "1m");

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::LeapSecondNotAllowed { .. })
    ));
    assert!(!dir.path().join("daytime.csv").exists());
}

#[test]
fn test_two_hour_step_over_full_day() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "00:00:00", "23:59:60", "2h");
    let (spec, _) = validate(&config).unwrap();

    let rows: Vec<_> = enumerate(&spec).collect();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[1].time_int, 20000);
    assert_eq!(rows[12].time_string24, "23:59:60");

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.row_count, 13);
}

#[test]
fn test_step_failures_are_step_specific() {
    let dir = create_output_dir();
    let cases = [
        ("0m", ConfigError::NonPositiveStep("0m".to_string())),
        ("-5s", ConfigError::NonPositiveStep("-5s".to_string())),
        ("5", ConfigError::InvalidStepUnit("5".to_string())),
        ("5x", ConfigError::InvalidStepUnit("5x".to_string())),
    ];
    for (step, expected) in cases {
        let config = config_in(dir.path(), "00:00:00", "23:59:59", step);
        let err = pipeline::run(&config).unwrap_err();
        match &err {
            GenerateError::Config(actual) => assert_eq!(actual, &expected, "step {step:?}"),
            other => panic!("step {step:?} gave {other:?}"),
        }
        assert!(err.to_string().contains("TIME_STEP"));
    }
    assert!(!dir.path().join("daytime.csv").exists());
}

#[test]
fn test_huge_step_yields_only_start_row() {
    let dir = create_output_dir();
    let config = config_in(dir.path(), "08:00:00", "23:59:59", "2000000h");

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.row_count, 1);

    let (header, rows) = read_csv(&report.output_path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][column_index(&header, "time_int")], "80000");
}

#[test]
fn test_include_filter_keeps_natural_order() {
    let dir = create_output_dir();
    let mut config = config_in(dir.path(), "10:00:00", "10:02:00", "1m");
    config.include_columns = Some("second,hour,time_int".to_string());

    let report = pipeline::run(&config).unwrap();
    let (header, rows) = read_csv(&report.output_path).unwrap();
    assert_eq!(header, vec!["time_int", "hour", "second"]);
    assert_eq!(rows[2], vec!["100200", "10", "0"]);
}

#[test]
fn test_exclude_filter_drops_columns() {
    let dir = create_output_dir();
    let mut config = config_in(dir.path(), "10:00:00", "10:02:00", "1m");
    config.exclude_columns = Some("time_string12,minute,not_a_column".to_string());

    let report = pipeline::run(&config).unwrap();
    let (header, _) = read_csv(&report.output_path).unwrap();
    assert_eq!(header, vec!["time_int", "time_string24", "hour", "second"]);
}

#[test]
fn test_column_rule_violations() {
    let dir = create_output_dir();

    let mut config = config_in(dir.path(), "00:00:00", "23:59:59", "1m");
    config.exclude_columns = Some("hour".to_string());
    config.include_columns = Some("time_int".to_string());
    assert!(matches!(
        pipeline::run(&config),
        Err(GenerateError::Config(ConfigError::ExclusiveColumnFilters))
    ));

    let mut config = config_in(dir.path(), "00:00:00", "23:59:59", "1m");
    config.include_columns = Some("hour,minute".to_string());
    assert!(matches!(
        pipeline::run(&config),
        Err(GenerateError::Config(ConfigError::PrimaryKeyNotIncluded))
    ));

    let mut config = config_in(dir.path(), "00:00:00", "23:59:59", "1m");
    config.exclude_columns = Some("time_int".to_string());
    assert!(matches!(
        pipeline::run(&config),
        Err(GenerateError::Config(ConfigError::PrimaryKeyExcluded))
    ));
}

#[test]
fn test_validation_failure_keeps_existing_output() {
    let dir = create_output_dir();
    let path = dir.path().join("daytime.csv");
    fs::write(&path, "previous run\n").unwrap();

    let config = config_in(dir.path(), "12:00:00", "11:00:00", "1m");
    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::InvertedWindow { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");
}
