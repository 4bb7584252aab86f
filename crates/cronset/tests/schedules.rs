//! Integration tests: YAML-defined schedules through the public API.

use std::collections::BTreeSet;

use cronset::{CronFields, ExpressionError, SetError};

fn set(values: &[u32]) -> BTreeSet<u32> {
    values.iter().copied().collect()
}

fn span(lo: u32, hi: u32) -> BTreeSet<u32> {
    (lo..=hi).collect()
}

#[test]
fn yaml_schedule_builds_all_sets() {
    let yaml = r#"
minutes: "0,30"
hours: "9am-5pm"
day_of_month: "*"
month: "Jan,Jul"
day_of_week: "mon-fri"
"#;
    let fields: CronFields = serde_yaml::from_str(yaml).unwrap();
    let sets = fields.build(2024, 7).unwrap();

    assert_eq!(sets.minutes, set(&[0, 30]));
    assert_eq!(sets.hours, span(9, 17));
    assert_eq!(sets.days_of_month, span(1, 31));
    assert_eq!(sets.months, set(&[1, 7]));
    assert_eq!(sets.days_of_week, span(0, 4));
}

#[test]
fn yaml_defaults_omitted_fields_to_any() {
    let fields: CronFields = serde_yaml::from_str(r#"minutes: "*/20""#).unwrap();
    assert_eq!(fields.day_of_week, "?");

    let sets = fields.build(2023, 2).unwrap();
    assert_eq!(sets.minutes, set(&[0, 20, 40]));
    assert_eq!(sets.days_of_month, span(1, 28));
    assert_eq!(sets.days_of_week, span(0, 6));
}

#[test]
fn yaml_invalid_field_reports_the_field_name() {
    let fields: CronFields = serde_yaml::from_str(r#"hours: "25""#).unwrap();
    let err = fields.build(2024, 1).unwrap_err();

    assert_eq!(
        err,
        ExpressionError::Field {
            field: "hours",
            source: SetError::Domain {
                value: 25,
                min: 0,
                max: 23,
            },
        }
    );
}

#[test]
fn yaml_round_trip_preserves_fields() {
    let fields = CronFields::parse("*/15 9-17 1,15 * mon-fri").unwrap();
    let yaml = serde_yaml::to_string(&fields).unwrap();
    let back: CronFields = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, fields);
}

#[test]
fn expression_string_and_yaml_agree() {
    let from_expr = CronFields::parse("0 12am 1 dec ?").unwrap();
    let from_yaml: CronFields = serde_yaml::from_str(
        r#"
minutes: "0"
hours: "12am"
day_of_month: "1"
month: "dec"
"#,
    )
    .unwrap();

    assert_eq!(from_expr, from_yaml);
    assert_eq!(
        from_expr.build(2023, 12).unwrap(),
        from_yaml.build(2023, 12).unwrap()
    );
}
