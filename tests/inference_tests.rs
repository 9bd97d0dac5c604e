//! Column inference tests

use sheet2sql::inference::{
    ColumnInferrer, DecimalSpec, InferenceConfig, SqlType, Temporal, TemporalCatalog,
    TemporalTemplate, classify_temporal, format_for_sql, infer_column,
};
use sheet2sql::models::RawGrid;

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_money_header_with_text_value_is_text() {
        let column = infer_column("Total Cost", ["19.99", "20.00", "", "abc"]);
        assert_eq!(column.name, "total_cost");
        assert_eq!(column.declared_type, SqlType::Text);
        assert!(column.is_money);
        assert!(!column.is_date);
    }

    #[test]
    fn test_iso_dates_are_date() {
        let column = infer_column("signup_date", ["2024-01-05", "2024-02-10", "2024-03-01"]);
        assert_eq!(column.declared_type, SqlType::Date);
        assert!(column.is_date);
        assert_eq!(format_for_sql("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn test_whole_numbers_are_integer() {
        let column = infer_column("qty", ["5", "10", "7"]);
        assert_eq!(column.declared_type, SqlType::Integer);
    }

    #[test]
    fn test_money_header_with_numbers_is_money_decimal() {
        let column = infer_column("Salary", ["50000", "62000.50"]);
        assert_eq!(column.declared_type, SqlType::decimal(DecimalSpec::new(15, 2)));
        assert!(column.is_money);
    }

    #[test]
    fn test_fractional_second_timestamps_are_datetime() {
        let column = infer_column("ts", ["2024-01-05 10:30:00.123", "2024-01-06 11:00:00.5"]);
        assert_eq!(column.declared_type, SqlType::DateTime);
        assert!(column.is_date);
    }

    #[test]
    fn test_exponent_and_signed_numbers() {
        assert_eq!(
            infer_column("n", ["-5", "+7", "12"]).declared_type,
            SqlType::Integer
        );
        // no decimal point, so still counted as integer-like
        assert_eq!(
            infer_column("n", ["1e5", "3"]).declared_type,
            SqlType::Integer
        );
        assert_eq!(
            infer_column("n", ["1.5e3", "3"]).declared_type,
            SqlType::decimal(DecimalSpec::new(20, 8))
        );
    }
}

mod grid_tests {
    use super::*;

    #[test]
    fn test_infer_grid_keeps_header_order() {
        let grid = RawGrid::new(
            strings(&["when", "price", "label"]),
            vec![
                strings(&["2024-01-05 10:00", "1.5", "a"]),
                strings(&["2024-01-06 12:30:00", "2", "b"]),
                strings(&["", "", ""]),
            ],
        );
        let columns = ColumnInferrer::new().infer_grid(&grid);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["when", "price", "label"]);
        assert_eq!(columns[0].declared_type, SqlType::DateTime);
        assert_eq!(columns[1].declared_type, SqlType::decimal(DecimalSpec::new(15, 2)));
        assert_eq!(columns[2].declared_type, SqlType::Text);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let config: InferenceConfig = serde_json::from_str(
            r#"{"dateRatioThreshold": 0.5, "moneyKeywords": ["budget"], "decimal": {"precision": 12, "scale": 4}}"#,
        )
        .unwrap();
        let inferrer = ColumnInferrer::with_config(config);

        assert_eq!(
            inferrer.infer("Budget", ["10"]).declared_type,
            SqlType::decimal(DecimalSpec::new(15, 2))
        );
        // "price" is no longer a money keyword
        assert_eq!(
            inferrer.infer("price", ["1.25"]).declared_type,
            SqlType::decimal(DecimalSpec::new(12, 4))
        );
        assert_eq!(
            inferrer.infer("d", ["2024-01-05", "2024-01-06", "x"]).declared_type,
            SqlType::Date
        );
    }

    #[test]
    fn test_builder_clamps_threshold() {
        let config = InferenceConfig::builder().date_ratio_threshold(3.0).build();
        assert_eq!(config.date_ratio_threshold, 1.0);
        let config = InferenceConfig::builder().date_ratio_threshold(-1.0).build();
        assert_eq!(config.date_ratio_threshold, 0.0);
    }

    #[test]
    fn test_custom_template_feeds_classifier_and_formatter() {
        let mut catalog = TemporalCatalog::default();
        catalog.push(TemporalTemplate::date("%Y%m%d"));
        let config = InferenceConfig::builder().temporal(catalog.clone()).build();

        let column = ColumnInferrer::with_config(config).infer("day", ["20240105", "20240106"]);
        assert_eq!(column.declared_type, SqlType::Date);
        assert_eq!(catalog.format_for_sql("20240105"), "2024-01-05");
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = TemporalCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: TemporalCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_classification_is_total() {
        let odd = ["\u{0}", "----", "99/99/9999", "2024-13-45", "T", "::", "0000-00-00 00:00"];
        for value in odd {
            let (is_date, is_datetime) = classify_temporal(value).flags();
            assert!(!is_datetime || is_date);
        }
    }

    #[test]
    fn test_impossible_calendar_dates_still_look_like_dates() {
        // no template parses these, but they have a date shape
        assert_eq!(classify_temporal("2024-13-45"), Temporal::Date);
        assert_eq!(format_for_sql("2024-13-45"), "2024-13-45");
    }
}
