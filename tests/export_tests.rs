//! SQL export tests

use sheet2sql::export::{Dialect, SQLExporter};
use sheet2sql::inference::{ColumnDescriptor, DecimalSpec, SqlType, infer_columns};
use sqlparser::dialect::{GenericDialect, MySqlDialect};
use sqlparser::parser::Parser;

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn sample() -> (Vec<ColumnDescriptor>, Vec<Vec<String>>) {
    let headers = strings(&["Customer Name", "qty", "Unit Price", "signup_date", "seen_at"]);
    let rows = vec![
        strings(&["O'Brien", "5", "9.99", "2024-01-05", "2024-01-05 10:00:00"]),
        strings(&["", "", "", "", ""]),
        strings(&["Smith", "10", "19.50", "01/15/2024", "2024-01-06 11:30"]),
        strings(&["Jones"]),
    ];
    (infer_columns(&headers, &rows), rows)
}

mod mysql_tests {
    use super::*;

    #[test]
    fn test_script_parses_as_mysql() {
        let (columns, rows) = sample();
        let sql = SQLExporter::new(Dialect::MySql)
            .export("customers", "crm", &columns, &rows)
            .unwrap()
            .content;

        let statements = Parser::parse_sql(&MySqlDialect {}, &sql).unwrap();
        // CREATE DATABASE, USE, CREATE TABLE, 3 inserts
        assert_eq!(statements.len(), 6);
    }

    #[test]
    fn test_inferred_types_in_table_definition() {
        let (columns, rows) = sample();
        let sql = SQLExporter::new(Dialect::MySql)
            .export("customers", "crm", &columns, &rows)
            .unwrap()
            .content;

        assert!(sql.contains("    `customer_name` TEXT,\n"));
        assert!(sql.contains("    `qty` INTEGER,\n"));
        assert!(sql.contains("    `unit_price` DECIMAL(15,2),\n"));
        assert!(sql.contains("    `signup_date` DATE,\n"));
        assert!(sql.contains("    `seen_at` DATETIME\n"));
    }

    #[test]
    fn test_values_are_rendered_by_column_type() {
        let (columns, rows) = sample();
        let sql = SQLExporter::new(Dialect::MySql)
            .export("customers", "crm", &columns, &rows)
            .unwrap()
            .content;

        assert!(sql.contains(
            "VALUES ('O''Brien', 5, 9.99, '2024-01-05', '2024-01-05 10:00:00');"
        ));
        assert!(sql.contains("VALUES ('Smith', 10, 19.50, '2024-01-15', '2024-01-06 11:30:00');"));
        assert!(sql.contains("VALUES ('Jones', NULL, NULL, NULL, NULL);"));
    }

    #[test]
    fn test_blank_rows_produce_no_insert() {
        let (columns, rows) = sample();
        let result = SQLExporter::new(Dialect::MySql)
            .export("customers", "crm", &columns, &rows)
            .unwrap();

        assert_eq!(result.content.matches("INSERT INTO").count(), 3);
        assert_eq!(result.stats.rows_written, 3);
        assert_eq!(result.stats.rows_skipped, 1);
    }

    #[test]
    fn test_minority_dates_in_numeric_column_are_quoted() {
        let headers = strings(&["qty", "label"]);
        let rows = vec![
            strings(&["1", "a"]),
            strings(&["2", "b"]),
            strings(&["3", "c"]),
            strings(&["4", "d"]),
            strings(&["5", "e"]),
            strings(&["Jan 5, 2024", "f"]),
        ];
        let columns = infer_columns(&headers, &rows);
        assert_eq!(columns[0].declared_type, SqlType::Integer);

        let sql = SQLExporter::new(Dialect::MySql)
            .export("t", "db", &columns, &rows)
            .unwrap()
            .content;
        assert!(sql.contains("VALUES (5, 'e');"));
        assert!(sql.contains("VALUES ('2024-01-05', 'f');"));
        assert_eq!(Parser::parse_sql(&MySqlDialect {}, &sql).unwrap().len(), 9);
    }

    #[test]
    fn test_trailing_text_after_time_cannot_escape_literal() {
        let headers = strings(&["qty", "label"]);
        let rows = vec![
            strings(&["1", "a"]),
            strings(&["2", "b"]),
            strings(&["3", "c"]),
            strings(&["4", "d"]),
            strings(&["1/5/24 9:15); DROP TABLE t; --", "e"]),
        ];
        let columns = infer_columns(&headers, &rows);
        assert_eq!(columns[0].declared_type, SqlType::Text);

        let sql = SQLExporter::new(Dialect::MySql)
            .export("t", "db", &columns, &rows)
            .unwrap()
            .content;
        assert!(sql.contains("VALUES ('1/5/24 9:15); DROP TABLE t; --', 'e');"));
        // CREATE DATABASE, USE, CREATE TABLE, 5 inserts
        assert_eq!(Parser::parse_sql(&MySqlDialect {}, &sql).unwrap().len(), 8);
    }
}

mod generic_tests {
    use super::*;

    #[test]
    fn test_script_parses_as_generic_sql() {
        let (columns, rows) = sample();
        let sql = SQLExporter::new(Dialect::Generic)
            .export("customers", "crm", &columns, &rows)
            .unwrap()
            .content;

        let statements = Parser::parse_sql(&GenericDialect {}, &sql).unwrap();
        // CREATE TABLE and 3 inserts; the database is only named in comments
        assert_eq!(statements.len(), 4);
        assert!(sql.contains("    \"seen_at\" TIMESTAMP\n"));
    }
}

mod mssql_tests {
    use super::*;

    #[test]
    fn test_identifiers_are_bracketed() {
        let columns = vec![ColumnDescriptor::new("odd]name", SqlType::Text)];
        let sql = SQLExporter::new(Dialect::MsSql)
            .export("t", "db", &columns, &[strings(&["x"])])
            .unwrap()
            .content;

        assert!(sql.contains("    [odd]]name] NVARCHAR(MAX)\n"));
        assert!(sql.contains("INSERT INTO [t] ([odd]]name]) VALUES ('x');\nGO\n"));
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_export_is_deterministic() {
        let (columns, rows) = sample();
        for dialect in Dialect::ALL {
            let exporter = SQLExporter::new(dialect);
            let first = exporter.export("customers", "crm", &columns, &rows).unwrap();
            let second = exporter.export("customers", "crm", &columns, &rows).unwrap();
            assert_eq!(first.content, second.content, "dialect {}", dialect);
        }
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let columns = vec![ColumnDescriptor::new("qty", SqlType::Integer)];
        let sql = SQLExporter::new(Dialect::Generic)
            .export("t", "db", &columns, &[strings(&["1", "extra"])])
            .unwrap()
            .content;
        assert!(sql.contains("INSERT INTO \"t\" (\"qty\") VALUES (1);"));
    }

    #[test]
    fn test_scenario_literals() {
        let headers = strings(&["signup_date", "qty"]);
        let rows = vec![
            strings(&["2024-01-05", "5"]),
            strings(&["2024-02-10", "10"]),
            strings(&["2024-03-01", "7"]),
        ];
        let columns = infer_columns(&headers, &rows);
        assert_eq!(columns[0].declared_type, SqlType::Date);
        assert_eq!(columns[1].declared_type, SqlType::Integer);

        let sql = SQLExporter::new(Dialect::MySql)
            .export("signups", "crm", &columns, &rows)
            .unwrap()
            .content;
        assert!(sql.contains("(`signup_date`, `qty`) VALUES ('2024-01-05', 5);"));
    }

    #[test]
    fn test_money_column_written_unquoted() {
        let columns = vec![
            ColumnDescriptor::new("price", SqlType::decimal(DecimalSpec::new(15, 2)))
                .with_money(true),
        ];
        let sql = SQLExporter::new(Dialect::MySql)
            .export("t", "db", &columns, &[strings(&["12"])])
            .unwrap()
            .content;
        assert!(sql.contains("VALUES (12);"));
    }
}
