//! SQL exporter for generating database, table and insert statements from inferred columns.
//!
//! # Security
//!
//! All identifiers (database, table and column names) are quoted and escaped for the
//! target dialect. Text values are written as string literals with embedded single
//! quotes doubled.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::dialect::Dialect;
use super::{ExportError, ExportResult, ExportStats};
use crate::inference::{ColumnDescriptor, TemporalCatalog};
use crate::models::is_blank_row;

/// Indentation used for column definitions
const INDENT: &str = "    ";

/// Exporter for SQL scripts.
pub struct SQLExporter {
    dialect: Dialect,
    catalog: TemporalCatalog,
}

impl SQLExporter {
    /// Create an exporter for a dialect using the default date templates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheet2sql::export::{Dialect, SQLExporter};
    /// use sheet2sql::inference::{ColumnDescriptor, SqlType};
    ///
    /// let columns = vec![ColumnDescriptor::new("qty", SqlType::Integer)];
    /// let rows = vec![vec!["5".to_string()]];
    ///
    /// let result = SQLExporter::new(Dialect::MySql)
    ///     .export("orders", "shop", &columns, &rows)
    ///     .unwrap();
    /// assert!(result.content.contains("INSERT INTO `orders` (`qty`) VALUES (5);"));
    /// ```
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            catalog: TemporalCatalog::default(),
        }
    }

    /// Use a custom date template catalog for date literals.
    ///
    /// Pass the same catalog the columns were inferred with so that every value
    /// classified as a date is also rendered as one.
    pub fn with_catalog(mut self, catalog: TemporalCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Target dialect
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Output file name for a table/database pair: `{table}_{database}[_{dialect}].sql`
    pub fn output_file_name(table: &str, database: &str, dialect: Dialect) -> String {
        match dialect.file_suffix() {
            Some(suffix) => format!("{}_{}_{}.sql", table, database, suffix),
            None => format!("{}_{}.sql", table, database),
        }
    }

    /// Write the full script (database guard, table, inserts) to `out`.
    ///
    /// Rows whose cells are all blank are skipped. Cells past the last column are
    /// ignored and missing cells become `NULL`.
    pub fn write_script<W: Write>(
        &self,
        out: &mut W,
        table: &str,
        database: &str,
        columns: &[ColumnDescriptor],
        rows: &[Vec<String>],
    ) -> Result<ExportStats, ExportError> {
        out.write_all(self.database_statements(database).as_bytes())?;
        out.write_all(self.create_table_statement(table, columns).as_bytes())?;

        let mut stats = ExportStats::default();
        for row in rows {
            if is_blank_row(row) {
                stats.rows_skipped += 1;
                continue;
            }
            out.write_all(self.insert_statement(table, columns, row).as_bytes())?;
            stats.rows_written += 1;
        }

        if let Some(separator) = self.dialect.batch_separator()
            && stats.rows_written > 0
        {
            writeln!(out, "{}", separator)?;
        }

        debug!(
            table,
            written = stats.rows_written,
            skipped = stats.rows_skipped,
            "Rendered insert statements"
        );
        Ok(stats)
    }

    /// Render the full script to a string.
    pub fn export(
        &self,
        table: &str,
        database: &str,
        columns: &[ColumnDescriptor],
        rows: &[Vec<String>],
    ) -> Result<ExportResult, ExportError> {
        let mut buffer = Vec::new();
        let stats = self.write_script(&mut buffer, table, database, columns, rows)?;
        let content = String::from_utf8(buffer)
            .map_err(|e| ExportError::ExportError(format!("generated SQL is not UTF-8: {}", e)))?;
        Ok(ExportResult {
            content,
            format: "sql".to_string(),
            stats,
        })
    }

    /// Write the script to `{dir}/{table}_{database}[_{dialect}].sql`.
    ///
    /// Creates `dir` if needed. A failure while writing leaves the partial file in place.
    pub fn write_file(
        &self,
        dir: &Path,
        table: &str,
        database: &str,
        columns: &[ColumnDescriptor],
        rows: &[Vec<String>],
    ) -> Result<(PathBuf, ExportStats), ExportError> {
        let path = dir.join(Self::output_file_name(table, database, self.dialect));

        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ExportError::CreateOutput {
                path: path.clone(),
                source,
            })?;
        }

        let file = File::create(&path).map_err(|source| ExportError::CreateOutput {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let stats = self.write_script(&mut writer, table, database, columns, rows)?;
        writer.flush()?;

        info!(
            path = %path.display(),
            dialect = %self.dialect,
            rows = stats.rows_written,
            "Wrote SQL script"
        );
        Ok((path, stats))
    }

    /// Database existence guard and selection
    fn database_statements(&self, database: &str) -> String {
        let quoted = self.dialect.quote_identifier(database);
        match self.dialect {
            Dialect::Generic => format!(
                "-- Database: {}\n\
                 -- Create and select this database with your engine's own commands before running the script.\n\n",
                database.replace(['\r', '\n'], " ")
            ),
            Dialect::MySql => format!(
                "CREATE DATABASE IF NOT EXISTS {quoted};\nUSE {quoted};\n\n"
            ),
            Dialect::MsSql => format!(
                "IF NOT EXISTS (SELECT name FROM sys.databases WHERE name = N'{}')\n\
                 BEGIN\n\
                 {INDENT}CREATE DATABASE {quoted};\n\
                 END\n\
                 GO\n\n\
                 USE {quoted};\n\
                 GO\n\n",
                escape_string(database)
            ),
        }
    }

    /// Table definition with the synthetic `id` key first
    fn create_table_statement(&self, table: &str, columns: &[ColumnDescriptor]) -> String {
        let quoted_table = self.dialect.quote_identifier(table);

        let mut column_defs = Vec::with_capacity(columns.len() + 1);
        column_defs.push(format!(
            "{INDENT}{} {}",
            self.dialect.quote_identifier("id"),
            self.dialect.auto_increment_key()
        ));
        for column in columns {
            column_defs.push(format!(
                "{INDENT}{} {}",
                self.dialect.quote_identifier(&column.name),
                self.dialect.type_name(&column.declared_type)
            ));
        }
        let body = column_defs.join(",\n");

        match self.dialect {
            Dialect::MsSql => format!(
                "IF OBJECT_ID(N'{}', N'U') IS NULL\n\
                 BEGIN\n\
                 CREATE TABLE {quoted_table} (\n{body}\n);\n\
                 END\n\
                 GO\n\n",
                escape_string(&quoted_table)
            ),
            Dialect::MySql | Dialect::Generic => {
                format!("CREATE TABLE IF NOT EXISTS {quoted_table} (\n{body}\n);\n\n")
            }
        }
    }

    /// One INSERT statement; column and value lists follow `columns` order
    fn insert_statement(&self, table: &str, columns: &[ColumnDescriptor], row: &[String]) -> String {
        let names: Vec<String> = columns
            .iter()
            .map(|c| self.dialect.quote_identifier(&c.name))
            .collect();
        let values: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| self.render_value(column, row.get(i).map(String::as_str)))
            .collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({});\n",
            self.dialect.quote_identifier(table),
            names.join(", "),
            values.join(", ")
        )
    }

    /// Render one cell as a SQL literal
    fn render_value(&self, column: &ColumnDescriptor, cell: Option<&str>) -> String {
        let value = cell.map(str::trim).unwrap_or("");
        if value.is_empty() {
            "NULL".to_string()
        } else if column.is_date {
            format!("'{}'", escape_string(&self.catalog.format_for_sql(value)))
        } else if column.declared_type.is_text() {
            format!("'{}'", escape_string(value))
        } else if value.parse::<f64>().is_ok_and(f64::is_finite) {
            value.to_string()
        } else {
            // minority dates in numeric columns and tokens like "NaN"
            format!("'{}'", escape_string(&self.catalog.format_for_sql(value)))
        }
    }
}

/// Double single quotes for use inside a string literal
fn escape_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{DecimalSpec, SqlType};

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("name", SqlType::Text),
            ColumnDescriptor::new("qty", SqlType::Integer),
            ColumnDescriptor::new("price", SqlType::decimal(DecimalSpec::new(15, 2))).with_money(true),
            ColumnDescriptor::new("sold_on", SqlType::Date),
        ]
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            SQLExporter::output_file_name("orders", "shop", Dialect::Generic),
            "orders_shop.sql"
        );
        assert_eq!(
            SQLExporter::output_file_name("orders", "shop", Dialect::MySql),
            "orders_shop_mysql.sql"
        );
    }

    #[test]
    fn test_render_values() {
        let exporter = SQLExporter::new(Dialect::MySql);
        let cols = columns();
        assert_eq!(exporter.render_value(&cols[0], Some("O'Brien")), "'O''Brien'");
        assert_eq!(exporter.render_value(&cols[1], Some(" 5 ")), "5");
        assert_eq!(exporter.render_value(&cols[2], Some("9.99")), "9.99");
        assert_eq!(exporter.render_value(&cols[3], Some("01/05/2024")), "'2024-01-05'");
        assert_eq!(exporter.render_value(&cols[0], Some("  ")), "NULL");
        assert_eq!(exporter.render_value(&cols[1], None), "NULL");
    }

    #[test]
    fn test_non_numeric_cells_in_numeric_columns_are_quoted() {
        let exporter = SQLExporter::new(Dialect::MySql);
        let cols = columns();
        assert_eq!(exporter.render_value(&cols[1], Some("-7")), "-7");
        assert_eq!(exporter.render_value(&cols[1], Some("1e5")), "1e5");
        assert_eq!(exporter.render_value(&cols[1], Some("Jan 5, 2024")), "'2024-01-05'");
        assert_eq!(exporter.render_value(&cols[2], Some("NaN")), "'NaN'");
        assert_eq!(exporter.render_value(&cols[2], Some("O'Neil 1/5/24")), "'O''Neil 1/5/24'");
    }

    #[test]
    fn test_unparsed_date_fallback_is_escaped() {
        let exporter = SQLExporter::new(Dialect::Generic);
        let column = ColumnDescriptor::new("d", SqlType::Date);
        assert_eq!(exporter.render_value(&column, Some("it's 1/5/24")), "'it''s 1/5/24'");
    }

    #[test]
    fn test_mysql_script() {
        let exporter = SQLExporter::new(Dialect::MySql);
        let rows = vec![row(&["Widget", "5", "9.99", "2024-01-05"]), row(&["", " "]), row(&["Gadget"])];
        let result = exporter.export("orders", "shop", &columns(), &rows).unwrap();

        let expected = "\
CREATE DATABASE IF NOT EXISTS `shop`;
USE `shop`;

CREATE TABLE IF NOT EXISTS `orders` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `name` TEXT,
    `qty` INTEGER,
    `price` DECIMAL(15,2),
    `sold_on` DATE
);

INSERT INTO `orders` (`name`, `qty`, `price`, `sold_on`) VALUES ('Widget', 5, 9.99, '2024-01-05');
INSERT INTO `orders` (`name`, `qty`, `price`, `sold_on`) VALUES ('Gadget', NULL, NULL, NULL);
";
        assert_eq!(result.content, expected);
        assert_eq!(result.stats.rows_written, 2);
        assert_eq!(result.stats.rows_skipped, 1);
    }

    #[test]
    fn test_mssql_script_framing() {
        let exporter = SQLExporter::new(Dialect::MsSql);
        let rows = vec![row(&["Widget", "5", "9.99", "2024-01-05"])];
        let sql = exporter.export("orders", "shop", &columns(), &rows).unwrap().content;

        assert!(sql.starts_with(
            "IF NOT EXISTS (SELECT name FROM sys.databases WHERE name = N'shop')\nBEGIN\n    CREATE DATABASE [shop];\nEND\nGO\n\nUSE [shop];\nGO\n\n"
        ));
        assert!(sql.contains("IF OBJECT_ID(N'[orders]', N'U') IS NULL\nBEGIN\nCREATE TABLE [orders] (\n"));
        assert!(sql.contains("    [id] INT IDENTITY(1,1) PRIMARY KEY,\n    [name] NVARCHAR(MAX),\n"));
        assert!(sql.contains(");\nEND\nGO\n\n"));
        assert!(sql.ends_with("VALUES ('Widget', 5, 9.99, '2024-01-05');\nGO\n"));
    }

    #[test]
    fn test_generic_script_has_no_database_statements() {
        let exporter = SQLExporter::new(Dialect::Generic);
        let sql = exporter.export("orders", "shop", &columns(), &[]).unwrap().content;

        assert!(sql.starts_with("-- Database: shop\n"));
        assert!(!sql.contains("CREATE DATABASE"));
        assert!(!sql.contains("USE "));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"orders\" (\n    \"id\" SERIAL PRIMARY KEY,\n"));
        assert!(!sql.contains("INSERT"));
    }

    #[test]
    fn test_no_trailing_batch_separator_without_rows() {
        let exporter = SQLExporter::new(Dialect::MsSql);
        let sql = exporter.export("t", "db", &columns(), &[row(&[" "])]).unwrap().content;
        assert!(sql.ends_with(");\nEND\nGO\n\n"));
    }
}
