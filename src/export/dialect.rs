//! Target SQL dialects

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inference::SqlType;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Dialect {
    /// ANSI-flavoured SQL with no database statements
    #[default]
    Generic,
    /// MySQL / MariaDB
    #[cfg_attr(feature = "cli", value(name = "mysql"))]
    MySql,
    /// Microsoft SQL Server (T-SQL)
    #[cfg_attr(feature = "cli", value(name = "mssql"))]
    MsSql,
}

impl Dialect {
    /// All dialects, in display order
    pub const ALL: [Dialect; 3] = [Dialect::Generic, Dialect::MySql, Dialect::MsSql];

    /// Lowercase dialect name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
            Dialect::MsSql => "mssql",
        }
    }

    /// Suffix added to output file names; the generic dialect has none
    pub fn file_suffix(&self) -> Option<&'static str> {
        match self {
            Dialect::Generic => None,
            other => Some(other.name()),
        }
    }

    /// Quote and escape an identifier.
    ///
    /// - **Generic**: double quotes (`"identifier"`)
    /// - **MySQL**: backticks (`` `identifier` ``)
    /// - **SQL Server**: brackets (`[identifier]`)
    ///
    /// The closing quote character is escaped by doubling it.
    pub fn quote_identifier(&self, identifier: &str) -> String {
        match self {
            Dialect::MySql => format!("`{}`", identifier.replace('`', "``")),
            Dialect::MsSql => format!("[{}]", identifier.replace(']', "]]")),
            Dialect::Generic => format!("\"{}\"", identifier.replace('"', "\"\"")),
        }
    }

    /// Column type as spelled by this dialect
    pub fn type_name(&self, sql_type: &SqlType) -> String {
        match (self, sql_type) {
            (Dialect::MsSql, SqlType::Text) => "NVARCHAR(MAX)".to_string(),
            (Dialect::MsSql, SqlType::DateTime) => "DATETIME2".to_string(),
            (Dialect::Generic, SqlType::DateTime) => "TIMESTAMP".to_string(),
            (_, other) => other.to_string(),
        }
    }

    /// Definition of the synthetic `id` key column, without the column name
    pub fn auto_increment_key(&self) -> &'static str {
        match self {
            Dialect::Generic => "SERIAL PRIMARY KEY",
            Dialect::MySql => "INT AUTO_INCREMENT PRIMARY KEY",
            Dialect::MsSql => "INT IDENTITY(1,1) PRIMARY KEY",
        }
    }

    /// Batch separator line, if the dialect's tooling uses one
    pub fn batch_separator(&self) -> Option<&'static str> {
        match self {
            Dialect::MsSql => Some("GO"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "standard" | "ansi" => Ok(Dialect::Generic),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "mssql" | "sqlserver" | "tsql" => Ok(Dialect::MsSql),
            other => Err(format!(
                "Unknown dialect '{}'. Expected one of: generic, mysql, mssql",
                other
            )),
        }
    }
}
