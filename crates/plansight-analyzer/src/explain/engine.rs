//! Engine identifiers accepted by the dispatcher

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database engine a plan dump was produced by
///
/// Unrecognized identifiers are kept verbatim in [`PlanEngine::Other`] so the
/// dispatcher can report them back instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanEngine {
    Postgres,
    Mysql,
    SqlServer,
    Sqlite,
    Other(String),
}

impl PlanEngine {
    /// All supported engines, in display order
    pub const SUPPORTED: [PlanEngine; 4] = [
        PlanEngine::Postgres,
        PlanEngine::Mysql,
        PlanEngine::SqlServer,
        PlanEngine::Sqlite,
    ];

    /// Parses an engine identifier, mapping anything unknown to `Other`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Self::Postgres,
            "mysql" => Self::Mysql,
            "sqlserver" | "mssql" => Self::SqlServer,
            "sqlite" | "sqlite3" => Self::Sqlite,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::SqlServer => "sqlserver",
            Self::Sqlite => "sqlite",
            Self::Other(id) => id,
        }
    }

    /// Human-readable engine name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::Mysql => "MySQL",
            Self::SqlServer => "SQL Server",
            Self::Sqlite => "SQLite",
            Self::Other(id) => id,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for PlanEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PlanEngine {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for PlanEngine {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<PlanEngine> for String {
    fn from(engine: PlanEngine) -> Self {
        engine.as_str().to_string()
    }
}
