//! Unified parse error returned by the dispatcher

use thiserror::Error;

use crate::explain::mysql::MysqlPlanError;
use crate::explain::postgres::PostgresPlanError;
use crate::explain::sqlite::SqlitePlanError;
use crate::explain::sqlserver::SqlServerPlanError;

/// Error from whichever engine parser handled the input
///
/// Messages are passed through unchanged so callers can show them as-is.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Postgres(#[from] PostgresPlanError),

    #[error(transparent)]
    Mysql(#[from] MysqlPlanError),

    #[error(transparent)]
    SqlServer(#[from] SqlServerPlanError),

    #[error(transparent)]
    Sqlite(#[from] SqlitePlanError),
}

impl PlanError {
    /// Returns true if the input was empty or whitespace only
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            Self::Postgres(PostgresPlanError::EmptyInput)
                | Self::Mysql(MysqlPlanError::EmptyInput)
                | Self::SqlServer(SqlServerPlanError::EmptyInput)
                | Self::Sqlite(SqlitePlanError::EmptyInput)
        )
    }

    /// Returns true if the plan exceeded the configured nesting limit
    pub fn is_too_deep(&self) -> bool {
        matches!(
            self,
            Self::Postgres(PostgresPlanError::TooDeep { .. })
                | Self::Mysql(MysqlPlanError::TooDeep { .. })
                | Self::SqlServer(SqlServerPlanError::TooDeep { .. })
        )
    }
}

/// Result type for plan parsing
pub type Result<T> = std::result::Result<T, PlanError>;
