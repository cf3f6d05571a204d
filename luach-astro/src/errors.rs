use luach_calendar::CalendarError;
use luach_core::LuachError;
use thiserror::Error;

pub type SkyResult<T> = Result<T, SkyError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkyError {
    /// A static table has no entry for an argument inside its domain. The
    /// table itself is wrong, so this is never recovered.
    #[error("Table '{table}' has no entry for {argument}°")]
    TableMiss { table: &'static str, argument: f64 },

    #[error("Unknown model '{name}'")]
    UnknownModel { name: String },

    #[error("Non-finite value in {operation}")]
    NotFinite { operation: &'static str },

    #[error("Calendar calculation failed: {source}")]
    Calendar {
        #[from]
        source: CalendarError,
    },

    #[error("Core calculation failed: {source}")]
    Core {
        #[from]
        source: LuachError,
    },
}

impl SkyError {
    pub fn table_miss(table: &'static str, argument: f64) -> Self {
        Self::TableMiss { table, argument }
    }

    pub fn unknown_model(name: &str) -> Self {
        Self::UnknownModel {
            name: name.to_string(),
        }
    }

    pub fn not_finite(operation: &'static str) -> Self {
        Self::NotFinite { operation }
    }
}
