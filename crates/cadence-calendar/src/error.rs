use thiserror::Error;

/// Calendar arithmetic errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Malformed week identifier: {0}")]
    MalformedWeekIdentifier(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
