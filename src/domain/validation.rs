#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("invalid {field} reference: {value}")]
    InvalidReference { field: &'static str, value: String },
}
