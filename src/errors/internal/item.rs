use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    /// Candidate item failed the schema checks
    #[error("Invalid item: {field} {reason}")]
    Validation {
        field: String,
        reason: String,
    },
}

impl ItemError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
