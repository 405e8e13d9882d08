use thiserror::Error;

pub type SrResult<T> = Result<T, SrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
