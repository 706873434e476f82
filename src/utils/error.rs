use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid province code: {0} (expected exactly two ASCII letters)")]
    InvalidProvinceCode(String),
}
