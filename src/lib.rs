pub mod document_validator;
pub mod models;
pub mod utils;
pub mod validation;

pub use document_validator::{DocumentValidator, FormatRule};

// Checks a code against the built-in document formats with the seed province
// list. Total over all strings: anything unrecognized is simply false.
pub fn is_valid_document(code: &str) -> bool {
    DocumentValidator::new().validate(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_function_uses_the_default_rules() {
        assert!(is_valid_document("AA123456789"));
        assert!(!is_valid_document("NA1234567K"));
    }
}
