use std::collections::HashSet;

use crate::utils::DocumentError;

// Province codes recognized by the province drivers'-license rule. The set is
// open: hosts register more codes instead of editing the rule.
#[derive(Debug, Clone)]
pub struct ProvinceRegistry {
    codes: HashSet<String>,
}

impl ProvinceRegistry {
    pub fn new() -> Self {
        let mut codes = HashSet::new();
        // More should be added
        codes.insert("TO".to_string());
        codes.insert("MI".to_string());
        codes.insert("RM".to_string());
        ProvinceRegistry { codes }
    }

    // Registers an extra province code. Codes are matched literally against
    // the first two characters of a license, so they must be exactly two
    // ASCII letters.
    pub fn register(&mut self, code: &str) -> Result<(), DocumentError> {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DocumentError::InvalidProvinceCode(code.to_string()));
        }
        self.codes.insert(code.to_string());
        Ok(())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for ProvinceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
