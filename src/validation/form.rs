use crate::models::{FieldIssue, FormValidationResult};

// A single named check over one field of a form model.
pub struct FieldCheck<T> {
    name: String,
    check: Box<dyn Fn(&T) -> bool>,
}

impl<T> FieldCheck<T> {
    pub fn new(name: impl Into<String>, check: impl Fn(&T) -> bool + 'static) -> Self {
        FieldCheck {
            name: name.into(),
            check: Box::new(check),
        }
    }

    // A required text field: present and not just whitespace.
    pub fn required(name: impl Into<String>, extract: impl Fn(&T) -> &str + 'static) -> Self {
        Self::new(name, move |model: &T| !extract(model).trim().is_empty())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn passes(&self, model: &T) -> bool {
        (self.check)(model)
    }
}

// Combines independent field checks with logical AND. Every check runs even
// after a failure, so the result carries one issue per failing field.
pub struct FormValidator<T> {
    checks: Vec<FieldCheck<T>>,
}

impl<T> FormValidator<T> {
    pub fn new() -> Self {
        FormValidator { checks: Vec::new() }
    }

    pub fn add_check(&mut self, check: FieldCheck<T>) {
        self.checks.push(check);
    }

    pub fn validate(&self, model: &T) -> FormValidationResult {
        let mut issues = Vec::new();

        for check in &self.checks {
            if !check.passes(model) {
                issues.push(FieldIssue {
                    field_name: check.name.clone(),
                    message: format!("{} is missing or invalid", check.name),
                });
            }
        }

        FormValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

impl<T> Default for FormValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}
