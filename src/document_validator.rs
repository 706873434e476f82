use crate::models::{DocumentValidationResult, ProvinceRegistry, RuleEvaluation};
use crate::validation::{drivers_license, id_card, passport};

// A named format rule: a pure predicate over the raw code.
pub struct FormatRule {
    name: String,
    predicate: Box<dyn Fn(&str) -> bool>,
}

impl FormatRule {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        FormatRule {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, code: &str) -> bool {
        (self.predicate)(code)
    }
}

pub struct DocumentValidator {
    rules: Vec<FormatRule>,
    observer: Option<Box<dyn Fn(&RuleEvaluation)>>,
}

impl DocumentValidator {
    // A validator with the built-in document formats and the seed provinces.
    pub fn new() -> Self {
        Self::with_provinces(ProvinceRegistry::new())
    }

    pub fn with_provinces(provinces: ProvinceRegistry) -> Self {
        let mut validator = DocumentValidator {
            rules: Vec::new(),
            observer: None,
        };

        validator.register_rule("electronic-id-card", id_card::is_valid_electronic_id_card);
        validator.register_rule("paper-id-card", id_card::is_valid_paper_id_card);
        validator.register_rule("passport", passport::is_valid_passport);
        validator.register_rule(
            "uco-drivers-license-new",
            drivers_license::is_valid_new_uco_license,
        );
        validator.register_rule(
            "uco-drivers-license-old",
            drivers_license::is_valid_old_uco_license,
        );
        validator.register_rule("province-drivers-license", move |code| {
            drivers_license::is_valid_province_license(code, &provinces)
        });

        validator
    }

    // Adds a format. Existing rules are never modified to support a new one.
    pub fn register_rule(&mut self, name: impl Into<String>, predicate: impl Fn(&str) -> bool + 'static) {
        self.rules.push(FormatRule::new(name, predicate));
    }

    // Installs the diagnostic side channel. The observer sees every rule
    // evaluation and has no way to change the verdict.
    pub fn set_observer(&mut self, observer: impl Fn(&RuleEvaluation) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn validate(&self, code: &str) -> bool {
        self.validate_detailed(code).is_valid
    }

    // Evaluates every rule and folds the matches with logical OR. The three
    // length-10 formats overlap for some inputs, so this must stay an OR over
    // all rules rather than an if/else-if chain.
    pub fn validate_detailed(&self, code: &str) -> DocumentValidationResult {
        let mut matched_rule = None;
        let mut evaluations = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let matched = rule.matches(code);
            let evaluation = RuleEvaluation {
                rule_name: rule.name().to_string(),
                code: code.to_string(),
                matched,
            };

            if let Some(observer) = &self.observer {
                observer(&evaluation);
            }

            if matched && matched_rule.is_none() {
                matched_rule = Some(rule.name().to_string());
            }
            evaluations.push(evaluation);
        }

        DocumentValidationResult {
            is_valid: matched_rule.is_some(),
            matched_rule,
            evaluations,
        }
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn valid_id_card() {
        assert!(DocumentValidator::new().validate("AA12345BB"));
    }

    #[test]
    fn valid_paper_id_card() {
        assert!(DocumentValidator::new().validate("AA1234567"));
    }

    #[test]
    fn invalid_id_card() {
        assert!(!DocumentValidator::new().validate("123456"));
    }

    #[test]
    fn invalid_paper_id_card() {
        assert!(!DocumentValidator::new().validate("AAA123456"));
    }

    #[test]
    fn valid_passport() {
        assert!(DocumentValidator::new().validate("AA123456789"));
    }

    #[test]
    fn valid_drivers_license() {
        assert!(DocumentValidator::new().validate("U1123X456K"));
    }

    #[test]
    fn invalid_drivers_license() {
        assert!(!DocumentValidator::new().validate("U1123A456K"));
    }

    #[test]
    fn valid_drivers_license_with_old_schema() {
        assert!(DocumentValidator::new().validate("U11234567K"));
    }

    #[test]
    fn valid_old_drivers_license() {
        assert!(DocumentValidator::new().validate("TO1234567K"));
    }

    #[test]
    fn invalid_old_drivers_license() {
        assert!(!DocumentValidator::new().validate("XX1234567K"));
    }

    #[test]
    fn invalid_old_drivers_license_with_new_numbers() {
        assert!(!DocumentValidator::new().validate("TO123A567K"));
    }

    #[test]
    fn unrecognized_lengths_never_match() {
        let validator = DocumentValidator::new();
        for code in ["", "A", "AB123456", "AB1234567890", "AB123456789012"] {
            assert!(!validator.validate(code), "length {} matched", code.len());
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = DocumentValidator::new();
        for code in ["AA12345BB", "XX1234567K", "", "U1123X456K"] {
            assert_eq!(validator.validate(code), validator.validate(code));
        }
    }

    #[test]
    fn registering_a_province_extends_the_province_rule_only() {
        let before = DocumentValidator::new();
        assert!(!before.validate("NA1234567K"));

        let mut provinces = ProvinceRegistry::new();
        provinces.register("NA").unwrap();
        let after = DocumentValidator::with_provinces(provinces);
        assert!(after.validate("NA1234567K"));

        // Unrelated rules are untouched.
        assert!(after.validate("AA12345BB"));
        assert!(after.validate("U11234567K"));
        assert!(!after.validate("XX1234567K"));
        assert!(!after.validate("U1123A456K"));
    }

    #[test]
    fn registering_a_rule_adds_a_format() {
        let mut validator = DocumentValidator::new();
        assert!(!validator.validate("VISA-12"));
        validator.register_rule("visa", |code| code.starts_with("VISA-") && code.len() == 7);
        assert!(validator.validate("VISA-12"));
        assert!(!validator.validate("VISA-123"));
    }

    #[test]
    fn detailed_result_names_the_matching_rule() {
        let validator = DocumentValidator::new();

        let result = validator.validate_detailed("AA12345BB");
        assert!(result.is_valid);
        assert_eq!(result.matched_rule.as_deref(), Some("electronic-id-card"));
        assert_eq!(result.evaluations.len(), 6);

        let result = validator.validate_detailed("XX1234567K");
        assert!(!result.is_valid);
        assert_eq!(result.matched_rule, None);
        assert!(result.evaluations.iter().all(|e| !e.matched));
    }

    #[test]
    fn old_uco_code_satisfies_both_uco_rules() {
        // "U11234567K" has a digit at position 5, so only the old schema
        // matches; "U1123X456K" with all-digit neighbors matches the new one.
        // A code satisfying several rules must still validate under OR.
        let validator = DocumentValidator::new();
        let result = validator.validate_detailed("U11234567K");
        assert!(result.is_valid);
        assert!(result
            .evaluations
            .iter()
            .any(|e| e.rule_name == "uco-drivers-license-old" && e.matched));
    }

    #[test]
    fn observer_sees_every_evaluation_without_changing_the_verdict() {
        let seen = Rc::new(Cell::new(0usize));
        let matched = Rc::new(Cell::new(0usize));

        let mut validator = DocumentValidator::new();
        let seen_in_observer = Rc::clone(&seen);
        let matched_in_observer = Rc::clone(&matched);
        validator.set_observer(move |evaluation| {
            seen_in_observer.set(seen_in_observer.get() + 1);
            if evaluation.matched {
                matched_in_observer.set(matched_in_observer.get() + 1);
            }
        });

        assert!(validator.validate("TO1234567K"));
        assert_eq!(seen.get(), 6);
        assert_eq!(matched.get(), 1);

        assert!(!validator.validate("123456"));
        assert_eq!(seen.get(), 12);
        assert_eq!(matched.get(), 1);
    }
}
