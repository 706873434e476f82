use serde::Serialize;

// One rule evaluation, as reported to the observer side channel and in the
// detailed result. The record never influences the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEvaluation {
    pub rule_name: String,
    pub code: String,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentValidationResult {
    pub is_valid: bool,
    // First rule that accepted the code, in registration order.
    pub matched_rule: Option<String>,
    pub evaluations: Vec<RuleEvaluation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub issues: Vec<FieldIssue>,
}
