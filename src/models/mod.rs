pub mod data;
pub mod provinces;

pub use data::{DocumentValidationResult, FieldIssue, FormValidationResult, RuleEvaluation};
pub use provinces::ProvinceRegistry;
