/// Validation and evaluation services over parsed documents
pub mod ntia_validator;
pub mod policy_evaluator;
pub mod vex_validator;

pub use ntia_validator::NtiaValidator;
pub use policy_evaluator::PolicyEvaluator;
pub use vex_validator::VexValidator;

/// Field-presence test shared by the validators: an absent field and an
/// empty string are equivalent for the minimal-elements checks.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
