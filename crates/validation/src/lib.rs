//! # Validation Crate
//!
//! Checks a submitted `NewComment` against the constraints declared in
//! `core_types::COMMENT_FIELDS` and produces localized messages.
//!
//! - `Validator`: evaluates the mapping table, field by field.
//! - `ValidationErrors`: the violations found; `Display` joins their
//!   messages with `", "`.

pub mod error;
pub mod messages;

pub use error::{FieldViolation, ValidationErrors};

use core_types::{FieldSpec, NewComment, COMMENT_FIELDS};

/// Evaluates a field mapping table against submitted comments.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    fields: &'static [FieldSpec],
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(COMMENT_FIELDS)
    }
}

impl Validator {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Validates `candidate`, reporting the first failed constraint of each field.
    pub fn validate(&self, candidate: &NewComment) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        for spec in self.fields.iter().filter(|s| !s.constraints.is_empty()) {
            // Server-assigned fields never reach the candidate.
            let Ok(value) = candidate.value_of(spec.field) else {
                continue;
            };

            if let Some(failed) = spec.constraints.iter().find(|c| !c.is_satisfied_by(value)) {
                violations.push(FieldViolation {
                    field: spec.field,
                    constraint: failed.tag(),
                    message: messages::render(failed, spec.display_name.unwrap_or_default()),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Constraint;

    #[test]
    fn accepts_valid_comment() {
        let validator = Validator::default();
        assert!(validator.validate(&NewComment::new(Some("job"), "hello")).is_ok());
    }

    #[test]
    fn missing_text_is_required() {
        let err = Validator::default()
            .validate(&NewComment::new(Some("job"), ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "コメントは必須フィールドです");
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "text");
        assert_eq!(err.violations()[0].constraint, "required");
    }

    #[test]
    fn text_longer_than_twenty_characters_is_rejected() {
        let validator = Validator::default();
        let exactly = "あ".repeat(20);
        let over = "あ".repeat(21);
        assert!(validator.validate(&NewComment::new(None, &exactly)).is_ok());

        let err = validator.validate(&NewComment::new(None, &over)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "コメントの長さは最大でも20文字でなければなりません"
        );
    }

    static STRICT_FIELDS: &[FieldSpec] = &[
        FieldSpec {
            field: "name",
            column: "name",
            constraints: &[Constraint::Max(3)],
            default: None,
            display_name: Some("お名前"),
        },
        FieldSpec {
            field: "text",
            column: "text",
            constraints: &[Constraint::Required, Constraint::Max(5)],
            default: None,
            display_name: Some("コメント"),
        },
        FieldSpec {
            field: "created",
            column: "created",
            constraints: &[Constraint::Required],
            default: None,
            display_name: None,
        },
    ];

    #[test]
    fn multiple_violations_are_joined_in_table_order() {
        let err = Validator::new(STRICT_FIELDS)
            .validate(&NewComment::new(Some("job smith"), ""))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "お名前の長さは最大でも3文字でなければなりません, コメントは必須フィールドです"
        );
    }

    #[test]
    fn only_the_first_failed_constraint_is_reported_per_field() {
        let err = Validator::new(STRICT_FIELDS)
            .validate(&NewComment::new(Some("ab"), ""))
            .unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].constraint, "required");
    }

    #[test]
    fn violations_serialize_for_clients() {
        let err = Validator::default()
            .validate(&NewComment::default())
            .unwrap_err();
        let json = serde_json::to_value(err.violations()).unwrap();
        assert_eq!(json[0]["field"], "text");
        assert_eq!(json[0]["message"], "コメントは必須フィールドです");
    }
}
