//! The explicit mapping between the `Comment` record and its table.
//!
//! Both the validation layer and the persistence gateway consult
//! `COMMENT_FIELDS` instead of inspecting the struct at runtime.

use crate::enums::Constraint;

/// Name of the table that backs the `Comment` entity.
pub const COMMENTS_TABLE: &str = "comments";

/// Placeholder stored when a submission carries no name.
pub const DEFAULT_NAME: &str = "名無し";

/// Storage bound for `name`, in characters.
pub const NAME_MAX_LEN: usize = 200;

/// Storage bound for `text`, in characters.
pub const TEXT_MAX_LEN: usize = 399;

/// Limit on `text` enforced on submissions. Stricter than the storage bound.
pub const TEXT_MAX_INPUT_LEN: usize = 20;

/// Describes one field of the `Comment` entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name as it appears in JSON and form bodies.
    pub field: &'static str,
    /// The column the field is stored in.
    pub column: &'static str,
    /// Constraints checked on submission, in evaluation order.
    pub constraints: &'static [Constraint],
    /// Value used when the submission omits the field.
    pub default: Option<&'static str>,
    /// Localized name used in validation messages. `None` suppresses the name.
    pub display_name: Option<&'static str>,
}

pub static COMMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: "id",
        column: "id",
        constraints: &[],
        default: None,
        display_name: None,
    },
    FieldSpec {
        field: "name",
        column: "name",
        constraints: &[],
        default: Some(DEFAULT_NAME),
        display_name: Some("お名前"),
    },
    FieldSpec {
        field: "text",
        column: "text",
        constraints: &[Constraint::Required, Constraint::Max(TEXT_MAX_INPUT_LEN)],
        default: None,
        display_name: Some("コメント"),
    },
    FieldSpec {
        field: "created",
        column: "created",
        constraints: &[],
        default: None,
        display_name: None,
    },
    FieldSpec {
        field: "updated",
        column: "updated",
        constraints: &[],
        default: None,
        display_name: None,
    },
];

/// Looks up the mapping entry for `field`.
pub fn field_spec(field: &str) -> Option<&'static FieldSpec> {
    COMMENT_FIELDS.iter().find(|spec| spec.field == field)
}

/// The value stored for `field` when a submission omits it.
pub fn default_for(field: &str) -> Option<&'static str> {
    field_spec(field).and_then(|spec| spec.default)
}
