pub mod enums;
pub mod error;
pub mod schema;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Constraint;
pub use error::CoreError;
pub use schema::{
    default_for, field_spec, FieldSpec, COMMENT_FIELDS, COMMENTS_TABLE, DEFAULT_NAME, NAME_MAX_LEN,
    TEXT_MAX_INPUT_LEN, TEXT_MAX_LEN,
};
pub use structs::{Comment, NewComment};
