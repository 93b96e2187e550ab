use std::fmt;

/// A rule a submitted field value has to satisfy before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be non-empty.
    Required,
    /// The value must not be longer than the given number of characters.
    Max(usize),
}

impl Constraint {
    /// The short tag used when reporting which rule failed (e.g. `required`, `max`).
    pub fn tag(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Max(_) => "max",
        }
    }

    /// Returns `true` if `value` satisfies this constraint.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Constraint::Required => !value.is_empty(),
            Constraint::Max(limit) => value.chars().count() <= *limit,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "required"),
            Constraint::Max(limit) => write!(f, "max={}", limit),
        }
    }
}
