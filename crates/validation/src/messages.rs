//! Localized message templates for failed constraints.

use core_types::Constraint;

/// Separator placed between messages when several fields fail.
pub const MESSAGE_SEPARATOR: &str = ", ";

const REQUIRED_TEMPLATE: &str = "{field}は必須フィールドです";
const MAX_STRING_TEMPLATE: &str = "{field}の長さは最大でも{param}でなければなりません";
const CHARACTERS_TEMPLATE: &str = "{n}文字";

/// Picks the template for a constraint kind.
fn template_for(constraint: &Constraint) -> &'static str {
    match constraint {
        Constraint::Required => REQUIRED_TEMPLATE,
        Constraint::Max(_) => MAX_STRING_TEMPLATE,
    }
}

/// Renders the message for `constraint` failing on a field shown as `display_name`.
pub fn render(constraint: &Constraint, display_name: &str) -> String {
    let message = template_for(constraint).replace("{field}", display_name);
    match constraint {
        Constraint::Required => message,
        Constraint::Max(limit) => {
            let param = CHARACTERS_TEMPLATE.replace("{n}", &limit.to_string());
            message.replace("{param}", &param)
        }
    }
}
