use crate::field::RequiredFields;

/// Formats traversal paths into human-readable strings.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Renders visited shape names as `A -> B -> C`.
    pub fn format_path(path: &[String]) -> String {
        if path.is_empty() {
            return "(empty)".to_string();
        }
        path.join(" -> ")
    }

    /// Renders the path followed by the fields the outcome depended on.
    pub fn format_result<T>(path: &[String], required_fields: &RequiredFields<T>) -> String {
        let path_str = Self::format_path(path);
        if required_fields.is_empty() {
            path_str
        } else {
            format!("{} [requires: {}]", path_str, required_fields)
        }
    }
}
