//! Portfolio content model.
//!
//! # Responsibility
//! - Define the typed shape of every content section rendered by the views.
//! - Keep the JSON wire names used by exported content files.
//!
//! # Invariants
//! - Array order is presentation order; nothing here sorts.
//! - Optional text fields treat `None` and `Some("")` identically when displayed.
//! - No cross-entity references (tags are free strings).

pub mod builtin;
pub mod content;
pub mod entries;
pub mod socials;

/// Returns the value only when it should be displayed.
///
/// Empty strings and absent values both mean "do not render".
pub fn visible(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::visible;

    #[test]
    fn visible_hides_empty_and_absent_values() {
        assert_eq!(visible(None), None);
        assert_eq!(visible(Some("")), None);
        assert_eq!(visible(Some(" ")), Some(" "));
        assert_eq!(visible(Some("x")), Some("x"));
    }
}
