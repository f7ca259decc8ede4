//! Conditional class-name composition.

/// Presentation classes every tooltip panel carries.
pub const PANEL_BASE_CLASSES: &str =
    "inline-block p-2 text-gray-600 bg-white rounded-md shadow-md dark:bg-dark dark:text-gray-200";

/// Border classes appended after the base set.
pub const PANEL_BORDER_CLASSES: &str = "border dark:border-gray-600";

/// Class applied to the trigger wrapper in underline mode.
pub const UNDERLINE_CLASS: &str = "underline";

/// Inline style that turns the underline into a dotted one.
pub const UNDERLINE_STYLE: &str = "text-decoration-style: dotted";

/// Merge `(fragment, included)` pairs into a single class string.
///
/// Excluded fragments are skipped, every fragment is split on whitespace,
/// and a token that already appeared keeps its first position.
#[must_use]
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut tokens: Vec<&'a str> = Vec::new();
    for (fragment, included) in parts {
        if !included {
            continue;
        }
        for token in fragment.split_whitespace() {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }
    tokens.join(" ")
}
