//! Identifier derivation for the plain-C and C++ renditions of an enum group.
//!
//! Every name in the generated header is a pure function of the group label,
//! the member string and the namespace:
//!
//! | input                      | output                 |
//! |----------------------------|------------------------|
//! | group `"mouse btn"`        | `MouseBtn`, `MOUSE_BTN`|
//! | plain type                 | `SungMouseBtn`         |
//! | plain constant `left`      | `SUNG_MOUSE_BTN_LEFT`  |
//! | C++ member `left`          | `left`                 |

use convert_case::{Case, Casing};

/// Namespace used when a catalog does not name one.
pub const DEFAULT_NAMESPACE: &str = "sung";

/// Trailing member that exposes the member count through its ordinal.
pub const SENTINEL_MEMBER: &str = "eoe";

/// C++ member synthesized for values outside the declared range.
pub const UNKNOWN_MEMBER: &str = "unknown";

/// Collapses any run of whitespace to a single space so the label splits on
/// spaces only.
fn normalized_words(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"mouse btn"` -> `"MouseBtn"`.
pub fn rich_type_name(group_name: &str) -> String {
    normalized_words(group_name)
        .from_case(Case::Lower)
        .to_case(Case::Pascal)
}

/// `"mouse btn"` -> `"MOUSE_BTN"`.
pub fn plain_const_prefix(group_name: &str) -> String {
    normalized_words(group_name)
        .from_case(Case::Lower)
        .to_case(Case::UpperSnake)
}

/// C++ enumerator for a catalog member.
pub fn rich_member(member: &str) -> String {
    member.to_lowercase()
}

/// Name derivation bound to one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    namespace: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl Naming {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Namespace the C++ declarations live in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `SungMouseBtn`
    pub fn plain_type_name(&self, group_name: &str) -> String {
        format!(
            "{}{}",
            rich_type_name(&self.namespace),
            rich_type_name(group_name)
        )
    }

    /// `SUNG_MOUSE_BTN_LEFT`
    pub fn plain_constant(&self, group_name: &str, member: &str) -> String {
        format!(
            "{}_{}_{}",
            self.namespace.to_uppercase(),
            plain_const_prefix(group_name),
            member.to_uppercase()
        )
    }
}

/// ASCII letters, digits and underscores; a leading digit only when allowed.
pub(crate) fn is_identifier_fragment(value: &str, allow_leading_digit: bool) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() && !allow_leading_digit => false,
        Some(first) if !(first.is_ascii_alphanumeric() || first == '_') => false,
        Some(_) => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
    }
}
