//! Model of the generated `conv_enum` function.
//!
//! The header generator emits its `case` arms from [`ConversionTable::cases`],
//! so the mapping checked here is the mapping that ends up in the header.

use super::catalog::EnumGroup;
use super::naming::{Naming, UNKNOWN_MEMBER, rich_member, rich_type_name};

/// Result of converting a plain-C value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichValue {
    /// A declared C++ enumerator.
    Member(String),
    /// The synthesized fallback.
    Unknown,
}

impl RichValue {
    /// Enumerator name as written after `TypeName::`.
    pub fn as_str(&self) -> &str {
        match self {
            RichValue::Member(name) => name,
            RichValue::Unknown => UNKNOWN_MEMBER,
        }
    }
}

/// Plain-C constants of one group paired with their C++ counterparts.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    plain_type: String,
    rich_type: String,
    plain_constants: Vec<String>,
    rich_members: Vec<String>,
}

impl ConversionTable {
    pub fn new(naming: &Naming, group: &EnumGroup) -> Self {
        let plain_constants = group
            .members()
            .iter()
            .map(|member| naming.plain_constant(group.name(), member))
            .collect();
        let rich_members = group.members().iter().map(|m| rich_member(m)).collect();

        Self {
            plain_type: naming.plain_type_name(group.name()),
            rich_type: rich_type_name(group.name()),
            plain_constants,
            rich_members,
        }
    }

    /// `SungMouseBtn`
    pub fn plain_type(&self) -> &str {
        &self.plain_type
    }

    /// `MouseBtn`
    pub fn rich_type(&self) -> &str {
        &self.rich_type
    }

    /// Plain-C constants in ordinal order.
    pub fn plain_constants(&self) -> &[String] {
        &self.plain_constants
    }

    /// C++ enumerators in ordinal order, `unknown` excluded.
    pub fn rich_members(&self) -> &[String] {
        &self.rich_members
    }

    /// `(plain constant, C++ enumerator)` in member order.
    pub fn cases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.plain_constants
            .iter()
            .map(String::as_str)
            .zip(self.rich_members.iter().map(String::as_str))
    }

    /// What the generated `conv_enum` returns for a raw plain-C value.
    pub fn convert(&self, value: i64) -> RichValue {
        usize::try_from(value)
            .ok()
            .and_then(|ordinal| self.rich_members.get(ordinal))
            .map_or(RichValue::Unknown, |member| {
                RichValue::Member(member.clone())
            })
    }

    pub fn plain_ordinal(&self, constant: &str) -> Option<usize> {
        self.plain_constants.iter().position(|c| c == constant)
    }

    /// Ordinal within the C++ enum; `unknown` sits right after the last member.
    pub fn rich_ordinal(&self, member: &str) -> Option<usize> {
        if member == UNKNOWN_MEMBER {
            return Some(self.rich_members.len());
        }
        self.rich_members.iter().position(|m| m == member)
    }
}
