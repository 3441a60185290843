//! Catalog of enum groups, the single input of header generation.

use super::naming::{
    DEFAULT_NAMESPACE, Naming, SENTINEL_MEMBER, UNKNOWN_MEMBER, is_identifier_fragment,
    plain_const_prefix, rich_type_name,
};
use crate::error::{Result, SungtoolError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A named, ordered set of enum members ending with the `eoe` sentinel.
///
/// Construction validates the group; an `EnumGroup` that exists always
/// renders to a well-formed header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumGroup {
    name: String,
    members: Vec<String>,
}

impl EnumGroup {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        trace!(group = %name, members = members.len(), "Validating enum group");

        validate_group_name(&name)?;

        if members.is_empty() {
            return Err(SungtoolError::EmptyGroup { group: name });
        }

        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !is_identifier_fragment(member, false) {
                return Err(SungtoolError::invalid_identifier(&name, member));
            }
            let folded = member.to_lowercase();
            if folded == UNKNOWN_MEMBER {
                return Err(SungtoolError::reserved_member(&name, member));
            }
            if !seen.insert(folded) {
                return Err(SungtoolError::duplicate_member(&name, member));
            }
        }

        let ends_with_sentinel = members
            .last()
            .is_some_and(|last| last.eq_ignore_ascii_case(SENTINEL_MEMBER));
        if !ends_with_sentinel {
            return Err(SungtoolError::MissingSentinel { group: name });
        }

        Ok(Self { name, members })
    }

    /// Human-readable label, e.g. `"mouse btn"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in declaration order, sentinel included.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of declared members, sentinel included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed group; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members carrying a domain value (everything before the sentinel).
    pub fn real_members(&self) -> &[String] {
        &self.members[..self.members.len() - 1]
    }

    /// Ordinal of the sentinel, which equals the number of real members.
    pub fn sentinel_ordinal(&self) -> usize {
        self.members.len() - 1
    }
}

fn validate_group_name(name: &str) -> Result<()> {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return Err(SungtoolError::invalid_identifier(name, name));
    };
    if !is_identifier_fragment(first, false) {
        return Err(SungtoolError::invalid_identifier(name, first));
    }
    for word in words {
        if !is_identifier_fragment(word, true) {
            return Err(SungtoolError::invalid_identifier(name, word));
        }
    }
    Ok(())
}

/// Ordered groups plus the namespace their names derive from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    naming: Naming,
    groups: Vec<EnumGroup>,
}

impl Catalog {
    /// Builds a catalog, rejecting groups whose generated names would clash.
    ///
    /// Plain-C types and enumerators share one global scope, so every type
    /// name, constant prefix and constant must be unique across the catalog.
    pub fn new(namespace: impl Into<String>, groups: Vec<EnumGroup>) -> Result<Self> {
        let namespace = namespace.into();
        if !is_identifier_fragment(&namespace, false) {
            return Err(SungtoolError::config(format!(
                "invalid namespace '{namespace}'"
            )));
        }
        let naming = Naming::new(namespace);

        let mut rich_types = HashSet::with_capacity(groups.len());
        let mut plain_types = HashSet::with_capacity(groups.len());
        let mut prefixes = HashSet::with_capacity(groups.len());
        let mut constants = HashSet::new();
        for group in &groups {
            let unique_names = rich_types.insert(rich_type_name(group.name()))
                && plain_types.insert(naming.plain_type_name(group.name()))
                && prefixes.insert(plain_const_prefix(group.name()));
            if !unique_names {
                return Err(SungtoolError::DuplicateGroup {
                    group: group.name().to_string(),
                });
            }

            for member in group.members() {
                if !constants.insert(naming.plain_constant(group.name(), member)) {
                    return Err(SungtoolError::duplicate_member(group.name(), member));
                }
            }
        }

        debug!(namespace = %naming.namespace(), groups = groups.len(), "Catalog constructed");
        Ok(Self { naming, groups })
    }

    pub fn namespace(&self) -> &str {
        self.naming.namespace()
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Groups in declaration order.
    pub fn groups(&self) -> &[EnumGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, group_name: &str) -> Option<&EnumGroup> {
        self.groups.iter().find(|group| group.name() == group_name)
    }

    /// Parses a catalog document:
    ///
    /// ```toml
    /// namespace = "sung"
    ///
    /// [[group]]
    /// name = "mouse btn"
    /// members = ["left", "right", "middle", "eoe"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(content)?;
        let groups = document
            .groups
            .into_iter()
            .map(|group| EnumGroup::new(group.name, group.members))
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(
            document
                .namespace
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            groups,
        )
    }

    /// Serializes back into the document format read by [`Catalog::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String> {
        let document = CatalogDocument {
            namespace: Some(self.namespace().to_string()),
            groups: self
                .groups
                .iter()
                .map(|group| GroupDocument {
                    name: group.name.clone(),
                    members: group.members.clone(),
                })
                .collect(),
        };
        Ok(toml::to_string(&document)?)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EnumGroup;
    type IntoIter = std::slice::Iter<'a, EnumGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// On-disk shape of a catalog; validated into [`Catalog`] after parsing.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(default, rename = "group")]
    groups: Vec<GroupDocument>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct GroupDocument {
    name: String,
    members: Vec<String>,
}
