//! Field spec and resource kind selector types.

use serde::{Deserialize, Serialize};

/// Gvk identifies a resource kind by group, version, and kind.
///
/// A component left unset matches anything, so `Gvk::default()` selects every
/// resource and `Gvk::from_kind("Deployment")` selects Deployments from any
/// group and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gvk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Gvk {
    /// Creates a selector matching a single kind in any group/version.
    pub fn from_kind(kind: impl Into<String>) -> Self {
        Gvk {
            kind: Some(kind.into()),
            ..Gvk::default()
        }
    }

    /// Creates a selector from an `apiVersion` string (`group/version` or
    /// bare `version` for the core group), matching any kind.
    pub fn from_api_version(api_version: &str) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((g, v)) => (Some(g.to_string()), Some(v.to_string())),
            None => (None, Some(api_version.to_string())),
        };
        Gvk {
            group,
            version,
            kind: None,
        }
    }

    /// Builds a fully specified Gvk from an `apiVersion` string and a kind.
    pub fn from_api_version_and_kind(api_version: &str, kind: impl Into<String>) -> Self {
        Gvk {
            kind: Some(kind.into()),
            ..Gvk::from_api_version(api_version)
        }
    }

    /// Returns true if this selector accepts the other identity. Unset
    /// components on the selector side are wildcards.
    pub fn is_selected(&self, other: &Gvk) -> bool {
        fn component_matches(selector: &Option<String>, actual: &Option<String>) -> bool {
            match selector {
                None => true,
                Some(want) => actual.as_deref() == Some(want.as_str()),
            }
        }

        component_matches(&self.group, &other.group)
            && component_matches(&self.version, &other.version)
            && component_matches(&self.kind, &other.kind)
    }
}

impl std::fmt::Display for Gvk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.group.as_deref().unwrap_or("~G"),
            self.version.as_deref().unwrap_or("~V"),
            self.kind.as_deref().unwrap_or("~K"),
        )
    }
}

/// FieldSpec is one declarative mutation rule: the path to set, whether
/// missing fields along it may be created, and which kinds it applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(flatten)]
    pub gvk: Gvk,
    pub path: String,
    #[serde(default, rename = "create", skip_serializing_if = "std::ops::Not::not")]
    pub create_if_not_present: bool,
}

impl FieldSpec {
    /// Creates a spec for the given path applying to every kind.
    pub fn new(path: impl Into<String>, create_if_not_present: bool) -> Self {
        FieldSpec {
            gvk: Gvk::default(),
            path: path.into(),
            create_if_not_present,
        }
    }

    /// Restricts the spec to one resource kind.
    pub fn for_kind(mut self, kind: impl Into<String>) -> Self {
        self.gvk.kind = Some(kind.into());
        self
    }
}

/// FsSlice is an ordered list of field specs.
///
/// Order is a contract: specs are applied front to back and duplicates are
/// never removed, so a later spec targeting the same path wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FsSlice(pub Vec<FieldSpec>);

impl FsSlice {
    pub fn new() -> Self {
        FsSlice(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, spec: FieldSpec) {
        self.0.push(spec);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.0.iter()
    }

    /// Returns this slice followed by `other`, relative order preserved
    /// within each group. No dedup: every entry stays independently subject
    /// to its own create policy.
    pub fn merging(&self, other: &FsSlice) -> FsSlice {
        let mut merged = self.0.clone();
        merged.extend(other.0.iter().cloned());
        FsSlice(merged)
    }
}

impl From<Vec<FieldSpec>> for FsSlice {
    fn from(specs: Vec<FieldSpec>) -> Self {
        FsSlice(specs)
    }
}

impl IntoIterator for FsSlice {
    type Item = FieldSpec;
    type IntoIter = std::vec::IntoIter<FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
