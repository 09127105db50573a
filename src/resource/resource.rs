//! Resource wrapper and target identity matching.

use crate::error::Result;
use crate::fieldspec::Gvk;
use crate::value::{self, Node};

/// Resource owns the root node of one parsed configuration document and
/// exposes the identity fields used for selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    root: Node,
}

impl Resource {
    /// Wraps an already-parsed node tree. The root is conventionally a
    /// mapping; anything else simply has no identity fields and will never
    /// be selected by a named target.
    pub fn new(root: Node) -> Self {
        Resource { root }
    }

    /// Parses one YAML document into a resource.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Resource::new(value::from_yaml(yaml)?))
    }

    /// Serializes the resource back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(value::to_yaml(&self.root)?)
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the root node mutably. Mutation happens in place; the walker
    /// holds this borrow for the duration of one path application.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Consumes the resource, returning the root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    fn top_level_str(&self, key: &str) -> Option<&str> {
        self.root.as_mapping()?.get(key)?.as_str()
    }

    /// Returns the `kind` field, if present.
    pub fn kind(&self) -> Option<&str> {
        self.top_level_str("kind")
    }

    /// Returns the `apiVersion` field, if present.
    pub fn api_version(&self) -> Option<&str> {
        self.top_level_str("apiVersion")
    }

    /// Returns `metadata.name`, if present.
    pub fn name(&self) -> Option<&str> {
        self.root
            .as_mapping()?
            .get("metadata")?
            .as_mapping()?
            .get("name")?
            .as_str()
    }

    /// Returns the resource's group/version/kind identity. Missing fields
    /// stay unset and only match wildcard selectors.
    pub fn gvk(&self) -> Gvk {
        match (self.api_version(), self.kind()) {
            (Some(av), Some(kind)) => Gvk::from_api_version_and_kind(av, kind),
            (None, Some(kind)) => Gvk::from_kind(kind),
            _ => Gvk::default(),
        }
    }

    /// Returns a short "Kind/name" label for error messages.
    pub fn id(&self) -> String {
        format!(
            "{}/{}",
            self.kind().unwrap_or("~K"),
            self.name().unwrap_or("~N"),
        )
    }
}

/// ResId is the target identity of a mutation request.
///
/// Name match is exact and mandatory; the kind selector is a refinement that
/// only constrains the components it sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResId {
    pub name: String,
    pub gvk: Gvk,
}

impl ResId {
    /// Targets every resource with the given name, regardless of kind.
    pub fn from_name(name: impl Into<String>) -> Self {
        ResId {
            name: name.into(),
            gvk: Gvk::default(),
        }
    }

    /// Targets resources with the given name and kind selector.
    pub fn new(name: impl Into<String>, gvk: Gvk) -> Self {
        ResId {
            name: name.into(),
            gvk,
        }
    }

    /// Returns true if the resource is selected by this identity.
    pub fn matches(&self, resource: &Resource) -> bool {
        resource.name() == Some(self.name.as_str()) && self.gvk.is_selected(&resource.gvk())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: dep
spec:
  replicas: 5
";

    #[test]
    fn test_resource_identity_accessors() {
        let resource = Resource::from_yaml(DEPLOYMENT).unwrap();
        assert_eq!(resource.kind(), Some("Deployment"));
        assert_eq!(resource.api_version(), Some("apps/v1"));
        assert_eq!(resource.name(), Some("dep"));
        assert_eq!(resource.id(), "Deployment/dep");
    }

    #[test]
    fn test_resource_gvk() {
        let resource = Resource::from_yaml(DEPLOYMENT).unwrap();
        let gvk = resource.gvk();
        assert_eq!(gvk.group.as_deref(), Some("apps"));
        assert_eq!(gvk.version.as_deref(), Some("v1"));
        assert_eq!(gvk.kind.as_deref(), Some("Deployment"));
    }

    #[test]
    fn test_resource_without_identity() {
        let resource = Resource::from_yaml("just: data\n").unwrap();
        assert_eq!(resource.kind(), None);
        assert_eq!(resource.name(), None);
        assert_eq!(resource.id(), "~K/~N");
    }

    #[test]
    fn test_resid_matches_by_name() {
        let resource = Resource::from_yaml(DEPLOYMENT).unwrap();
        assert!(ResId::from_name("dep").matches(&resource));
        assert!(!ResId::from_name("other").matches(&resource));
    }

    #[test]
    fn test_resid_kind_refinement() {
        let resource = Resource::from_yaml(DEPLOYMENT).unwrap();

        let dep = ResId::new("dep", Gvk::from_kind("Deployment"));
        assert!(dep.matches(&resource));

        let sts = ResId::new("dep", Gvk::from_kind("StatefulSet"));
        assert!(!sts.matches(&resource));

        let versioned = ResId::new("dep", Gvk::from_api_version_and_kind("apps/v1", "Deployment"));
        assert!(versioned.matches(&resource));
    }
}
