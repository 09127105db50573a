//! Built-in default field spec catalog.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::FsSlice;

const DEFAULTS_YAML: &str = include_str!("defaults.yaml");

static DEFAULTS: Lazy<DefaultCatalog> = Lazy::new(|| {
    // The asset is compiled in; a parse failure is a packaging bug.
    serde_yaml::from_str(DEFAULTS_YAML).expect("built-in field spec catalog must parse")
});

/// DefaultCatalog holds the built-in field specs, one ordered slice per
/// mutation concern. Each entry carries its own kind selector, so scoping to
/// a resource kind happens at apply time, not at lookup time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultCatalog {
    #[serde(default)]
    pub replicas: FsSlice,
}

impl DefaultCatalog {
    /// Returns the catalog embedded in the binary, parsed on first use.
    pub fn get() -> &'static DefaultCatalog {
        &DEFAULTS
    }

    /// Returns the replica-count defaults followed by the caller's specs.
    pub fn replicas_with(&self, user_specs: &FsSlice) -> FsSlice {
        self.replicas.merging(user_specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fieldspec::FieldSpec;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = DefaultCatalog::get();
        assert_eq!(catalog.replicas.len(), 4);

        let kinds: Vec<&str> = catalog
            .replicas
            .iter()
            .map(|fs| fs.gvk.kind.as_deref().unwrap())
            .collect();
        assert_eq!(
            kinds,
            ["Deployment", "ReplicationController", "ReplicaSet", "StatefulSet"]
        );
    }

    #[test]
    fn test_builtin_replicas_all_create() {
        for fs in DefaultCatalog::get().replicas.iter() {
            assert_eq!(fs.path, "spec/replicas");
            assert!(fs.create_if_not_present);
        }
    }

    #[test]
    fn test_replicas_with_appends_user_specs() {
        let catalog = DefaultCatalog::get();
        let user = FsSlice::from(vec![FieldSpec::new("spec/template/replicas", true)]);

        let merged = catalog.replicas_with(&user);
        assert_eq!(merged.len(), 5);
        assert_eq!(
            merged.iter().last().unwrap().path,
            "spec/template/replicas"
        );
    }
}
