//! The set filter: walks field spec paths and assigns a scalar in place.

use crate::error::{Error, Result};
use crate::fieldpath::{FieldPath, PathSegment};
use crate::fieldspec::{FieldSpec, FsSlice};
use crate::resource::{ResId, Resource};
use crate::value::{Mapping, Node};

/// ErrorPolicy controls how apply reacts to the first traversal error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole apply on the first error.
    #[default]
    FailFast,
    /// Visit every (resource, spec) pair and return all errors together.
    CollectAll,
}

/// SetFilter applies one scalar value at every location named by an ordered
/// field spec slice, across every resource matching a target identity.
///
/// Specs run strictly in slice order, so two specs naming the same path leave
/// the later spec's outcome in place. The filter holds no state across calls
/// beyond this configuration.
#[derive(Debug, Clone)]
pub struct SetFilter {
    value: Node,
    target: ResId,
    field_specs: FsSlice,
    on_error: ErrorPolicy,
}

impl SetFilter {
    /// Creates a filter that sets `value` along `field_specs` in resources
    /// matching `target`. Fail-fast by default.
    pub fn new(value: Node, target: ResId, field_specs: FsSlice) -> Self {
        SetFilter {
            value,
            target,
            field_specs,
            on_error: ErrorPolicy::default(),
        }
    }

    /// Sets the error policy.
    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Applies the filter to every resource in the slice, mutating matched
    /// resources in place.
    ///
    /// Non-error no-ops: a target matching zero resources, and a missing key
    /// under `create: false`. Under [`ErrorPolicy::FailFast`] the first
    /// [`Error::InvalidPathSpec`] or [`Error::PathTypeMismatch`] aborts the
    /// call; under [`ErrorPolicy::CollectAll`] every pair is still visited
    /// and the errors come back as [`Error::Multiple`].
    pub fn apply(&self, resources: &mut [Resource]) -> Result<()> {
        let mut errors = Vec::new();

        for resource in resources.iter_mut() {
            if !self.target.matches(resource) {
                continue;
            }
            let gvk = resource.gvk();
            let id = resource.id();

            for spec in self.field_specs.iter() {
                if !spec.gvk.is_selected(&gvk) {
                    continue;
                }
                if let Err(err) = apply_spec(resource.root_mut(), spec, &self.value, &id) {
                    match self.on_error {
                        ErrorPolicy::FailFast => return Err(err),
                        ErrorPolicy::CollectAll => errors.push(err),
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Multiple(errors))
        }
    }
}

/// Walks one field spec path from the root and sets the value at the end.
fn apply_spec(root: &mut Node, spec: &FieldSpec, value: &Node, resource_id: &str) -> Result<()> {
    let path = FieldPath::parse(&spec.path)?;
    let walk = Walk {
        resource: resource_id,
        path: &spec.path,
        create: spec.create_if_not_present,
        value,
    };
    walk.set(root, path.as_slice(), 0)
}

/// Walk carries the per-spec context threaded through the recursive descent.
struct Walk<'a> {
    resource: &'a str,
    path: &'a str,
    create: bool,
    value: &'a Node,
}

impl Walk<'_> {
    /// Applies the remaining segments to one node. `index` is the position
    /// of `segments[0]` within the full path, for error reporting.
    fn set(&self, node: &mut Node, segments: &[PathSegment], index: usize) -> Result<()> {
        let (segment, rest) = match segments.split_first() {
            Some(split) => split,
            // FieldPath::parse guarantees at least one segment.
            None => return Ok(()),
        };

        match (node, segment) {
            (Node::Mapping(map), PathSegment::Field(key)) => {
                if rest.is_empty() {
                    // Terminal: an existing value, explicit null included, is
                    // always overwritten. Only absence consults the policy.
                    if map.contains_key(key) || self.create {
                        map.insert(key.clone(), self.value.clone());
                    }
                    return Ok(());
                }

                // A null child cannot be descended into; treat it like an
                // absent key and let the create policy decide.
                let needs_container =
                    matches!(map.get(key.as_str()), None | Some(Node::Null));
                if needs_container {
                    if !self.create {
                        return Ok(());
                    }
                    map.insert(key.clone(), Node::Mapping(Mapping::new()));
                }

                match map.get_mut(key) {
                    Some(child) => self.set(child, rest, index + 1),
                    None => Ok(()),
                }
            }

            (Node::Sequence(items), PathSegment::EveryItem) => {
                if rest.is_empty() {
                    for item in items.iter_mut() {
                        *item = self.value.clone();
                    }
                    return Ok(());
                }
                for item in items.iter_mut() {
                    self.set(item, rest, index + 1)?;
                }
                Ok(())
            }

            (other, PathSegment::Field(_)) => Err(self.mismatch(index, "mapping", other)),
            (other, PathSegment::EveryItem) => Err(self.mismatch(index, "sequence", other)),
        }
    }

    fn mismatch(&self, index: usize, expected: &'static str, found: &Node) -> Error {
        Error::path_type_mismatch(self.resource, self.path, index, expected, found.type_name())
    }
}
