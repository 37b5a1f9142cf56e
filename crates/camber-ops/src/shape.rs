use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use uuid::Uuid;

use camber_kernel::{ShapeHandle, ShapeKind};

/// Owning wrapper around a kernel shape, carrying user tags and metadata.
///
/// Shapes are immutable once produced by an operation (apart from tag and
/// metadata edits); operations always return new shapes. Every derived
/// shape propagates tags/metadata from its inputs under the policy of the
/// operation that produced it — see the `derived_*` constructors.
#[derive(Debug, Clone)]
pub struct Shape {
    id: Uuid,
    kind: ShapeKind,
    handle: ShapeHandle,
    tags: BTreeSet<String>,
    metadata: BTreeMap<String, Value>,
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind, handle: ShapeHandle) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            handle,
            tags: BTreeSet::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Single-input derivation (translate, rotate, fillet, ...): tags and
    /// metadata copied unchanged.
    pub(crate) fn derived_single(kind: ShapeKind, handle: ShapeHandle, source: &Shape) -> Self {
        let mut shape = Self::new(kind, handle);
        shape.tags = source.tags.clone();
        shape.metadata = source.metadata.clone();
        shape
    }

    /// Union-style derivation: tag sets united, metadata shallow-merged
    /// with the second input winning on key collisions.
    pub(crate) fn derived_union(
        kind: ShapeKind,
        handle: ShapeHandle,
        a: &Shape,
        b: &Shape,
    ) -> Self {
        let mut shape = Self::new(kind, handle);
        shape.tags = a.tags.union(&b.tags).cloned().collect();
        shape.metadata = a.metadata.clone();
        shape.metadata.extend(b.metadata.clone());
        shape
    }

    /// Intersection-style derivation: tag sets intersected, metadata
    /// shallow-merged with the second input winning on key collisions.
    pub(crate) fn derived_intersection(
        kind: ShapeKind,
        handle: ShapeHandle,
        a: &Shape,
        b: &Shape,
    ) -> Self {
        let mut shape = Self::new(kind, handle);
        shape.tags = a.tags.intersection(&b.tags).cloned().collect();
        shape.metadata = a.metadata.clone();
        shape.metadata.extend(b.metadata.clone());
        shape
    }

    /// Multi-input derivation (loft, sweep): tags and metadata united
    /// across all inputs, later inputs winning metadata collisions.
    pub(crate) fn derived_from_all(
        kind: ShapeKind,
        handle: ShapeHandle,
        sources: &[&Shape],
    ) -> Self {
        let mut shape = Self::new(kind, handle);
        for source in sources {
            shape.tags.extend(source.tags.iter().cloned());
            shape
                .metadata
                .extend(source.metadata.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        shape
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The underlying kernel handle. Runtime-only; never persist it.
    pub fn handle(&self) -> ShapeHandle {
        self.handle
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// Insert a tag; inserting an existing tag is a no-op.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }
}

/// Filter shapes carrying `tag`, preserving input order.
pub fn select_by_tag<'a>(shapes: &'a [Shape], tag: &str) -> Vec<&'a Shape> {
    shapes.iter().filter(|s| s.has_tag(tag)).collect()
}
