//! The read-only graph database.
//!
//! A [`Database`] is produced by a [`GraphBuilder`](crate::GraphBuilder) and
//! exposes no public mutation. It uses persistent data structures, so cloning
//! is O(1) and clones share structure.

use oblique_foundation::grammar::TYPE_TYPE;
use oblique_foundation::{Ref, TypeKind};

use crate::object::Object;

/// A typed directed graph of objects.
///
/// Maintains bidirectional indices for traversal:
/// - Forward: each object's outbound references
/// - Reverse: target -> objects referring to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Database {
    /// Objects in creation order.
    objects: im::Vector<Object>,
    /// Reference -> position in `objects`.
    index: im::HashMap<Ref, usize>,
    /// Reverse index: target -> sources, in edge creation order.
    referrers: im::HashMap<Ref, im::Vector<Ref>>,
    /// Every `(source, target)` edge, for de-duplication.
    edges: im::HashSet<(Ref, Ref)>,
}

impl Database {
    pub(crate) fn empty() -> Self {
        Self {
            objects: im::Vector::new(),
            index: im::HashMap::new(),
            referrers: im::HashMap::new(),
            edges: im::HashSet::new(),
        }
    }

    /// Inserts an object. The caller guarantees the reference is new.
    pub(crate) fn insert(&mut self, object: Object) {
        debug_assert!(!self.index.contains_key(object.id()));
        self.index.insert(object.id().clone(), self.objects.len());
        self.objects.push_back(object);
    }

    pub(crate) fn get_mut(&mut self, id: &Ref) -> Option<&mut Object> {
        let position = *self.index.get(id)?;
        self.objects.get_mut(position)
    }

    /// Adds an edge between two existing objects.
    ///
    /// Adding an existing edge is idempotent. Returns true if the edge is new.
    pub(crate) fn add_edge(&mut self, source: &Ref, target: &Ref) -> bool {
        if self.edges.insert((source.clone(), target.clone())).is_some() {
            return false;
        }
        if let Some(object) = self.get_mut(source) {
            object.push_reference(target.clone());
        }
        self.referrers
            .entry(target.clone())
            .or_insert_with(im::Vector::new)
            .push_back(source.clone());
        true
    }

    /// Returns every object, in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// Looks up an object by reference.
    #[must_use]
    pub fn get(&self, id: &Ref) -> Option<&Object> {
        self.index.get(id).and_then(|&i| self.objects.get(i))
    }

    /// Returns true if an object with this reference exists.
    #[must_use]
    pub fn contains(&self, id: &Ref) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of objects, built-in types included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the database holds no objects.
    ///
    /// A database built by [`GraphBuilder`](crate::GraphBuilder) always holds
    /// the built-in types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the type objects (`type/...`), in creation order.
    pub fn types(&self) -> impl Iterator<Item = &Object> {
        self.instances_of(TYPE_TYPE)
    }

    /// Returns the flavor of the named type, or `None` if it is not declared.
    #[must_use]
    pub fn type_kind(&self, type_name: &str) -> Option<TypeKind> {
        let type_ref = Ref::type_named(type_name).ok()?;
        self.get(&type_ref)
            .map(|object| object.type_kind().unwrap_or_default())
    }

    /// Returns the objects whose reference has the given type name.
    pub fn instances_of<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Object> {
        self.objects
            .iter()
            .filter(move |object| object.id().type_name() == type_name)
    }

    /// Returns the outbound references of an object (empty if unknown).
    #[must_use]
    pub fn references(&self, id: &Ref) -> &[Ref] {
        self.get(id).map_or(&[][..], Object::references)
    }

    /// Returns the objects that reference `id`, in edge creation order.
    pub fn referrers(&self, id: &Ref) -> impl Iterator<Item = &Ref> {
        self.referrers.get(id).into_iter().flat_map(im::Vector::iter)
    }

    /// Returns every edge as `(source, target)`, grouped by source in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (&Ref, &Ref)> {
        self.objects.iter().flat_map(|object| {
            object
                .references()
                .iter()
                .map(move |target| (object.id(), target))
        })
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if `source` references `target`.
    #[must_use]
    pub fn has_edge(&self, source: &Ref, target: &Ref) -> bool {
        self.edges.contains(&(source.clone(), target.clone()))
    }
}
