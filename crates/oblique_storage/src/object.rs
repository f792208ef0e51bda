//! Objects stored in the graph.

use oblique_foundation::{Ref, TypeKind};

/// How an object came to exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Seeded when the database is created (`type/type`, `type/item`).
    Builtin,
    /// Defined by a declaration in the document.
    Defined,
    /// Created by the first reference to an instance of a lazy type.
    AutoCreated,
}

/// One node of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Object {
    id: Ref,
    content: String,
    kind: Option<TypeKind>,
    origin: Origin,
    line: Option<u32>,
    references: Vec<Ref>,
}

impl Object {
    pub(crate) fn new(
        id: Ref,
        content: String,
        kind: Option<TypeKind>,
        origin: Origin,
        line: Option<u32>,
    ) -> Self {
        Self {
            id,
            content,
            kind,
            origin,
            line,
            references: Vec::new(),
        }
    }

    pub(crate) fn placeholder(id: Ref) -> Self {
        Self::new(id, String::new(), None, Origin::AutoCreated, None)
    }

    pub(crate) fn push_reference(&mut self, target: Ref) {
        self.references.push(target);
    }

    /// Returns the reference naming this object.
    #[must_use]
    pub fn id(&self) -> &Ref {
        &self.id
    }

    /// Returns the literal text of the definition line, space-joined.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the outbound references, in the order they were first added.
    #[must_use]
    pub fn references(&self) -> &[Ref] {
        &self.references
    }

    /// Returns the flavor of a type object, `None` for every other object.
    #[must_use]
    pub fn type_kind(&self) -> Option<TypeKind> {
        self.kind
    }

    /// Returns true if this is a type object declared lazy.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.kind.is_some_and(TypeKind::is_lazy)
    }

    /// Returns how this object came to exist.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns true for `type/type` and `type/item`.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::Builtin
    }

    /// Returns the 1-based line of the definition, if it came from a document.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}
