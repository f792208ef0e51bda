//! Graph construction.
//!
//! [`GraphBuilder`] is the single place the type system is enforced: every
//! object and every edge enters the graph through [`GraphBuilder::define`] or
//! [`GraphBuilder::link`].

use log::{debug, trace};

use oblique_foundation::grammar::{ITEM_DESCRIPTION, ITEM_TYPE, TYPE_DESCRIPTION, TYPE_TYPE};
use oblique_foundation::{Error, ErrorContext, Ref, Result, TypeKind};

use crate::database::Database;
use crate::object::{Object, Origin};

/// Extra attributes of a definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Flavor of a type object. Type objects default to [`TypeKind::Strict`].
    pub kind: Option<TypeKind>,
    /// 1-based line of the definition.
    pub line: Option<u32>,
}

impl Attributes {
    /// Creates empty attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type flavor.
    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the definition line.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    fn locate(self, err: Error) -> Error {
        match self.line {
            Some(line) => err.with_context(ErrorContext::new().with_line(line)),
            None => err,
        }
    }
}

/// Builds a [`Database`] one definition at a time.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    db: Database,
}

impl GraphBuilder {
    /// Creates a builder holding the built-in `type/type` and `type/item` objects.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let mut db = Database::empty();
        let root = Ref::type_named(TYPE_TYPE).expect("built-in type names are valid");
        let item = Ref::type_named(ITEM_TYPE).expect("built-in type names are valid");
        db.insert(Object::new(
            root.clone(),
            TYPE_DESCRIPTION.to_string(),
            Some(TypeKind::Strict),
            Origin::Builtin,
            None,
        ));
        db.insert(Object::new(
            item.clone(),
            ITEM_DESCRIPTION.to_string(),
            Some(TypeKind::Strict),
            Origin::Builtin,
            None,
        ));
        db.add_edge(&root, &item);
        Self { db }
    }

    /// Defines a new object.
    ///
    /// Adds the object with `words` space-joined as its content, a type edge
    /// from its type object, and an edge to every reference in `refs`.
    /// References to undefined instances of lazy types create those instances
    /// with empty content.
    ///
    /// Nothing is added when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` already names an object, including one created by a lazy reference
    ///   (duplicate object)
    /// - the type of `id` or of any reference is not declared (undefined type)
    /// - a reference names an undefined instance of a strict type (undefined reference)
    pub fn define(
        &mut self,
        id: Ref,
        words: &[String],
        refs: &[Ref],
        attrs: Attributes,
    ) -> Result<()> {
        if self.db.contains(&id) {
            return Err(attrs.locate(Error::duplicate_object(id)));
        }

        let type_ref = id.type_ref();
        if !self.db.contains(&type_ref) {
            return Err(attrs.locate(Error::undefined_type(type_ref)));
        }

        let mut created: Vec<&Ref> = Vec::new();
        for target in refs {
            let kind = self.kind_of(target).map_err(|err| attrs.locate(err))?;
            if self.db.contains(target) || *target == id || created.contains(&target) {
                continue;
            }
            match kind {
                TypeKind::Lazy => created.push(target),
                TypeKind::Strict => {
                    return Err(attrs.locate(Error::undefined_reference(target.clone())));
                }
            }
        }

        let content = words.join(" ");
        let kind = if id.is_type() {
            Some(attrs.kind.unwrap_or_default())
        } else {
            None
        };
        debug!("defined {id}: {content:?}");
        self.db
            .insert(Object::new(id.clone(), content, kind, Origin::Defined, attrs.line));
        self.add_edge(&type_ref, &id);

        for target in created {
            debug!("auto-created {target} for lazy type");
            self.db.insert(Object::placeholder(target.clone()));
            self.add_edge(&target.type_ref(), target);
        }
        for target in refs {
            self.add_edge(&id, target);
        }
        Ok(())
    }

    /// Adds an edge between two existing objects. Existing edges are left as is.
    ///
    /// # Errors
    ///
    /// Returns an undefined reference error if either end does not exist.
    pub fn link(&mut self, source: &Ref, target: &Ref) -> Result<()> {
        for end in [source, target] {
            if !self.db.contains(end) {
                return Err(Error::undefined_reference(end.clone()));
            }
        }
        self.add_edge(source, target);
        Ok(())
    }

    /// Returns the database built so far.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Finishes building and returns the database.
    #[must_use]
    pub fn finish(self) -> Database {
        self.db
    }

    /// Returns the flavor of the type of `target`.
    fn kind_of(&self, target: &Ref) -> Result<TypeKind> {
        let type_ref = target.type_ref();
        self.db
            .get(&type_ref)
            .map(|object| object.type_kind().unwrap_or_default())
            .ok_or_else(|| Error::undefined_type(type_ref))
    }

    fn add_edge(&mut self, source: &Ref, target: &Ref) {
        if self.db.add_edge(source, target) {
            trace!("edge {source} -> {target}");
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
