//! Parse session state.
//!
//! A [`Session`] owns everything one parse mutates: the graph under
//! construction, the macro rules, the context stack and the item counter.
//! Independent sessions share nothing, so separate documents can be parsed
//! concurrently.

use log::debug;

use oblique_foundation::grammar::ITEM_TYPE;
use oblique_foundation::{Error, ErrorContext, Ref, Result, TypeKind};
use oblique_storage::{Attributes, Database, GraphBuilder};

use crate::context::{ContextMode, ContextStack};
use crate::macros::MacroRegistry;

/// State of one parse.
#[derive(Clone, Debug)]
pub struct Session {
    /// The graph under construction.
    builder: GraphBuilder,

    /// Macro rules, in declaration order.
    macros: MacroRegistry,

    /// Indentation context frames.
    context: ContextStack,

    /// Identifier of the next anonymous item.
    next_item: u64,
}

impl Session {
    /// Creates a session holding only the built-in types.
    #[must_use]
    pub fn new(mode: ContextMode) -> Self {
        Self {
            builder: GraphBuilder::new(),
            macros: MacroRegistry::new(),
            context: ContextStack::new(mode),
            next_item: 0,
        }
    }

    /// Declares the type `type/<name>`.
    ///
    /// Type declarations do not take part in indentation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the type is already declared,
    /// or a reference cannot be resolved.
    pub fn declare_type(
        &mut self,
        name: &str,
        kind: TypeKind,
        words: &[String],
        refs: &[Ref],
        line: u32,
    ) -> Result<Ref> {
        let id = Ref::type_named(name).map_err(|err| at_line(err, line))?;
        debug!("line {line}: {kind} type {name}");
        self.builder.define(
            id.clone(),
            words,
            refs,
            Attributes::new().with_kind(kind).at_line(line),
        )?;
        Ok(id)
    }

    /// Appends a macro rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn define_macro(&mut self, pattern: &str, template: &str, line: u32) -> Result<()> {
        debug!("line {line}: macro {pattern} -> {template}");
        self.macros
            .define(pattern, template)
            .map_err(|err| at_line(err, line))
    }

    /// Expands a bare word through the macro rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the first matching rule does not expand to a reference.
    pub fn expand(&self, word: &str) -> Result<Option<Ref>> {
        self.macros.apply(word)
    }

    /// Defines a named object at indentation `level` and links it to its
    /// enclosing context.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph rejects the definition.
    pub fn define_object(
        &mut self,
        level: usize,
        id: Ref,
        words: &[String],
        refs: &[Ref],
        line: u32,
    ) -> Result<Ref> {
        self.builder
            .define(id.clone(), words, refs, Attributes::new().at_line(line))?;
        for target in self.context.enter(level, &id, refs) {
            self.builder
                .link(&id, &target)
                .map_err(|err| at_line(err, line))?;
        }
        Ok(id)
    }

    /// Defines the next anonymous item (`item/0`, `item/1`, ...) at
    /// indentation `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph rejects the definition.
    pub fn define_item(
        &mut self,
        level: usize,
        words: &[String],
        refs: &[Ref],
        line: u32,
    ) -> Result<Ref> {
        let id = Ref::new(ITEM_TYPE, self.next_item.to_string())?;
        self.next_item += 1;
        self.define_object(level, id, words, refs, line)
    }

    /// Returns the graph built so far.
    #[must_use]
    pub fn database(&self) -> &Database {
        self.builder.database()
    }

    /// Returns the macro rules.
    #[must_use]
    pub fn macros(&self) -> &MacroRegistry {
        &self.macros
    }

    /// Returns the context stack.
    #[must_use]
    pub fn context(&self) -> &ContextStack {
        &self.context
    }

    /// Ends the session and returns the finished graph.
    #[must_use]
    pub fn finish(self) -> Database {
        self.builder.finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ContextMode::default())
    }
}

/// Attaches a line to an error that has no position yet.
fn at_line(err: Error, line: u32) -> Error {
    if err.context.is_some() {
        err
    } else {
        err.with_context(ErrorContext::new().with_line(line))
    }
}

// =============================================================================
// Tests
// =============================================================================
