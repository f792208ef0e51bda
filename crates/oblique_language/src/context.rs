//! The indentation context stack.
//!
//! Each indentation level that holds a definition gets a frame listing the
//! references that deeper definitions link to implicitly. Given
//!
//! ```text
//! g/1 Goal one
//!   g/2 Goal two
//!     g/3 Goal three
//! ```
//!
//! `g/2` links to `g/1`, and `g/3` links to `g/2` (and, in cumulative mode,
//! to `g/1` as well).

use log::trace;

use oblique_foundation::Ref;

/// How a new frame relates to its parent frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContextMode {
    /// A frame holds only its own definition and that definition's references.
    #[default]
    Nested,
    /// A frame extends its parent frame, so every ancestor is inherited.
    Cumulative,
}

/// Stack of context frames, one per active indentation level.
///
/// A fresh stack holds one empty root frame, so a document whose first
/// definition is indented one level still opens a frame for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextStack {
    frames: Vec<Vec<Ref>>,
    mode: ContextMode,
}

impl ContextStack {
    /// Creates a stack holding only the empty root frame.
    #[must_use]
    pub fn new(mode: ContextMode) -> Self {
        Self {
            frames: vec![Vec::new()],
            mode,
        }
    }

    /// Records a definition at indentation `level`.
    ///
    /// Frames at `level` and deeper are discarded. The returned references are
    /// the enclosing frame, which the definition links to. If the stack is then
    /// exactly `level` frames high, a frame for the definition is pushed;
    /// over-indented definitions push nothing.
    pub fn enter(&mut self, level: usize, id: &Ref, refs: &[Ref]) -> Vec<Ref> {
        if self.frames.len() > level {
            trace!("context: pop to level {level}");
            self.frames.truncate(level);
        }
        let inherited = self.frames.last().cloned().unwrap_or_default();

        if self.frames.len() == level {
            let mut frame = match self.mode {
                ContextMode::Nested => Vec::with_capacity(1 + refs.len()),
                ContextMode::Cumulative => inherited.clone(),
            };
            frame.push(id.clone());
            frame.extend_from_slice(refs);
            trace!("context: push level {level} {frame:?}");
            self.frames.push(frame);
        } else {
            trace!(
                "context: {id} at level {level} is deeper than {}",
                self.frames.len()
            );
        }
        inherited
    }

    /// Returns the frame deeper definitions would link to.
    #[must_use]
    pub fn top(&self) -> Option<&[Ref]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Returns the frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<Ref>] {
        &self.frames
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame mode.
    #[must_use]
    pub fn mode(&self) -> ContextMode {
        self.mode
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new(ContextMode::default())
    }
}
