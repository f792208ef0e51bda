//! Type flavors.

use std::fmt;

/// How references to undefined instances of a type are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Instances must be defined before they are referenced.
    #[default]
    Strict,
    /// The first reference to an undefined instance creates it with empty content.
    Lazy,
}

impl TypeKind {
    /// Returns true for [`TypeKind::Lazy`].
    #[must_use]
    pub const fn is_lazy(self) -> bool {
        matches!(self, Self::Lazy)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}
