//! Object references.
//!
//! A [`Ref`] names one object in the graph as `type/identifier`. Both halves
//! are validated on construction, so a `Ref` in hand is always well formed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::grammar::{REF_SEPARATOR, TYPE_TYPE};

/// A `(type, identifier)` pair identifying one object.
///
/// Ordering is by type name, then identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ref {
    type_name: String,
    ident: String,
}

impl Ref {
    /// Creates a reference after validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidReference`] if `type_name` is not made of
    /// lowercase ASCII letters, or `ident` is not made of ASCII letters,
    /// digits and hyphens.
    pub fn new(type_name: impl Into<String>, ident: impl Into<String>) -> Result<Self> {
        let type_name = type_name.into();
        let ident = ident.into();
        if !is_type_name(&type_name) || !is_identifier(&ident) {
            return Err(Error::new(ErrorKind::InvalidReference(format!(
                "{type_name}{REF_SEPARATOR}{ident}"
            ))));
        }
        Ok(Self { type_name, ident })
    }

    /// Creates the reference of the type object `type/<name>`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidTypeName`] if `name` is not made of
    /// lowercase ASCII letters.
    pub fn type_named(name: &str) -> Result<Self> {
        if !is_type_name(name) {
            return Err(Error::new(ErrorKind::InvalidTypeName(name.to_string())));
        }
        Ok(Self {
            type_name: TYPE_TYPE.to_string(),
            ident: name.to_string(),
        })
    }

    /// Returns the type half of this reference.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the identifier half of this reference.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Returns the reference of this object's type object, `type/<type_name>`.
    #[must_use]
    pub fn type_ref(&self) -> Ref {
        // A type name is always a valid identifier.
        Self {
            type_name: TYPE_TYPE.to_string(),
            ident: self.type_name.clone(),
        }
    }

    /// Returns true if this reference names a type object.
    #[must_use]
    pub fn is_type(&self) -> bool {
        self.type_name == TYPE_TYPE
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{REF_SEPARATOR}{}", self.type_name, self.ident)
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({self})")
    }
}

impl FromStr for Ref {
    type Err = Error;

    /// Parses `type/identifier`. The whole string must be a reference.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::new(ErrorKind::InvalidReference(s.to_string()));
        let (type_name, ident) = s.split_once(REF_SEPARATOR).ok_or_else(invalid)?;
        Self::new(type_name, ident).map_err(|_| invalid())
    }
}

impl TryFrom<&str> for Ref {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Returns true if `c` may appear in a type name.
#[must_use]
pub fn is_type_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Returns true if `c` may appear in an identifier.
#[must_use]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns true if `s` is a non-empty run of lowercase ASCII letters.
#[must_use]
pub fn is_type_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_type_char)
}

/// Returns true if `s` is a non-empty run of ASCII letters, digits and hyphens.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}
