//! Validated symbolic names.

use crate::error::IdentError;
use std::fmt;
use std::str::FromStr;

/// A validated symbolic name, distinct from arbitrary text.
///
/// Capability names, variant names, and feature toggle names are all
/// `Ident`s. The rules are deliberately narrow: non-empty ASCII, starting
/// with a letter or `_`, continuing with letters, digits, or `_`. APIs that
/// take an `Ident` therefore never see free-form text; the check happens
/// once, at construction.
///
/// # Example
///
/// ```rust,ignore
/// let feature = Ident::new("new_ranking")?;
/// assert_eq!(feature.as_str(), "new_ranking");
/// assert!(Ident::new("new ranking").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Validate `text` into an identifier.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentError> {
        let text = text.into();
        validate(&text)?;
        Ok(Self(text))
    }

    /// The identifier's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Joining well-formed identifiers with `_` infixes cannot produce an
    // ill-formed one, so derived variant names skip re-validation.
    pub(crate) fn suffixed(&self, infix: &str, feature: &Ident) -> Ident {
        Ident(format!("{}_{}_{}", self.0, infix, feature.0))
    }
}

fn validate(text: &str) -> Result<(), IdentError> {
    let mut chars = text.char_indices();
    match chars.next() {
        None => return Err(IdentError::Empty),
        Some((_, ch)) if !(ch.is_ascii_alphabetic() || ch == '_') => {
            return Err(IdentError::InvalidStart(ch));
        }
        Some(_) => {}
    }
    for (index, ch) in chars {
        if !(ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(IdentError::InvalidChar { ch, index });
        }
    }
    Ok(())
}

impl FromStr for Ident {
    type Err = IdentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ident::new(text)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
