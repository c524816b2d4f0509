//! In-memory repository of active feature names.
//!
//! Simply add the features that should be active; no config or data
//! sources required.
//!
//! # Example
//!
//! ```rust,ignore
//! let repository = SimpleRepository::new();
//! repository.add_active_feature(Ident::new("new_ranking")?)?;
//! assert!(repository.is_active(&Ident::new("new_ranking")?));
//! ```

use parking_lot::RwLock;
use shunt_core::{Ident, ToggleOracle};
use thiserror::Error;

/// Errors from mutating a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The feature is already in the active set.
    #[error("feature `{0}` is already active")]
    DuplicateFeature(Ident),
}

/// Authoritative in-memory set of active feature names.
///
/// The set starts empty and only grows; there is no removal operation.
/// Listing preserves insertion order, though the order carries no meaning.
/// Only well-formed [`Ident`] values can enter the set; arbitrary text is
/// rejected at `Ident` construction, before it can reach this API.
///
/// Reads (membership tests, listing) take a shared lock so concurrent
/// dispatch sites can consult the repository freely; writes are serialized.
/// A host typically owns one `Arc<SimpleRepository>`, hands clones of the
/// handle to its binder, and mutates through its own clone.
#[derive(Debug, Default)]
pub struct SimpleRepository {
    active: RwLock<Vec<Ident>>,
}

impl SimpleRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the currently active features; mutating the returned list
    /// does not affect the repository.
    pub fn active_features(&self) -> Vec<Ident> {
        self.active.read().clone()
    }

    /// Add `feature` to the active set.
    ///
    /// Fails with [`RepositoryError::DuplicateFeature`] when the feature is
    /// already active, leaving the set unchanged.
    pub fn add_active_feature(&self, feature: Ident) -> Result<(), RepositoryError> {
        let mut active = self.active.write();
        if active.contains(&feature) {
            return Err(RepositoryError::DuplicateFeature(feature));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(feature = %feature, "feature activated");
        active.push(feature);
        Ok(())
    }
}

impl ToggleOracle for SimpleRepository {
    fn is_active(&self, feature: &Ident) -> bool {
        self.active.read().contains(feature)
    }
}
