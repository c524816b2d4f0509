//! The toggle-state oracle contract.
//!
//! An oracle is anything that can answer "is this feature active right
//! now?". Dispatchers hold an oracle reference and consult it on every
//! invocation without caching the answer, so the oracle's current state is
//! the single source of truth for variant selection. From the dispatcher's
//! perspective the query is total and side-effect-free.

use crate::ident::Ident;
use std::sync::Arc;

/// Answers whether a feature toggle is currently active.
///
/// The trait is object-safe; dispatchers store `Arc<dyn ToggleOracle>` so
/// one oracle instance can back any number of dispatchers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot answer toggle-state queries",
    label = "missing `ToggleOracle` implementation",
    note = "Implement `ToggleOracle` so dispatchers can resolve their active variant."
)]
pub trait ToggleOracle: Send + Sync {
    /// Returns `true` when `feature` is currently active.
    fn is_active(&self, feature: &Ident) -> bool;
}

impl<O: ToggleOracle + ?Sized> ToggleOracle for &O {
    fn is_active(&self, feature: &Ident) -> bool {
        (**self).is_active(feature)
    }
}

impl<O: ToggleOracle + ?Sized> ToggleOracle for Box<O> {
    fn is_active(&self, feature: &Ident) -> bool {
        (**self).is_active(feature)
    }
}

impl<O: ToggleOracle + ?Sized> ToggleOracle for Arc<O> {
    fn is_active(&self, feature: &Ident) -> bool {
        (**self).is_active(feature)
    }
}

/// Adapts a closure into a [`ToggleOracle`].
///
/// # Example
///
/// ```rust,ignore
/// let always_on = OracleFn::new(|_: &Ident| true);
/// assert!(always_on.is_active(&Ident::new("anything")?));
/// ```
pub struct OracleFn<F>(F);

impl<F> OracleFn<F>
where
    F: Fn(&Ident) -> bool + Send + Sync,
{
    /// Wrap `query` as an oracle.
    pub fn new(query: F) -> Self {
        Self(query)
    }
}

impl<F> ToggleOracle for OracleFn<F>
where
    F: Fn(&Ident) -> bool + Send + Sync,
{
    fn is_active(&self, feature: &Ident) -> bool {
        (self.0)(feature)
    }
}
