//! Generated dispatch entry points.
//!
//! A toggled declaration produces two variant registrations and one
//! [`Dispatcher`] bound to the original capability name. The dispatcher is
//! plain data: the capability name, the feature name, the two derived
//! variant names, and an oracle reference. Resolution happens on every
//! call and nothing about the selected variant is cached, so flipping the
//! toggle changes the behavior of the very next invocation.

use crate::ident::Ident;
use crate::oracle::ToggleOracle;
use std::fmt;
use std::sync::Arc;

/// The two concrete variant names derived from a toggled declaration.
///
/// The scheme is purely a function of the capability and feature names:
/// `{name}_with_{feature}` and `{name}_without_{feature}`. Because the
/// names are deterministic, the dispatcher and its variants are fully
/// determined by the declaration. No registry of declarations exists, and
/// two independently toggled capabilities on the same entity cannot collide
/// as long as capability names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantNames {
    /// `{name}_with_{feature}`, selected while the toggle is active.
    pub with: Ident,
    /// `{name}_without_{feature}`, selected while the toggle is inactive.
    pub without: Ident,
}

impl VariantNames {
    /// Derive both variant names for a capability.
    pub fn derive(name: &Ident, feature: &Ident) -> Self {
        Self {
            with: name.suffixed("with", feature),
            without: name.suffixed("without", feature),
        }
    }
}

/// A generated entry point bound to the original capability name.
///
/// Invoking the dispatcher is equivalent to invoking exactly one of the two
/// variant registrations, chosen solely by the toggle state at call time.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = Dispatcher::new(name, feature, oracle);
/// // Forward a call through the host's own variant lookup:
/// let result = dispatcher.forward(args, |variant, args| host.invoke(variant, args));
/// ```
pub struct Dispatcher {
    name: Ident,
    feature: Ident,
    variants: VariantNames,
    oracle: Arc<dyn ToggleOracle>,
}

impl Dispatcher {
    /// Build a dispatcher for `name`, controlled by `feature`.
    pub fn new(name: Ident, feature: Ident, oracle: Arc<dyn ToggleOracle>) -> Self {
        let variants = VariantNames::derive(&name, &feature);
        Self {
            name,
            feature,
            variants,
            oracle,
        }
    }

    /// The capability name this dispatcher is bound to.
    pub fn name(&self) -> &Ident {
        &self.name
    }

    /// The feature toggle controlling variant selection.
    pub fn feature(&self) -> &Ident {
        &self.feature
    }

    /// The two variant names this dispatcher forwards to.
    pub fn variants(&self) -> &VariantNames {
        &self.variants
    }

    /// Resolve the currently active variant.
    ///
    /// The oracle is consulted on every call and the result is never
    /// cached, so a toggle flip is observed by the next invocation.
    pub fn target(&self) -> &Ident {
        if self.oracle.is_active(&self.feature) {
            &self.variants.with
        } else {
            &self.variants.without
        }
    }

    /// Forward a call to the currently active variant.
    ///
    /// `invoke` is the host's lookup-and-call for a registered variant.
    /// Arguments and the return value pass through unchanged.
    pub fn forward<A, R>(&self, args: A, invoke: impl FnOnce(&Ident, A) -> R) -> R {
        invoke(self.target(), args)
    }
}

impl Clone for Dispatcher {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            feature: self.feature.clone(),
            variants: self.variants.clone(),
            oracle: Arc::clone(&self.oracle),
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("feature", &self.feature)
            .field("variants", &self.variants)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct SwitchOracle(AtomicBool);

    impl SwitchOracle {
        fn set(&self, active: bool) {
            self.0.store(active, Ordering::Release);
        }
    }

    impl ToggleOracle for SwitchOracle {
        fn is_active(&self, _feature: &Ident) -> bool {
            self.0.load(Ordering::Acquire)
        }
    }

    fn ident(text: &str) -> Ident {
        Ident::new(text).unwrap()
    }

    #[test]
    fn derives_suffix_based_variant_names() {
        let names = VariantNames::derive(&ident("examples"), &ident("feature"));
        assert_eq!(names.with, "examples_with_feature");
        assert_eq!(names.without, "examples_without_feature");
    }

    #[test]
    fn target_follows_the_oracle_on_every_call() {
        let oracle = Arc::new(SwitchOracle::default());
        let dispatcher = Dispatcher::new(ident("examples"), ident("feature"), oracle.clone());

        assert_eq!(*dispatcher.target(), "examples_without_feature");
        oracle.set(true);
        assert_eq!(*dispatcher.target(), "examples_with_feature");
        oracle.set(false);
        assert_eq!(*dispatcher.target(), "examples_without_feature");
    }

    #[test]
    fn forward_hands_target_and_arguments_through() {
        let oracle = Arc::new(SwitchOracle::default());
        oracle.set(true);
        let dispatcher = Dispatcher::new(ident("examples"), ident("feature"), oracle);

        let result = dispatcher.forward((7, "x"), |variant, (a, b)| format!("{variant}:{a}:{b}"));
        assert_eq!(result, "examples_with_feature:7:x");
    }

    #[test]
    fn forward_preserves_absent_results() {
        let oracle = Arc::new(SwitchOracle::default());
        let dispatcher = Dispatcher::new(ident("example"), ident("feature"), oracle);

        let result: Option<String> = dispatcher.forward((), |_, ()| None);
        assert_eq!(result, None);
    }
}
