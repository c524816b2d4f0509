//! Host-side contracts consumed by the binder.
//!
//! The binder never touches the host mapping layer directly. It is handed a
//! [`Registrar`] per declaration (the host's own registration function as a
//! first-class value) and a [`TypeHint`] once, at construction. Explicit
//! injection replaces any notion of intercepting or re-opening the host's
//! registration machinery.

use crate::dispatch::Dispatcher;
use crate::ident::Ident;
use crate::kind::RelationKind;
use crate::options::OptionMap;

/// The host's capability registration surface.
///
/// `register` is the underlying registration operation; `install` binds a
/// generated dispatcher under its capability name. The host's namespace is
/// the source of truth for both; shunt retains nothing after a
/// declaration completes. Failures are the host's own error type and are
/// propagated by the binder unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot accept capability registrations",
    label = "missing `Registrar` implementation",
    note = "Implement `Registrar` to receive variant registrations and dispatchers from a binder."
)]
pub trait Registrar {
    /// Host-specific registration failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register a capability under `name` with the given options.
    fn register(
        &mut self,
        kind: RelationKind,
        name: &Ident,
        options: OptionMap,
    ) -> Result<(), Self::Error>;

    /// Bind a generated dispatcher under its capability name.
    fn install(&mut self, dispatcher: Dispatcher) -> Result<(), Self::Error>;
}

impl<R: Registrar + ?Sized> Registrar for &mut R {
    type Error = R::Error;

    fn register(
        &mut self,
        kind: RelationKind,
        name: &Ident,
        options: OptionMap,
    ) -> Result<(), Self::Error> {
        (**self).register(kind, name, options)
    }

    fn install(&mut self, dispatcher: Dispatcher) -> Result<(), Self::Error> {
        (**self).install(dispatcher)
    }
}

/// The host mapping layer's name-to-type convention.
///
/// Toggled declarations record a target-type hint derived from the
/// capability name (singularization, type-casing, whatever the host's
/// convention is). That convention belongs to the host, so the binder takes
/// it as a function rather than reimplementing it.
pub trait TypeHint {
    /// Derive the target-type hint for `capability`.
    fn type_hint(&self, capability: &Ident) -> String;
}

impl<F> TypeHint for F
where
    F: Fn(&Ident) -> String,
{
    fn type_hint(&self, capability: &Ident) -> String {
        self(capability)
    }
}
