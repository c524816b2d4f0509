//! # shunt - Feature-Toggled Capability Binding
//!
//! `shunt` turns a capability declaration carrying a toggle descriptor into
//! two concretely-named variant registrations plus one dispatcher. The
//! dispatcher consults the live toggle state on **every** call and forwards
//! to whichever variant is active, so flipping a toggle changes the
//! capability's behavior from the very next invocation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shunt::{Binder, Ident, OptionMap, TOGGLE_KEY, ToggleDescriptor, options};
//! use shunt::repository::SimpleRepository;
//! use std::sync::Arc;
//!
//! let features = Arc::new(SimpleRepository::new());
//! let binder = Binder::new(Arc::clone(&features), my_type_hint);
//!
//! let mut opts = OptionMap::new();
//! opts.insert(
//!     TOGGLE_KEY,
//!     ToggleDescriptor::for_feature(Ident::new("new_ranking")?)
//!         .with_on(options! { "scope" => "ranked" })
//!         .with_off(OptionMap::new()),
//! );
//!
//! // Registers `entries_with_new_ranking` and `entries_without_new_ranking`
//! // with the host, and installs a dispatcher under `entries`.
//! binder.one_to_many(&mut registrar, Ident::new("entries")?, opts)?;
//!
//! // Later, at boot:
//! features.add_active_feature(Ident::new("new_ranking")?)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binder;

pub use binder::{Binder, Declared};

pub use shunt_core::{
    // Errors
    DeclareError,
    DescriptorError,
    // Dispatch
    Dispatcher,
    // Identifiers
    Ident,
    IdentError,
    InvalidKind,
    // Options
    OptionMap,
    OptionValue,
    // Oracle
    OracleFn,
    // Host contracts
    Registrar,
    RelationKind,
    TARGET_TYPE_KEY,
    TOGGLE_KEY,
    // Toggle descriptors
    ToggleDescriptor,
    ToggleOracle,
    ToggleSpec,
    TypeHint,
    VariantNames,
    options,
};

pub use shunt_std::{RepositoryError, SimpleRepository};

/// The toggle state repository.
pub mod repository {
    pub use shunt_std::repository::{RepositoryError, SimpleRepository};
}

/// Testing utilities.
pub mod testing {
    pub use shunt_std::testing::{ManualOracle, RecordingRegistrar, Registration, Rejected};
}

/// Prelude module - common imports for Shunt.
///
/// # Usage
///
/// ```rust,ignore
/// use shunt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // The binder
        Binder,
        DeclareError,
        Declared,
        Dispatcher,
        // Identifiers
        Ident,
        // Options
        OptionMap,
        OptionValue,
        // Host contracts
        Registrar,
        RelationKind,
        // Repository
        SimpleRepository,
        // Toggle descriptors
        ToggleDescriptor,
        ToggleOracle,
        TypeHint,
    };
}
