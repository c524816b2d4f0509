//! # shunt-core
//!
//! Core contracts for the Shunt capability-binding framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts that bring their own toggle state or registration machinery and
//! don't need the full `shunt-std` implementations.
//!
//! # The binding model
//!
//! A host declares a *capability* (a named operation or relation an entity
//! exposes) whose behavior is controlled by a *feature toggle*. Shunt splits
//! the declaration into two concrete variant registrations, named
//! `{name}_with_{feature}` and `{name}_without_{feature}`, and a single
//! *dispatcher* bound to the original name that consults the live toggle
//! state on every call and forwards to whichever variant is active.
//!
//! Three narrow contracts connect the pieces:
//!
//! - [`ToggleOracle`] - answers `is_active(feature)`; the dispatcher's only
//!   view of toggle state.
//! - [`Registrar`] - the host's registration callback; receives the variant
//!   registrations and the generated [`Dispatcher`]. The host's namespace is
//!   the source of truth; nothing is retained here.
//! - [`TypeHint`] - the host mapping layer's name-to-type convention,
//!   injected rather than reimplemented.
//!
//! # Error Types
//!
//! - [`DeclareError`] - Declaration-time failures, generic over the host's
//!   own registration error so it propagates unchanged
//! - [`DescriptorError`] - Malformed toggle descriptors
//! - [`IdentError`] - Text that is not a well-formed identifier
//! - [`InvalidKind`] - Text that names no supported relationship shape

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod ident;
mod kind;
mod options;
mod oracle;
mod registrar;
mod toggle;

// Re-exports
pub use dispatch::{Dispatcher, VariantNames};
pub use error::{DeclareError, DescriptorError, IdentError, InvalidKind};
pub use ident::Ident;
pub use kind::RelationKind;
pub use options::{OptionMap, OptionValue, TARGET_TYPE_KEY, TOGGLE_KEY};
pub use oracle::{OracleFn, ToggleOracle};
pub use registrar::{Registrar, TypeHint};
pub use toggle::{ToggleDescriptor, ToggleSpec};
