//! Error types for Shunt.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DeclareError`] - Declaration-time failures from a binder
//! - [`DescriptorError`] - Toggle descriptors that cannot be validated
//! - [`IdentError`] - Text that is not a well-formed identifier
//! - [`InvalidKind`] - Text that names no supported relationship shape
//!
//! Every error here is a local validation failure detected synchronously;
//! none is retried or recovered internally. Host registration failures are
//! not part of this hierarchy: they pass through [`DeclareError::Host`]
//! untouched, preserving the host's own error semantics.

use thiserror::Error;

/// Error returned when text is not a well-formed [`Ident`].
///
/// [`Ident`]: crate::Ident
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// The input was empty.
    #[error("identifier is empty")]
    Empty,

    /// The first character must be an ASCII letter or `_`.
    #[error("identifier starts with `{0}`, expected a letter or `_`")]
    InvalidStart(char),

    /// Characters after the first must be ASCII alphanumeric or `_`.
    #[error("identifier contains `{ch}` at byte {index}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the offending character.
        index: usize,
    },
}

/// Error returned when text names no supported relationship shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid relation kind `{0}`")]
pub struct InvalidKind(pub String);

/// Error cases for a toggle descriptor that cannot be validated.
///
/// A descriptor must carry a feature name and *both* option sets; an empty
/// option set is valid, an absent one is not.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorError {
    /// The descriptor has no feature name.
    #[error("toggle descriptor has no feature name")]
    MissingFeature,

    /// The descriptor has no `on` option set.
    #[error("toggle descriptor has no `on` option set")]
    MissingOn,

    /// The descriptor has no `off` option set.
    #[error("toggle descriptor has no `off` option set")]
    MissingOff,

    /// The reserved `toggle` key held something other than a descriptor.
    #[error("reserved `toggle` key does not hold a toggle descriptor")]
    NotADescriptor,
}

/// Errors from declaring a capability.
///
/// `E` is the host registrar's own error type. A host failure surfaces
/// through [`DeclareError::Host`] exactly as the registrar produced it:
/// no boxing, no translation. The validation variants are raised before any
/// host call, so a failed declaration registers nothing and installs
/// nothing.
#[derive(Error, Debug)]
pub enum DeclareError<E: std::error::Error> {
    /// The relation kind was given as text and is not a supported shape.
    #[error(transparent)]
    Kind(#[from] InvalidKind),

    /// The toggle descriptor could not be validated.
    #[error("malformed toggle descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    /// The host registration layer failed.
    #[error(transparent)]
    Host(E),
}
