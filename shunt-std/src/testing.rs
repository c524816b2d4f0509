//! Testing utilities for Shunt.
//!
//! This module provides doubles for exercising binders, dispatchers, and
//! oracles:
//!
//! - [`RecordingRegistrar`]: a registrar that records every registration and
//!   installed dispatcher, and can be primed to fail
//! - [`ManualOracle`]: a hand-operated switch answering for every feature

use shunt_core::{Dispatcher, Ident, OptionMap, Registrar, RelationKind};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use thiserror::Error;

// ============================================================================
// Recording Registrar
// ============================================================================

/// A single recorded `register` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    /// Relationship shape the capability was registered under.
    pub kind: RelationKind,
    /// Name the capability was registered under.
    pub name: Ident,
    /// Options forwarded by the binder.
    pub options: OptionMap,
}

/// The error a primed [`RecordingRegistrar`] fails with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("registration rejected: {0}")]
pub struct Rejected(pub String);

/// A registrar that records everything it is asked to do.
///
/// Useful for verifying how a binder decomposes a declaration: how many
/// `register` calls occurred, under which names, with which options, and
/// which dispatchers were installed.
///
/// # Example
///
/// ```rust,ignore
/// let mut registrar = RecordingRegistrar::new();
/// binder.one_to_many(&mut registrar, name, options)?;
/// assert_eq!(registrar.registrations().len(), 2);
/// assert!(registrar.dispatcher("examples").is_some());
/// ```
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    registrations: Vec<Registration>,
    dispatchers: Vec<Dispatcher>,
    fail_next: Option<String>,
}

impl RecordingRegistrar {
    /// Create an empty recording registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prime the next `register` or `install` call to fail with `reason`.
    pub fn fail_next(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    /// All recorded `register` calls, in order.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// All installed dispatchers, in order.
    pub fn dispatchers(&self) -> &[Dispatcher] {
        &self.dispatchers
    }

    /// Find a recorded registration by name.
    pub fn find(&self, name: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.name == name)
    }

    /// Find an installed dispatcher by capability name.
    pub fn dispatcher(&self, name: &str) -> Option<&Dispatcher> {
        self.dispatchers.iter().find(|d| *d.name() == name)
    }

    fn take_failure(&mut self) -> Result<(), Rejected> {
        match self.fail_next.take() {
            Some(reason) => Err(Rejected(reason)),
            None => Ok(()),
        }
    }
}

impl Registrar for RecordingRegistrar {
    type Error = Rejected;

    fn register(
        &mut self,
        kind: RelationKind,
        name: &Ident,
        options: OptionMap,
    ) -> Result<(), Self::Error> {
        self.take_failure()?;
        self.registrations.push(Registration {
            kind,
            name: name.clone(),
            options,
        });
        Ok(())
    }

    fn install(&mut self, dispatcher: Dispatcher) -> Result<(), Self::Error> {
        self.take_failure()?;
        self.dispatchers.push(dispatcher);
        Ok(())
    }
}

// ============================================================================
// Manual Oracle
// ============================================================================

/// A hand-operated oracle answering for every feature at once.
///
/// Cloned handles share state, so a test can flip the switch while a
/// dispatcher holds the oracle.
///
/// # Example
///
/// ```rust,ignore
/// let oracle = ManualOracle::new();
/// let binder = Binder::new(oracle.clone(), hinter);
/// // ... declare, then flip:
/// oracle.enable();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualOracle(Arc<AtomicBool>);

impl ManualOracle {
    /// Create an oracle reporting every feature inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle with the given initial state.
    pub fn with_state(active: bool) -> Self {
        Self(Arc::new(AtomicBool::new(active)))
    }

    /// Report every feature active.
    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Report every feature inactive.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Set the switch state.
    pub fn set(&self, active: bool) {
        self.0.store(active, Ordering::Release);
    }

    /// Flip the switch, returning the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }
}

impl shunt_core::ToggleOracle for ManualOracle {
    fn is_active(&self, _feature: &Ident) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
