//! # shunt-std
//!
//! Standard implementations for the Shunt capability-binding framework.
//!
//! This crate provides:
//! - [`SimpleRepository`]: the in-memory set of active feature names,
//!   usable directly as a toggle oracle
//! - [`testing`]: purpose-built doubles for exercising binders,
//!   dispatchers, and oracles

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use shunt_core;

// Modules
pub mod repository;
pub mod testing;

pub use repository::{RepositoryError, SimpleRepository};
