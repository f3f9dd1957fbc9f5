//! snail-util - Core utilities shared by the snail compiler phases
//!
//! At the moment this is the diagnostics layer: severity levels, stable
//! diagnostic codes and the [`Diagnostic`] value every phase converts its
//! errors into before a driver renders them.

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, Location};
