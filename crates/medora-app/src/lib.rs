//! medora-app library root.
//!
//! The application shell around the plan parser and renderers: persisted
//! settings, the explicit application-state store, and the per-container
//! plan view toggles the note UI drives.

pub mod config;
pub mod state;
pub mod view;
