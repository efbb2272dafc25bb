//! medora-core
//!
//! Pure domain types and the Plan-of-Care parser.
//! No rendering or I/O; this is the shared vocabulary of the Medora UI.

pub mod error;
pub mod models;
pub mod plan;
