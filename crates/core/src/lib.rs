//! Domain logic for the GameTracker backend.
//!
//! Pure types and rules shared by the persistence, catalog and HTTP crates:
//! vote kinds and the toggle transition, catalog query mapping, baseline
//! vote statistics, and the upcoming-release window. Nothing here performs I/O.

pub mod baseline;
pub mod catalog;
pub mod error;
pub mod types;
pub mod upcoming;
pub mod validation;
pub mod vote;
