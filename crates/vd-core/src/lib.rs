//! Core types for Verdacht: the entity model and the standard catalogs.
//!
//! This crate defines the data the game engine operates on. It knows
//! nothing about turns, dice, or secrets — you can construct catalogs
//! programmatically or use the standard ones.

/// Standard catalogs of participants, hideouts, and chambers.
pub mod catalog;
/// Entity kinds, labels, and the participant record.
pub mod entity;

/// Re-export entity types.
pub use entity::{Entity, EntityKind, Participant};
/// Re-export the standard catalogs.
pub use catalog::{standard_chambers, standard_hideouts, standard_participants};
