//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! tick input, events, session state, snapshots, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
