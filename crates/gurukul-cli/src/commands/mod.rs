//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod check;
pub mod convert;
pub mod find;
pub mod paper;
pub mod periods;
pub mod result;
pub mod roster;
pub mod stats;
pub mod student;
