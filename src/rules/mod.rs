//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How move requests are validated
//! - Which destinations are legal
//! - Win, draw and check conditions
//!
//! Committing, undo, replay and forced termination are shared and never
//! reimplemented per game.

pub mod engine;

pub use engine::RulesEngine;
pub(crate) use engine::check_turn;
