//! Game implementations.
//!
//! Each game provides an engine implementing [`crate::rules::RulesEngine`].

pub mod gomoku;
pub mod xiangqi;
