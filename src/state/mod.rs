//! State Module
//!
//! This module contains all state-related types for the program.

pub mod pool_state;

// Re-export all state types for easy access
pub use pool_state::*;
