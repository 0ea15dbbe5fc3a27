//! Types Module
//!
//! This module contains the instruction definitions for the Token/SOL Reserve Vault Program.

pub mod instructions;

// Re-export all types for easy access
pub use instructions::*;
