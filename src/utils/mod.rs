//! Utility Functions
//!
//! This module contains shared utility functions used throughout the program,
//! organized by functionality: authority derivation, validation,
//! serialization and rent handling.

pub mod pool_authority;
pub mod rent;
pub mod serialization;
pub mod validation;

// Re-export commonly used items for convenience
pub use pool_authority::*;
pub use rent::*;
pub use serialization::*;
pub use validation::*;
