//! Processors Module
//!
//! This module contains all processor functions organized by functionality.

pub mod pool_creation;
pub mod liquidity;
pub mod swap;
pub mod utilities;

// Re-export pool creation functions
pub use pool_creation::*;

// Re-export liquidity management functions
pub use liquidity::*;

// Re-export swap operations functions
pub use swap::*;

// Re-export utility functions
pub use utilities::*;
