/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Common Test Utilities
//!
//! This module provides shared utilities and helpers for integration tests
//! across all test modules. It includes:
//!
//! - Test environment configuration
//! - Token creation and minting helpers
//! - Pool setup, provisioning and swap helpers

pub mod tokens;
pub mod pool_helpers;

// Re-export commonly used types and functions
#[allow(unused_imports)]
pub use setup::*;
#[allow(unused_imports)]
pub use tokens::*;
#[allow(unused_imports)]
pub use pool_helpers::*;

// Re-export external dependencies commonly used in tests
// Allow unused imports since these are provided for optional use across test modules
#[allow(unused_imports)]
pub use borsh::{BorshDeserialize, BorshSerialize};
#[allow(unused_imports)]
pub use solana_program::{
    pubkey::Pubkey,
    instruction::{AccountMeta, Instruction},
};
#[allow(unused_imports)]
pub use solana_sdk::{
    instruction::InstructionError,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};
#[allow(unused_imports)]
pub use solana_program_test::*;

// Re-export program-specific imports
#[allow(unused_imports)]
pub use remi_vault::{
    PoolInstruction, PoolState, process_instruction,
    ID as PROGRAM_ID,
};

/// Test result type alias for convenience
pub type TestResult = Result<(), BanksClientError>;

/// Common test constants
pub mod constants {
    /// Lamports per SOL, also token base units per whole token at 9 decimals
    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    /// Token decimals for test mints
    pub const TOKEN_DECIMALS: u8 = 9;

    /// Tokens minted to the test user (1,000,000 whole tokens)
    pub const USER_TOKEN_MINT_AMOUNT: u64 = 1_000_000 * LAMPORTS_PER_SOL;

    /// SOL funded to the test user before provisioning
    pub const USER_SOL_FUNDING: u64 = 600 * LAMPORTS_PER_SOL;

    /// SOL deposited into the pool by the standard fixture
    pub const POOL_SOL_LIQUIDITY: u64 = 500 * LAMPORTS_PER_SOL;

    /// Tokens deposited into the vault by the standard fixture
    pub const POOL_TOKEN_LIQUIDITY: u64 = 500 * LAMPORTS_PER_SOL;
}
