//! Constants for the Token/SOL Reserve Vault Program
//!
//! This module contains the PDA seed prefixes, exchange rate and schema
//! constants used throughout the program.

/// PDA seed for the pool authority. The Pool State account lives at this
/// address, owns the reserve vault and custodies the pool's SOL.
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

/// Token units exchanged per lamport. Swaps settle at a fixed 1:1 rate.
pub const TOKEN_PER_SOL_RATE: u64 = 1;

/// Version of the on-chain `PoolState` layout, stored in every record
pub const POOL_STATE_SCHEMA_VERSION: u8 = 1;

/// Number of accounts required by each instruction
pub const INITIALIZE_POOL_ACCOUNT_COUNT: usize = 8;
pub const ADD_LIQUIDITY_ACCOUNT_COUNT: usize = 6;
pub const SWAP_ACCOUNT_COUNT: usize = 5;
pub const GET_POOL_INFO_ACCOUNT_COUNT: usize = 1;
