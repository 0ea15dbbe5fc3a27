//! # Token/SOL Reserve Vault
//!
//! A custodial vault program that accepts a single SPL token and pays out
//! SOL in exchange at a fixed 1:1 rate (one token base unit per lamport).
//!
//! ## Instructions
//! - `InitializePool` - creates the Pool State PDA and its reserve vault
//! - `AddLiquidity` - deposits SOL and tokens into pool custody
//! - `SwapTokenForSol` - exchanges tokens for SOL after two balance checks
//! - `GetPoolInfo` / `GetVersion` - read-only views
//!
//! ## Error Codes
//! Swaps fail with `6001` when the sender cannot cover the amount and with
//! `6002` when the pool cannot. See [`error::PoolError`] for the full table.

use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

pub mod client_sdk;
pub mod constants;
pub mod error;
pub mod processors;
pub mod state;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::{PoolError, PoolErrorCode};
pub use state::PoolState;
pub use types::PoolInstruction;

use processors::*;

solana_program::declare_id!("CNPEe47uccxYFBZ86rvxNsEioZrga5hf3Z9sXdSFebRJ");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

/// Program entry point: decodes the instruction and routes it to its processor.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = PoolInstruction::try_from_slice(instruction_data).map_err(|e| {
        msg!("❌ Failed to decode instruction: {:?}", e);
        ProgramError::InvalidInstructionData
    })?;

    match instruction {
        PoolInstruction::InitializePool => process_initialize_pool(program_id, accounts),
        PoolInstruction::AddLiquidity { sol_amount, token_amount } => {
            process_add_liquidity(program_id, sol_amount, token_amount, accounts)
        }
        PoolInstruction::SwapTokenForSol { amount } => {
            process_swap_token_for_sol(program_id, amount, accounts)
        }
        PoolInstruction::GetPoolInfo => get_pool_info(program_id, accounts),
        PoolInstruction::GetVersion => process_get_version(program_id),
    }
}
