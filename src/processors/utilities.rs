//! Utility Processors
//!
//! This module contains the read-only view instructions. Neither touches
//! pool custody; both can be simulated without signatures.

use crate::constants::*;
use crate::utils::validation::{validate_account_count, validate_and_deserialize_pool_state_secure};
use borsh::BorshSerialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    program_error::ProgramError,
    pubkey::Pubkey,
};

/// **VIEW INSTRUCTION**: Returns the Pool State Record.
///
/// The record is logged field by field and returned Borsh-encoded through
/// `set_return_data`, so clients can read the configured mint without
/// parsing logs. Repeated calls return identical bytes until the next
/// mutating instruction.
///
/// # Arguments
/// * `program_id` - The program ID for PDA validation
/// * `accounts` - Must contain the pool state PDA as first account
pub fn get_pool_info(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    validate_account_count(accounts, GET_POOL_INFO_ACCOUNT_COUNT)?;

    let pool_state_account = &accounts[0];
    let pool_state = validate_and_deserialize_pool_state_secure(pool_state_account, program_id)?;

    msg!("=== POOL STATE INFORMATION ===");
    msg!("Pool State PDA: {}", pool_state_account.key);
    msg!("Token Mint: {}", pool_state.mint);
    msg!("Reserve Vault: {}", pool_state.vault);
    msg!("Pool Authority Bump Seed: {}", pool_state.pool_authority_bump_seed);
    msg!("Total Token Reserve: {}", pool_state.total_token_reserve);
    msg!("Total SOL Reserve: {}", pool_state.total_sol_reserve);
    msg!("Total Swaps: {}", pool_state.total_swaps);
    msg!("Schema Version: v{}", pool_state.schema_version);
    msg!("===============================");

    let encoded = pool_state
        .try_to_vec()
        .map_err(|_| ProgramError::InvalidAccountData)?;
    set_return_data(&encoded);

    Ok(())
}

/// **VIEW INSTRUCTION**: Returns smart contract version information.
pub fn process_get_version(program_id: &Pubkey) -> ProgramResult {
    msg!("=== SMART CONTRACT VERSION ===");
    msg!("Contract Name: {}", env!("CARGO_PKG_NAME"));
    msg!("Contract Version: {}", env!("CARGO_PKG_VERSION"));
    msg!("Contract Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    msg!("Schema Version: v{}", POOL_STATE_SCHEMA_VERSION);
    msg!("License: {}", env!("CARGO_PKG_LICENSE"));
    msg!("Program ID: {}", program_id);
    msg!("===============================");

    Ok(())
}
