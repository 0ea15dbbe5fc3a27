//! Input Validation Utilities
//!
//! This module contains utilities for validating account states and program parameters.
//! Every check logs why it failed before returning an error.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::state::{Account as TokenAccount, Mint};

use crate::{
    error::PoolError,
    state::PoolState,
    utils::pool_authority::validate_pool_authority,
};

/// Validates that an account is a signer.
///
/// # Arguments
/// * `account` - The account to validate
/// * `context` - Context string for error messages
///
/// # Returns
/// * `ProgramResult` - Success if account is signer, error otherwise
pub fn validate_signer(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_signer {
        msg!("{} must be a signer", context);
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// Validates that an account is writable.
///
/// # Arguments
/// * `account` - The account to validate
/// * `context` - Context string for error messages
///
/// # Returns
/// * `ProgramResult` - Success if account is writable, error otherwise
pub fn validate_writable(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_writable {
        msg!("{} must be writable", context);
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

/// Validates that the instruction received enough accounts.
pub fn validate_account_count(accounts: &[AccountInfo], required: usize) -> ProgramResult {
    if accounts.len() < required {
        msg!("❌ Expected {} accounts, got {}", required, accounts.len());
        return Err(ProgramError::NotEnoughAccountKeys);
    }
    Ok(())
}

/// Validates a program account against its expected id.
pub fn validate_program_account(
    account: &AccountInfo,
    expected: &Pubkey,
    context: &str,
) -> ProgramResult {
    if account.key != expected {
        msg!("❌ Invalid {} account", context);
        msg!("   Expected: {}", expected);
        msg!("   Provided: {}", account.key);
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// **SECURITY CRITICAL**: Validates and deserializes PoolState with PDA verification.
///
/// This function prevents malicious users from passing fake PoolState accounts by:
/// 1. Checking the account is owned by this program
/// 2. Checking the key equals the derived pool authority PDA
/// 3. Checking the stored bump is the canonical bump
///
/// # Arguments
/// * `pool_state_account` - The pool state account to validate and deserialize
/// * `program_id` - The program ID for PDA derivation
///
/// # Returns
/// * `Result<PoolState, ProgramError>` - The validated and deserialized PoolState or error
pub fn validate_and_deserialize_pool_state_secure(
    pool_state_account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<PoolState, ProgramError> {
    let bump = validate_pool_authority(program_id, pool_state_account.key)?;

    if pool_state_account.owner != program_id {
        msg!("❌ SECURITY VIOLATION: Pool state account not owned by program");
        msg!("   Expected owner: {}", program_id);
        msg!("   Actual owner: {}", pool_state_account.owner);
        return Err(ProgramError::IncorrectProgramId);
    }

    let pool_state_data = PoolState::load_from_account(pool_state_account)?;

    if pool_state_data.pool_authority_bump_seed != bump {
        msg!("🚨 SECURITY: Stored bump {} does not match canonical bump {}",
             pool_state_data.pool_authority_bump_seed, bump);
        return Err(ProgramError::InvalidAccountData);
    }

    Ok(pool_state_data)
}

/// Validates that the supplied vault is the one recorded in the pool state.
pub fn validate_vault_address(vault_account: &AccountInfo, pool_state: &PoolState) -> ProgramResult {
    if *vault_account.key != pool_state.vault {
        msg!("❌ Vault address does not match pool state");
        msg!("   Expected: {}", pool_state.vault);
        msg!("   Provided: {}", vault_account.key);
        return Err(PoolError::VaultAddressMismatch {
            expected: pool_state.vault,
            provided: *vault_account.key,
        }
        .into());
    }
    Ok(())
}

/// Unpacks an SPL token account and checks its mint and owner.
///
/// # Arguments
/// * `token_account` - The token account to unpack
/// * `expected_mint` - Mint the account must hold
/// * `expected_owner` - SPL owner the account must have
/// * `account_name` - Context string for error messages
///
/// # Returns
/// * `Result<TokenAccount, ProgramError>` - The unpacked token account
pub fn validate_token_account(
    token_account: &AccountInfo,
    expected_mint: &Pubkey,
    expected_owner: &Pubkey,
    account_name: &str,
) -> Result<TokenAccount, ProgramError> {
    if token_account.owner != &spl_token::id() {
        msg!("❌ {}: not owned by SPL Token program", account_name);
        return Err(PoolError::InvalidTokenAccount {
            account: *token_account.key,
            reason: "not owned by SPL Token program".to_string(),
        }
        .into());
    }

    let data = TokenAccount::unpack(&token_account.data.borrow()).map_err(|_| {
        msg!("❌ {}: failed to unpack token account", account_name);
        ProgramError::from(PoolError::InvalidTokenAccount {
            account: *token_account.key,
            reason: "failed to unpack token account".to_string(),
        })
    })?;

    if data.mint != *expected_mint {
        msg!("❌ {}: mint mismatch", account_name);
        msg!("   Expected mint: {}", expected_mint);
        msg!("   Actual mint: {}", data.mint);
        return Err(PoolError::MintMismatch {
            expected: *expected_mint,
            provided: data.mint,
        }
        .into());
    }

    if data.owner != *expected_owner {
        msg!("❌ {}: owner mismatch", account_name);
        msg!("   Expected owner: {}", expected_owner);
        msg!("   Actual owner: {}", data.owner);
        return Err(PoolError::InvalidTokenAccount {
            account: *token_account.key,
            reason: "unexpected token account owner".to_string(),
        }
        .into());
    }

    Ok(data)
}

/// Validates that an account is an initialized SPL mint.
pub fn validate_mint_account(mint_account: &AccountInfo) -> ProgramResult {
    if mint_account.owner != &spl_token::id() {
        msg!("❌ Mint account not owned by SPL Token program");
        return Err(ProgramError::IncorrectProgramId);
    }

    Mint::unpack(&mint_account.data.borrow()).map_err(|_| {
        msg!("❌ Failed to unpack mint data");
        ProgramError::InvalidAccountData
    })?;

    Ok(())
}
