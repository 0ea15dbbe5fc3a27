//! Swap Processors
//!
//! This module contains the token → SOL swap. The decision is made by the
//! pure `validate_swap` before any account is touched; settlement then moves
//! tokens into the reserve vault and pays lamports out of the pool authority
//! PDA at the fixed 1:1 rate.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
    sysvar::{rent::Rent, Sysvar},
};
use spl_token::instruction as token_instruction;

use crate::{
    constants::*,
    error::PoolError,
    utils::*,
};

/// Outcome of a swap that passed both balance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapSettlement {
    /// Token base units moved from the sender into the reserve vault
    pub token_in: u64,
    /// Lamports moved from the pool authority PDA to the sender
    pub sol_out: u64,
}

/// Decides whether a token → SOL swap can settle.
///
/// The sender check always runs first: when both the sender and the pool
/// are short, `SenderInsufficientBalance` is reported.
///
/// # Arguments
/// * `sender_token_balance` - Sender's token account balance
/// * `pool_sol_reserve` - Lamports the pool can pay out
/// * `amount` - Requested lamports (equal to the token units consumed)
pub fn validate_swap(
    sender_token_balance: u64,
    pool_sol_reserve: u64,
    amount: u64,
) -> Result<SwapSettlement, PoolError> {
    if amount == 0 {
        return Err(PoolError::ZeroSwapAmount);
    }

    let token_in = amount
        .checked_mul(TOKEN_PER_SOL_RATE)
        .ok_or(PoolError::ArithmeticOverflow)?;

    if sender_token_balance < token_in {
        return Err(PoolError::SenderInsufficientBalance {
            required: token_in,
            available: sender_token_balance,
        });
    }

    if pool_sol_reserve < amount {
        return Err(PoolError::AppInsufficientBalance {
            required: amount,
            available: pool_sol_reserve,
        });
    }

    Ok(SwapSettlement {
        token_in,
        sol_out: amount,
    })
}

/// Processes a token → SOL swap at the fixed 1:1 rate.
///
/// # How It Works
/// 1. **Account Validation**: pool state PDA, vault, sender token account, token program
/// 2. **Sender Check**: sender's token balance must cover `amount` (error 6001)
/// 3. **Pool Check**: pool SOL reserve must cover `amount` (error 6002)
/// 4. **Settlement**: tokens sender → vault, lamports pool → sender
/// 5. **State Update**: reserves and swap counter updated and saved
///
/// All checks run before the first transfer. Each invocation ends in exactly
/// one of: sender check failed, pool check failed, settled.
///
/// # Arguments
/// * `program_id` - The program ID for PDA validation
/// * `amount` - Lamports requested; the same number of token units is consumed
/// * `accounts` - Array of accounts in required order (5 accounts total)
///
/// # Account Layout
/// 0. **Sender** (signer, writable) - Owner of the input tokens, receives SOL
/// 1. **Pool State PDA** (writable) - Pool authority and SOL custodian
/// 2. **Sender Token Account** (writable) - Source of the input tokens
/// 3. **Reserve Vault** (writable) - Destination of the input tokens
/// 4. **SPL Token Program** (readable)
///
/// # Returns
/// * `ProgramResult` - Success or error with detailed error information
pub fn process_swap_token_for_sol(
    program_id: &Pubkey,
    amount: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("🔄 Processing SwapTokenForSol: {} lamports requested", amount);

    validate_account_count(accounts, SWAP_ACCOUNT_COUNT)?;

    let sender = &accounts[0];                     // Index 0: Sender
    let pool_state_pda = &accounts[1];             // Index 1: Pool State PDA
    let sender_token_account = &accounts[2];       // Index 2: Sender Token Account
    let vault_account = &accounts[3];              // Index 3: Reserve Vault
    let token_program_account = &accounts[4];      // Index 4: SPL Token Program

    validate_signer(sender, "Swap sender")?;
    validate_writable(sender, "Swap sender")?;
    validate_writable(pool_state_pda, "Pool state")?;
    validate_writable(vault_account, "Reserve vault")?;

    let mut pool_state_data = validate_and_deserialize_pool_state_secure(pool_state_pda, program_id)?;
    validate_vault_address(vault_account, &pool_state_data)?;
    validate_program_account(token_program_account, &spl_token::id(), "SPL Token Program")?;

    let sender_token_data = validate_token_account(
        sender_token_account,
        &pool_state_data.mint,
        sender.key,
        "Sender token account",
    )?;

    msg!("✅ Account validations passed");
    msg!("📊 Sender tokens: {}, Pool SOL reserve: {}",
         sender_token_data.amount, pool_state_data.total_sol_reserve);

    let settlement = validate_swap(
        sender_token_data.amount,
        pool_state_data.total_sol_reserve,
        amount,
    )
    .map_err(|e| {
        msg!("❌ Swap rejected: {}", e);
        e
    })?;

    let rent = Rent::get()?;
    check_payout_keeps_rent_exempt(pool_state_pda, &rent, settlement.sol_out)?;
    pool_state_data.record_swap(settlement.token_in, settlement.sol_out)?;

    msg!("✅ Balance checks passed - settling swap");

    invoke(
        &token_instruction::transfer(
            token_program_account.key,
            sender_token_account.key,
            vault_account.key,
            sender.key,
            &[],
            settlement.token_in,
        )?,
        &[
            sender_token_account.clone(),
            vault_account.clone(),
            sender.clone(),
            token_program_account.clone(),
        ],
    )?;

    transfer_lamports_from_pda(pool_state_pda, sender, settlement.sol_out)?;

    serialize_to_account(&pool_state_data, pool_state_pda)?;

    msg!("✅ Swap completed successfully - {} tokens → {} lamports",
         settlement.token_in, settlement.sol_out);
    msg!("📊 Pool reserves - SOL: {}, Token: {}",
         pool_state_data.total_sol_reserve, pool_state_data.total_token_reserve);

    Ok(())
}
