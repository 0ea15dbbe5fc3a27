//! Liquidity Management Processors
//!
//! This module contains the liquidity provisioning processor. A provider
//! deposits SOL into the pool authority PDA and tokens into the reserve
//! vault in a single atomic instruction.
//!
//! ## Bookkeeping
//! The pool state tracks `total_sol_reserve` and `total_token_reserve`
//! alongside the real balances. Both counters are updated only after the
//! transfers succeed. The runtime discards every change if any step of the
//! instruction fails, so no partially funded state is ever observable.

use crate::{constants::*, error::PoolError, utils::*};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
    system_instruction,
    system_program,
};
use spl_token::instruction as token_instruction;

/// Deposits SOL and tokens into pool custody.
///
/// # How It Works
/// 1. **Account Validation**: pool state PDA, vault, provider token account, programs
/// 2. **Balance Checks**: provider must cover both legs before anything moves
/// 3. **SOL Leg**: System Program transfer provider → pool authority PDA
/// 4. **Token Leg**: SPL Token transfer provider token account → reserve vault
/// 5. **State Update**: reserves increased by exactly the deposited amounts
///
/// No ratio is enforced between `sol_amount` and `token_amount`; either may be zero.
///
/// # Account Layout
/// 0. **Provider** (signer, writable)
/// 1. **Pool State PDA** (writable)
/// 2. **Provider Token Account** (writable)
/// 3. **Reserve Vault** (writable)
/// 4. **System Program** (readable)
/// 5. **SPL Token Program** (readable)
///
/// # Errors
/// * `InsufficientProviderBalance` - provider lacks SOL or tokens for a leg
/// * `VaultAddressMismatch` - vault is not the pool's recorded vault
/// * `MintMismatch` - provider token account holds another mint
pub fn process_add_liquidity(
    program_id: &Pubkey,
    sol_amount: u64,
    token_amount: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing AddLiquidity: {} lamports, {} tokens", sol_amount, token_amount);

    validate_account_count(accounts, ADD_LIQUIDITY_ACCOUNT_COUNT)?;

    let provider = &accounts[0];                   // Index 0: Provider
    let pool_state_pda = &accounts[1];             // Index 1: Pool State PDA
    let provider_token_account = &accounts[2];     // Index 2: Provider Token Account
    let vault_account = &accounts[3];              // Index 3: Reserve Vault
    let system_program_account = &accounts[4];     // Index 4: System Program
    let token_program_account = &accounts[5];      // Index 5: SPL Token Program

    validate_signer(provider, "Liquidity provider")?;
    validate_writable(pool_state_pda, "Pool state")?;
    validate_writable(vault_account, "Reserve vault")?;

    let mut pool_state_data = validate_and_deserialize_pool_state_secure(pool_state_pda, program_id)?;
    validate_vault_address(vault_account, &pool_state_data)?;
    validate_program_account(system_program_account, &system_program::id(), "System Program")?;
    validate_program_account(token_program_account, &spl_token::id(), "SPL Token Program")?;

    let provider_token_data = validate_token_account(
        provider_token_account,
        &pool_state_data.mint,
        provider.key,
        "Provider token account",
    )?;

    msg!("🔍 Checking provider balances");
    if provider_token_data.amount < token_amount {
        msg!("❌ Provider token balance too low: required {}, available {}",
             token_amount, provider_token_data.amount);
        return Err(PoolError::InsufficientProviderBalance {
            required: token_amount,
            available: provider_token_data.amount,
            asset: "tokens".to_string(),
        }
        .into());
    }
    if provider.lamports() < sol_amount {
        msg!("❌ Provider SOL balance too low: required {}, available {}",
             sol_amount, provider.lamports());
        return Err(PoolError::InsufficientProviderBalance {
            required: sol_amount,
            available: provider.lamports(),
            asset: "lamports".to_string(),
        }
        .into());
    }

    msg!("✅ Provider balance checks passed");

    if sol_amount > 0 {
        invoke(
            &system_instruction::transfer(provider.key, pool_state_pda.key, sol_amount),
            &[
                provider.clone(),
                pool_state_pda.clone(),
                system_program_account.clone(),
            ],
        )?;
        msg!("✅ Transferred {} lamports to pool", sol_amount);
    }

    if token_amount > 0 {
        invoke(
            &token_instruction::transfer(
                token_program_account.key,
                provider_token_account.key,
                vault_account.key,
                provider.key,
                &[],
                token_amount,
            )?,
            &[
                provider_token_account.clone(),
                vault_account.clone(),
                provider.clone(),
                token_program_account.clone(),
            ],
        )?;
        msg!("✅ Transferred {} tokens to vault", token_amount);
    }

    pool_state_data.record_deposit(sol_amount, token_amount)?;
    serialize_to_account(&pool_state_data, pool_state_pda)?;

    msg!("📊 Pool reserves - SOL: {}, Token: {}",
         pool_state_data.total_sol_reserve, pool_state_data.total_token_reserve);

    Ok(())
}
