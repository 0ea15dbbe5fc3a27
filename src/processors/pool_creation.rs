//! Pool Creation Processors
//!
//! This module contains the processor that creates the single Pool State
//! Record of a deployment together with its reserve vault.

use crate::constants::*;
use crate::error::PoolError;
use crate::state::PoolState;
use crate::utils::{
    derive_reserve_vault,
    pool_authority_seeds,
    serialization::serialize_to_account,
    validation::*,
    validate_pool_authority,
};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
    system_program,
    sysvar::{rent::Rent, Sysvar},
};
use spl_associated_token_account::instruction as associated_token_instruction;

/// Processes pool initialization.
///
/// Creates the Pool State PDA (which doubles as the pool authority) and the
/// reserve vault, the associated token account of (pool authority, mint).
/// Both reserves start at zero.
///
/// A PDA that already holds lamports but no data is topped up to rent and
/// allocated in place. A vault ATA created ahead of time is reused.
///
/// # Account Order:
/// 0. **Payer** (signer, writable) - Funds rent for the new accounts
/// 1. **Pool State PDA** (writable) - Pool state account to create
/// 2. **Token Mint** (readable) - Token accepted by the pool
/// 3. **Reserve Vault** (writable) - Vault ATA to create or reuse
/// 4. **System Program** (readable)
/// 5. **SPL Token Program** (readable)
/// 6. **Associated Token Account Program** (readable)
/// 7. **Rent Sysvar** (readable)
///
/// # Errors
/// * `PoolAlreadyInitialized` - The Pool State PDA already holds a record
/// * `InvalidPoolAuthority` - Account 1 is not the derived PDA
/// * `VaultAddressMismatch` - Account 3 is not the derived vault
///
/// # Arguments
/// * `program_id` - The program ID for PDA derivation
/// * `accounts` - Array of accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Success or error
pub fn process_initialize_pool(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing InitializePool");

    validate_account_count(accounts, INITIALIZE_POOL_ACCOUNT_COUNT)?;

    let payer = &accounts[0];                          // Index 0: Payer
    let pool_state_pda_account = &accounts[1];         // Index 1: Pool State PDA
    let mint_account = &accounts[2];                   // Index 2: Token Mint
    let vault_account = &accounts[3];                  // Index 3: Reserve Vault
    let system_program_account = &accounts[4];         // Index 4: System Program
    let token_program_account = &accounts[5];          // Index 5: SPL Token Program
    let associated_token_program_account = &accounts[6]; // Index 6: ATA Program
    let rent_sysvar_account = &accounts[7];            // Index 7: Rent Sysvar

    validate_signer(payer, "Payer")?;
    validate_writable(pool_state_pda_account, "Pool state")?;
    validate_writable(vault_account, "Reserve vault")?;

    let pool_authority_bump_seed = validate_pool_authority(program_id, pool_state_pda_account.key)?;

    if !pool_state_pda_account.data_is_empty() || pool_state_pda_account.owner == program_id {
        msg!("❌ Pool state already initialized: {}", pool_state_pda_account.key);
        return Err(PoolError::PoolAlreadyInitialized.into());
    }

    validate_program_account(system_program_account, &system_program::id(), "System Program")?;
    validate_program_account(token_program_account, &spl_token::id(), "SPL Token Program")?;
    validate_program_account(
        associated_token_program_account,
        &spl_associated_token_account::id(),
        "Associated Token Account Program",
    )?;
    validate_mint_account(mint_account)?;

    let expected_vault = derive_reserve_vault(program_id, mint_account.key);
    if *vault_account.key != expected_vault {
        msg!("❌ Invalid reserve vault address");
        msg!("   Expected: {}", expected_vault);
        msg!("   Provided: {}", vault_account.key);
        return Err(PoolError::VaultAddressMismatch {
            expected: expected_vault,
            provided: *vault_account.key,
        }
        .into());
    }

    msg!("✅ Account validations passed");

    let rent = &Rent::from_account_info(rent_sysvar_account)?;
    let pool_state_account_size = PoolState::get_packed_len();
    let rent_for_pool_state = rent.minimum_balance(pool_state_account_size);
    let bump_bytes = [pool_authority_bump_seed];
    let pool_authority_signer_seeds = pool_authority_seeds(&bump_bytes);

    let existing_lamports = pool_state_pda_account.lamports();
    if existing_lamports == 0 {
        msg!("Creating Pool State PDA account");
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                pool_state_pda_account.key,
                rent_for_pool_state,
                pool_state_account_size as u64,
                program_id,
            ),
            &[
                payer.clone(),
                pool_state_pda_account.clone(),
                system_program_account.clone(),
            ],
            &[&pool_authority_signer_seeds[..]],
        )?;
    } else {
        // Lamports sent to the PDA before init stay in the account but are
        // not counted in the SOL reserve.
        msg!("Pool State PDA already holds {} lamports, allocating in place", existing_lamports);
        let rent_shortfall = rent_for_pool_state.saturating_sub(existing_lamports);
        if rent_shortfall > 0 {
            invoke(
                &system_instruction::transfer(payer.key, pool_state_pda_account.key, rent_shortfall),
                &[
                    payer.clone(),
                    pool_state_pda_account.clone(),
                    system_program_account.clone(),
                ],
            )?;
        }
        invoke_signed(
            &system_instruction::allocate(pool_state_pda_account.key, pool_state_account_size as u64),
            &[pool_state_pda_account.clone(), system_program_account.clone()],
            &[&pool_authority_signer_seeds[..]],
        )?;
        invoke_signed(
            &system_instruction::assign(pool_state_pda_account.key, program_id),
            &[pool_state_pda_account.clone(), system_program_account.clone()],
            &[&pool_authority_signer_seeds[..]],
        )?;
    }
    msg!("✅ Pool State PDA account created");

    // The vault ATA may already exist; it is reused once validated.
    msg!("Creating reserve vault {}", vault_account.key);
    invoke(
        &associated_token_instruction::create_associated_token_account_idempotent(
            payer.key,
            pool_state_pda_account.key,
            mint_account.key,
            token_program_account.key,
        ),
        &[
            payer.clone(),
            vault_account.clone(),
            pool_state_pda_account.clone(),
            mint_account.clone(),
            system_program_account.clone(),
            token_program_account.clone(),
            associated_token_program_account.clone(),
        ],
    )?;
    validate_token_account(vault_account, mint_account.key, pool_state_pda_account.key, "Reserve vault")?;
    msg!("✅ Reserve vault ready");

    let pool_state_data = PoolState::new(*mint_account.key, expected_vault, pool_authority_bump_seed);
    if pool_state_pda_account.data_len() < PoolState::get_packed_len() {
        msg!("❌ Pool state account allocated with wrong size");
        return Err(ProgramError::AccountDataTooSmall);
    }
    serialize_to_account(&pool_state_data, pool_state_pda_account)?;

    msg!("✅ Pool initialized");
    msg!("   Mint: {}", pool_state_data.mint);
    msg!("   Vault: {}", pool_state_data.vault);
    msg!("   Authority bump: {}", pool_state_data.pool_authority_bump_seed);

    Ok(())
}
