//! Pool State Types and Structures
//!
//! This module contains the Pool State Record, the single authoritative
//! record of which mint the pool serves, which vault backs it and how much
//! of each asset the pool custodies.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::constants::POOL_STATE_SCHEMA_VERSION;
use crate::error::PoolError;

/// Main pool state stored in the pool authority PDA.
///
/// **All amounts are in base units.** Token amounts use the mint's smallest
/// unit and SOL amounts are in lamports. Swaps exchange one token base unit
/// for one lamport.
///
/// The PDA holding this record is also the pool authority: it is the SPL
/// owner of `vault` and custodies `total_sol_reserve` lamports on top of its
/// own rent-exempt minimum.
#[derive(BorshSerialize, BorshDeserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PoolState {
    /// Token accepted by this pool. Never changes after initialization.
    pub mint: Pubkey,

    /// Associated token account of (pool authority, mint) holding the token reserve.
    pub vault: Pubkey,

    /// Canonical bump of the pool authority PDA
    pub pool_authority_bump_seed: u8,

    /// Token base units deposited into the vault (provisioning + swap inflows)
    pub total_token_reserve: u64,

    /// Lamports custodied for swap payouts, excluding the rent-exempt minimum
    pub total_sol_reserve: u64,

    /// Number of settled swaps
    pub total_swaps: u64,

    /// Layout version of this record, `POOL_STATE_SCHEMA_VERSION` when written
    pub schema_version: u8,
}

impl PoolState {
    pub fn get_packed_len() -> usize {
        32 + // mint
        32 + // vault
        1 +  // pool_authority_bump_seed
        8 +  // total_token_reserve
        8 +  // total_sol_reserve
        8 +  // total_swaps
        1    // schema_version
    }

    /// Creates the record written by `InitializePool`.
    pub fn new(mint: Pubkey, vault: Pubkey, pool_authority_bump_seed: u8) -> Self {
        Self {
            mint,
            vault,
            pool_authority_bump_seed,
            total_token_reserve: 0,
            total_sol_reserve: 0,
            total_swaps: 0,
            schema_version: POOL_STATE_SCHEMA_VERSION,
        }
    }

    /// Loads the record from an already validated account.
    pub fn load_from_account(account: &AccountInfo) -> Result<Self, ProgramError> {
        let account_data = account.data.borrow();
        if account_data.is_empty() {
            msg!("❌ Pool state account is empty");
            return Err(ProgramError::UninitializedAccount);
        }

        let state = Self::deserialize(&mut &account_data[..]).map_err(|e| {
            msg!("❌ Pool state deserialization failed: {:?}", e);
            ProgramError::InvalidAccountData
        })?;

        if state.schema_version != POOL_STATE_SCHEMA_VERSION {
            msg!("❌ Unsupported pool state schema: v{}, expected v{}",
                 state.schema_version, POOL_STATE_SCHEMA_VERSION);
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(state)
    }

    /// Records a liquidity deposit.
    pub fn record_deposit(&mut self, sol_amount: u64, token_amount: u64) -> Result<(), PoolError> {
        let total_sol_reserve = self
            .total_sol_reserve
            .checked_add(sol_amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let total_token_reserve = self
            .total_token_reserve
            .checked_add(token_amount)
            .ok_or(PoolError::ArithmeticOverflow)?;

        self.total_sol_reserve = total_sol_reserve;
        self.total_token_reserve = total_token_reserve;
        Ok(())
    }

    /// Records a settled token → SOL swap.
    ///
    /// Fails without touching the record if the SOL reserve cannot cover
    /// `sol_out`.
    pub fn record_swap(&mut self, token_in: u64, sol_out: u64) -> Result<(), PoolError> {
        let total_sol_reserve = self
            .total_sol_reserve
            .checked_sub(sol_out)
            .ok_or(PoolError::AppInsufficientBalance {
                required: sol_out,
                available: self.total_sol_reserve,
            })?;
        let total_token_reserve = self
            .total_token_reserve
            .checked_add(token_in)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let total_swaps = self
            .total_swaps
            .checked_add(1)
            .ok_or(PoolError::ArithmeticOverflow)?;

        self.total_sol_reserve = total_sol_reserve;
        self.total_token_reserve = total_token_reserve;
        self.total_swaps = total_swaps;
        Ok(())
    }
}
