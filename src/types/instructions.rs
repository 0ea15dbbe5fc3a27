//! Pool Instructions
//!
//! This module contains all the instruction definitions for the Token/SOL Reserve Vault Program.
//! Instructions define the operations that can be performed on the pool.

use borsh::{BorshDeserialize, BorshSerialize};

/// All supported instructions for the Token/SOL Reserve Vault Program.
///
/// The Borsh discriminator of each variant is its position in this enum
/// and is part of the program's public interface.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum PoolInstruction {
    /// Creates the Pool State PDA and the reserve vault for a token mint.
    ///
    /// # Account Layout
    /// 0. **Payer** (signer, writable) - Funds the new accounts
    /// 1. **Pool State PDA** (writable) - Derived from `POOL_AUTHORITY_SEED`
    /// 2. **Token Mint** (readable) - Token accepted by the pool
    /// 3. **Reserve Vault** (writable) - ATA of (pool authority, mint)
    /// 4. **System Program** (readable)
    /// 5. **SPL Token Program** (readable)
    /// 6. **Associated Token Account Program** (readable)
    /// 7. **Rent Sysvar** (readable)
    InitializePool,

    /// Deposits SOL and tokens into pool custody.
    ///
    /// No ratio is enforced between the two amounts and either may be zero.
    ///
    /// # Account Layout
    /// 0. **Provider** (signer, writable) - Pays both legs
    /// 1. **Pool State PDA** (writable)
    /// 2. **Provider Token Account** (writable)
    /// 3. **Reserve Vault** (writable)
    /// 4. **System Program** (readable)
    /// 5. **SPL Token Program** (readable)
    AddLiquidity {
        sol_amount: u64,
        token_amount: u64,
    },

    /// Swaps `amount` token base units for `amount` lamports.
    ///
    /// # Account Layout
    /// 0. **Sender** (signer, writable) - Receives the lamports
    /// 1. **Pool State PDA** (writable)
    /// 2. **Sender Token Account** (writable)
    /// 3. **Reserve Vault** (writable)
    /// 4. **SPL Token Program** (readable)
    SwapTokenForSol {
        amount: u64,
    },

    /// **VIEW INSTRUCTION**: Logs the pool state and returns it as
    /// Borsh-encoded return data.
    ///
    /// # Account Layout
    /// 0. **Pool State PDA** (readable)
    GetPoolInfo,

    /// **VIEW INSTRUCTION**: Logs the program name and version.
    /// No accounts required.
    GetVersion,
}
