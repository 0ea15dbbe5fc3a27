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

//! # Token/SOL Reserve Vault - Client SDK
//!
//! This module provides a high-level client SDK for interacting with the vault program.
//! It derives every program address and builds each instruction with the
//! account ordering the processors expect.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use remi_vault::client_sdk::PoolClient;
//! use solana_program::pubkey::Pubkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PoolClient::new(remi_vault::id());
//! let mint = Pubkey::new_unique();
//! let sender = Pubkey::new_unique();
//! let sender_token_account = Pubkey::new_unique();
//!
//! let addresses = client.derive_pool_addresses(&mint);
//! let swap = client.swap_token_for_sol(&sender, &sender_token_account, &mint, 10_000_000_000)?;
//! assert_eq!(swap.accounts[1].pubkey, addresses.pool_state);
//! # Ok(())
//! # }
//! ```

use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar,
};

use crate::{
    error::PoolErrorCode,
    types::PoolInstruction,
    utils::pool_authority::{derive_pool_authority, derive_reserve_vault},
};

/// Errors that can occur when using the pool client
#[derive(Debug)]
pub enum PoolClientError {
    /// Swap amount must be greater than zero
    ZeroAmount,
    /// Error during instruction serialization
    SerializationError,
}

impl From<std::io::Error> for PoolClientError {
    fn from(_error: std::io::Error) -> Self {
        Self::SerializationError
    }
}

impl std::fmt::Display for PoolClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolClientError::ZeroAmount => write!(f, "Invalid amount: must be greater than 0"),
            PoolClientError::SerializationError => write!(f, "Failed to serialize instruction data"),
        }
    }
}

impl std::error::Error for PoolClientError {}

/// Derived addresses for a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAddresses {
    /// Pool state account address, also the pool authority
    pub pool_state: Pubkey,
    /// Pool authority bump seed for PDA derivation
    pub pool_authority_bump: u8,
    /// Token accepted by the pool
    pub mint: Pubkey,
    /// Reserve vault: associated token account of (pool state, mint)
    pub vault: Pubkey,
}

/// High-level client for the vault program
///
/// Builds instructions only. Signing and submission are left to the caller.
pub struct PoolClient {
    /// The program ID of the deployed vault program
    program_id: Pubkey,
}

impl PoolClient {
    /// Creates a new pool client.
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Gets the program ID of this client.
    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Derives the pool state PDA and reserve vault for `mint`.
    pub fn derive_pool_addresses(&self, mint: &Pubkey) -> PoolAddresses {
        let (pool_state, pool_authority_bump) = derive_pool_authority(&self.program_id);
        let vault = derive_reserve_vault(&self.program_id, mint);

        PoolAddresses {
            pool_state,
            pool_authority_bump,
            mint: *mint,
            vault,
        }
    }

    /// Creates a pool initialization instruction.
    ///
    /// # Arguments
    /// * `payer` - Account that pays rent for the pool state and vault
    /// * `mint` - Token the pool will accept
    pub fn initialize_pool(
        &self,
        payer: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Instruction, PoolClientError> {
        let addresses = self.derive_pool_addresses(mint);

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*payer, true),                            // Index 0: Payer
                AccountMeta::new(addresses.pool_state, false),             // Index 1: Pool State PDA
                AccountMeta::new_readonly(*mint, false),                   // Index 2: Token Mint
                AccountMeta::new(addresses.vault, false),                  // Index 3: Reserve Vault
                AccountMeta::new_readonly(system_program::id(), false),    // Index 4: System Program
                AccountMeta::new_readonly(spl_token::id(), false),         // Index 5: SPL Token Program
                AccountMeta::new_readonly(spl_associated_token_account::id(), false), // Index 6: ATA Program
                AccountMeta::new_readonly(sysvar::rent::id(), false),      // Index 7: Rent Sysvar
            ],
            data: PoolInstruction::InitializePool.try_to_vec()?,
        })
    }

    /// Creates a liquidity deposit instruction.
    ///
    /// # Arguments
    /// * `provider` - Signer funding both legs
    /// * `provider_token_account` - Provider's token account for `mint`
    /// * `mint` - Token accepted by the pool
    /// * `sol_amount` - Lamports to deposit
    /// * `token_amount` - Token base units to deposit
    pub fn add_liquidity(
        &self,
        provider: &Pubkey,
        provider_token_account: &Pubkey,
        mint: &Pubkey,
        sol_amount: u64,
        token_amount: u64,
    ) -> Result<Instruction, PoolClientError> {
        let addresses = self.derive_pool_addresses(mint);

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*provider, true),
                AccountMeta::new(addresses.pool_state, false),
                AccountMeta::new(*provider_token_account, false),
                AccountMeta::new(addresses.vault, false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data: PoolInstruction::AddLiquidity { sol_amount, token_amount }.try_to_vec()?,
        })
    }

    /// Creates a token → SOL swap instruction.
    ///
    /// Zero amounts are rejected client-side; the program rejects them too.
    pub fn swap_token_for_sol(
        &self,
        sender: &Pubkey,
        sender_token_account: &Pubkey,
        mint: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, PoolClientError> {
        if amount == 0 {
            return Err(PoolClientError::ZeroAmount);
        }
        let addresses = self.derive_pool_addresses(mint);

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*sender, true),
                AccountMeta::new(addresses.pool_state, false),
                AccountMeta::new(*sender_token_account, false),
                AccountMeta::new(addresses.vault, false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data: PoolInstruction::SwapTokenForSol { amount }.try_to_vec()?,
        })
    }

    /// Creates a `GetPoolInfo` view instruction.
    pub fn get_pool_info(&self) -> Result<Instruction, PoolClientError> {
        let (pool_state, _) = derive_pool_authority(&self.program_id);

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![AccountMeta::new_readonly(pool_state, false)],
            data: PoolInstruction::GetPoolInfo.try_to_vec()?,
        })
    }

    /// Creates a `GetVersion` view instruction.
    pub fn get_version(&self) -> Result<Instruction, PoolClientError> {
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![],
            data: PoolInstruction::GetVersion.try_to_vec()?,
        })
    }
}

/// Maps a raw `ProgramError::Custom` code back to a program error code.
///
/// Returns `None` for codes not raised by this program.
pub fn decode_error(code: u32) -> Option<PoolErrorCode> {
    num_traits::FromPrimitive::from_u32(code)
}
