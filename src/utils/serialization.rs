//! Serialization Utilities
//!
//! Buffer serialization for program-owned account data.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
};
use borsh::BorshSerialize;

/// Safe buffer serialization utility that ensures data integrity.
///
/// Serializes to a temporary buffer first, verifies it fits, then copies it
/// into the account in one step. A failed serialization never leaves the
/// account half-written.
///
/// # Arguments
/// * `data` - The data to serialize (must implement BorshSerialize)
/// * `account` - The account to write the data to
///
/// # Returns
/// * `ProgramResult` - Success or error code
pub fn serialize_to_account<T: BorshSerialize>(data: &T, account: &AccountInfo) -> ProgramResult {
    let mut serialized_data = Vec::new();
    data.serialize(&mut serialized_data).map_err(|e| {
        msg!("❌ Serialization to buffer failed: {:?}", e);
        ProgramError::InvalidAccountData
    })?;

    let account_data_len = account.data_len();
    if serialized_data.len() > account_data_len {
        msg!("❌ Serialized data too large for account. Need: {}, Have: {}",
             serialized_data.len(), account_data_len);
        return Err(ProgramError::AccountDataTooSmall);
    }

    let mut account_data = account.try_borrow_mut_data()?;
    account_data[..serialized_data.len()].copy_from_slice(&serialized_data);
    Ok(())
}
