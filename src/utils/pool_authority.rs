use solana_program::{
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};
use spl_associated_token_account::get_associated_token_address;

use crate::{
    constants::POOL_AUTHORITY_SEED,
    error::PoolError,
};

/// Derive the pool authority PDA for a given program ID
///
/// The pool authority has no private key. Only this program can sign for it,
/// which makes it the sole party able to move funds out of the reserve vault
/// or the pool's SOL reserve.
///
/// # Arguments
/// * `program_id` - The program ID
///
/// # Returns
/// * `(Pubkey, u8)` - The pool authority address and its canonical bump
pub fn derive_pool_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED], program_id)
}

/// Derive the reserve vault address for a mint
///
/// The vault is the associated token account of the pool authority for `mint`,
/// so any caller can recompute it before trusting a supplied vault handle.
pub fn derive_reserve_vault(program_id: &Pubkey, mint: &Pubkey) -> Pubkey {
    let (pool_authority, _) = derive_pool_authority(program_id);
    get_associated_token_address(&pool_authority, mint)
}

/// Signing seeds for the pool authority, built from the stored bump
pub fn pool_authority_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [POOL_AUTHORITY_SEED, bump]
}

/// Validate that an account key is the pool authority PDA
///
/// # Returns
/// * `Result<u8, ProgramError>` - The canonical bump if the key matches
pub fn validate_pool_authority(
    program_id: &Pubkey,
    provided: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = derive_pool_authority(program_id);
    if *provided != expected {
        msg!("❌ Invalid pool authority PDA");
        msg!("   Expected: {}", expected);
        msg!("   Provided: {}", provided);
        return Err(PoolError::InvalidPoolAuthority {
            expected,
            provided: *provided,
        }
        .into());
    }
    Ok(bump)
}
