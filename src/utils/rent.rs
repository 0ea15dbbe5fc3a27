//! Rent Calculation Utilities
//!
//! The pool authority PDA is both a data account and the custodian of the
//! pool's SOL reserve. These helpers separate the rent-exempt minimum it must
//! keep from the lamports it can pay out.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    sysvar::rent::Rent,
};

use crate::error::PoolError;

/// Lamports held above the rent-exempt minimum.
pub fn lamports_above_rent(account: &AccountInfo, rent: &Rent) -> u64 {
    let minimum_balance = rent.minimum_balance(account.data_len());
    account.lamports().saturating_sub(minimum_balance)
}

/// Ensures the account can release `amount` lamports and stay rent-exempt.
pub fn check_payout_keeps_rent_exempt(
    account: &AccountInfo,
    rent: &Rent,
    amount: u64,
) -> ProgramResult {
    let available = lamports_above_rent(account, rent);
    if available < amount {
        msg!("❌ Payout would break rent exemption of {}", account.key);
        msg!("   Required: {}, Available above rent: {}", amount, available);
        return Err(PoolError::AppInsufficientBalance {
            required: amount,
            available,
        }
        .into());
    }
    Ok(())
}

/// Moves lamports out of a program-owned account.
///
/// The system program cannot debit accounts that carry data, so the
/// program adjusts both balances directly.
pub fn transfer_lamports_from_pda(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
) -> ProgramResult {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ProgramError::InsufficientFunds)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}
