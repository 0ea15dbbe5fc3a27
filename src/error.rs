use num_derive::FromPrimitive;
use solana_program::{
    program_error::ProgramError,
    pubkey::Pubkey,
};
use thiserror::Error;

/// Stable numeric codes surfaced to clients as `ProgramError::Custom`.
///
/// Clients can map a raw custom code back to its variant with
/// `num_traits::FromPrimitive::from_u32`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum PoolErrorCode {
    InvalidPoolAuthority = 6000,
    SenderInsufficientBalance = 6001,
    AppInsufficientBalance = 6002,
    VaultAddressMismatch = 6003,
    InsufficientProviderBalance = 6004,
    PoolAlreadyInitialized = 6005,
    MintMismatch = 6006,
    InvalidTokenAccount = 6007,
    ArithmeticOverflow = 6008,
    ZeroSwapAmount = 6009,
}

/// Error types for the Token/SOL Reserve Vault Program.
///
/// Balance errors (`SenderInsufficientBalance`, `AppInsufficientBalance`,
/// `InsufficientProviderBalance`) are always raised before any transfer, so
/// the caller may retry with a smaller amount. Every other variant indicates
/// a misconfigured transaction and is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Supplied pool state account is not the derived pool authority
    #[error("Invalid pool authority: Expected {expected}, Provided {provided}")]
    InvalidPoolAuthority {
        expected: Pubkey,
        provided: Pubkey,
    },

    /// Sender's token account cannot cover the swap
    #[error("Sender insufficient balance: Required {required}, Available {available}")]
    SenderInsufficientBalance {
        required: u64,
        available: u64,
    },

    /// Pool's SOL reserve cannot cover the swap
    #[error("App insufficient balance: Required {required} lamports, Available {available} lamports")]
    AppInsufficientBalance {
        required: u64,
        available: u64,
    },

    /// Supplied vault does not match the vault recorded in the pool state
    #[error("Vault address mismatch: Expected {expected}, Provided {provided}")]
    VaultAddressMismatch {
        expected: Pubkey,
        provided: Pubkey,
    },

    /// Liquidity provider cannot fund one of the deposit legs
    #[error("Insufficient provider balance: Required {required} {asset}, Available {available} {asset}")]
    InsufficientProviderBalance {
        required: u64,
        available: u64,
        asset: String,
    },

    /// Pool state record already exists for this deployment
    #[error("Pool already initialized")]
    PoolAlreadyInitialized,

    /// Token account or mint does not belong to this pool
    #[error("Mint mismatch: Expected {expected}, Provided {provided}")]
    MintMismatch {
        expected: Pubkey,
        provided: Pubkey,
    },

    /// Invalid token account state or configuration
    #[error("Invalid token account: Account {account}. Reason: {reason}")]
    InvalidTokenAccount {
        account: Pubkey,
        reason: String,
    },

    /// Arithmetic overflow
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// Swap amount must be greater than zero
    #[error("Swap amount must be greater than zero")]
    ZeroSwapAmount,
}

impl PoolError {
    /// Returns the stable code for this error.
    pub fn code(&self) -> PoolErrorCode {
        match self {
            PoolError::InvalidPoolAuthority { .. } => PoolErrorCode::InvalidPoolAuthority,
            PoolError::SenderInsufficientBalance { .. } => PoolErrorCode::SenderInsufficientBalance,
            PoolError::AppInsufficientBalance { .. } => PoolErrorCode::AppInsufficientBalance,
            PoolError::VaultAddressMismatch { .. } => PoolErrorCode::VaultAddressMismatch,
            PoolError::InsufficientProviderBalance { .. } => PoolErrorCode::InsufficientProviderBalance,
            PoolError::PoolAlreadyInitialized => PoolErrorCode::PoolAlreadyInitialized,
            PoolError::MintMismatch { .. } => PoolErrorCode::MintMismatch,
            PoolError::InvalidTokenAccount { .. } => PoolErrorCode::InvalidTokenAccount,
            PoolError::ArithmeticOverflow => PoolErrorCode::ArithmeticOverflow,
            PoolError::ZeroSwapAmount => PoolErrorCode::ZeroSwapAmount,
        }
    }

    /// Returns a unique error code for each error variant.
    ///
    /// Error codes are used for programmatic error handling and
    /// provide a stable interface for client applications.
    pub fn error_code(&self) -> u32 {
        self.code() as u32
    }
}

impl From<PoolError> for ProgramError {
    /// Converts a PoolError into a ProgramError for Solana program compatibility.
    fn from(e: PoolError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}
