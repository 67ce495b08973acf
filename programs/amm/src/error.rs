use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Fee must not exceed 10000 basis points")]
    InvalidFee,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Pool mints must differ")]
    IdenticalMints,
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,
    #[msg("Pool is locked")]
    PoolLocked,
    #[msg("Pool has no liquidity")]
    InsufficientLiquidity,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid pool state")]
    InvalidPoolState,
}
