pub const BPS_DENOM: u64 = 10_000;
pub const LP_MINT_DECIMALS: u8 = 6;
