use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub lp_amount: u64,
    pub amount_x: u64,
    pub amount_y: u64,
}

#[event]
pub struct WithdrawEvent {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub lp_amount: u64,
    pub amount_x: u64,
    pub amount_y: u64,
}

#[event]
pub struct SwapEvent {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub x_to_y: bool,
    pub amount_in: u64,
    pub amount_out: u64,
}

#[event]
pub struct ToggleLockEvent {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub locked: bool,
}
