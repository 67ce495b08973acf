use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("FHajp4NkFpVfUviHWFSuRTS4smWgiJwzcbnpVTrLLwpf");

#[program]
pub mod amm {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        fee: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, seed, fee, authority)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64, max_x: u64, max_y: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount, max_x, max_y)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64, min_x: u64, min_y: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount, min_x, min_y)
    }

    pub fn swap(ctx: Context<Swap>, is_x: bool, amount_in: u64, min_amount_out: u64) -> Result<()> {
        instructions::swap::handler(ctx, is_x, amount_in, min_amount_out)
    }

    pub fn set_locked(ctx: Context<SetLocked>, locked: bool) -> Result<()> {
        instructions::set_locked::handler(ctx, locked)
    }
}
