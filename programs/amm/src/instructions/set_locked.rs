use anchor_lang::prelude::*;

use crate::{events::ToggleLockEvent, helpers::require_admin, state::Config};

pub fn handler(ctx: Context<SetLocked>, locked: bool) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.config)?;

    ctx.accounts.config.locked = locked;

    emit!(ToggleLockEvent {
        pool: ctx.accounts.config.key(),
        admin: ctx.accounts.admin.key(),
        locked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetLocked<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"config", config.seed.to_le_bytes().as_ref()],
        bump = config.config_bump,
    )]
    pub config: Account<'info, Config>,
}
