use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::{curve, error::ErrorCode, events::SwapEvent, state::Config};

pub fn handler(ctx: Context<Swap>, is_x: bool, amount_in: u64, min_amount_out: u64) -> Result<()> {
    require!(!ctx.accounts.config.locked, ErrorCode::PoolLocked);
    require!(amount_in > 0, ErrorCode::InvalidAmount);

    let (reserve_in, reserve_out) = if is_x {
        (ctx.accounts.vault_x.amount, ctx.accounts.vault_y.amount)
    } else {
        (ctx.accounts.vault_y.amount, ctx.accounts.vault_x.amount)
    };
    require!(
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::InsufficientLiquidity
    );

    let amount_out =
        curve::swap_amount_out(amount_in, reserve_in, reserve_out, ctx.accounts.config.fee)?;
    require!(amount_out >= min_amount_out, ErrorCode::SlippageExceeded);

    // Full input, fee included, goes into the pool; the fee accrues to LPs.
    let (user_in, vault_in) = if is_x {
        (&ctx.accounts.user_x, &ctx.accounts.vault_x)
    } else {
        (&ctx.accounts.user_y, &ctx.accounts.vault_y)
    };
    let cpi_accounts = Transfer {
        from: user_in.to_account_info(),
        to: vault_in.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount_in,
    )?;

    let (vault_out, user_out) = if is_x {
        (&ctx.accounts.vault_y, &ctx.accounts.user_y)
    } else {
        (&ctx.accounts.vault_x, &ctx.accounts.user_x)
    };
    let seed_bytes = ctx.accounts.config.seed.to_le_bytes();
    let config_bump = ctx.accounts.config.config_bump;
    let signer_seed_group: &[&[u8]] = &[b"config", seed_bytes.as_ref(), &[config_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: vault_out.to_account_info(),
        to: user_out.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_out,
    )?;

    emit!(SwapEvent {
        pool: ctx.accounts.config.key(),
        user: ctx.accounts.user.key(),
        x_to_y: is_x,
        amount_in,
        amount_out,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    pub mint_x: Account<'info, Mint>,
    pub mint_y: Account<'info, Mint>,
    #[account(
        has_one = mint_x,
        has_one = mint_y,
        seeds = [b"config", config.seed.to_le_bytes().as_ref()],
        bump = config.config_bump,
    )]
    pub config: Account<'info, Config>,
    #[account(
        mut,
        associated_token::mint = mint_x,
        associated_token::authority = config,
    )]
    pub vault_x: Account<'info, TokenAccount>,
    #[account(
        mut,
        associated_token::mint = mint_y,
        associated_token::authority = config,
    )]
    pub vault_y: Account<'info, TokenAccount>,
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_x,
        associated_token::authority = user,
    )]
    pub user_x: Account<'info, TokenAccount>,
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_y,
        associated_token::authority = user,
    )]
    pub user_y: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
