use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Burn, Mint, Token, TokenAccount, Transfer},
};

use crate::{curve, error::ErrorCode, events::WithdrawEvent, state::Config};

pub fn handler(ctx: Context<Withdraw>, amount: u64, min_x: u64, min_y: u64) -> Result<()> {
    require!(!ctx.accounts.config.locked, ErrorCode::PoolLocked);
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(ctx.accounts.mint_lp.supply > 0, ErrorCode::InvalidPoolState);

    let (amount_x, amount_y) = curve::withdraw_amounts(
        amount,
        ctx.accounts.vault_x.amount,
        ctx.accounts.vault_y.amount,
        ctx.accounts.mint_lp.supply,
    )?;
    require!(
        amount_x >= min_x && amount_y >= min_y,
        ErrorCode::SlippageExceeded
    );

    token::burn(ctx.accounts.burn_lp_ctx(), amount)?;

    let seed_bytes = ctx.accounts.config.seed.to_le_bytes();
    let config_bump = ctx.accounts.config.config_bump;
    let signer_seed_group: &[&[u8]] = &[b"config", seed_bytes.as_ref(), &[config_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.vault_x.to_account_info(),
        to: ctx.accounts.user_x.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_x,
    )?;
    let cpi_accounts = Transfer {
        from: ctx.accounts.vault_y.to_account_info(),
        to: ctx.accounts.user_y.to_account_info(),
        authority: ctx.accounts.config.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount_y,
    )?;

    emit!(WithdrawEvent {
        pool: ctx.accounts.config.key(),
        user: ctx.accounts.user.key(),
        lp_amount: amount,
        amount_x,
        amount_y,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
        seeds = [b"lp", config.key().as_ref()],
        bump = config.lp_bump,
    )]
    pub mint_lp: Account<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint_lp,
        associated_token::authority = user,
    )]
    pub user_lp: Account<'info, TokenAccount>,
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

impl<'info> Withdraw<'info> {
    fn burn_lp_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Burn<'info>> {
        let cpi_accounts = Burn {
            mint: self.mint_lp.to_account_info(),
            from: self.user_lp.to_account_info(),
            authority: self.user.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
