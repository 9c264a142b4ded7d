use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::custody::EscrowAuthority;
use crate::errors::BountyError;
use crate::events::BountyCreated;
use crate::state::bounty::{Bounty, BountyState};

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct InitializeBounty<'info> {
    /// The maintainer creating and funding the bounty
    #[account(mut)]
    pub maintainer: Signer<'info>,

    /// The bounty PDA — derived from the external bounty id
    #[account(
        init,
        payer = maintainer,
        space = Bounty::LEN,
        seeds = [Bounty::SEED, bounty_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bounty: Account<'info, Bounty>,

    /// The SPL token mint being escrowed
    pub mint: Account<'info, Mint>,

    /// Maintainer's token account (source of funds)
    #[account(
        mut,
        constraint = maintainer_token_account.owner == maintainer.key() @ BountyError::InvalidTokenAccount,
        constraint = maintainer_token_account.mint == mint.key() @ BountyError::InvalidMint,
    )]
    pub maintainer_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA authority over the custody account — no data, just a signer seed
    #[account(
        seeds = [EscrowAuthority::SEED, bounty.key().as_ref()],
        bump,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    /// Custody token account, owned by the escrow authority
    #[account(
        init,
        payer = maintainer,
        associated_token::mint = mint,
        associated_token::authority = escrow_authority,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeBounty>,
    bounty_id: u64,
    amount: u64,
    github_issue_id: u64,
    maintainer_github_id: u64,
) -> Result<()> {
    Bounty::validate_amount(amount)?;

    let clock = Clock::get()?;

    // ── Transfer tokens from maintainer to custody ──
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.maintainer_token_account.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.escrow_token_account.to_account_info(),
            authority: ctx.accounts.maintainer.to_account_info(),
        },
    );
    token::transfer_checked(transfer_ctx, amount, ctx.accounts.mint.decimals)?;

    // ── Initialize bounty account ──
    let bounty = &mut ctx.accounts.bounty;
    bounty.set_inner(Bounty {
        maintainer: ctx.accounts.maintainer.key(),
        contributor: None,
        mint: ctx.accounts.mint.key(),
        amount,
        bounty_id,
        github_issue_id,
        maintainer_github_id,
        contributor_github_id: None,
        state: BountyState::Created,
        created_at: clock.unix_timestamp,
        bump: ctx.bumps.bounty,
        escrow_bump: ctx.bumps.escrow_authority,
    });

    msg!(
        "Bounty {} created: maintainer={}, amount={}, issue={}",
        bounty_id,
        bounty.maintainer,
        amount,
        github_issue_id
    );

    emit!(BountyCreated {
        bounty: bounty.key(),
        bounty_id,
        maintainer: bounty.maintainer,
        mint: bounty.mint,
        amount,
        github_issue_id,
        maintainer_github_id,
        created_at: clock.unix_timestamp,
    });

    Ok(())
}
