use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody::{Custody, EscrowAuthority};
use crate::errors::BountyError;
use crate::events::{BountyCompleted, ContributorAssigned};
use crate::state::{Bounty, BountyState, ConfigState};

// ──────────────────────────────────────────────────────
// Admin Assign and Release — admin only
//
// Arbiter-adjudicated payout on a bounty nobody has been
// assigned to yet: records the contributor, pays out, and
// closes custody and record in a single instruction.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct AdminAssignAndRelease<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [ConfigState::SEED],
        bump = config.bump,
        constraint = config.is_admin(&admin.key()) @ BountyError::Unauthorized,
    )]
    pub config: Account<'info, ConfigState>,

    #[account(
        mut,
        close = maintainer,
        has_one = maintainer,
        seeds = [Bounty::SEED, bounty_id.to_le_bytes().as_ref()],
        bump = bounty.bump,
        constraint = bounty.state == BountyState::Created @ BountyError::InvalidBountyStateForOperation,
        constraint = bounty.contributor.is_none() @ BountyError::ContributorAlreadyAssigned,
    )]
    pub bounty: Account<'info, Bounty>,

    /// CHECK: Matched against bounty.maintainer; receives rent
    #[account(mut)]
    pub maintainer: UncheckedAccount<'info>,

    /// CHECK: Contributor to be recorded and paid
    pub contributor: UncheckedAccount<'info>,

    #[account(
        constraint = mint.key() == bounty.mint @ BountyError::InvalidMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = contributor_token_account.mint == bounty.mint @ BountyError::InvalidMint,
        constraint = contributor_token_account.owner == contributor.key() @ BountyError::InvalidTokenAccount,
    )]
    pub contributor_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA authority over the custody account
    #[account(
        seeds = [EscrowAuthority::SEED, bounty.key().as_ref()],
        bump = bounty.escrow_bump,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = escrow_authority,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<AdminAssignAndRelease>,
    bounty_id: u64,
    contributor_github_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let contributor = ctx.accounts.contributor.key();

    ctx.accounts
        .bounty
        .assign_contributor(contributor, contributor_github_id)?;

    let accounts = &ctx.accounts;
    let custody = Custody {
        token_program: &accounts.token_program,
        mint: &accounts.mint,
        vault: &accounts.escrow_token_account,
        authority: &accounts.escrow_authority,
    };
    let paid = custody.release(
        EscrowAuthority::for_bounty(&accounts.bounty),
        accounts.contributor_token_account.to_account_info(),
        accounts.maintainer.to_account_info(),
    )?;

    msg!(
        "Bounty {} released by admin {}: {} paid to {}",
        bounty_id,
        admin,
        paid,
        contributor
    );

    emit!(ContributorAssigned {
        bounty: accounts.bounty.key(),
        bounty_id,
        contributor,
        contributor_github_id,
        assigned_by: admin,
    });

    emit!(BountyCompleted {
        bounty: accounts.bounty.key(),
        bounty_id,
        contributor,
        amount: paid,
        released_by: admin,
        completed_at: clock.unix_timestamp,
    });

    Ok(())
}
