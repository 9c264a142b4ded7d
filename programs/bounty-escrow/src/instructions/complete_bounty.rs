use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody::{Custody, EscrowAuthority};
use crate::errors::BountyError;
use crate::events::BountyCompleted;
use crate::state::{Bounty, BountyAuthority, BountyState, ConfigState};

// ──────────────────────────────────────────────────────
// Complete Bounty — maintainer or admin
//
// Pays the whole custody balance to the assigned
// contributor, then closes the custody account and the
// bounty record. Rent from both goes to the maintainer.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct CompleteBounty<'info> {
    /// The maintainer or the admin
    pub authority: Signer<'info>,

    /// Only needed when the admin signs
    #[account(
        seeds = [ConfigState::SEED],
        bump = config.bump,
    )]
    pub config: Option<Account<'info, ConfigState>>,

    #[account(
        mut,
        close = maintainer,
        has_one = maintainer,
        has_one = mint @ BountyError::InvalidMint,
        seeds = [Bounty::SEED, bounty_id.to_le_bytes().as_ref()],
        bump = bounty.bump,
    )]
    pub bounty: Account<'info, Bounty>,

    /// CHECK: Matched against bounty.maintainer; receives rent
    #[account(mut)]
    pub maintainer: UncheckedAccount<'info>,

    /// CHECK: Matched against bounty.contributor in the handler
    pub contributor: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

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

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = contributor,
    )]
    pub contributor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CompleteBounty>, bounty_id: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let signer = accounts.authority.key();

    let authority = BountyAuthority::resolve(&signer, &accounts.bounty, accounts.config.as_deref())?;
    accounts.bounty.require_state(BountyState::InProgress)?;
    accounts.bounty.require_contributor(accounts.contributor.key)?;

    let clock = Clock::get()?;
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
        "Bounty {} completed by {}: {} paid to {}",
        bounty_id,
        authority.label(),
        paid,
        accounts.contributor.key()
    );

    emit!(BountyCompleted {
        bounty: accounts.bounty.key(),
        bounty_id,
        contributor: accounts.contributor.key(),
        amount: paid,
        released_by: signer,
        completed_at: clock.unix_timestamp,
    });

    Ok(())
}
