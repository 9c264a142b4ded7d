use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody::{Custody, EscrowAuthority};
use crate::errors::BountyError;
use crate::events::BountyCancelled;
use crate::state::{Bounty, BountyAuthority, ConfigState};

// ──────────────────────────────────────────────────────
// Cancel Bounty — maintainer or admin, any live state
//
// Full refund to the maintainer's associated token account.
// The contributor has no say here, assigned or not.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct CancelBounty<'info> {
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

    /// CHECK: Matched against bounty.maintainer; receives refund rent
    #[account(mut)]
    pub maintainer: UncheckedAccount<'info>,

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

    /// Refund destination
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = maintainer,
    )]
    pub maintainer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CancelBounty>, bounty_id: u64, reason: String) -> Result<()> {
    let accounts = &ctx.accounts;
    let signer = accounts.authority.key();

    let authority = BountyAuthority::resolve(&signer, &accounts.bounty, accounts.config.as_deref())?;
    Bounty::validate_cancel_reason(&reason)?;

    let clock = Clock::get()?;
    let custody = Custody {
        token_program: &accounts.token_program,
        mint: &accounts.mint,
        vault: &accounts.escrow_token_account,
        authority: &accounts.escrow_authority,
    };
    let refunded = custody.release(
        EscrowAuthority::for_bounty(&accounts.bounty),
        accounts.maintainer_token_account.to_account_info(),
        accounts.maintainer.to_account_info(),
    )?;

    msg!(
        "Bounty {} cancelled by {}: {} refunded to {} ({})",
        bounty_id,
        authority.label(),
        refunded,
        accounts.maintainer.key(),
        reason
    );

    emit!(BountyCancelled {
        bounty: accounts.bounty.key(),
        bounty_id,
        maintainer: accounts.maintainer.key(),
        refunded,
        reason,
        cancelled_by: signer,
        cancelled_at: clock.unix_timestamp,
    });

    Ok(())
}
