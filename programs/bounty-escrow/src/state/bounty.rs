use anchor_lang::prelude::*;

use crate::errors::BountyError;
use crate::{MAX_CANCEL_REASON_LEN, MIN_BOUNTY_AMOUNT};

// ──────────────────────────────────────────────────────
// Bounty Status — live states only
//
// Completed and Cancelled are not stored: both close the
// record and its custody account.
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BountyState {
    #[default]
    Created,    // Funded, waiting for a contributor
    InProgress, // Contributor assigned, work under way
}

// ──────────────────────────────────────────────────────
// Bounty Account — one per bounty_id
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Bounty {
    // ── Participants ──
    pub maintainer: Pubkey,
    pub contributor: Option<Pubkey>,

    // ── Funds ──
    pub mint: Pubkey,
    pub amount: u64,

    // ── Off-chain references ──
    pub bounty_id: u64,
    pub github_issue_id: u64,
    pub maintainer_github_id: u64,
    pub contributor_github_id: Option<u64>,

    // ── State ──
    pub state: BountyState,
    pub created_at: i64,

    // ── PDA ──
    pub bump: u8,
    pub escrow_bump: u8,
}

impl Bounty {
    pub const LEN: usize = 8    // discriminator
        + 32                    // maintainer
        + 33                    // contributor (Option<Pubkey>)
        + 32                    // mint
        + 8                     // amount
        + 8                     // bounty_id
        + 8                     // github_issue_id
        + 8                     // maintainer_github_id
        + 9                     // contributor_github_id (Option<u64>)
        + 1                     // state
        + 8                     // created_at
        + 1                     // bump
        + 1;                    // escrow_bump

    pub const SEED: &'static [u8] = b"bounty";

    pub fn find_address(bounty_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, &bounty_id.to_le_bytes()], &crate::ID)
    }

    pub fn validate_amount(amount: u64) -> Result<()> {
        require!(amount > 0, BountyError::AmountMustBeGreaterThanZero);
        require!(amount >= MIN_BOUNTY_AMOUNT, BountyError::InsufficientBountyAmount);
        Ok(())
    }

    pub fn validate_cancel_reason(reason: &str) -> Result<()> {
        require!(reason.len() <= MAX_CANCEL_REASON_LEN, BountyError::CancelReasonTooLong);
        Ok(())
    }

    pub fn require_state(&self, expected: BountyState) -> Result<()> {
        require!(self.state == expected, BountyError::InvalidBountyState);
        Ok(())
    }

    /// Record the contributor and move to InProgress.
    /// Leaves the record untouched on failure.
    pub fn assign_contributor(&mut self, contributor: Pubkey, contributor_github_id: u64) -> Result<()> {
        self.require_state(BountyState::Created)?;
        require!(self.contributor.is_none(), BountyError::ContributorAlreadyAssigned);

        self.contributor = Some(contributor);
        self.contributor_github_id = Some(contributor_github_id);
        self.state = BountyState::InProgress;
        Ok(())
    }

    /// The supplied account must be the recorded contributor.
    pub fn require_contributor(&self, supplied: &Pubkey) -> Result<()> {
        match self.contributor {
            Some(contributor) if contributor == *supplied => Ok(()),
            _ => err!(BountyError::InvalidContributor),
        }
    }
}
