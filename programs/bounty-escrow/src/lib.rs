use anchor_lang::prelude::*;

pub mod custody;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("tMf5EmV2h6sMJ2QMFU6766ACJpf7NTuamPzCudaNFus");

/// Smallest amount (in base token units) a bounty can be funded with.
pub const MIN_BOUNTY_AMOUNT: u64 = 1_000;

/// Longest cancellation reason (in bytes) carried into the event.
pub const MAX_CANCEL_REASON_LEN: usize = 200;

#[program]
pub mod bounty_escrow {
    use super::*;

    // ──────────────────────────────────────────────────────
    // ARBITER CONFIG
    // ──────────────────────────────────────────────────────

    /// Create the singleton config. The signer becomes the admin.
    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        instructions::initialize_config::handler(ctx)
    }

    /// Hand the admin role to another key. Current admin only.
    pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::update_admin::handler(ctx, new_admin)
    }

    // ──────────────────────────────────────────────────────
    // BOUNTY LIFECYCLE
    // ──────────────────────────────────────────────────────

    /// Create a bounty and move `amount` from the maintainer into custody.
    pub fn initialize_bounty(
        ctx: Context<InitializeBounty>,
        bounty_id: u64,
        amount: u64,
        github_issue_id: u64,
        maintainer_github_id: u64,
    ) -> Result<()> {
        instructions::initialize_bounty::handler(
            ctx,
            bounty_id,
            amount,
            github_issue_id,
            maintainer_github_id,
        )
    }

    /// Maintainer picks the contributor. Created -> InProgress.
    pub fn assign_contributor(
        ctx: Context<AssignContributor>,
        bounty_id: u64,
        contributor_github_id: u64,
    ) -> Result<()> {
        instructions::assign_contributor::handler(ctx, bounty_id, contributor_github_id)
    }

    /// Pay the assigned contributor and close the bounty.
    /// Maintainer or admin.
    pub fn complete_bounty(ctx: Context<CompleteBounty>, bounty_id: u64) -> Result<()> {
        instructions::complete_bounty::handler(ctx, bounty_id)
    }

    /// Refund the maintainer and close the bounty.
    /// Maintainer or admin, from any live state.
    pub fn cancel_bounty(ctx: Context<CancelBounty>, bounty_id: u64, reason: String) -> Result<()> {
        instructions::cancel_bounty::handler(ctx, bounty_id, reason)
    }

    /// Admin assigns a contributor to a fresh bounty and pays out
    /// in the same instruction.
    pub fn admin_assign_and_release(
        ctx: Context<AdminAssignAndRelease>,
        bounty_id: u64,
        contributor_github_id: u64,
    ) -> Result<()> {
        instructions::admin_assign_and_release::handler(ctx, bounty_id, contributor_github_id)
    }
}
