use anchor_lang::prelude::*;

use crate::events::ContributorAssigned;
use crate::state::bounty::Bounty;

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct AssignContributor<'info> {
    pub maintainer: Signer<'info>,

    #[account(
        mut,
        has_one = maintainer,
        seeds = [Bounty::SEED, bounty_id.to_le_bytes().as_ref()],
        bump = bounty.bump,
    )]
    pub bounty: Account<'info, Bounty>,

    /// CHECK: Only the key is recorded; the contributor does not sign
    pub contributor: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<AssignContributor>, bounty_id: u64, contributor_github_id: u64) -> Result<()> {
    let contributor = ctx.accounts.contributor.key();
    let bounty = &mut ctx.accounts.bounty;

    bounty.assign_contributor(contributor, contributor_github_id)?;

    msg!(
        "Bounty {}: contributor {} (github {}) assigned",
        bounty_id,
        contributor,
        contributor_github_id
    );

    emit!(ContributorAssigned {
        bounty: bounty.key(),
        bounty_id,
        contributor,
        contributor_github_id,
        assigned_by: ctx.accounts.maintainer.key(),
    });

    Ok(())
}
