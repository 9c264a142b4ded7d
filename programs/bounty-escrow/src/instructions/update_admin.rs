use anchor_lang::prelude::*;

use crate::errors::BountyError;
use crate::events::AdminUpdated;
use crate::state::config::ConfigState;

#[derive(Accounts)]
pub struct UpdateAdmin<'info> {
    /// The current admin
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ConfigState::SEED],
        bump = config.bump,
        has_one = admin @ BountyError::Unauthorized,
    )]
    pub config: Account<'info, ConfigState>,
}

pub fn handler(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous_admin = config.set_admin(new_admin)?;

    msg!(
        "Admin authority transferred from {} to {}",
        previous_admin,
        new_admin
    );

    emit!(AdminUpdated {
        previous_admin,
        new_admin,
    });

    Ok(())
}
