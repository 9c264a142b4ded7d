use anchor_lang::prelude::*;

use crate::events::ConfigInitialized;
use crate::state::config::ConfigState;

// ──────────────────────────────────────────────────────
// Initialize Config — called once by the deployer
//
// The `init` constraint makes this at-most-once: a second
// call fails because the PDA already exists.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The deployer, who becomes the first admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The config PDA — singleton, derived from a fixed seed
    #[account(
        init,
        payer = admin,
        space = ConfigState::LEN,
        seeds = [ConfigState::SEED],
        bump,
    )]
    pub config: Account<'info, ConfigState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeConfig>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.bump = ctx.bumps.config;

    msg!("Config initialized: admin={}", config.admin);

    emit!(ConfigInitialized {
        config: config.key(),
        admin: config.admin,
    });

    Ok(())
}
