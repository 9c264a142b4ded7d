use anchor_lang::prelude::*;

use crate::errors::BountyError;

// ──────────────────────────────────────────────────────
// Config — singleton PDA, initialized once by the deployer
//
// Holds the arbiter that can complete, cancel, or
// force-release any bounty. Never closed.
// ──────────────────────────────────────────────────────

#[account]
pub struct ConfigState {
    /// The arbiter authorized to call admin-gated instructions
    pub admin: Pubkey,

    /// PDA bump
    pub bump: u8,
}

impl ConfigState {
    pub const LEN: usize = 8   // discriminator
        + 32                    // admin
        + 1;                    // bump

    /// The PDA seed — only one config account per program
    pub const SEED: &'static [u8] = b"config";

    pub fn find_address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED], &crate::ID)
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    /// Replace the admin, returning the previous one.
    pub fn set_admin(&mut self, new_admin: Pubkey) -> Result<Pubkey> {
        require!(new_admin != Pubkey::default(), BountyError::InvalidAdmin);
        require!(new_admin != self.admin, BountyError::AdminUnchanged);

        let previous = self.admin;
        self.admin = new_admin;
        Ok(previous)
    }
}
