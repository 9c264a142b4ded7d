use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::BountyError;
use crate::state::Bounty;

// ──────────────────────────────────────────────────────
// Escrow custody
//
// Each bounty's tokens sit in the associated token account
// of a PDA derived from ["escrow_auth", bounty]. The PDA has
// no keypair; the program signs for it with the stored bump.
// Signer seeds are only built here, after the supplied
// authority has been re-derived and matched.
// ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowAuthority {
    pub bounty: Pubkey,
    pub bump: u8,
}

impl EscrowAuthority {
    pub const SEED: &'static [u8] = b"escrow_auth";

    pub fn find_address(bounty: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, bounty.as_ref()], &crate::ID)
    }

    pub fn for_bounty(bounty: &Account<Bounty>) -> Self {
        Self {
            bounty: bounty.key(),
            bump: bounty.escrow_bump,
        }
    }

    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(&[Self::SEED, self.bounty.as_ref(), &[self.bump]], &crate::ID)
            .map_err(|_| error!(BountyError::InvalidEscrowAuthority))
    }

    pub fn verify(&self, supplied: &Pubkey) -> Result<()> {
        require_keys_eq!(self.address()?, *supplied, BountyError::InvalidEscrowAuthority);
        Ok(())
    }
}

/// The accounts needed to drain and close a bounty's custody.
pub struct Custody<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub mint: &'a Account<'info, Mint>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub authority: &'a UncheckedAccount<'info>,
}

impl<'a, 'info> Custody<'a, 'info> {
    /// Move the whole vault balance to `destination`, then close the vault
    /// and send its rent to `rent_recipient`. Returns the amount moved.
    pub fn release(
        &self,
        signer: EscrowAuthority,
        destination: AccountInfo<'info>,
        rent_recipient: AccountInfo<'info>,
    ) -> Result<u64> {
        signer.verify(self.authority.key)?;

        let bump = [signer.bump];
        let seeds = &[EscrowAuthority::SEED, signer.bounty.as_ref(), &bump[..]];
        let signer_seeds = &[&seeds[..]];

        let amount = self.vault.amount;
        if amount > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: destination,
                    authority: self.authority.to_account_info(),
                },
                signer_seeds,
            );
            token::transfer_checked(transfer_ctx, amount, self.mint.decimals)?;
        }

        let close_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            CloseAccount {
                account: self.vault.to_account_info(),
                destination: rent_recipient,
                authority: self.authority.to_account_info(),
            },
            signer_seeds,
        );
        token::close_account(close_ctx)?;

        Ok(amount)
    }
}
