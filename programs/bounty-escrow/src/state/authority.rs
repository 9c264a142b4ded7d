use anchor_lang::prelude::*;

use crate::errors::BountyError;
use crate::state::{Bounty, ConfigState};

/// Who is allowed to close out a bounty.
///
/// Complete and cancel accept either the bounty's maintainer or the
/// configured admin. The policy is resolved from the signer before the
/// handler touches any account; the contributor never qualifies.
///
/// The config is only consulted when the caller supplies it, so a
/// maintainer can close out a bounty before any admin exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BountyAuthority {
    Maintainer,
    Admin,
}

impl BountyAuthority {
    pub fn resolve(signer: &Pubkey, bounty: &Bounty, config: Option<&ConfigState>) -> Result<Self> {
        if bounty.maintainer == *signer {
            return Ok(Self::Maintainer);
        }
        match config {
            Some(config) if config.is_admin(signer) => Ok(Self::Admin),
            _ => err!(BountyError::Unauthorized),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Maintainer => "maintainer",
            Self::Admin => "admin",
        }
    }
}
