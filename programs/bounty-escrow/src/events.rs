use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct AdminUpdated {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct BountyCreated {
    pub bounty: Pubkey,
    pub bounty_id: u64,
    pub maintainer: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub github_issue_id: u64,
    pub maintainer_github_id: u64,
    pub created_at: i64,
}

#[event]
pub struct ContributorAssigned {
    pub bounty: Pubkey,
    pub bounty_id: u64,
    pub contributor: Pubkey,
    pub contributor_github_id: u64,
    pub assigned_by: Pubkey,
}

#[event]
pub struct BountyCompleted {
    pub bounty: Pubkey,
    pub bounty_id: u64,
    pub contributor: Pubkey,
    pub amount: u64,
    pub released_by: Pubkey,
    pub completed_at: i64,
}

#[event]
pub struct BountyCancelled {
    pub bounty: Pubkey,
    pub bounty_id: u64,
    pub maintainer: Pubkey,
    pub refunded: u64,
    pub reason: String,
    pub cancelled_by: Pubkey,
    pub cancelled_at: i64,
}
