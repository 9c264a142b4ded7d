use anchor_lang::prelude::*;

#[error_code]
pub enum BountyError {
    // ── Funding errors ──
    #[msg("Amount must be greater than zero")]
    AmountMustBeGreaterThanZero,

    #[msg("Insufficient bounty amount - minimum 1000 tokens required")]
    InsufficientBountyAmount,

    // ── State errors ──
    #[msg("Invalid bounty state for this operation")]
    InvalidBountyState,

    #[msg("Bounty must be in the Created state for an admin release")]
    InvalidBountyStateForOperation,

    #[msg("Bounty already has a contributor assigned")]
    ContributorAlreadyAssigned,

    #[msg("Cancellation reason exceeds 200 bytes")]
    CancelReasonTooLong,

    // ── Account errors ──
    #[msg("Contributor does not match the one assigned to this bounty")]
    InvalidContributor,

    #[msg("Token account mint does not match the bounty mint")]
    InvalidMint,

    #[msg("Token account is not owned by the expected wallet")]
    InvalidTokenAccount,

    #[msg("Escrow authority does not match the bounty's derived address")]
    InvalidEscrowAuthority,

    // ── Authorization errors ──
    #[msg("Signer is not authorized to perform this operation")]
    Unauthorized,

    #[msg("New admin is the same as the current admin")]
    AdminUnchanged,

    #[msg("Admin cannot be set to the default public key")]
    InvalidAdmin,
}
