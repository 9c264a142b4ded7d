mod common;

use bounty_escrow::state::BountyState;
use common::{expect_error, Env, BOUNTY_AMOUNT, STARTING_BALANCE};
use litesvm_utils::TestHelpers;
use solana_sdk::signature::Signer;

#[test]
fn fund_assign_complete_pays_contributor() {
    let mut env = Env::new();
    let addresses = env.addresses(1);

    env.fund(1, BOUNTY_AMOUNT);
    env.assert_balance(&addresses.escrow_token_account, BOUNTY_AMOUNT);
    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE - BOUNTY_AMOUNT);

    let bounty = env.bounty(1);
    assert_eq!(bounty.bounty_id, 1);
    assert_eq!(bounty.amount, BOUNTY_AMOUNT);
    assert_eq!(bounty.maintainer, env.maintainer.pubkey());
    assert_eq!(bounty.mint, env.mint);
    assert_eq!(bounty.github_issue_id, 42);
    assert_eq!(bounty.maintainer_github_id, 123);
    assert_eq!(bounty.state, BountyState::Created);
    assert_eq!(bounty.contributor, None);

    env.assign(1, 789);
    let bounty = env.bounty(1);
    assert_eq!(bounty.state, BountyState::InProgress);
    assert_eq!(bounty.contributor, Some(env.contributor.pubkey()));
    assert_eq!(bounty.contributor_github_id, Some(789));

    let ix = env.complete_ix(1, &env.maintainer.pubkey(), &env.contributor.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.contributor_ata, BOUNTY_AMOUNT);
    assert!(env.is_closed(&addresses.bounty));
    assert!(env.is_closed(&addresses.escrow_token_account));
}

#[test]
fn bounty_below_minimum_is_rejected() {
    let mut env = Env::new();
    let addresses = env.addresses(2);
    let maintainer = env.maintainer.insecure_clone();

    let ix = env.initialize_bounty_ix(2, 500);
    expect_error(env.send(ix, &[&maintainer]), "InsufficientBountyAmount");

    let ix = env.initialize_bounty_ix(2, 0);
    expect_error(env.send(ix, &[&maintainer]), "AmountMustBeGreaterThanZero");

    assert!(env.is_closed(&addresses.bounty));
    assert!(env.is_closed(&addresses.escrow_token_account));
    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
}

#[test]
fn minimum_amount_is_accepted() {
    let mut env = Env::new();

    env.fund(3, bounty_escrow::MIN_BOUNTY_AMOUNT);
    env.assert_balance(&env.addresses(3).escrow_token_account, bounty_escrow::MIN_BOUNTY_AMOUNT);
}

#[test]
fn duplicate_bounty_id_is_rejected() {
    let mut env = Env::new();
    env.fund(4, BOUNTY_AMOUNT);

    let ix = env.initialize_bounty_ix(4, 2 * BOUNTY_AMOUNT);
    let maintainer = env.maintainer.insecure_clone();
    env.send(ix, &[&maintainer]).assert_failure();

    assert_eq!(env.bounty(4).amount, BOUNTY_AMOUNT);
    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE - BOUNTY_AMOUNT);
}

#[test]
fn cancel_from_created_refunds_maintainer() {
    let mut env = Env::new();
    let addresses = env.addresses(5);
    env.fund(5, BOUNTY_AMOUNT);

    let ix = env.cancel_ix(5, &env.maintainer.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
    assert!(env.is_closed(&addresses.bounty));
    assert!(env.is_closed(&addresses.escrow_token_account));
}

#[test]
fn cancel_from_in_progress_refunds_maintainer() {
    let mut env = Env::new();
    let addresses = env.addresses(6);
    env.fund(6, BOUNTY_AMOUNT);
    env.assign(6, 789);

    let ix = env.cancel_ix(6, &env.maintainer.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
    env.assert_balance(&env.contributor_ata, 0);
    assert!(env.is_closed(&addresses.bounty));
    assert!(env.is_closed(&addresses.escrow_token_account));
}

#[test]
fn second_assignment_is_rejected() {
    let mut env = Env::new();
    env.fund(7, BOUNTY_AMOUNT);
    env.assign(7, 789);

    let ix = env.assign_ix(7, &env.maintainer.pubkey(), &env.stranger.pubkey(), 999);
    let maintainer = env.maintainer.insecure_clone();
    expect_error(env.send(ix, &[&maintainer]), "InvalidBountyState");

    let bounty = env.bounty(7);
    assert_eq!(bounty.contributor, Some(env.contributor.pubkey()));
    assert_eq!(bounty.contributor_github_id, Some(789));
    assert_eq!(bounty.state, BountyState::InProgress);
}

#[test]
fn only_maintainer_can_assign() {
    let mut env = Env::new();
    env.fund(8, BOUNTY_AMOUNT);

    let ix = env.assign_ix(8, &env.stranger.pubkey(), &env.stranger.pubkey(), 1);
    let stranger = env.stranger.insecure_clone();
    expect_error(env.send(ix, &[&stranger]), "ConstraintHasOne");

    let bounty = env.bounty(8);
    assert_eq!(bounty.state, BountyState::Created);
    assert_eq!(bounty.contributor, None);
}

#[test]
fn outsiders_cannot_complete_or_cancel() {
    let mut env = Env::new();
    env.fund(9, BOUNTY_AMOUNT);
    env.assign(9, 789);
    let contributor = env.contributor.insecure_clone();
    let stranger = env.stranger.insecure_clone();

    let ix = env.complete_ix(9, &contributor.pubkey(), &contributor.pubkey());
    expect_error(env.send(ix, &[&contributor]), "Unauthorized");

    let ix = env.cancel_ix(9, &contributor.pubkey());
    expect_error(env.send(ix, &[&contributor]), "Unauthorized");

    let ix = env.cancel_ix(9, &stranger.pubkey());
    expect_error(env.send(ix, &[&stranger]), "Unauthorized");

    let ix = env.complete_ix(9, &stranger.pubkey(), &contributor.pubkey());
    expect_error(env.send(ix, &[&stranger]), "Unauthorized");

    let bounty = env.bounty(9);
    assert_eq!(bounty.state, BountyState::InProgress);
    env.assert_balance(&env.addresses(9).escrow_token_account, BOUNTY_AMOUNT);
}

#[test]
fn complete_requires_an_assigned_contributor() {
    let mut env = Env::new();
    env.fund(10, BOUNTY_AMOUNT);

    let ix = env.complete_ix(10, &env.maintainer.pubkey(), &env.contributor.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    expect_error(env.send(ix, &[&maintainer]), "InvalidBountyState");

    env.assert_balance(&env.addresses(10).escrow_token_account, BOUNTY_AMOUNT);
}

#[test]
fn complete_rejects_a_different_contributor() {
    let mut env = Env::new();
    env.fund(11, BOUNTY_AMOUNT);
    env.assign(11, 789);

    let ix = env.complete_ix(11, &env.maintainer.pubkey(), &env.stranger.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    expect_error(env.send(ix, &[&maintainer]), "InvalidContributor");

    env.assert_balance(&env.stranger_ata, 0);
    env.assert_balance(&env.addresses(11).escrow_token_account, BOUNTY_AMOUNT);
}

#[test]
fn closed_bounty_accepts_no_further_transitions() {
    let mut env = Env::new();
    env.fund(12, BOUNTY_AMOUNT);
    env.assign(12, 789);
    let maintainer = env.maintainer.insecure_clone();

    let ix = env.complete_ix(12, &maintainer.pubkey(), &env.contributor.pubkey());
    env.send(ix, &[&maintainer]).assert_success();

    let ix = env.complete_ix(12, &maintainer.pubkey(), &env.contributor.pubkey());
    expect_error(env.send(ix, &[&maintainer]), "AccountNotInitialized");

    let ix = env.cancel_ix(12, &maintainer.pubkey());
    expect_error(env.send(ix, &[&maintainer]), "AccountNotInitialized");

    let ix = env.assign_ix(12, &maintainer.pubkey(), &env.contributor.pubkey(), 789);
    expect_error(env.send(ix, &[&maintainer]), "AccountNotInitialized");

    env.assert_balance(&env.contributor_ata, BOUNTY_AMOUNT);
}

#[test]
fn cancelled_bounty_accepts_no_further_transitions() {
    let mut env = Env::new();
    env.fund(13, BOUNTY_AMOUNT);
    let maintainer = env.maintainer.insecure_clone();

    let ix = env.cancel_ix(13, &maintainer.pubkey());
    env.send(ix, &[&maintainer]).assert_success();

    let ix = env.cancel_ix(13, &maintainer.pubkey());
    expect_error(env.send(ix, &[&maintainer]), "AccountNotInitialized");

    let ix = env.assign_ix(13, &maintainer.pubkey(), &env.contributor.pubkey(), 789);
    expect_error(env.send(ix, &[&maintainer]), "AccountNotInitialized");

    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
}

#[test]
fn independent_bounties_do_not_interfere() {
    let mut env = Env::new();
    env.fund(14, BOUNTY_AMOUNT);
    env.fund(15, 2 * BOUNTY_AMOUNT);

    let ix = env.cancel_ix(14, &env.maintainer.pubkey());
    let maintainer = env.maintainer.insecure_clone();
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.addresses(15).escrow_token_account, 2 * BOUNTY_AMOUNT);
    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE - 2 * BOUNTY_AMOUNT);
    assert_eq!(env.bounty(15).state, BountyState::Created);
}

#[test]
fn complete_rejects_a_different_mint() {
    let mut env = Env::new();
    env.fund(16, BOUNTY_AMOUNT);
    env.assign(16, 789);
    let maintainer = env.maintainer.insecure_clone();
    let contributor = env.contributor.insecure_clone();

    let other_mint = env.ctx.svm.create_token_mint(&maintainer, 6).unwrap().pubkey();
    env.ctx
        .svm
        .create_associated_token_account(&other_mint, &contributor)
        .unwrap();

    let ix = env.complete_ix_with_mint(16, &maintainer.pubkey(), &contributor.pubkey(), &other_mint);
    expect_error(env.send(ix, &[&maintainer]), "InvalidMint");

    assert_eq!(env.bounty(16).state, BountyState::InProgress);
    env.assert_balance(&env.addresses(16).escrow_token_account, BOUNTY_AMOUNT);
}

#[test]
fn overlong_cancel_reason_is_rejected() {
    let mut env = Env::new();
    env.fund(17, BOUNTY_AMOUNT);
    let maintainer = env.maintainer.insecure_clone();

    let reason = "x".repeat(bounty_escrow::MAX_CANCEL_REASON_LEN + 1);
    let ix = env.cancel_ix_with_reason(17, &maintainer.pubkey(), &reason);
    expect_error(env.send(ix, &[&maintainer]), "CancelReasonTooLong");
    env.assert_balance(&env.addresses(17).escrow_token_account, BOUNTY_AMOUNT);

    let reason = "x".repeat(bounty_escrow::MAX_CANCEL_REASON_LEN);
    let ix = env.cancel_ix_with_reason(17, &maintainer.pubkey(), &reason);
    env.send(ix, &[&maintainer]).assert_success();
    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
}

#[test]
fn maintainer_cancels_without_a_config() {
    let mut env = Env::without_config();
    env.fund(18, BOUNTY_AMOUNT);
    env.assign(18, 789);
    let maintainer = env.maintainer.insecure_clone();

    let ix = env.cancel_ix(18, &maintainer.pubkey());
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.maintainer_ata, STARTING_BALANCE);
    assert!(env.is_closed(&env.addresses(18).bounty));
    assert!(env.is_closed(&env.config));
}

#[test]
fn maintainer_completes_without_a_config() {
    let mut env = Env::without_config();
    env.fund(19, BOUNTY_AMOUNT);
    env.assign(19, 789);
    let maintainer = env.maintainer.insecure_clone();

    let ix = env.complete_ix(19, &maintainer.pubkey(), &env.contributor.pubkey());
    env.send(ix, &[&maintainer]).assert_success();

    env.assert_balance(&env.contributor_ata, BOUNTY_AMOUNT);
    assert!(env.is_closed(&env.addresses(19).escrow_token_account));
}

#[test]
fn only_the_maintainer_can_close_out_without_a_config() {
    let mut env = Env::without_config();
    env.fund(20, BOUNTY_AMOUNT);
    env.assign(20, 789);
    let admin = env.admin.insecure_clone();

    let ix = env.cancel_ix(20, &admin.pubkey());
    expect_error(env.send(ix, &[&admin]), "Unauthorized");

    let ix = env.complete_ix(20, &admin.pubkey(), &env.contributor.pubkey());
    expect_error(env.send(ix, &[&admin]), "Unauthorized");

    env.assert_balance(&env.addresses(20).escrow_token_account, BOUNTY_AMOUNT);
}
