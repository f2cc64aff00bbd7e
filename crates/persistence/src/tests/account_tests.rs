// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential store tests.

use super::create_test_persistence;
use crate::queries::accounts::{dummy_password_hash, verify_or_dummy};

#[test]
fn test_create_account_hashes_password() {
    let mut persistence = create_test_persistence();

    let account_id = persistence.create_account("admin", "s3cret").unwrap();
    let account = persistence.get_account_by_id(account_id).unwrap().unwrap();

    assert_eq!(account.username, "admin");
    assert_ne!(account.password_hash, "s3cret");
    assert!(account.password_hash.starts_with("$2"));
}

#[test]
fn test_duplicate_username_rejected() {
    let mut persistence = create_test_persistence();

    persistence.create_account("admin", "one").unwrap();
    assert!(persistence.create_account("admin", "two").is_err());
}

#[test]
fn test_verify_credentials_success() {
    let mut persistence = create_test_persistence();
    let account_id = persistence.create_account("admin", "s3cret").unwrap();

    let account = persistence
        .verify_credentials("admin", "s3cret")
        .unwrap()
        .expect("credentials should verify");

    assert_eq!(account.account_id, account_id);
    assert_eq!(account.username, "admin");
}

#[test]
fn test_verify_credentials_wrong_password() {
    let mut persistence = create_test_persistence();
    persistence.create_account("admin", "s3cret").unwrap();

    assert!(
        persistence
            .verify_credentials("admin", "wrong")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_verify_credentials_unknown_user() {
    let mut persistence = create_test_persistence();
    persistence.create_account("admin", "s3cret").unwrap();

    assert!(
        persistence
            .verify_credentials("nobody", "s3cret")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_username_lookup_is_case_sensitive() {
    let mut persistence = create_test_persistence();
    persistence.create_account("admin", "s3cret").unwrap();

    assert!(
        persistence
            .verify_credentials("ADMIN", "s3cret")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_ensure_account_is_idempotent() {
    let mut persistence = create_test_persistence();

    assert!(persistence.ensure_account("admin", "admin").unwrap());
    assert!(!persistence.ensure_account("admin", "other").unwrap());
    assert_eq!(persistence.count_accounts().unwrap(), 1);

    // The second call must not have replaced the password
    assert!(
        persistence
            .verify_credentials("admin", "admin")
            .unwrap()
            .is_some()
    );
    assert!(
        persistence
            .verify_credentials("admin", "other")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_dummy_hash_uses_default_cost() {
    let dummy = dummy_password_hash().unwrap();

    assert!(dummy.starts_with(&format!("$2b${}$", bcrypt::DEFAULT_COST)));
}

#[test]
fn test_missing_account_still_runs_bcrypt() {
    // The dummy hash must be a real bcrypt hash, otherwise verify returns early.
    let dummy = dummy_password_hash().unwrap();
    assert!(bcrypt::verify("anything", dummy).is_ok());

    assert!(!verify_or_dummy("anything", None).unwrap());
    assert!(!verify_or_dummy("shiftpay-no-such-account", None).unwrap());
}

#[test]
fn test_verify_or_dummy_checks_real_hash() {
    let mut persistence = create_test_persistence();
    let account_id = persistence.create_account("admin", "s3cret").unwrap();
    let account = persistence.get_account_by_id(account_id).unwrap().unwrap();

    assert!(verify_or_dummy("s3cret", Some(&account.password_hash)).unwrap());
    assert!(!verify_or_dummy("wrong", Some(&account.password_hash)).unwrap());
    assert!(verify_or_dummy("s3cret", Some("not-a-hash")).is_err());
}
