//! Validation tests for account domain values.

use crate::account::domain::{AccountDomainError, EmailAddress, PasswordHash, Username};
use rstest::rstest;

#[rstest]
#[case("alice")]
#[case("a.b+c-d_e@f")]
#[case("  padded  ")]
fn username_accepts_permitted_characters(#[case] raw: &str) {
    let username = Username::new(raw).expect("username should be valid");
    assert_eq!(username.as_str(), raw.trim());
}

#[rstest]
fn username_rejects_blank_input() {
    assert_eq!(Username::new("   "), Err(AccountDomainError::EmptyUsername));
}

#[rstest]
fn username_rejects_spaces_inside() {
    assert_eq!(
        Username::new("alice smith"),
        Err(AccountDomainError::InvalidUsername("alice smith".to_owned()))
    );
}

#[rstest]
fn username_rejects_overlong_input() {
    let raw = "u".repeat(151);
    assert_eq!(
        Username::new(raw.clone()),
        Err(AccountDomainError::UsernameTooLong(raw))
    );
}

#[rstest]
fn email_lowercases_domain_only() {
    let email = EmailAddress::new(" Alice@Example.COM ").expect("valid email");
    assert_eq!(email.as_str(), "Alice@example.com");
}

#[rstest]
#[case("no-at-sign")]
#[case("@example.com")]
#[case("alice@")]
#[case("alice@localhost")]
#[case("alice@bad@example.com")]
#[case("ali ce@example.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(AccountDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn password_hash_verifies_only_the_original_password() {
    let hash = PasswordHash::create("s3cret-pass").expect("valid password");

    assert!(hash.verify("s3cret-pass"));
    assert!(!hash.verify("s3cret-pasS"));
}

#[rstest]
fn password_hash_survives_storage_encoding() {
    let hash = PasswordHash::create("s3cret-pass").expect("valid password");
    let parsed = PasswordHash::parse(&hash.encode()).expect("encoding should parse");

    assert_eq!(parsed, hash);
    assert!(parsed.verify("s3cret-pass"));
}

#[rstest]
fn password_hash_salts_each_digest() {
    let first = PasswordHash::create("same-password").expect("valid password");
    let second = PasswordHash::create("same-password").expect("valid password");
    assert_ne!(first.encode(), second.encode());
}

#[rstest]
fn password_hash_rejects_short_passwords() {
    assert_eq!(
        PasswordHash::create("short"),
        Err(AccountDomainError::PasswordTooShort { min_length: 8 })
    );
}

#[rstest]
#[case("plaintext")]
#[case("md5$salt$abcdef")]
#[case("sha256$$0000000000000000000000000000000000000000000000000000000000000000")]
#[case("sha256$salt$not-hex")]
fn password_hash_rejects_malformed_encodings(#[case] encoded: &str) {
    assert_eq!(
        PasswordHash::parse(encoded),
        Err(AccountDomainError::MalformedPasswordHash)
    );
}

#[rstest]
fn password_hash_debug_output_is_redacted() {
    let hash = PasswordHash::create("s3cret-pass").expect("valid password");
    let rendered = format!("{hash:?}");
    assert!(!rendered.contains(&hash.encode()));
}
