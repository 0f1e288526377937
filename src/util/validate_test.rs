use super::*;

// =============================================================
// Names
// =============================================================

#[test]
fn name_accepts_ordinary_names() {
    assert!(name("Ann").is_ok());
    assert!(name("Jean-Luc Picard").is_ok());
    assert!(name("  Bob  ").is_ok());
}

#[test]
fn name_rejects_too_short() {
    assert!(name("").is_err());
    assert!(name("Al").is_err());
    assert!(name("  A  ").is_err());
}

#[test]
fn name_rejects_too_long() {
    assert!(name(&"x".repeat(51)).is_err());
    assert!(name(&"x".repeat(50)).is_ok());
}

// =============================================================
// Phone numbers
// =============================================================

#[test]
fn number_accepts_common_shapes() {
    assert!(number("123").is_ok());
    assert!(number("+380501234567").is_ok());
    assert!(number("(050) 123-45").is_ok());
}

#[test]
fn number_rejects_bad_lengths() {
    assert!(number("12").is_err());
    assert!(number("123456789012345678").is_err());
    assert!(number("12345678901234567").is_ok());
    // 19 characters once formatted, over the limit
    assert!(number("+38 (050) 123-45-67").is_err());
}

#[test]
fn number_rejects_letters_and_symbols() {
    assert!(number("12a").is_err());
    assert!(number("123#456").is_err());
}

#[test]
fn number_plus_sign_only_leads() {
    assert!(number("+123").is_ok());
    assert!(number("1+23").is_err());
    assert!(number("++123").is_err());
}

// =============================================================
// Emails
// =============================================================

#[test]
fn email_accepts_ordinary_addresses() {
    assert!(email("a@b.com").is_ok());
    assert!(email("ann.smith@mail.example.org").is_ok());
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(email("").is_err());
    assert!(email("plainaddress").is_err());
    assert!(email("@missing-local.com").is_err());
    assert!(email("missing-domain@").is_err());
    assert!(email("no-tld@domain").is_err());
    assert!(email("dot@.start").is_err());
    assert!(email("dot@end.").is_err());
    assert!(email("two@@signs.com").is_err());
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn password_length_bounds() {
    assert!(password("1234567").is_ok());
    assert!(password("123456").is_err());
    assert!(password(&"x".repeat(50)).is_ok());
    assert!(password(&"x".repeat(51)).is_err());
}
