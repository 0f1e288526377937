//! Pure validation rules for the auth and contact forms.
//!
//! Each rule returns the message shown under the offending field. Rules
//! run client-side before any network call; the server still validates
//! independently.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A contact or user name: 3 to 50 characters after trimming.
pub fn name(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 3 {
        return Err("Too short! Minimum 3 letters.");
    }
    if trimmed.chars().count() > 50 {
        return Err("Too long! Maximum 50 letters.");
    }
    Ok(())
}

/// A phone number: 3 to 17 characters drawn from digits, spaces,
/// parentheses, and dashes, with at most one plus sign, leading.
pub fn number(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    let count = trimmed.chars().count();
    if count < 3 {
        return Err("Too short! Minimum 3 digits.");
    }
    if count > 17 {
        return Err("Too long! Maximum 17 characters.");
    }
    for (i, c) in trimmed.chars().enumerate() {
        let allowed = c.is_ascii_digit()
            || c == ' '
            || c == '('
            || c == ')'
            || c == '-'
            || (c == '+' && i == 0);
        if !allowed {
            return Err(
                "Phone number can only contain digits, spaces, dashes, parentheses, and a leading plus sign.",
            );
        }
    }
    Ok(())
}

/// An email address of the shape `local@domain.tld`.
pub fn email(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid email address.";
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains('@')
    {
        return Err(MESSAGE);
    }
    Ok(())
}

/// A password: 7 to 50 characters.
pub fn password(value: &str) -> Result<(), &'static str> {
    let count = value.chars().count();
    if count < 7 {
        return Err("Too short! Minimum 7 characters.");
    }
    if count > 50 {
        return Err("Too long! Maximum 50 characters.");
    }
    Ok(())
}
