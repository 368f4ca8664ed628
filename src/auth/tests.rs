use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_SECRET", "supersecretjwtsecretforunittesting123");
    }
}

#[test]
fn test_issue_and_validate_token() {
    set_env_vars();

    let token = issue_token(42, UserRole::User, "test@example.com").unwrap();
    let claims = validate_token(&token).expect("freshly issued token should validate");

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.role, "user");
    assert_eq!(claims.email.as_deref(), Some("test@example.com"));

    let remaining = claims.exp as i64 - Utc::now().timestamp();
    assert!(remaining > TOKEN_TTL_SECONDS - 60);
    assert!(remaining <= TOKEN_TTL_SECONDS);
}

#[test]
fn test_validate_token_expired() {
    set_env_vars();
    let secret = "supersecretjwtsecretforunittesting123";
    let my_claims = Claims {
        sub: "42".to_string(),
        role: "user".to_string(),
        email: Some("test@example.com".to_string()),
        exp: 1, // past
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_token_invalid_signature() {
    set_env_vars();
    let secret = "wrongsecret";
    let my_claims = Claims {
        sub: "42".to_string(),
        role: "user".to_string(),
        email: Some("test@example.com".to_string()),
        exp: 9999999999,
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_hash_and_verify_password() {
    let hash = password::hash_password("abcdef").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert_ne!(hash, "abcdef");

    assert!(password::verify_password("abcdef", &hash).unwrap());
    assert!(!password::verify_password("abcdeg", &hash).unwrap());
}
