use uuid::Uuid;

use bloom_auth::jwt::{issue_token, validate_token};
use bloom_auth::password::{hash_password, verify_password};
use bloom_core::models::user::{Role, User};

const SECRET: &[u8] = b"test-signing-secret";

fn student() -> User {
    let now: jiff::Timestamp = "2026-08-01T00:00:00Z".parse().expect("valid timestamp");
    User {
        id: Uuid::new_v4(),
        email: "alex@campus.edu".to_string(),
        name: "Alex".to_string(),
        role: Role::Student,
        password_hash: String::new(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn password_round_trips_through_hash_and_verify() {
    let hash = hash_password("correct horse battery staple").expect("hashing succeeds");

    assert!(verify_password("correct horse battery staple", &hash).expect("verify succeeds"));
    assert!(!verify_password("wrong password", &hash).expect("verify succeeds"));
}

#[test]
fn hashes_are_salted() {
    let first = hash_password("same input").expect("hashing succeeds");
    let second = hash_password("same input").expect("hashing succeeds");

    assert_ne!(first, second);
}

#[test]
fn garbage_stored_hash_is_an_error_not_a_match() {
    assert!(verify_password("anything", "not-a-phc-string").is_err());
}

#[test]
fn token_round_trips_and_carries_identity() {
    let user = student();
    let token = issue_token(&user, SECRET, 3600).expect("issue succeeds");

    let claims = validate_token(&token, SECRET).expect("validate succeeds");
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, Role::Student);
    assert!(claims.exp > claims.iat);
}

#[test]
fn token_signed_with_a_different_secret_is_rejected() {
    let token = issue_token(&student(), b"other-secret", 3600).expect("issue succeeds");

    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn tampered_token_is_rejected() {
    let mut token = issue_token(&student(), SECRET, 3600).expect("issue succeeds");
    token.push('x');

    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn expired_token_is_rejected() {
    use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};

    let user = student();
    let now = get_current_timestamp();
    let claims = bloom_auth::jwt::Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .expect("encode succeeds");

    assert!(validate_token(&token, SECRET).is_err());
}
