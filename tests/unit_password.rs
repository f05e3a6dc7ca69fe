use gatewarden::utils::password::{hash_secret, verify_secret};

#[test]
fn test_hash_secret_never_returns_plaintext() {
    let secret = "testpassword123";
    let hash = hash_secret(secret).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, secret);
}

#[test]
fn test_verify_secret_correct() {
    let secret = "correctpassword";
    let hash = hash_secret(secret).unwrap();

    assert!(verify_secret(secret, &hash).unwrap());
}

#[test]
fn test_verify_secret_incorrect() {
    let hash = hash_secret("correctpassword").unwrap();

    assert!(!verify_secret("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_secret_invalid_hash() {
    let result = verify_secret("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_is_freshly_salted() {
    let secret = "samepassword";
    let hash1 = hash_secret(secret).unwrap();
    let hash2 = hash_secret(secret).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_secret(secret, &hash1).unwrap());
    assert!(verify_secret(secret, &hash2).unwrap());
}

#[test]
fn test_verify_is_case_sensitive() {
    let hash = hash_secret("Password123").unwrap();

    assert!(!verify_secret("password123", &hash).unwrap());
    assert!(!verify_secret("PASSWORD123", &hash).unwrap());
}
