use shop_catalog::utils::password::{hash_password, verify_password};

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("hunter2").unwrap();
    let second = hash_password("hunter2").unwrap();

    // fresh salt every call, but both still verify
    assert_ne!(first, second);
    assert!(verify_password("hunter2", &first).unwrap());
    assert!(verify_password("hunter2", &second).unwrap());
}

#[test]
fn test_wrong_password_does_not_verify() {
    let hash = hash_password("hunter2").unwrap();

    assert!(!verify_password("hunter3", &hash).unwrap());
}

#[test]
fn test_malformed_hash_is_an_error() {
    assert!(verify_password("hunter2", "not-a-phc-string").is_err());
}
