//! Assertions over the local vault and command reports.

use localvault::{Dotenv, SecretStore};

use super::Test;

/// Decoded value of `name` in the test's local vault, if present.
pub fn local_value(t: &Test, name: &str) -> Option<String> {
    let listing = Dotenv::new(t.local_path())
        .list(true)
        .expect("local vault is not valid dotenv");
    listing
        .secrets()
        .get(name)
        .and_then(|value| value.bytes())
        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
}

/// Assert the local vault holds `name` with exactly `expected`.
pub fn assert_local_secret(t: &Test, name: &str, expected: &str) {
    assert_eq!(
        local_value(t, name).as_deref(),
        Some(expected),
        "local vault value for {}, file: {:?}",
        name,
        t.local_contents()
    );
}

/// Assert the local vault has no entry for `name`.
pub fn assert_local_lacks(t: &Test, name: &str) {
    assert!(
        local_value(t, name).is_none(),
        "local vault should not contain {}, file: {:?}",
        name,
        t.local_contents()
    );
}

/// Assert the local vault file was never created.
pub fn assert_no_local_vault(t: &Test) {
    assert!(
        !t.local_path().exists(),
        "local vault should not exist, got: {:?}",
        t.local_contents()
    );
}

/// Assert each of `lines` appears in `report`, in the given order.
pub fn assert_in_order(report: &str, lines: &[&str]) {
    let mut rest = report;
    for line in lines {
        match rest.find(line) {
            Some(idx) => rest = &rest[idx + line.len()..],
            None => panic!("expected '{}' in order, got:\n{}", line, report),
        }
    }
}
