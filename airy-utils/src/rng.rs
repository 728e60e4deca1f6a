//! random identifier helpers

use rand::RngExt;

/// Four random lowercase hex digits.
pub fn hex4() -> String {
    let block: u16 = rand::rng().random();
    format!("{block:04x}")
}

/// A sixteen hex digit identifier (four [`hex4`] blocks).
pub fn uid() -> String {
    let mut out = String::with_capacity(16);
    for _ in 0..4 {
        out.push_str(&hex4());
    }
    out
}

/// A GUID-shaped identifier: 32 hex digits grouped `8-4-4-4-12`.
///
/// Not an RFC 4122 UUID: no version or variant bits are set,
/// every digit is random.
pub fn guid() -> String {
    format!(
        "{}{}-{}-{}-{}-{}{}{}",
        hex4(),
        hex4(),
        hex4(),
        hex4(),
        hex4(),
        hex4(),
        hex4(),
        hex4()
    )
}

/// Random integer in the inclusive range `begin..=end`.
///
/// # Panics
///
/// Panics if `begin > end`.
pub fn random_in(begin: i64, end: i64) -> i64 {
    rand::rng().random_range(begin..=end)
}

/// A vector of `n` random integers, each drawn from `begin..=end`.
///
/// # Panics
///
/// Panics if `begin > end`.
pub fn random_vec(n: usize, begin: i64, end: i64) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(begin..=end)).collect()
}
