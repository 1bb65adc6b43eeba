/// The cipher alphabet. Only these symbols are substituted or counted.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Modulus for all shift arithmetic.
pub const ALPHABET_SIZE: usize = 26;

/// Number of candidates reported by the ranked attack when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 5;

/// Shift applied by the demo pipeline when none is given.
pub const DEFAULT_SHIFT: i64 = 1;
