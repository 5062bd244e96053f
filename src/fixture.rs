//! Deterministic input generators for tests, benches and the dev binaries.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random lowercase letters, reproducible from the seed.
pub fn random_letters(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..26)) as char)
        .collect()
}

/// The run adversary `a^(len/3) b^(len/3) c^(rest)`: three long uniform
/// blocks whose overlapping in-run palindromes stress expansion reuse.
pub fn three_blocks(len: usize) -> String {
    let block = len / 3;
    let mut s = String::with_capacity(len);
    for _ in 0..block {
        s.push('a');
    }
    for _ in 0..block {
        s.push('b');
    }
    for _ in 0..len - 2 * block {
        s.push('c');
    }
    s
}

/// Period-3 cycle `abcabc...`: no palindrome longer than one symbol at any
/// length, which keeps the best radius at 1 and exercises early-termination
/// bookkeeping across the whole sequence.
pub fn repeating_cycle(len: usize) -> String {
    const CYCLE: [char; 3] = ['a', 'b', 'c'];
    (0..len).map(|i| CYCLE[i % 3]).collect()
}

/// Random letters with `pal` spliced in at a random position, so the result
/// is guaranteed to contain a palindrome at least `pal.len()` long.
pub fn plant_palindrome(seed: u64, len: usize, pal: &str) -> String {
    assert!(pal.len() <= len, "palindrome longer than requested input");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut s = random_letters(seed.wrapping_add(1), len - pal.len());
    let at = if s.is_empty() { 0 } else { rng.gen_range(0..=s.len()) };
    s.insert_str(at, pal);
    s
}
