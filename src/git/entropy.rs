// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sources of the simulator's pseudo-random values.
//!
//! ```text
//! Entropy
//!   short_hash()        7 chars of [0-9a-z]   commit / push hashes
//!   mock_file_number()  0..100                file<N>.txt
//!
//! RngEntropy<ThreadRng>  default
//! RngEntropy<StdRng>     simulator.seed set (reproducible session)
//! SequenceEntropy        counter based, fully predictable
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Characters a short hash is drawn from.
pub const HASH_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated hash.
pub const HASH_LEN: usize = 7;

/// Exclusive upper bound for mock file numbers.
pub const MOCK_FILE_RANGE: u32 = 100;

/// Supplies hashes and mock file numbers to the simulator.
pub trait Entropy {
    /// A fresh `HASH_LEN` character base36 hash.
    fn short_hash(&mut self) -> String;

    /// A number in `0..MOCK_FILE_RANGE`.
    fn mock_file_number(&mut self) -> u32;
}

/// [`Entropy`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl RngEntropy<ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RngEntropy<StdRng> {
    /// Deterministic generator; equal seeds yield equal sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Entropy for RngEntropy<R> {
    fn short_hash(&mut self) -> String {
        (0..HASH_LEN)
            .map(|_| char::from(HASH_ALPHABET[self.rng.random_range(0..HASH_ALPHABET.len())]))
            .collect()
    }

    fn mock_file_number(&mut self) -> u32 {
        self.rng.random_range(0..MOCK_FILE_RANGE)
    }
}

/// Counter-based [`Entropy`]: hashes `0000001`, `0000002`, ... and mock files
/// `file1.txt`, `file2.txt`, ...
#[derive(Debug, Clone, Default)]
pub struct SequenceEntropy {
    hashes: u64,
    files: u32,
}

impl SequenceEntropy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hashes: 0,
            files: 0,
        }
    }
}

impl Entropy for SequenceEntropy {
    fn short_hash(&mut self) -> String {
        self.hashes += 1;
        to_base36(self.hashes)
    }

    fn mock_file_number(&mut self) -> u32 {
        self.files = (self.files + 1) % MOCK_FILE_RANGE;
        self.files
    }
}

/// Zero-padded `HASH_LEN` base36 rendering of `value` (wraps on overflow).
fn to_base36(mut value: u64) -> String {
    let mut digits = [b'0'; HASH_LEN];
    for slot in digits.iter_mut().rev() {
        // Index is always < 36
        #[allow(clippy::cast_possible_truncation)]
        let index = (value % 36) as usize;
        *slot = HASH_ALPHABET[index];
        value /= 36;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}

/// True if `hash` looks like something [`Entropy::short_hash`] produced.
#[must_use]
pub fn is_short_hash(hash: &str) -> bool {
    hash.len() == HASH_LEN && hash.bytes().all(|b| HASH_ALPHABET.contains(&b))
}
