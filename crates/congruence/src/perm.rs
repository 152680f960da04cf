//! Label permutations on the three vertex slots.
//!
//! Every triangle carries an independently randomized bijection from
//! positional vertex (0,1,2) to display label (0,1,2); the statement check in
//! `validate` composes and inverts these mappings. Keeping the bijection an
//! explicit type with its own small algebra makes that check auditable in
//! isolation from any rendering concern.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Bijection on {0,1,2}: `apply(k)` is the label shown at positional slot k.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Perm3([u8; 3]);

/// A caller-supplied label triple that is not a bijection on {0,1,2}.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPermutation {
    pub values: [u8; 3],
}

impl fmt::Display for InvalidPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a permutation of {{0,1,2}}: {:?}", self.values)
    }
}

impl std::error::Error for InvalidPermutation {}

impl Perm3 {
    pub const IDENTITY: Perm3 = Perm3([0, 1, 2]);

    /// Validate and wrap a label triple.
    pub fn new(values: [u8; 3]) -> Result<Self, InvalidPermutation> {
        let mut seen = [false; 3];
        for &v in &values {
            if v > 2 || seen[v as usize] {
                return Err(InvalidPermutation { values });
            }
            seen[v as usize] = true;
        }
        Ok(Self(values))
    }

    /// Label assigned to positional slot `k` (k < 3).
    #[inline]
    pub fn apply(self, k: usize) -> usize {
        self.0[k] as usize
    }

    #[inline]
    pub fn as_array(self) -> [u8; 3] {
        self.0
    }

    /// Inverse bijection: label to positional slot.
    pub fn invert(self) -> Perm3 {
        let mut inv = [0u8; 3];
        for (slot, &label) in self.0.iter().enumerate() {
            inv[label as usize] = slot as u8;
        }
        Perm3(inv)
    }

    /// `self . other`: applies `other` first, then `self`.
    pub fn compose(self, other: Perm3) -> Perm3 {
        Perm3([
            self.0[other.0[0] as usize],
            self.0[other.0[1] as usize],
            self.0[other.0[2] as usize],
        ])
    }

    /// Uniform random permutation (Fisher-Yates shuffle).
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Perm3 {
        let mut values = [0u8, 1, 2];
        values.shuffle(rng);
        Perm3(values)
    }

    /// All six permutations, identity first.
    pub fn all() -> [Perm3; 6] {
        [
            Perm3([0, 1, 2]),
            Perm3([0, 2, 1]),
            Perm3([1, 0, 2]),
            Perm3([1, 2, 0]),
            Perm3([2, 0, 1]),
            Perm3([2, 1, 0]),
        ]
    }
}
