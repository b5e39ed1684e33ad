use std::hash::{BuildHasher, Hash, Hasher};

/// A key with a chosen hash, for placing entries into exact buckets. Equality only considers the
/// `value`, so colliding keys can be created on purpose.
#[derive(Debug, Clone, Copy)]
pub struct FixedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> FixedHash<T> {
    /// Creates a key which hashes to exactly `hash` under [`IdentityHasherBuilder`].
    pub const fn new(hash: u64, value: T) -> FixedHash<T> {
        FixedHash { hash, value }
    }
}

impl<T: Eq> Hash for FixedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for FixedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for FixedHash<T> {}

/// A Hasher which returns the last `u64` written to it, unchanged.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | u64::from(*byte);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

/// Builds [`IdentityHasher`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
