//! Random index sources.
//!
//! Generation never touches a concrete RNG directly: it asks an
//! [`IndexSource`] for positions in the character pool. Any `rand` RNG is an
//! index source, so tests can inject a seeded `StdRng` or a scripted source.

use rand::rngs::{OsRng, ThreadRng};
use rand::{Rng, RngCore};

/// Uniform random index provider.
pub trait IndexSource {
    /// Returns a uniformly distributed value in `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> IndexSource for R {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        // gen_range rejects and resamples, so there is no modulo bias
        self.gen_range(0..bound)
    }
}

/// Which generator backs a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Thread-local ChaCha12, reseeded from the OS.
    #[default]
    Thread,
    /// Every draw goes to the operating system (getrandom / /dev/urandom).
    Os,
}

impl SourceKind {
    pub fn from_urandom(urandom: bool) -> Self {
        if urandom {
            SourceKind::Os
        } else {
            SourceKind::Thread
        }
    }

    pub fn is_os(self) -> bool {
        self == SourceKind::Os
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Thread => "thread rng (ChaCha12)",
            SourceKind::Os => "OS rng (getrandom)",
        }
    }

    pub fn open(self) -> Source {
        match self {
            SourceKind::Thread => Source::Thread(rand::thread_rng()),
            SourceKind::Os => Source::Os(OsRng),
        }
    }
}

/// Runtime-selected random generator.
#[derive(Debug, Clone)]
pub enum Source {
    Thread(ThreadRng),
    Os(OsRng),
}

impl Source {
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Thread(_) => SourceKind::Thread,
            Source::Os(_) => SourceKind::Os,
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        SourceKind::default().open()
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Thread(rng) => rng.next_u32(),
            Source::Os(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Thread(rng) => rng.next_u64(),
            Source::Os(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Thread(rng) => rng.fill_bytes(dest),
            Source::Os(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Thread(rng) => rng.try_fill_bytes(dest),
            Source::Os(rng) => rng.try_fill_bytes(dest),
        }
    }
}
