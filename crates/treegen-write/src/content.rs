//! Sources of file content bytes.

use std::io::{self, Read, Repeat};

use rand::RngCore;
use rand::rngs::OsRng;

use treegen_core::FillMode;

/// Reader over the operating system's secure random source.
///
/// Independent of the seeded structural generator: content bytes are never
/// reproducible and never need to be.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl Read for OsRandom {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        OsRng.try_fill_bytes(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }
}

/// Content source selected by [`FillMode`].
#[derive(Debug)]
pub enum ContentSource {
    /// Secure random bytes.
    Random(OsRandom),
    /// Zero bytes.
    Zero(Repeat),
}

impl ContentSource {
    /// Create the source matching a fill mode.
    pub fn from_fill(fill: FillMode) -> Self {
        match fill {
            FillMode::Random => Self::Random(OsRandom),
            FillMode::Zero => Self::Zero(io::repeat(0)),
        }
    }
}

impl Read for ContentSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Random(source) => source.read(buf),
            Self::Zero(source) => source.read(buf),
        }
    }
}
