//! Arbitrary-width integers drawn from a DRBG stream.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    drbg::{Drbg, DrbgError},
    hash_based::hashfn::HashFn,
};

/// Bytes drawn per refill of the bit buffer.
const CHUNK_LEN: usize = 32;
const CHUNK_BITS: u64 = (CHUNK_LEN * 8) as u64;

pub trait ByteSource {
    type Error;

    fn generate(&mut self, len: usize) -> Result<Vec<u8>, Self::Error>;
}

impl<F: HashFn> ByteSource for Drbg<F> {
    type Error = DrbgError;

    fn generate(&mut self, len: usize) -> Result<Vec<u8>, Self::Error> {
        Drbg::generate(self, len)
    }
}

/// Draws big integers from a [`ByteSource`], carrying unused low-order bits
/// of each 256-bit chunk over to the next request.
pub struct DrbgRng<S> {
    source: S,
    save: BigUint,
}

impl<S: ByteSource> DrbgRng<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            save: BigUint::zero(),
        }
    }

    fn next_chunk(&mut self) -> Result<BigUint, S::Error> {
        let bytes = self.source.generate(CHUNK_LEN)?;
        Ok(BigUint::from_bytes_be(&bytes))
    }

    /// Uniform value in `[0, 2^bits)`.
    ///
    /// The carried bits are measured by the bit length of the saved value,
    /// so leading zero bits of the carry are discarded.
    pub fn random_bits(&mut self, bits: u64) -> Result<BigUint, S::Error> {
        let mut ret = self.save.clone();
        let mut b = ret.bits();

        while b < bits {
            ret <<= CHUNK_BITS;
            ret += self.next_chunk()?;
            b += CHUNK_BITS;
        }

        let left = b - bits;
        let mask = (BigUint::one() << left) - 1u32;
        self.save = &ret & &mask;
        ret >>= left;

        Ok(ret)
    }

    /// Uniform value in `[0, max)`, or zero when `max` is zero.
    pub fn random_int(&mut self, max: &BigUint) -> Result<BigUint, S::Error> {
        if max.is_zero() {
            return Ok(BigUint::zero());
        }

        let bits = max.bits();
        loop {
            let candidate = self.random_bits(bits)?;
            if candidate < *max {
                return Ok(candidate);
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
