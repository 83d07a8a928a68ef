use crate::hash_based::{
    hashfn::{HashFn, Sha256},
    hmac::Hmac,
};
use log::{debug, trace, warn};

mod builder;
mod rng_core;

pub use builder::DrbgBuilder;

/// Maximum number of generate requests between seedings (SP 800-90A Table 2).
pub const RESEED_INTERVAL: u64 = 1 << 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrbgError {
    #[error("reseed interval exhausted, DRBG must be reseeded")]
    ReseedRequired,
}

/// HMAC_DRBG instance over the hash family `F`.
///
/// Every operation takes `&mut self`; share an instance across threads only
/// behind external synchronization.
pub struct Drbg<F: HashFn = Sha256> {
    variant: Hmac<F>,
    pub(crate) reseed_counter: u64,
}

impl<F: HashFn> Drbg<F> {
    /// Instantiates from `seed` (entropy, nonce and personalization already
    /// concatenated by the caller).
    pub fn new(seed: &[u8]) -> Self {
        Self::instantiate(&[seed])
    }

    pub fn builder() -> DrbgBuilder<F> {
        DrbgBuilder::new()
    }

    fn instantiate(seed_material: &[&[u8]]) -> Self {
        debug!(
            "instantiating HMAC_DRBG({}) at {}-bit strength from {} bytes of seed material",
            F::NAME,
            F::SECURITY_STRENGTH * 8,
            seed_len(seed_material)
        );
        Self {
            variant: Hmac::instantiate(seed_material),
            reseed_counter: 1,
        }
    }

    pub fn reseed(&mut self, seed: &[u8]) {
        self.reseed_with_ai(seed, &[]);
    }

    pub fn reseed_with_ai(&mut self, entropy_input: &[u8], additional_input: &[u8]) {
        debug!(
            "reseeding HMAC_DRBG({}) after {} requests with {} bytes of seed material",
            F::NAME,
            self.reseed_counter - 1,
            entropy_input.len() + additional_input.len()
        );
        self.variant.reseed(&[entropy_input, additional_input]);
        self.reseed_counter = 1;
    }

    pub fn generate(&mut self, requested_number_of_bytes: usize) -> Result<Vec<u8>, DrbgError> {
        self.generate_with_ai(requested_number_of_bytes, &[])
    }

    pub fn generate_with_ai(
        &mut self,
        requested_number_of_bytes: usize,
        additional_input: &[u8],
    ) -> Result<Vec<u8>, DrbgError> {
        let mut bytes = vec![0; requested_number_of_bytes];
        self.fill_bytes_with_ai(&mut bytes, additional_input)?;
        Ok(bytes)
    }

    pub fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), DrbgError> {
        self.fill_bytes_with_ai(bytes, &[])
    }

    pub fn fill_bytes_with_ai(
        &mut self,
        bytes: &mut [u8],
        additional_input: &[u8],
    ) -> Result<(), DrbgError> {
        if self.reseed_counter > F::MAX_RESEED_INTERVAL {
            warn!(
                "HMAC_DRBG({}) refused a request: {} requests since last seeding",
                F::NAME,
                self.reseed_counter - 1
            );
            return Err(DrbgError::ReseedRequired);
        }
        trace!(
            "HMAC_DRBG({}) generating {} bytes, request {}",
            F::NAME,
            bytes.len(),
            self.reseed_counter
        );
        self.variant.generate(bytes, additional_input);
        self.reseed_counter += 1;
        Ok(())
    }

    /// Generate requests since the last (re)seed, plus one.
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    pub fn needs_reseed(&self) -> bool {
        self.reseed_counter > F::MAX_RESEED_INTERVAL
    }
}

impl<F: HashFn> std::fmt::Debug for Drbg<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drbg")
            .field("hash", &F::NAME)
            .field("reseed_counter", &self.reseed_counter)
            .finish_non_exhaustive()
    }
}

fn seed_len(seed_material: &[&[u8]]) -> usize {
    seed_material.iter().map(|chunk| chunk.len()).sum()
}
