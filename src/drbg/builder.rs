use std::marker::PhantomData;

use zeroize::Zeroizing;

use crate::{drbg::Drbg, hash_based::hashfn::HashFn};

/// Collects the SP 800-90A instantiate inputs. Seed material is
/// `entropy_input || nonce || personalization_string`.
pub struct DrbgBuilder<F: HashFn> {
    entropy_input: Zeroizing<Vec<u8>>,
    nonce: Zeroizing<Vec<u8>>,
    personalization_string: Zeroizing<Vec<u8>>,
    _hash: PhantomData<F>,
}

impl<F: HashFn> DrbgBuilder<F> {
    pub fn new() -> Self {
        Self {
            entropy_input: Zeroizing::new(Vec::new()),
            nonce: Zeroizing::new(Vec::new()),
            personalization_string: Zeroizing::new(Vec::new()),
            _hash: PhantomData,
        }
    }

    pub fn entropy(mut self, entropy_input: &[u8]) -> Self {
        self.entropy_input = Zeroizing::new(entropy_input.to_vec());
        self
    }

    pub fn nonce(mut self, nonce: &[u8]) -> Self {
        self.nonce = Zeroizing::new(nonce.to_vec());
        self
    }

    pub fn personalization_string(mut self, personalization_string: &[u8]) -> Self {
        self.personalization_string = Zeroizing::new(personalization_string.to_vec());
        self
    }

    pub fn build(self) -> Drbg<F> {
        Drbg::instantiate(&[
            self.entropy_input.as_slice(),
            self.nonce.as_slice(),
            self.personalization_string.as_slice(),
        ])
    }
}

impl<F: HashFn> Default for DrbgBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
