use hmac::{Mac, SimpleHmac};

use crate::hash_based::hashfn::{Hash, HashFn};

/// Keyed-hash session: acquire with a key, feed chunks, finalize.
///
/// Chunks are absorbed in order, so `V`, a separator byte and the provided
/// material can be fed separately without building the concatenation.
pub struct HmacSession<F: HashFn> {
    mac: SimpleHmac<F::Digest>,
}

impl<F: HashFn> HmacSession<F> {
    pub fn new(key: &[u8]) -> Self {
        // HMAC hashes or pads keys of any length.
        let mac = <SimpleHmac<F::Digest> as Mac>::new_from_slice(key)
            .expect("HMAC accepts keys of any length");
        Self { mac }
    }

    pub fn update(&mut self, chunk: &[u8]) -> &mut Self {
        self.mac.update(chunk);
        self
    }

    pub fn finalize(self) -> Hash<F> {
        self.mac.finalize().into_bytes()
    }

    /// One-shot `HMAC(key, message)`.
    pub fn mac(key: &[u8], message: &[u8]) -> Hash<F> {
        let mut session = Self::new(key);
        session.update(message);
        session.finalize()
    }
}
