use zeroize::Zeroize;

use crate::hash_based::hashfn::{Hash, HashFn};

mod session;

pub use session::HmacSession;

/// HMAC_DRBG working state `(K, V)` (SP 800-90A §10.1.2.1).
pub struct Hmac<F: HashFn> {
    v: Hash<F>,
    key: Hash<F>,
}

impl<F: HashFn> Hmac<F> {
    /// HMAC_DRBG_Update. `provided_data` is the concatenation of its chunks.
    fn update(&mut self, provided_data: &[&[u8]]) {
        self.mix(0x00, provided_data);

        if provided_data.iter().any(|chunk| !chunk.is_empty()) {
            self.mix(0x01, provided_data);
        }
    }

    fn mix(&mut self, separator: u8, provided_data: &[&[u8]]) {
        let mut kmac = HmacSession::<F>::new(&self.key);
        kmac.update(&self.v).update(&[separator]);
        for chunk in provided_data {
            kmac.update(chunk);
        }
        self.key = kmac.finalize();
        self.v = HmacSession::<F>::mac(&self.key, &self.v);
    }

    pub fn instantiate(seed_material: &[&[u8]]) -> Self {
        let mut hmac = Self {
            v: F::hash_filled(0x01),
            key: F::hash_filled(0x00),
        };
        hmac.update(seed_material);
        hmac
    }

    pub fn reseed(&mut self, seed_material: &[&[u8]]) {
        self.update(seed_material);
    }

    pub fn generate(&mut self, bytes: &mut [u8], additional_input: &[u8]) {
        if !additional_input.is_empty() {
            self.update(&[additional_input]);
        }
        // Blocks are exactly as wide as V.
        let block_len = self.v.len();
        for block in bytes.chunks_mut(block_len) {
            self.v = HmacSession::<F>::mac(&self.key, &self.v);
            block.copy_from_slice(&self.v[..block.len()]);
        }
        self.update(&[additional_input]);
    }
}

impl<F: HashFn> Drop for Hmac<F> {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
        self.v.as_mut_slice().zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_based::hashfn::{Sha256, Sha384};

    fn concat_update(v: &[u8], key: &[u8], sep: u8, data: &[u8]) -> (Hash<Sha256>, Hash<Sha256>) {
        let mut msg = v.to_vec();
        msg.push(sep);
        msg.extend_from_slice(data);
        let key = HmacSession::<Sha256>::mac(key, &msg);
        let v = HmacSession::<Sha256>::mac(&key, v);
        (key, v)
    }

    #[test]
    fn instantiate_follows_update_rounds() {
        let seed: &[u8] = b"instantiate seed";
        let hmac = Hmac::<Sha256>::instantiate(&[seed]);

        let (key, v) = concat_update(&[0x01; 32], &[0x00; 32], 0x00, seed);
        let (key, v) = concat_update(&v, &key, 0x01, seed);
        assert_eq!(hmac.key, key);
        assert_eq!(hmac.v, v);
    }

    #[test]
    fn empty_material_runs_one_round() {
        let hmac = Hmac::<Sha256>::instantiate(&[]);

        let (key, v) = concat_update(&[0x01; 32], &[0x00; 32], 0x00, &[]);
        assert_eq!(hmac.key, key);
        assert_eq!(hmac.v, v);
    }

    #[test]
    fn chunks_are_concatenated() {
        let split = Hmac::<Sha256>::instantiate(&[
            &b"entropy"[..],
            &b""[..],
            &b"nonce"[..],
            &b"pers"[..],
        ]);
        let joined = Hmac::<Sha256>::instantiate(&[&b"entropynoncepers"[..]]);
        assert_eq!(split.key, joined.key);
        assert_eq!(split.v, joined.v);
    }

    #[test]
    fn all_empty_chunks_count_as_no_material() {
        let empty: &[u8] = &[];
        let split = Hmac::<Sha256>::instantiate(&[empty, empty]);
        let none = Hmac::<Sha256>::instantiate(&[]);
        assert_eq!(split.key, none.key);
        assert_eq!(split.v, none.v);
    }

    #[test]
    fn generate_emits_successive_v_blocks() {
        let mut hmac = Hmac::<Sha256>::instantiate(&[&b"blocks"[..]]);
        let key = hmac.key.clone();
        let v1 = HmacSession::<Sha256>::mac(&key, &hmac.v);
        let v2 = HmacSession::<Sha256>::mac(&key, &v1);

        let mut out = [0u8; 40];
        hmac.generate(&mut out, &[]);
        assert_eq!(&out[..32], v1.as_slice());
        assert_eq!(&out[32..], &v2[..8]);
        assert_ne!(hmac.key, key);
    }

    #[test]
    fn blocks_are_digest_wide() {
        let mut hmac = Hmac::<Sha384>::instantiate(&[&b"wide blocks"[..]]);
        let v1 = HmacSession::<Sha384>::mac(&hmac.key, &hmac.v);
        let v2 = HmacSession::<Sha384>::mac(&hmac.key, &v1);

        let mut out = [0u8; 96];
        hmac.generate(&mut out, &[]);
        assert_eq!(&out[..48], v1.as_slice());
        assert_eq!(&out[48..], v2.as_slice());
    }

    struct External;

    impl HashFn for External {
        const NAME: &'static str = "external SHA-256";
        const SECURITY_STRENGTH: usize = 16;

        type Digest = sha2::Sha256;
    }

    #[test]
    fn external_family_uses_digest_width() {
        let mut external = Hmac::<External>::instantiate(&[&b"seed"[..]]);
        let mut builtin = Hmac::<Sha256>::instantiate(&[&b"seed"[..]]);

        let (mut a, mut b) = ([0u8; 64], [0u8; 64]);
        external.generate(&mut a, &[]);
        builtin.generate(&mut b, &[]);
        assert_eq!(a, b);
    }
}
