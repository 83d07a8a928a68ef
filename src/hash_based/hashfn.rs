use sha2::digest::{Digest, Output, core_api::BlockSizeUser};

use crate::drbg::RESEED_INTERVAL;

/// Digest-size wide value produced by the family `F`.
pub type Hash<F> = Output<<F as HashFn>::Digest>;

pub trait HashFn {
    const NAME: &'static str;
    /// Bytes of security strength the family supports.
    const SECURITY_STRENGTH: usize;

    const MAX_RESEED_INTERVAL: u64 = RESEED_INTERVAL;

    type Digest: Digest + BlockSizeUser + Clone;

    fn hash_filled(byte: u8) -> Hash<Self>
    where
        Self: Sized,
    {
        let mut hash = Hash::<Self>::default();
        hash.iter_mut().for_each(|b| *b = byte);
        hash
    }
}

macro_rules! impl_hashfn {
    ($name:ident, $inner:ty, $label:literal, $strength:literal) => {
        pub struct $name;

        impl HashFn for $name {
            const NAME: &'static str = $label;
            const SECURITY_STRENGTH: usize = $strength;

            type Digest = $inner;
        }
    };
}

impl_hashfn!(Sha256, sha2::Sha256, "SHA-256", 32);
impl_hashfn!(Sha384, sha2::Sha384, "SHA-384", 32);
impl_hashfn!(Sha512, sha2::Sha512, "SHA-512", 32);
