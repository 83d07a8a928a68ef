//! HMAC_DRBG as specified in NIST SP 800-90A §10.1.2 and used by RFC 6979.
//!
//! ```
//! use kondrbg::HmacDrbg;
//!
//! let mut drbg = HmacDrbg::new(b"entropy || nonce || personalization");
//! let first = drbg.generate(32)?;
//! let second = drbg.generate(32)?;
//! assert_ne!(first, second);
//! # Ok::<(), kondrbg::DrbgError>(())
//! ```

mod drbg;
mod hash_based;
mod rng;

pub use drbg::{Drbg, DrbgBuilder, DrbgError, RESEED_INTERVAL};
pub use hash_based::hashfn::{Hash, HashFn, Sha256, Sha384, Sha512};
pub use hash_based::hmac::HmacSession;
pub use rng::{ByteSource, DrbgRng};

macro_rules! define_all_drbg {
    ($(($name:ident, $hash:ident)),*$(,)?) => {
        $(
            #[doc = concat!("HMAC_DRBG over ", stringify!($hash), ".")]
            pub type $name = Drbg<$hash>;
        )*
    };
}

define_all_drbg!(
    (DrbgHmacSha256, Sha256),
    (DrbgHmacSha384, Sha384),
    (DrbgHmacSha512, Sha512),
);

/// The default construction, HMAC_DRBG over SHA-256.
pub type HmacDrbg = DrbgHmacSha256;
