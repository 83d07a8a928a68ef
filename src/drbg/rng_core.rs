use rand_core::{TryCryptoRng, TryRngCore};

use crate::{
    drbg::{Drbg, DrbgError},
    hash_based::hashfn::HashFn,
};

// Each call is one generate request.
impl<F: HashFn> TryRngCore for Drbg<F> {
    type Error = DrbgError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut bytes = [0; 4];
        self.fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut bytes = [0; 8];
        self.fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        Drbg::fill_bytes(self, dst)
    }
}

impl<F: HashFn> TryCryptoRng for Drbg<F> {}
