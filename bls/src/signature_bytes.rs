use derive_more::AsRef;
use fixed_hash::construct_fixed_hash;
use hex::FromHex;
use impl_serde::impl_fixed_hash_serde;

use crate::{consts::SIGNATURE_COMPRESSED_SIZE, macros::impl_fixed_bytes_ssz, signature::Signature};

construct_fixed_hash! {
    #[derive(AsRef)]
    pub struct SignatureBytes(SIGNATURE_COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(SignatureBytes, SIGNATURE_COMPRESSED_SIZE);

impl_fixed_bytes_ssz!(SignatureBytes, SIGNATURE_COMPRESSED_SIZE);

impl From<Signature> for SignatureBytes {
    #[inline]
    fn from(signature: Signature) -> Self {
        Self(signature.as_raw().compress())
    }
}

impl FromHex for SignatureBytes {
    type Error = <[u8; SIGNATURE_COMPRESSED_SIZE] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(digits: T) -> Result<Self, Self::Error> {
        FromHex::from_hex(digits).map(Self)
    }
}

impl SignatureBytes {
    /// The compressed point at infinity.
    #[inline]
    #[must_use]
    pub fn infinity() -> Self {
        let mut bytes = Self::zero();
        bytes.as_mut()[0] = 0xc0;
        bytes
    }
}
