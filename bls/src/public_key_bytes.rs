use derive_more::AsRef;
use fixed_hash::construct_fixed_hash;
use hex::FromHex;
use impl_serde::impl_fixed_hash_serde;

use crate::{consts::PUBLIC_KEY_COMPRESSED_SIZE, macros::impl_fixed_bytes_ssz, public_key::PublicKey};

construct_fixed_hash! {
    #[derive(AsRef)]
    pub struct PublicKeyBytes(PUBLIC_KEY_COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(PublicKeyBytes, PUBLIC_KEY_COMPRESSED_SIZE);

impl_fixed_bytes_ssz!(PublicKeyBytes, PUBLIC_KEY_COMPRESSED_SIZE);

impl From<PublicKey> for PublicKeyBytes {
    #[inline]
    fn from(public_key: PublicKey) -> Self {
        Self(public_key.as_raw().compress())
    }
}

impl FromHex for PublicKeyBytes {
    type Error = <[u8; PUBLIC_KEY_COMPRESSED_SIZE] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(digits: T) -> Result<Self, Self::Error> {
        FromHex::from_hex(digits).map(Self)
    }
}
