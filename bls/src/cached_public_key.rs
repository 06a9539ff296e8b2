use core::fmt::{Debug, Formatter, Result as FmtResult};

use derivative::Derivative;
use once_cell::race::OnceBox;
use serde::{Deserialize, Serialize};

use crate::{error::Error, public_key::PublicKey, public_key_bytes::PublicKeyBytes};

/// A compressed public key that is decompressed at most once.
///
/// Validator registries hold keys in compressed form.
/// Decompression is expensive and most keys are never used to verify anything.
#[derive(Default, Derivative, Deserialize, Serialize)]
#[derivative(PartialEq, Eq)]
#[serde(transparent)]
pub struct CachedPublicKey {
    bytes: PublicKeyBytes,
    #[derivative(PartialEq = "ignore")]
    #[serde(skip)]
    decompressed: OnceBox<PublicKey>,
}

// `OnceBox` does not implement `Clone`.
impl Clone for CachedPublicKey {
    fn clone(&self) -> Self {
        let Self {
            bytes,
            ref decompressed,
        } = *self;

        match decompressed.get().copied() {
            Some(public_key) => Self::new(bytes, public_key),
            None => bytes.into(),
        }
    }
}

impl Debug for CachedPublicKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter
            .debug_struct("CachedPublicKey")
            .field("bytes", &self.bytes)
            .finish()
    }
}

impl From<PublicKeyBytes> for CachedPublicKey {
    #[inline]
    fn from(bytes: PublicKeyBytes) -> Self {
        Self {
            bytes,
            decompressed: OnceBox::new(),
        }
    }
}

impl From<PublicKey> for CachedPublicKey {
    #[inline]
    fn from(public_key: PublicKey) -> Self {
        Self::new(public_key.into(), public_key)
    }
}

impl ssz::Encode for CachedPublicKey {
    #[inline]
    fn is_ssz_fixed_len() -> bool {
        true
    }

    #[inline]
    fn ssz_fixed_len() -> usize {
        <PublicKeyBytes as ssz::Encode>::ssz_fixed_len()
    }

    #[inline]
    fn ssz_bytes_len(&self) -> usize {
        ssz::Encode::ssz_bytes_len(&self.bytes)
    }

    #[inline]
    fn ssz_append(&self, buf: &mut Vec<u8>) {
        ssz::Encode::ssz_append(&self.bytes, buf)
    }
}

impl ssz::Decode for CachedPublicKey {
    #[inline]
    fn is_ssz_fixed_len() -> bool {
        true
    }

    #[inline]
    fn ssz_fixed_len() -> usize {
        <PublicKeyBytes as ssz::Decode>::ssz_fixed_len()
    }

    #[inline]
    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
        <PublicKeyBytes as ssz::Decode>::from_ssz_bytes(bytes).map(Into::into)
    }
}

impl tree_hash::TreeHash for CachedPublicKey {
    #[inline]
    fn tree_hash_type() -> tree_hash::TreeHashType {
        <PublicKeyBytes as tree_hash::TreeHash>::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        tree_hash::TreeHash::tree_hash_packed_encoding(&self.bytes)
    }

    fn tree_hash_packing_factor() -> usize {
        <PublicKeyBytes as tree_hash::TreeHash>::tree_hash_packing_factor()
    }

    #[inline]
    fn tree_hash_root(&self) -> tree_hash::Hash256 {
        tree_hash::TreeHash::tree_hash_root(&self.bytes)
    }
}

impl CachedPublicKey {
    #[must_use]
    pub fn new(bytes: PublicKeyBytes, public_key: PublicKey) -> Self {
        let decompressed = OnceBox::new();

        decompressed
            .set(Box::new(public_key))
            .expect("decompressed is empty because OnceBox::new returns an empty cell");

        Self {
            bytes,
            decompressed,
        }
    }

    #[inline]
    pub fn decompress(&self) -> Result<&PublicKey, Error> {
        self.decompressed
            .get_or_try_init(|| self.bytes.try_into().map(Box::new))
    }
}
