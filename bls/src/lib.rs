pub use crate::{
    cached_public_key::CachedPublicKey,
    consts::{DOMAIN_SEPARATION_TAG, SIGNED_MESSAGE_SIZE},
    error::Error,
    public_key::PublicKey,
    public_key_bytes::PublicKeyBytes,
    secret_key::SecretKey,
    secret_key_bytes::SecretKeyBytes,
    signature::Signature,
    signature_bytes::SignatureBytes,
};

pub mod consts;

mod cached_public_key;
mod error;
mod macros;
mod public_key;
mod public_key_bytes;
mod secret_key;
mod secret_key_bytes;
mod signature;
mod signature_bytes;

/// Appends `domain` to `message` the way every signature in this crate expects it.
///
/// The domain is written as 8 big-endian bytes so that the fork version (in the high half of the
/// domain) precedes the message type tag.
#[must_use]
pub fn signed_message(message: impl AsRef<[u8]>, domain: u64) -> Vec<u8> {
    let message = message.as_ref();
    let mut bytes = Vec::with_capacity(message.len() + size_of::<u64>());
    bytes.extend_from_slice(message);
    bytes.extend_from_slice(&domain.to_be_bytes());
    bytes
}
