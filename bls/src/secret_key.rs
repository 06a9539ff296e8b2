use blst::min_pk::SecretKey as RawSecretKey;
use derive_more::Debug;
use static_assertions::assert_not_impl_any;

use crate::{
    consts::DOMAIN_SEPARATION_TAG, error::Error, public_key::PublicKey,
    secret_key_bytes::SecretKeyBytes, signature::Signature,
};

// `RawSecretKey` already implements `Zeroize` (with `zeroize(drop)`).
#[derive(Debug)]
#[debug("[REDACTED]")]
pub struct SecretKey(RawSecretKey);

// Prevent `SecretKey` from implementing some traits to avoid leaking secret keys.
assert_not_impl_any! {
    SecretKey:

    Clone,
    Copy,
    core::ops::Deref,
    ToOwned,

    core::fmt::Binary,
    core::fmt::Display,
    core::fmt::LowerExp,
    core::fmt::LowerHex,
    core::fmt::Octal,
    core::fmt::Pointer,
    core::fmt::UpperExp,
    core::fmt::UpperHex,

    serde::Serialize,
    ssz::Encode,
    tree_hash::TreeHash,
}

impl PartialEq for SecretKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_raw().to_bytes() == other.as_raw().to_bytes()
    }
}

impl Eq for SecretKey {}

impl TryFrom<SecretKeyBytes> for SecretKey {
    type Error = Error;

    #[inline]
    fn try_from(secret_key_bytes: SecretKeyBytes) -> Result<Self, Self::Error> {
        RawSecretKey::from_bytes(secret_key_bytes.as_ref())
            .map(Self)
            .map_err(|_| Error::InvalidSecretKey)
    }
}

impl SecretKey {
    #[inline]
    #[must_use]
    pub fn to_public_key(&self) -> PublicKey {
        self.as_raw().sk_to_pk().into()
    }

    /// Signs `message` under `domain`.
    ///
    /// See [`crate::signed_message`] for how the two are combined.
    #[inline]
    #[must_use]
    pub fn sign(&self, message: impl AsRef<[u8]>, domain: u64) -> Signature {
        let message = crate::signed_message(message, domain);

        self.as_raw()
            .sign(message.as_slice(), DOMAIN_SEPARATION_TAG, &[])
            .into()
    }

    const fn as_raw(&self) -> &RawSecretKey {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use hex::FromHex as _;

    use super::*;

    #[test]
    fn secret_key_try_from_rejects_zero() {
        assert_eq!(
            SecretKey::try_from(SecretKeyBytes::default()),
            Err(Error::InvalidSecretKey),
        );
    }

    #[test]
    fn secret_key_try_from_rejects_values_not_below_curve_order() -> Result<(), hex::FromHexError>
    {
        let curve_order = SecretKeyBytes::from_hex(
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        )?;

        assert_eq!(SecretKey::try_from(curve_order), Err(Error::InvalidSecretKey));

        Ok(())
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let secret_key = SecretKey::try_from(SecretKeyBytes::from([1; 32]))
            .expect("bytes encode a valid secret key");

        assert_eq!(format!("{secret_key:?}"), "[REDACTED]");
    }
}
