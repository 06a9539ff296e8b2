use blst::min_pk::PublicKey as RawPublicKey;
use derive_more::From;

use crate::{error::Error, public_key_bytes::PublicKeyBytes};

#[derive(Clone, Copy, PartialEq, Eq, Debug, From)]
pub struct PublicKey(RawPublicKey);

impl TryFrom<PublicKeyBytes> for PublicKey {
    type Error = Error;

    #[inline]
    fn try_from(bytes: PublicKeyBytes) -> Result<Self, Self::Error> {
        let raw =
            RawPublicKey::uncompress(bytes.as_bytes()).map_err(|_| Error::InvalidPublicKey)?;

        // Reject the point at infinity and points outside the prime order subgroup.
        raw.validate().map_err(|_| Error::InvalidPublicKey)?;

        Ok(Self(raw))
    }
}

impl PublicKey {
    #[must_use]
    pub(crate) const fn as_raw(&self) -> &RawPublicKey {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_try_from_rejects_zero_bytes() {
        assert_eq!(
            PublicKey::try_from(PublicKeyBytes::zero()),
            Err(Error::InvalidPublicKey),
        );
    }

    #[test]
    fn public_key_try_from_rejects_point_at_infinity() {
        let mut bytes = PublicKeyBytes::zero();
        bytes.as_mut()[0] = 0xc0;

        assert_eq!(PublicKey::try_from(bytes), Err(Error::InvalidPublicKey));
    }
}
