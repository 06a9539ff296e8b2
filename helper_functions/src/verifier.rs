#![expect(clippy::module_name_repetitions)]

use bls::{CachedPublicKey, PublicKey, Signature, SignatureBytes};
use derive_more::Constructor;
use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator as _};
use static_assertions::assert_not_impl_any;
use types::primitives::{Domain, H256};

use crate::error::{Error, SignatureKind};

/// Where signatures go once the structural checks on a message have passed.
///
/// Validation code is generic over this so that callers can choose between verifying signatures
/// one at a time, collecting them for a single batch check, or skipping them entirely.
pub trait Verifier {
    const IS_NULL: bool;

    fn reserve(&mut self, additional: usize);

    fn verify_singular(
        &mut self,
        message: H256,
        domain: Domain,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        signature_kind: SignatureKind,
    ) -> Result<(), Error>;

    fn extend(
        &mut self,
        triples: impl IntoIterator<Item = Triple>,
        signature_kind: SignatureKind,
    ) -> Result<(), Error>;

    fn finish(&self) -> Result<(), Error>;
}

impl<V: Verifier> Verifier for &mut V {
    const IS_NULL: bool = V::IS_NULL;

    #[inline]
    fn reserve(&mut self, additional: usize) {
        (*self).reserve(additional)
    }

    #[inline]
    fn verify_singular(
        &mut self,
        message: H256,
        domain: Domain,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        (*self).verify_singular(
            message,
            domain,
            signature_bytes,
            cached_public_key,
            signature_kind,
        )
    }

    #[inline]
    fn extend(
        &mut self,
        triples: impl IntoIterator<Item = Triple>,
        signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        (*self).extend(triples, signature_kind)
    }

    #[inline]
    fn finish(&self) -> Result<(), Error> {
        (**self).finish()
    }
}

pub struct NullVerifier;

impl Verifier for NullVerifier {
    const IS_NULL: bool = true;

    #[inline]
    fn reserve(&mut self, _additional: usize) {}

    #[inline]
    fn verify_singular(
        &mut self,
        _message: H256,
        _domain: Domain,
        _signature_bytes: SignatureBytes,
        _cached_public_key: &CachedPublicKey,
        _signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline]
    fn extend(
        &mut self,
        _triples: impl IntoIterator<Item = Triple>,
        _signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline]
    fn finish(&self) -> Result<(), Error> {
        Ok(())
    }
}

pub struct SingleVerifier;

impl Verifier for SingleVerifier {
    const IS_NULL: bool = false;

    #[inline]
    fn reserve(&mut self, _additional: usize) {}

    #[inline]
    fn verify_singular(
        &mut self,
        message: H256,
        domain: Domain,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        let public_key = *cached_public_key
            .decompress()
            .map_err(|source| Error::SignatureUndecodable {
                kind: signature_kind,
                source,
            })?;

        let triple = Triple::new(message, domain, signature_bytes, public_key);

        self.extend(core::iter::once(triple), signature_kind)
    }

    #[inline]
    fn extend(
        &mut self,
        triples: impl IntoIterator<Item = Triple>,
        signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        for triple in triples {
            let Triple {
                message,
                domain,
                signature_bytes,
                public_key,
            } = triple;

            let signature =
                Signature::try_from(signature_bytes).map_err(|source| {
                    Error::SignatureUndecodable {
                        kind: signature_kind,
                        source,
                    }
                })?;

            if !signature.verify(message, domain, &public_key) {
                return Err(Error::SignatureInvalid(signature_kind));
            }
        }

        Ok(())
    }

    #[inline]
    fn finish(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Collects signatures and verifies all of them at once in [`Verifier::finish`].
///
/// A failed batch does not say which signature is invalid.
#[derive(Default)]
pub struct MultiVerifier {
    triples: Vec<Triple>,
}

impl Verifier for MultiVerifier {
    const IS_NULL: bool = false;

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.triples.reserve_exact(additional);
    }

    #[inline]
    fn verify_singular(
        &mut self,
        message: H256,
        domain: Domain,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        let public_key = *cached_public_key
            .decompress()
            .map_err(|source| Error::SignatureUndecodable {
                kind: signature_kind,
                source,
            })?;

        let triple = Triple::new(message, domain, signature_bytes, public_key);

        self.triples.push(triple);

        Ok(())
    }

    #[inline]
    fn extend(
        &mut self,
        triples: impl IntoIterator<Item = Triple>,
        _signature_kind: SignatureKind,
    ) -> Result<(), Error> {
        self.triples.extend(triples);
        Ok(())
    }

    #[inline]
    fn finish(&self) -> Result<(), Error> {
        if self.triples.is_empty() {
            return Ok(());
        }

        let messages = self
            .triples
            .iter()
            .map(|triple| (triple.message.as_slice(), triple.domain));

        let signatures = self
            .triples
            .par_iter()
            .map(|triple| Signature::try_from(triple.signature_bytes))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| Error::SignatureUndecodable {
                kind: SignatureKind::Multi,
                source,
            })?;

        let public_keys = self.triples.iter().map(|triple| &triple.public_key);

        if !Signature::multi_verify(messages, signatures.iter(), public_keys) {
            return Err(Error::SignatureInvalid(SignatureKind::Multi));
        }

        Ok(())
    }
}

impl MultiVerifier {
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[derive(Constructor)]
pub struct Triple {
    message: H256,
    domain: Domain,
    signature_bytes: SignatureBytes,
    public_key: PublicKey,
}

// The implicit copying of a `Copy` triple makes it easy to verify one triple and return another.
assert_not_impl_any!(Triple: Copy);

#[cfg(test)]
mod tests {
    use bls::{SecretKey, SecretKeyBytes};
    use tap::{Conv as _, TryConv as _};

    use super::*;

    const DOMAIN: Domain = 0x0000_0000_0000_0002;

    #[test]
    fn multi_verifier_finalize_succeeds_with_0_signatures() -> Result<(), Error> {
        MultiVerifier::default().finish()
    }

    #[test]
    fn multi_verifier_finalize_succeeds_with_1_signature() -> Result<(), Error> {
        let secret_key = secret_key();
        let public_key = secret_key.to_public_key().into();
        let message = H256::default();
        let signature = secret_key.sign(message, DOMAIN).into();

        let mut verifier = MultiVerifier::default();
        assert!(verifier.is_empty());

        verifier.verify_singular(message, DOMAIN, signature, &public_key, SignatureKind::Proposal)?;
        assert_eq!(verifier.len(), 1);

        verifier.finish()
    }

    #[test]
    fn multi_verifier_finalize_fails_on_wrong_domain() -> Result<(), Error> {
        let secret_key = secret_key();
        let public_key = secret_key.to_public_key().into();
        let message = H256::default();
        let signature = secret_key.sign(message, DOMAIN).into();

        let mut verifier = MultiVerifier::default();
        verifier.verify_singular(message, DOMAIN + 1, signature, &public_key, SignatureKind::Proposal)?;

        assert_eq!(
            verifier.finish(),
            Err(Error::SignatureInvalid(SignatureKind::Multi)),
        );

        Ok(())
    }

    #[test]
    fn single_verifier_reports_signature_kind() {
        let secret_key = secret_key();
        let public_key = secret_key.to_public_key().into();
        let message = H256::default();
        let signature = secret_key.sign(message, DOMAIN).into();

        let result = SingleVerifier.verify_singular(
            H256::repeat_byte(1),
            DOMAIN,
            signature,
            &public_key,
            SignatureKind::VoluntaryExit,
        );

        assert_eq!(
            result,
            Err(Error::SignatureInvalid(SignatureKind::VoluntaryExit)),
        );
    }

    #[test]
    fn single_verifier_rejects_undecodable_signature() {
        let public_key = secret_key().to_public_key().into();

        let result = SingleVerifier.verify_singular(
            H256::default(),
            DOMAIN,
            SignatureBytes::zero(),
            &public_key,
            SignatureKind::Proposal,
        );

        assert_eq!(
            result,
            Err(Error::SignatureUndecodable {
                kind: SignatureKind::Proposal,
                source: bls::Error::InvalidSignature,
            }),
        );
    }

    #[test]
    fn only_null_verifier_is_null() {
        let is_null = [
            NullVerifier::IS_NULL,
            <&mut NullVerifier>::IS_NULL,
            SingleVerifier::IS_NULL,
            MultiVerifier::IS_NULL,
            <&mut MultiVerifier>::IS_NULL,
        ];

        assert_eq!(is_null, [true, true, false, false, false]);
    }

    #[test]
    fn null_verifier_accepts_anything() -> Result<(), Error> {
        let mut verifier = NullVerifier;

        verifier.verify_singular(
            H256::default(),
            DOMAIN,
            SignatureBytes::zero(),
            &CachedPublicKey::default(),
            SignatureKind::Proposal,
        )?;

        verifier.finish()
    }

    fn secret_key() -> SecretKey {
        [b'?'; 32]
            .conv::<SecretKeyBytes>()
            .try_conv::<SecretKey>()
            .expect("bytes encode a valid secret key")
    }
}
