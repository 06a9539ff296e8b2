use bls::{CachedPublicKey, SecretKey, Signature, SignatureBytes};
use tree_hash::TreeHash as _;
use types::{
    config::Config,
    containers::{Fork, ProposalSignedData, VoluntaryExit},
    primitives::{Domain, DomainType, Epoch, Slot, H256},
};

use crate::{
    error::{Error, SignatureKind},
    misc,
    verifier::{SingleVerifier, Verifier},
};

/// Messages whose domain depends on the epoch they were signed in.
pub trait SignForSingleFork {
    const SIGNATURE_KIND: SignatureKind;

    fn domain_type(config: &Config) -> DomainType;

    fn epoch(&self) -> Epoch;

    fn signing_root(&self) -> H256;

    fn domain(&self, config: &Config, fork: Fork) -> Domain {
        misc::compute_domain(fork, self.epoch(), Self::domain_type(config))
    }

    fn sign(&self, config: &Config, fork: Fork, secret_key: &SecretKey) -> Signature {
        secret_key.sign(self.signing_root(), self.domain(config, fork))
    }

    fn verify(
        &self,
        config: &Config,
        fork: Fork,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
    ) -> Result<(), Error> {
        self.verify_with(config, fork, signature_bytes, cached_public_key, SingleVerifier)
    }

    fn verify_with(
        &self,
        config: &Config,
        fork: Fork,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        mut verifier: impl Verifier,
    ) -> Result<(), Error> {
        verifier.verify_singular(
            self.signing_root(),
            self.domain(config, fork),
            signature_bytes,
            cached_public_key,
            Self::SIGNATURE_KIND,
        )
    }
}

/// Messages that carry a slot instead of an epoch.
pub trait SignForSingleForkAtSlot {
    const SIGNATURE_KIND: SignatureKind;

    fn domain_type(config: &Config) -> DomainType;

    fn slot(&self) -> Slot;

    fn signing_root(&self) -> H256;

    fn domain(&self, config: &Config, fork: Fork) -> Domain {
        let epoch = misc::compute_epoch_at_slot(config, self.slot());
        misc::compute_domain(fork, epoch, Self::domain_type(config))
    }

    fn sign(&self, config: &Config, fork: Fork, secret_key: &SecretKey) -> Signature {
        secret_key.sign(self.signing_root(), self.domain(config, fork))
    }

    fn verify(
        &self,
        config: &Config,
        fork: Fork,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
    ) -> Result<(), Error> {
        self.verify_with(config, fork, signature_bytes, cached_public_key, SingleVerifier)
    }

    fn verify_with(
        &self,
        config: &Config,
        fork: Fork,
        signature_bytes: SignatureBytes,
        cached_public_key: &CachedPublicKey,
        mut verifier: impl Verifier,
    ) -> Result<(), Error> {
        verifier.verify_singular(
            self.signing_root(),
            self.domain(config, fork),
            signature_bytes,
            cached_public_key,
            Self::SIGNATURE_KIND,
        )
    }
}

impl SignForSingleForkAtSlot for ProposalSignedData {
    const SIGNATURE_KIND: SignatureKind = SignatureKind::Proposal;

    fn domain_type(config: &Config) -> DomainType {
        config.domain_proposal
    }

    fn slot(&self) -> Slot {
        self.slot
    }

    fn signing_root(&self) -> H256 {
        self.tree_hash_root()
    }
}

impl SignForSingleFork for VoluntaryExit {
    const SIGNATURE_KIND: SignatureKind = SignatureKind::VoluntaryExit;

    fn domain_type(config: &Config) -> DomainType {
        config.domain_exit
    }

    fn epoch(&self) -> Epoch {
        self.epoch
    }

    // The root of the container with the signature field left out.
    fn signing_root(&self) -> H256 {
        let Self {
            epoch,
            validator_index,
            signature: _,
        } = *self;

        let mut leaves = [0; 64];
        leaves[..32].copy_from_slice(epoch.tree_hash_root().as_slice());
        leaves[32..].copy_from_slice(validator_index.tree_hash_root().as_slice());

        tree_hash::merkle_root(&leaves, 2)
    }
}

#[cfg(test)]
mod tests {
    use bls::{PublicKey, SecretKeyBytes};
    use tap::{Conv as _, TryConv as _};
    use tree_hash_derive::TreeHash;

    use super::*;

    #[derive(TreeHash)]
    struct UnsignedVoluntaryExit {
        epoch: Epoch,
        validator_index: u64,
    }

    const FORK: Fork = Fork {
        previous_version: 1,
        current_version: 2,
        epoch: 3,
    };

    #[test]
    fn voluntary_exit_signing_root_excludes_signature() {
        let exit = VoluntaryExit::new(4, 5);

        let expected = UnsignedVoluntaryExit {
            epoch: 4,
            validator_index: 5,
        }
        .tree_hash_root();

        assert_eq!(exit.signing_root(), expected);
        assert_eq!(
            exit.with_signature(SignatureBytes::repeat_byte(1)).signing_root(),
            expected,
        );
    }

    #[test]
    fn proposal_domain_uses_epoch_of_slot() {
        let config = Config::minimal();
        let before_fork = ProposalSignedData::new(23, 0, H256::ZERO);
        let after_fork = before_fork.with_slot(24);

        assert_eq!(before_fork.domain(&config, FORK), 0x0000_0001_0000_0002);
        assert_eq!(after_fork.domain(&config, FORK), 0x0000_0002_0000_0002);
    }

    #[test]
    fn signed_proposal_verifies() -> Result<(), Error> {
        let config = Config::minimal();
        let (secret_key, public_key) = keypair();
        let proposal = ProposalSignedData::new(1, 2, H256::repeat_byte(3));
        let signature = proposal.sign(&config, FORK, &secret_key).into();

        proposal.verify(&config, FORK, signature, &public_key.into())
    }

    #[test]
    fn signed_voluntary_exit_fails_to_verify_in_other_fork() {
        let config = Config::minimal();
        let (secret_key, public_key) = keypair();
        let exit = VoluntaryExit::new(4, 0);
        let signature = exit.sign(&config, FORK, &secret_key).into();

        let other_fork = Fork {
            current_version: 7,
            ..FORK
        };

        assert_eq!(
            exit.verify(&config, other_fork, signature, &public_key.into()),
            Err(Error::SignatureInvalid(SignatureKind::VoluntaryExit)),
        );
    }

    fn keypair() -> (SecretKey, PublicKey) {
        let secret_key = [b'?'; 32]
            .conv::<SecretKeyBytes>()
            .try_conv::<SecretKey>()
            .expect("bytes encode a valid secret key");

        let public_key = secret_key.to_public_key();

        (secret_key, public_key)
    }
}
