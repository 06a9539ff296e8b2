use bls::SignatureBytes;
use static_assertions::assert_impl_all;

use crate::{
    consts::EMPTY_SIGNATURE,
    containers::{ProposalSignedData, ProposerSlashing, VoluntaryExit},
    primitives::{Epoch, Shard, Slot, ValidatorIndex, H256},
};

assert_impl_all!(ProposalSignedData: Copy, Send, Sync);
assert_impl_all!(ProposerSlashing: Copy, Send, Sync);
assert_impl_all!(VoluntaryExit: Copy, Send, Sync);

impl ProposalSignedData {
    #[inline]
    #[must_use]
    pub const fn with_slot(self, slot: Slot) -> Self {
        Self { slot, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_shard(self, shard: Shard) -> Self {
        Self { shard, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_block_root(self, block_root: H256) -> Self {
        Self { block_root, ..self }
    }
}

impl ProposerSlashing {
    #[inline]
    #[must_use]
    pub const fn with_proposer_index(self, proposer_index: ValidatorIndex) -> Self {
        Self {
            proposer_index,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_proposal_data_1(self, proposal_data_1: ProposalSignedData) -> Self {
        Self {
            proposal_data_1,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_proposal_signature_1(self, proposal_signature_1: SignatureBytes) -> Self {
        Self {
            proposal_signature_1,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_proposal_data_2(self, proposal_data_2: ProposalSignedData) -> Self {
        Self {
            proposal_data_2,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_proposal_signature_2(self, proposal_signature_2: SignatureBytes) -> Self {
        Self {
            proposal_signature_2,
            ..self
        }
    }
}

impl Default for VoluntaryExit {
    fn default() -> Self {
        Self {
            epoch: 0,
            validator_index: 0,
            signature: EMPTY_SIGNATURE,
        }
    }
}

impl VoluntaryExit {
    /// Constructs an unsigned exit.
    #[inline]
    #[must_use]
    pub const fn new(epoch: Epoch, validator_index: ValidatorIndex) -> Self {
        Self {
            epoch,
            validator_index,
            signature: EMPTY_SIGNATURE,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_epoch(self, epoch: Epoch) -> Self {
        Self { epoch, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_validator_index(self, validator_index: ValidatorIndex) -> Self {
        Self {
            validator_index,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_signature(self, signature: SignatureBytes) -> Self {
        Self { signature, ..self }
    }
}
