//! Builders for correctly signed evidence.
//!
//! Every message is signed with the interop key of the validator it names.

use anyhow::{ensure, Result};
use bls::SignatureBytes;
use helper_functions::signing::{SignForSingleFork as _, SignForSingleForkAtSlot as _};
use types::{
    config::Config,
    containers::{Fork, ProposalSignedData, ProposerSlashing, VoluntaryExit},
    primitives::{Epoch, Shard, ValidatorIndex, H256},
    traits::BeaconStateView,
};

pub const BEACON_CHAIN_SHARD_NUMBER: Shard = 0;
pub const BLOCK_ROOT_1: H256 = H256::repeat_byte(0x11);
pub const BLOCK_ROOT_2: H256 = H256::repeat_byte(0x22);

/// Builds a slashing of `proposer_index` for two blocks at the slot of `state`.
pub fn proposer_slashing(
    config: &Config,
    state: &impl BeaconStateView,
    proposer_index: ValidatorIndex,
) -> Result<ProposerSlashing> {
    proposer_slashing_at_block(config, state, proposer_index, BLOCK_ROOT_1, BLOCK_ROOT_2)
}

pub fn proposer_slashing_at_block(
    config: &Config,
    state: &impl BeaconStateView,
    proposer_index: ValidatorIndex,
    block_root_1: H256,
    block_root_2: H256,
) -> Result<ProposerSlashing> {
    ensure!(
        state.validator(proposer_index).is_some(),
        "proposer {proposer_index} is not in the validator registry",
    );

    let fork = state.fork();
    let proposal_data_1 =
        ProposalSignedData::new(state.slot(), BEACON_CHAIN_SHARD_NUMBER, block_root_1);
    let proposal_data_2 = proposal_data_1.with_block_root(block_root_2);

    Ok(ProposerSlashing {
        proposer_index,
        proposal_data_1,
        proposal_signature_1: sign_proposal(config, fork, proposal_data_1, proposer_index),
        proposal_data_2,
        proposal_signature_2: sign_proposal(config, fork, proposal_data_2, proposer_index),
    })
}

#[must_use]
pub fn sign_proposal(
    config: &Config,
    fork: Fork,
    proposal_signed_data: ProposalSignedData,
    proposer_index: ValidatorIndex,
) -> SignatureBytes {
    let secret_key = interop::secret_key(proposer_index);

    proposal_signed_data
        .sign(config, fork, &secret_key)
        .into()
}

/// Builds an exit of `validator_index` that becomes valid in `epoch`.
pub fn voluntary_exit(
    config: &Config,
    state: &impl BeaconStateView,
    epoch: Epoch,
    validator_index: ValidatorIndex,
) -> Result<VoluntaryExit> {
    ensure!(
        state.validator(validator_index).is_some(),
        "validator {validator_index} is not in the validator registry",
    );

    let voluntary_exit = VoluntaryExit::new(epoch, validator_index);

    Ok(sign_voluntary_exit(config, state.fork(), voluntary_exit))
}

/// Replaces the signature of `voluntary_exit` with one made by the validator it names.
#[must_use]
pub fn sign_voluntary_exit(
    config: &Config,
    fork: Fork,
    voluntary_exit: VoluntaryExit,
) -> VoluntaryExit {
    let secret_key = interop::secret_key(voluntary_exit.validator_index);
    let signature = voluntary_exit.sign(config, fork, &secret_key).into();

    voluntary_exit.with_signature(signature)
}
