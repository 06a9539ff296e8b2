use bls::{CachedPublicKey, SignatureBytes};
use helper_functions::{
    error::Error as SignatureError,
    signing::SignForSingleForkAtSlot as _,
    verifier::{SingleVerifier, Verifier},
};
use types::{
    config::Config,
    containers::{Fork, ProposalSignedData, ProposerSlashing},
    traits::BeaconStateView,
};

use crate::error::{Proposal, ProposerSlashingError};

pub fn validate_proposer_slashing(
    config: &Config,
    state: &impl BeaconStateView,
    proposer_slashing: ProposerSlashing,
) -> Result<(), ProposerSlashingError> {
    validate_proposer_slashing_with_verifier(config, state, proposer_slashing, SingleVerifier)
}

/// Runs every structural check before handing the signatures to `verifier`.
pub fn validate_proposer_slashing_with_verifier(
    config: &Config,
    state: &impl BeaconStateView,
    proposer_slashing: ProposerSlashing,
    mut verifier: impl Verifier,
) -> Result<(), ProposerSlashingError> {
    validate_proposer_slashing_slot(proposer_slashing)?;
    validate_proposer_slashing_shard(proposer_slashing)?;
    validate_proposer_slashing_block_root(proposer_slashing)?;

    let index = proposer_slashing.proposer_index;

    let proposer = state
        .validator(index)
        .ok_or(ProposerSlashingError::InvalidProposerIndex { index })?;

    validate_proposer_slashing_is_slashed(proposer.slashed)?;

    let fork = state.fork();

    let proposals = [
        (
            Proposal::First,
            proposer_slashing.proposal_data_1,
            proposer_slashing.proposal_signature_1,
        ),
        (
            Proposal::Second,
            proposer_slashing.proposal_data_2,
            proposer_slashing.proposal_signature_2,
        ),
    ];

    for (proposal, proposal_signed_data, proposal_signature) in proposals {
        validate_proposal_signature(
            config,
            fork,
            proposal_signed_data,
            proposal_signature,
            &proposer.pubkey,
            &mut verifier,
        )
        .map_err(|source| ProposerSlashingError::InvalidSignature { proposal, source })?;
    }

    Ok(())
}

pub const fn validate_proposer_slashing_slot(
    proposer_slashing: ProposerSlashing,
) -> Result<(), ProposerSlashingError> {
    let slot_1 = proposer_slashing.proposal_data_1.slot;
    let slot_2 = proposer_slashing.proposal_data_2.slot;

    if slot_1 != slot_2 {
        return Err(ProposerSlashingError::SlotMismatch { slot_1, slot_2 });
    }

    Ok(())
}

pub const fn validate_proposer_slashing_shard(
    proposer_slashing: ProposerSlashing,
) -> Result<(), ProposerSlashingError> {
    let shard_1 = proposer_slashing.proposal_data_1.shard;
    let shard_2 = proposer_slashing.proposal_data_2.shard;

    if shard_1 != shard_2 {
        return Err(ProposerSlashingError::ShardMismatch { shard_1, shard_2 });
    }

    Ok(())
}

/// Passes only if the two proposals are for different blocks.
pub fn validate_proposer_slashing_block_root(
    proposer_slashing: ProposerSlashing,
) -> Result<(), ProposerSlashingError> {
    let block_root = proposer_slashing.proposal_data_1.block_root;

    if block_root == proposer_slashing.proposal_data_2.block_root {
        return Err(ProposerSlashingError::IdenticalBlockRoot { block_root });
    }

    Ok(())
}

pub const fn validate_proposer_slashing_is_slashed(
    slashed: bool,
) -> Result<(), ProposerSlashingError> {
    if slashed {
        return Err(ProposerSlashingError::AlreadySlashed);
    }

    Ok(())
}

pub fn validate_proposal_signature<V: Verifier>(
    config: &Config,
    fork: Fork,
    proposal_signed_data: ProposalSignedData,
    proposal_signature: SignatureBytes,
    pubkey: &CachedPublicKey,
    verifier: V,
) -> Result<(), SignatureError> {
    // Skip the signing root and domain for verifiers that accept everything.
    if V::IS_NULL {
        return Ok(());
    }

    proposal_signed_data.verify_with(config, fork, proposal_signature, pubkey, verifier)
}
