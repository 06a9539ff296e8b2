pub use crate::{
    error::{OperationError, Proposal, ProposerSlashingError, VoluntaryExitError},
    operations::{
        par_validate_proposer_slashings, par_validate_voluntary_exits, validate_operations,
    },
    proposer_slashing::{
        validate_proposal_signature, validate_proposer_slashing,
        validate_proposer_slashing_block_root, validate_proposer_slashing_is_slashed,
        validate_proposer_slashing_shard, validate_proposer_slashing_slot,
        validate_proposer_slashing_with_verifier,
    },
    voluntary_exit::{
        validate_voluntary_exit, validate_voluntary_exit_eligibility,
        validate_voluntary_exit_epoch, validate_voluntary_exit_not_exited,
        validate_voluntary_exit_signature, validate_voluntary_exit_with_verifier,
    },
};

mod error;
mod operations;
mod proposer_slashing;
mod voluntary_exit;
