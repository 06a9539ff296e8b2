use helper_functions::error::Error as SignatureError;
use parse_display::Display;
use thiserror::Error;
use types::primitives::{Epoch, Shard, Slot, ValidatorIndex, H256};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ProposerSlashingError {
    #[error("slots in proposer slashing do not match ({slot_1} != {slot_2})")]
    SlotMismatch { slot_1: Slot, slot_2: Slot },
    #[error("shards in proposer slashing do not match ({shard_1} != {shard_2})")]
    ShardMismatch { shard_1: Shard, shard_2: Shard },
    #[error("proposals in proposer slashing have the same block root ({block_root})")]
    IdenticalBlockRoot { block_root: H256 },
    #[error("proposer index {index} is out of bounds")]
    InvalidProposerIndex { index: ValidatorIndex },
    #[error("proposer is already slashed")]
    AlreadySlashed,
    #[error("{proposal} proposal in proposer slashing has an invalid signature: {source}")]
    InvalidSignature {
        proposal: Proposal,
        source: SignatureError,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum VoluntaryExitError {
    #[error("validator index {index} is out of bounds")]
    InvalidValidatorIndex { index: ValidatorIndex },
    #[error(
        "validator {index} has already exited or been slashed \
         (exit_epoch: {exit_epoch}, slashed: {slashed})"
    )]
    AlreadyExited {
        index: ValidatorIndex,
        exit_epoch: Epoch,
        slashed: bool,
    },
    #[error(
        "validator {index} activated in epoch {activation_epoch} \
         is not yet eligible to exit in epoch {current_epoch}"
    )]
    NotEligibleYet {
        index: ValidatorIndex,
        activation_epoch: Epoch,
        current_epoch: Epoch,
    },
    #[error("voluntary exit is not valid until epoch {epoch} (current epoch: {current_epoch})")]
    TooEarly { epoch: Epoch, current_epoch: Epoch },
    #[error("voluntary exit of validator {index} has an invalid signature: {source}")]
    InvalidSignature {
        index: ValidatorIndex,
        source: SignatureError,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum OperationError {
    #[error("proposer slashing at position {position} is invalid: {source}")]
    ProposerSlashing {
        position: usize,
        source: ProposerSlashingError,
    },
    #[error("voluntary exit at position {position} is invalid: {source}")]
    VoluntaryExit {
        position: usize,
        source: VoluntaryExitError,
    },
    #[error("proposer {index} is slashed more than once in the same batch")]
    DuplicateProposerSlashing { index: ValidatorIndex },
    #[error("validator {index} exits more than once in the same batch")]
    DuplicateVoluntaryExit { index: ValidatorIndex },
    #[error("validator {index} exits in the same batch that slashes it")]
    VoluntaryExitOfSlashedProposer { index: ValidatorIndex },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Proposal {
    #[display("first")]
    First,
    #[display("second")]
    Second,
}
