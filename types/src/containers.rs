use bls::{CachedPublicKey, SignatureBytes};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::primitives::{Epoch, Shard, Slot, ValidatorIndex, Version, H256};

#[derive(
    Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize, Encode, Decode, TreeHash,
)]
#[serde(deny_unknown_fields)]
pub struct Fork {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub previous_version: Version,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub current_version: Version,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub epoch: Epoch,
}

/// The part of a block proposal that a proposer signs.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Debug,
    Constructor,
    Deserialize,
    Serialize,
    Encode,
    Decode,
    TreeHash,
)]
#[serde(deny_unknown_fields)]
pub struct ProposalSignedData {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub slot: Slot,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub shard: Shard,
    pub block_root: H256,
}

/// Evidence that a proposer signed two different blocks for the same slot and shard.
///
/// Nothing about it is checked at construction.
#[derive(
    Clone, Copy, PartialEq, Eq, Default, Debug, Constructor, Deserialize, Serialize, Encode, Decode,
)]
#[serde(deny_unknown_fields)]
pub struct ProposerSlashing {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub proposer_index: ValidatorIndex,
    pub proposal_data_1: ProposalSignedData,
    pub proposal_signature_1: SignatureBytes,
    pub proposal_data_2: ProposalSignedData,
    pub proposal_signature_2: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize, Encode, Decode, TreeHash)]
#[serde(deny_unknown_fields)]
pub struct Validator {
    pub pubkey: CachedPublicKey,
    pub withdrawal_credentials: H256,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub activation_epoch: Epoch,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub exit_epoch: Epoch,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub withdrawable_epoch: Epoch,
    pub slashed: bool,
}

/// A validator's signed request to leave the active set.
///
/// The signature covers every other field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize, Encode, Decode)]
#[serde(deny_unknown_fields)]
pub struct VoluntaryExit {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub epoch: Epoch,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub validator_index: ValidatorIndex,
    pub signature: SignatureBytes,
}
