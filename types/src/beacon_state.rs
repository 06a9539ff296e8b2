use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    containers::{Fork, Validator},
    primitives::Slot,
    traits::BeaconStateView,
};

/// An in-memory beacon state holding only what evidence validation reads.
#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconState {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub slot: Slot,
    pub fork: Fork,
    pub validator_registry: Vec<Validator>,
}

impl BeaconStateView for BeaconState {
    #[inline]
    fn slot(&self) -> Slot {
        self.slot
    }

    #[inline]
    fn fork(&self) -> Fork {
        self.fork
    }

    #[inline]
    fn validator_registry(&self) -> &[Validator] {
        &self.validator_registry
    }
}
