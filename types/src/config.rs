use core::num::NonZeroU64;
use std::borrow::Cow;

use nonzero_ext::nonzero;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::primitives::{DomainType, Epoch, Version};

/// Configuration variables customizable at runtime.
///
/// Every operation that depends on these takes a `&Config` explicitly.
#[expect(
    clippy::unsafe_derive_deserialize,
    reason = "A false positive triggered by `nonzero!`. \
              `Config` has no invariants. It is intended to be deserialized from user input. \
              The `unsafe` block in `nonzero!` only operates on the literal passed to it."
)]
#[expect(
    clippy::struct_field_names,
    reason = "struct_field_name is allowed to have config_name, as it starts with the same name as struct"
)]
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    // Meta
    pub config_name: Cow<'static, str>,

    // Genesis
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub genesis_fork_version: Version,

    // Time parameters
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub slots_per_epoch: NonZeroU64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub persistent_committee_period: Epoch,

    // Signature domains
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub domain_deposit: DomainType,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub domain_attestation: DomainType,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub domain_proposal: DomainType,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub domain_exit: DomainType,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub domain_randao: DomainType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Meta
            //
            // Use `default` as the default `config_name` and override it in `Config::mainnet`.
            // This way custom network data will be kept separate from mainnet data if a user
            // forgets to specify a custom `CONFIG_NAME`.
            config_name: Cow::Borrowed("default"),

            // Genesis
            genesis_fork_version: 0,

            // Time parameters
            slots_per_epoch: nonzero!(64_u64),
            persistent_committee_period: 2048,

            // Signature domains
            domain_deposit: 0,
            domain_attestation: 1,
            domain_proposal: 2,
            domain_exit: 3,
            domain_randao: 4,
        }
    }
}

impl Config {
    #[must_use]
    pub fn mainnet() -> Self {
        Self {
            config_name: Cow::Borrowed("mainnet"),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn minimal() -> Self {
        Self {
            // Meta
            config_name: Cow::Borrowed("minimal"),

            // Time parameters
            slots_per_epoch: nonzero!(8_u64),
            persistent_committee_period: 64,

            ..Self::default()
        }
    }
}
