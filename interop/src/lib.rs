use bls::{CachedPublicKey, PublicKeyBytes, SecretKey, SecretKeyBytes};
use hex_literal::hex;
use num_bigint::BigUint;
use sha2::{Digest as _, Sha256};
use tree_hash::TreeHash as _;
use types::{
    beacon_state::BeaconState,
    config::Config,
    consts::{FAR_FUTURE_EPOCH, GENESIS_EPOCH, GENESIS_SLOT},
    containers::{Fork, Validator},
    primitives::{ValidatorIndex, H256},
};

/// <https://github.com/ethereum/eth2.0-pm/tree/b7c76e7a9d036ce73ca6aa0b7065db92f7728f41/interop/mocked_start#pubkeyprivkey-generation>
///
/// Encoded in binary to avoid parsing a decimal string at runtime.
const CURVE_ORDER: &[u8] =
    &hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

const BLS_WITHDRAWAL_PREFIX: u8 = 0;

/// Builds a genesis state in which every validator uses an interop key.
///
/// All validators are active from genesis, unslashed and not exiting.
#[must_use]
pub fn quick_start_beacon_state(config: &Config, validator_count: u64) -> BeaconState {
    let validator_registry = (0..validator_count)
        .map(|validator_index| quick_start_validator(&secret_key(validator_index)))
        .collect();

    BeaconState {
        slot: GENESIS_SLOT,
        fork: Fork {
            previous_version: config.genesis_fork_version,
            current_version: config.genesis_fork_version,
            epoch: GENESIS_EPOCH,
        },
        validator_registry,
    }
}

/// <https://github.com/ethereum/eth2.0-pm/tree/b7c76e7a9d036ce73ca6aa0b7065db92f7728f41/interop/mocked_start#pubkeyprivkey-generation>
#[must_use]
pub fn secret_key(validator_index: ValidatorIndex) -> SecretKey {
    let index_hash = Sha256::digest(validator_index.tree_hash_root());
    let curve_order = BigUint::from_bytes_be(CURVE_ORDER);
    let secret_key_uint = BigUint::from_bytes_le(index_hash.as_slice()) % &curve_order;
    let unpadded = secret_key_uint.to_bytes_be();
    let mut padded = SecretKeyBytes::default();
    padded.as_mut()[size_of::<SecretKeyBytes>() - unpadded.len()..]
        .copy_from_slice(unpadded.as_slice());
    padded
        .try_into()
        .expect("the algorithm given in the standard should produce valid secret keys")
}

#[must_use]
pub fn quick_start_validator(secret_key: &SecretKey) -> Validator {
    let public_key = secret_key.to_public_key();

    Validator {
        pubkey: CachedPublicKey::from(public_key),
        withdrawal_credentials: bls_withdrawal_credentials(public_key.into()),
        activation_epoch: GENESIS_EPOCH,
        exit_epoch: FAR_FUTURE_EPOCH,
        withdrawable_epoch: FAR_FUTURE_EPOCH,
        slashed: false,
    }
}

fn bls_withdrawal_credentials(public_key: PublicKeyBytes) -> H256 {
    let mut withdrawal_credentials = H256::from_slice(&Sha256::digest(public_key));
    withdrawal_credentials[0] = BLS_WITHDRAWAL_PREFIX;
    withdrawal_credentials
}
