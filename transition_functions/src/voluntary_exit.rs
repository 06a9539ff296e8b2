use bls::CachedPublicKey;
use helper_functions::{
    accessors, error::Error as SignatureError, predicates, signing::SignForSingleFork as _,
    verifier::{SingleVerifier, Verifier},
};
use types::{
    config::Config,
    containers::{Fork, Validator, VoluntaryExit},
    primitives::{Epoch, ValidatorIndex},
    traits::BeaconStateView,
};

use crate::error::VoluntaryExitError;

pub fn validate_voluntary_exit(
    config: &Config,
    state: &impl BeaconStateView,
    voluntary_exit: VoluntaryExit,
) -> Result<(), VoluntaryExitError> {
    validate_voluntary_exit_with_verifier(config, state, voluntary_exit, SingleVerifier)
}

pub fn validate_voluntary_exit_with_verifier(
    config: &Config,
    state: &impl BeaconStateView,
    voluntary_exit: VoluntaryExit,
    verifier: impl Verifier,
) -> Result<(), VoluntaryExitError> {
    let index = voluntary_exit.validator_index;

    let validator = state
        .validator(index)
        .ok_or(VoluntaryExitError::InvalidValidatorIndex { index })?;

    let current_epoch = accessors::get_current_epoch(config, state);

    validate_voluntary_exit_not_exited(index, validator)?;
    validate_voluntary_exit_eligibility(config, index, validator, current_epoch)?;
    validate_voluntary_exit_epoch(voluntary_exit, current_epoch)?;

    validate_voluntary_exit_signature(
        config,
        state.fork(),
        voluntary_exit,
        &validator.pubkey,
        verifier,
    )
    .map_err(|source| VoluntaryExitError::InvalidSignature { index, source })
}

/// Slashed validators are treated as already exited.
pub const fn validate_voluntary_exit_not_exited(
    index: ValidatorIndex,
    validator: &Validator,
) -> Result<(), VoluntaryExitError> {
    if predicates::has_initiated_exit(validator) || validator.slashed {
        return Err(VoluntaryExitError::AlreadyExited {
            index,
            exit_epoch: validator.exit_epoch,
            slashed: validator.slashed,
        });
    }

    Ok(())
}

pub const fn validate_voluntary_exit_eligibility(
    config: &Config,
    index: ValidatorIndex,
    validator: &Validator,
    current_epoch: Epoch,
) -> Result<(), VoluntaryExitError> {
    if !predicates::has_served_persistent_committee_period(config, validator, current_epoch) {
        return Err(VoluntaryExitError::NotEligibleYet {
            index,
            activation_epoch: validator.activation_epoch,
            current_epoch,
        });
    }

    Ok(())
}

/// Exits become valid in the epoch they name, not before.
pub const fn validate_voluntary_exit_epoch(
    voluntary_exit: VoluntaryExit,
    current_epoch: Epoch,
) -> Result<(), VoluntaryExitError> {
    let epoch = voluntary_exit.epoch;

    if current_epoch < epoch {
        return Err(VoluntaryExitError::TooEarly {
            epoch,
            current_epoch,
        });
    }

    Ok(())
}

pub fn validate_voluntary_exit_signature<V: Verifier>(
    config: &Config,
    fork: Fork,
    voluntary_exit: VoluntaryExit,
    pubkey: &CachedPublicKey,
    verifier: V,
) -> Result<(), SignatureError> {
    if V::IS_NULL {
        return Ok(());
    }

    voluntary_exit.verify_with(config, fork, voluntary_exit.signature, pubkey, verifier)
}

#[cfg(test)]
mod tests {
    use bls::SignatureBytes;
    use helper_functions::{
        error::SignatureKind,
        misc,
        verifier::{NullVerifier, Triple},
    };
    use test_case::test_case;
    use types::{
        beacon_state::BeaconState,
        consts::FAR_FUTURE_EPOCH,
        primitives::{Domain, H256},
    };

    use super::*;

    const VALIDATOR_COUNT: u64 = 4;

    // The persistent committee period in the minimal configuration.
    const ELIGIBLE_EPOCH: Epoch = 64;

    fn state_at_epoch(epoch: Epoch) -> (Config, BeaconState) {
        let config = Config::minimal();

        let state = BeaconState {
            slot: misc::compute_start_slot_at_epoch(&config, epoch),
            ..interop::quick_start_beacon_state(&config, VALIDATOR_COUNT)
        };

        (config, state)
    }

    fn exit(config: &Config, state: &BeaconState, epoch: Epoch) -> VoluntaryExit {
        factory::voluntary_exit(config, state, epoch, 1).expect("validator 1 exists")
    }

    // Claims to be null but rejects every signature it is handed.
    struct RejectingNullVerifier;

    impl Verifier for RejectingNullVerifier {
        const IS_NULL: bool = true;

        fn reserve(&mut self, _additional: usize) {}

        fn verify_singular(
            &mut self,
            _message: H256,
            _domain: Domain,
            _signature_bytes: SignatureBytes,
            _cached_public_key: &CachedPublicKey,
            signature_kind: SignatureKind,
        ) -> Result<(), SignatureError> {
            Err(SignatureError::SignatureInvalid(signature_kind))
        }

        fn extend(
            &mut self,
            _triples: impl IntoIterator<Item = Triple>,
            signature_kind: SignatureKind,
        ) -> Result<(), SignatureError> {
            Err(SignatureError::SignatureInvalid(signature_kind))
        }

        fn finish(&self) -> Result<(), SignatureError> {
            Ok(())
        }
    }

    #[test]
    fn valid_voluntary_exit_is_accepted() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, ELIGIBLE_EPOCH - 10);

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Ok(()),
        );
    }

    #[test]
    fn validate_voluntary_exit_is_deterministic() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let valid = exit(&config, &state, ELIGIBLE_EPOCH);
        let too_early = exit(&config, &state, ELIGIBLE_EPOCH + 1);

        for _ in 0..2 {
            assert_eq!(validate_voluntary_exit(&config, &state, valid), Ok(()));
        }

        let first = validate_voluntary_exit(&config, &state, too_early);
        let second = validate_voluntary_exit(&config, &state, too_early);

        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test_case(0 => Ok(()); "epoch in the past")]
    #[test_case(ELIGIBLE_EPOCH => Ok(()); "epoch equal to current epoch")]
    #[test_case(
        ELIGIBLE_EPOCH + 1 => Err(VoluntaryExitError::TooEarly {
            epoch: ELIGIBLE_EPOCH + 1,
            current_epoch: ELIGIBLE_EPOCH,
        });
        "epoch after current epoch"
    )]
    fn voluntary_exit_epoch_boundary(epoch: Epoch) -> Result<(), VoluntaryExitError> {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        validate_voluntary_exit(&config, &state, exit(&config, &state, epoch))
    }

    #[test]
    fn validator_outside_registry_is_rejected() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, 0).with_validator_index(VALIDATOR_COUNT);

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::InvalidValidatorIndex {
                index: VALIDATOR_COUNT,
            }),
        );
    }

    #[test]
    fn exiting_validator_is_rejected() {
        let (config, mut state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, 0);

        state.validator_registry[1].exit_epoch = ELIGIBLE_EPOCH + 4;

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::AlreadyExited {
                index: 1,
                exit_epoch: ELIGIBLE_EPOCH + 4,
                slashed: false,
            }),
        );
    }

    #[test]
    fn slashed_validator_is_rejected() {
        let (config, mut state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, 0);

        state.validator_registry[1].slashed = true;

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::AlreadyExited {
                index: 1,
                exit_epoch: FAR_FUTURE_EPOCH,
                slashed: true,
            }),
        );
    }

    #[test]
    fn recently_activated_validator_is_rejected() {
        let (config, mut state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, 0);

        state.validator_registry[1].activation_epoch = 1;

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::NotEligibleYet {
                index: 1,
                activation_epoch: 1,
                current_epoch: ELIGIBLE_EPOCH,
            }),
        );
    }

    #[test]
    fn eligibility_is_checked_before_exit_epoch() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH - 1);
        let voluntary_exit = exit(&config, &state, ELIGIBLE_EPOCH);

        assert!(matches!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::NotEligibleYet { .. }),
        ));
    }

    #[test]
    fn unsigned_voluntary_exit_is_rejected() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = VoluntaryExit::new(0, 1);

        assert!(matches!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::InvalidSignature {
                index: 1,
                source: SignatureError::SignatureUndecodable { .. },
            }),
        ));
    }

    #[test]
    fn voluntary_exit_signed_by_another_validator_is_rejected() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let signed_by_2 = factory::voluntary_exit(&config, &state, 0, 2).expect("validator 2 exists");
        let voluntary_exit = exit(&config, &state, 0).with_signature(signed_by_2.signature);

        assert_eq!(
            validate_voluntary_exit(&config, &state, voluntary_exit),
            Err(VoluntaryExitError::InvalidSignature {
                index: 1,
                source: SignatureError::SignatureInvalid(SignatureKind::VoluntaryExit),
            }),
        );
    }

    #[test]
    fn null_verifier_skips_signature() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, 0).with_signature(SignatureBytes::zero());

        assert_eq!(
            validate_voluntary_exit_with_verifier(&config, &state, voluntary_exit, NullVerifier),
            Ok(()),
        );

        assert_eq!(
            validate_voluntary_exit_with_verifier(
                &config,
                &state,
                voluntary_exit,
                RejectingNullVerifier,
            ),
            Ok(()),
        );
    }

    #[test]
    fn exit_signed_before_fork_uses_previous_version() {
        let (config, state) = state_at_epoch(ELIGIBLE_EPOCH);
        let voluntary_exit = exit(&config, &state, ELIGIBLE_EPOCH - 1);

        let fork = Fork {
            previous_version: state.fork.current_version,
            current_version: state.fork.current_version + 1,
            epoch: ELIGIBLE_EPOCH,
        };

        let forked_state = BeaconState { fork, ..state };

        assert_eq!(
            validate_voluntary_exit(&config, &forked_state, voluntary_exit),
            Ok(()),
        );

        let signed_after_fork = factory::sign_voluntary_exit(
            &config,
            forked_state.fork,
            voluntary_exit.with_epoch(ELIGIBLE_EPOCH),
        );

        assert_eq!(
            validate_voluntary_exit(&config, &forked_state, signed_after_fork),
            Ok(()),
        );

        let mislabeled = signed_after_fork.with_epoch(ELIGIBLE_EPOCH - 1);

        assert!(validate_voluntary_exit(&config, &forked_state, mislabeled).is_err());
    }
}
