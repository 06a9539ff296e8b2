use std::collections::HashSet;

use helper_functions::verifier::{MultiVerifier, Verifier as _};
use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator as _};
use tracing::{debug, instrument, trace};
use types::{
    config::Config,
    containers::{ProposerSlashing, VoluntaryExit},
    traits::BeaconStateView,
};

use crate::{
    error::{OperationError, ProposerSlashingError, VoluntaryExitError},
    proposer_slashing::{validate_proposer_slashing, validate_proposer_slashing_with_verifier},
    voluntary_exit::{validate_voluntary_exit, validate_voluntary_exit_with_verifier},
};

/// Validates the proposer slashings and voluntary exits of a single block.
///
/// Stops at the first invalid operation. Signatures are verified in a single batch once every
/// structural check has passed. If the batch fails, signatures are verified individually to find
/// the operation responsible.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        proposer_slashings = proposer_slashings.len(),
        voluntary_exits = voluntary_exits.len()
    )
)]
pub fn validate_operations(
    config: &Config,
    state: &(impl BeaconStateView + Sync),
    proposer_slashings: &[ProposerSlashing],
    voluntary_exits: &[VoluntaryExit],
) -> Result<(), OperationError> {
    let mut verifier = MultiVerifier::default();

    verifier.reserve(proposer_slashings.len() * 2 + voluntary_exits.len());

    let mut slashed_proposers = HashSet::with_capacity(proposer_slashings.len());

    for (position, proposer_slashing) in proposer_slashings.iter().copied().enumerate() {
        let index = proposer_slashing.proposer_index;

        if !slashed_proposers.insert(index) {
            debug!(index, "rejecting duplicate proposer slashing");
            return Err(OperationError::DuplicateProposerSlashing { index });
        }

        validate_proposer_slashing_with_verifier(config, state, proposer_slashing, &mut verifier)
            .map_err(|source| reject_proposer_slashing(position, source))?;
    }

    let mut exiting_validators = HashSet::with_capacity(voluntary_exits.len());

    for (position, voluntary_exit) in voluntary_exits.iter().copied().enumerate() {
        let index = voluntary_exit.validator_index;

        if slashed_proposers.contains(&index) {
            debug!(index, "rejecting voluntary exit of proposer slashed in the same block");
            return Err(OperationError::VoluntaryExitOfSlashedProposer { index });
        }

        if !exiting_validators.insert(index) {
            debug!(index, "rejecting duplicate voluntary exit");
            return Err(OperationError::DuplicateVoluntaryExit { index });
        }

        validate_voluntary_exit_with_verifier(config, state, voluntary_exit, &mut verifier)
            .map_err(|source| reject_voluntary_exit(position, source))?;
    }

    if verifier.finish().is_ok() {
        return Ok(());
    }

    trace!(
        signatures = verifier.len(),
        "batch verification failed, verifying signatures individually"
    );

    let slashing_results = par_validate_proposer_slashings(config, state, proposer_slashings);

    if let Some((position, source)) = first_error(slashing_results) {
        return Err(reject_proposer_slashing(position, source));
    }

    let exit_results = par_validate_voluntary_exits(config, state, voluntary_exits);

    if let Some((position, source)) = first_error(exit_results) {
        return Err(reject_voluntary_exit(position, source));
    }

    // Individual verification is authoritative.
    Ok(())
}

/// Validates every proposer slashing independently and returns the results in input order.
#[instrument(level = "debug", skip_all, fields(proposer_slashings = proposer_slashings.len()))]
pub fn par_validate_proposer_slashings(
    config: &Config,
    state: &(impl BeaconStateView + Sync),
    proposer_slashings: &[ProposerSlashing],
) -> Vec<Result<(), ProposerSlashingError>> {
    proposer_slashings
        .par_iter()
        .map(|proposer_slashing| validate_proposer_slashing(config, state, *proposer_slashing))
        .collect()
}

/// Validates every voluntary exit independently and returns the results in input order.
#[instrument(level = "debug", skip_all, fields(voluntary_exits = voluntary_exits.len()))]
pub fn par_validate_voluntary_exits(
    config: &Config,
    state: &(impl BeaconStateView + Sync),
    voluntary_exits: &[VoluntaryExit],
) -> Vec<Result<(), VoluntaryExitError>> {
    voluntary_exits
        .par_iter()
        .map(|voluntary_exit| validate_voluntary_exit(config, state, *voluntary_exit))
        .collect()
}

fn first_error<E>(results: Vec<Result<(), E>>) -> Option<(usize, E)> {
    results
        .into_iter()
        .enumerate()
        .find_map(|(position, result)| result.err().map(|error| (position, error)))
}

fn reject_proposer_slashing(position: usize, source: ProposerSlashingError) -> OperationError {
    debug!(position, %source, "rejecting proposer slashing");
    OperationError::ProposerSlashing { position, source }
}

fn reject_voluntary_exit(position: usize, source: VoluntaryExitError) -> OperationError {
    debug!(position, %source, "rejecting voluntary exit");
    OperationError::VoluntaryExit { position, source }
}
