use types::{config::Config, consts::FAR_FUTURE_EPOCH, containers::Validator, primitives::Epoch};

#[must_use]
pub const fn has_initiated_exit(validator: &Validator) -> bool {
    validator.exit_epoch != FAR_FUTURE_EPOCH
}

/// Checks whether `validator` has been active for long enough to leave at `epoch`.
#[must_use]
pub const fn has_served_persistent_committee_period(
    config: &Config,
    validator: &Validator,
    epoch: Epoch,
) -> bool {
    epoch
        >= validator
            .activation_epoch
            .saturating_add(config.persistent_committee_period)
}
