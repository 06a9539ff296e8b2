use types::{
    config::Config,
    primitives::{Domain, DomainType, Epoch},
    traits::BeaconStateView,
};

use crate::misc;

#[must_use]
pub fn get_current_epoch(config: &Config, state: &(impl BeaconStateView + ?Sized)) -> Epoch {
    misc::compute_epoch_at_slot(config, state.slot())
}

/// Computes the domain for `domain_type` at `epoch`, or at the current epoch if `epoch` is `None`.
#[must_use]
pub fn get_domain(
    config: &Config,
    state: &(impl BeaconStateView + ?Sized),
    domain_type: DomainType,
    epoch: Option<Epoch>,
) -> Domain {
    let epoch = epoch.unwrap_or_else(|| get_current_epoch(config, state));
    misc::compute_domain(state.fork(), epoch, domain_type)
}

#[cfg(test)]
mod tests {
    use types::{beacon_state::BeaconState, containers::Fork};

    use super::*;

    #[test]
    fn test_get_domain_defaults_to_current_epoch() {
        let config = Config::minimal();

        let state = BeaconState {
            slot: 16,
            fork: Fork {
                previous_version: 1,
                current_version: 2,
                epoch: 2,
            },
            ..BeaconState::default()
        };

        assert_eq!(get_current_epoch(&config, &state), 2);
        assert_eq!(get_domain(&config, &state, 3, None), 0x0000_0002_0000_0003);
        assert_eq!(get_domain(&config, &state, 3, Some(1)), 0x0000_0001_0000_0003);
    }
}
