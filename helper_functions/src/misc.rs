use types::{
    config::Config,
    containers::Fork,
    primitives::{Domain, DomainType, Epoch, Slot, Version},
};

#[must_use]
pub const fn compute_epoch_at_slot(config: &Config, slot: Slot) -> Epoch {
    slot / config.slots_per_epoch.get()
}

#[must_use]
pub const fn compute_start_slot_at_epoch(config: &Config, epoch: Epoch) -> Slot {
    epoch.saturating_mul(config.slots_per_epoch.get())
}

/// Selects the fork version that was in effect at `epoch`.
#[must_use]
pub const fn fork_version(fork: Fork, epoch: Epoch) -> Version {
    if epoch < fork.epoch {
        fork.previous_version
    } else {
        fork.current_version
    }
}

/// Packs the fork version in effect at `epoch` and `domain_type` into a single domain.
///
/// The fork version occupies the high 32 bits and the message type the low 32 bits.
#[must_use]
pub fn compute_domain(fork: Fork, epoch: Epoch, domain_type: DomainType) -> Domain {
    (Domain::from(fork_version(fork, epoch)) << 32) | Domain::from(domain_type)
}
