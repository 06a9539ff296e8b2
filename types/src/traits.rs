use crate::{
    containers::{Fork, Validator},
    primitives::{Slot, ValidatorIndex},
};

/// Read-only access to the parts of a beacon state that evidence validation needs.
pub trait BeaconStateView {
    fn slot(&self) -> Slot;
    fn fork(&self) -> Fork;
    fn validator_registry(&self) -> &[Validator];

    /// Returns `None` for indices past the end of the registry instead of panicking.
    #[inline]
    fn validator(&self, validator_index: ValidatorIndex) -> Option<&Validator> {
        let index = usize::try_from(validator_index).ok()?;
        self.validator_registry().get(index)
    }
}

impl<S: BeaconStateView + ?Sized> BeaconStateView for &S {
    #[inline]
    fn slot(&self) -> Slot {
        (*self).slot()
    }

    #[inline]
    fn fork(&self) -> Fork {
        (*self).fork()
    }

    #[inline]
    fn validator_registry(&self) -> &[Validator] {
        (*self).validator_registry()
    }
}
