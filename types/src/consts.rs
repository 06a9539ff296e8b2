use bls::SignatureBytes;

use crate::primitives::{Epoch, Slot};

/// Placeholder for signatures that have not been filled in yet.
///
/// It does not decompress to a valid signature, so anything carrying it fails verification.
pub const EMPTY_SIGNATURE: SignatureBytes = SignatureBytes::zero();
pub const FAR_FUTURE_EPOCH: Epoch = Epoch::MAX;
pub const GENESIS_EPOCH: Epoch = 0;
pub const GENESIS_SLOT: Slot = 0;
