pub use alloy_primitives::B256 as H256;

pub type Domain = u64;
pub type DomainType = u32;
pub type Epoch = u64;
pub type Shard = u64;
pub type Slot = u64;
pub type ValidatorIndex = u64;
pub type Version = u32;
