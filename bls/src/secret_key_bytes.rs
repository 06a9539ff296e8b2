use core::{
    fmt::{Binary, Debug, Display, LowerExp, LowerHex, Octal, Pointer, UpperExp, UpperHex},
    ops::Deref,
};

use derive_more::{AsMut, AsRef, From};
use hex::FromHex;
use static_assertions::assert_not_impl_any;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::SECRET_KEY_SIZE;

#[derive(Default, AsRef, AsMut, From, Zeroize, ZeroizeOnDrop)]
#[as_ref(forward)]
#[as_mut(forward)]
pub struct SecretKeyBytes {
    bytes: [u8; SECRET_KEY_SIZE],
}

// Prevent `SecretKeyBytes` from implementing some traits to avoid leaking secret keys.
assert_not_impl_any! {
    SecretKeyBytes:

    Clone,
    Copy,
    Deref,
    ToOwned,

    Debug,
    Binary,
    Display,
    LowerExp,
    LowerHex,
    Octal,
    Pointer,
    UpperExp,
    UpperHex,

    serde::Serialize,
}

impl FromHex for SecretKeyBytes {
    type Error = <[u8; SECRET_KEY_SIZE] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(digits: T) -> Result<Self, Self::Error> {
        let bytes = FromHex::from_hex(digits)?;
        Ok(Self { bytes })
    }
}
