pub const DOMAIN_SEPARATION_TAG: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// A 32 byte signing root followed by an 8 byte domain.
pub const SIGNED_MESSAGE_SIZE: usize = 40;

pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 48;
pub const SECRET_KEY_SIZE: usize = 32;
pub const SIGNATURE_COMPRESSED_SIZE: usize = 96;
