// Compressed keys and signatures are SSZ vectors of bytes.
// Their hash tree roots are the roots of the bytes packed into 32 byte chunks.
macro_rules! impl_fixed_bytes_ssz {
    ($name:ident, $size:expr) => {
        impl ssz::Encode for $name {
            #[inline]
            fn is_ssz_fixed_len() -> bool {
                true
            }

            #[inline]
            fn ssz_fixed_len() -> usize {
                $size
            }

            #[inline]
            fn ssz_bytes_len(&self) -> usize {
                $size
            }

            #[inline]
            fn ssz_append(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(self.as_bytes());
            }
        }

        impl ssz::Decode for $name {
            #[inline]
            fn is_ssz_fixed_len() -> bool {
                true
            }

            #[inline]
            fn ssz_fixed_len() -> usize {
                $size
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                if bytes.len() != $size {
                    return Err(ssz::DecodeError::InvalidByteLength {
                        len: bytes.len(),
                        expected: $size,
                    });
                }

                Ok(Self::from_slice(bytes))
            }
        }

        impl tree_hash::TreeHash for $name {
            #[inline]
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Vector
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("vectors are never packed")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("vectors are never packed")
            }

            #[inline]
            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                tree_hash::merkle_root(self.as_bytes(), 0)
            }
        }
    };
}

pub(crate) use impl_fixed_bytes_ssz;
