//! Byte exact records without padding
//!
//! Records are serialized field by field in declaration order, so their size is always the sum
//! of their field sizes regardless of the platform's struct layout rules.
//!
//! ```
//! use ezk_binutil::{LittleEndian, PackedRecord, packed_record};
//!
//! packed_record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct ChunkHeader: LittleEndian {
//!         pub id: [u8; 4],
//!         pub size: u32,
//!     }
//! }
//!
//! assert_eq!(ChunkHeader::SIZE, 8);
//!
//! let header = ChunkHeader { id: *b"data", size: 16 };
//! assert_eq!(header.to_bytes(), b"data\x10\x00\x00\x00");
//! ```

use crate::endian::{Endian, convert};

/// Everything that can go wrong when reading a [`PackedRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PackedError {
    #[error("buffer of {len} bytes is too short for a record of {size} bytes")]
    BufferTooShort { len: usize, size: usize },
}

/// Scalar which can be a field of a packed record
pub trait WireField: Copy {
    const SIZE: usize;

    /// Append the field's bytes in byte order `E`
    fn write<E: Endian>(self, out: &mut Vec<u8>);

    /// Read the field from exactly [`Self::SIZE`] bytes in byte order `E`
    fn read<E: Endian>(bytes: &[u8]) -> Self;
}

macro_rules! impl_wire_field_int {
    ($($ty:ty),*) => {
        $(
            impl WireField for $ty {
                const SIZE: usize = size_of::<$ty>();

                #[inline]
                fn write<E: Endian>(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&convert::<E, $ty>(self).to_ne_bytes());
                }

                #[inline]
                fn read<E: Endian>(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    convert::<E, $ty>(<$ty>::from_ne_bytes(raw))
                }
            }
        )*
    };
}

impl_wire_field_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! impl_wire_field_float {
    ($($ty:ty => $bits:ty),*) => {
        $(
            impl WireField for $ty {
                const SIZE: usize = size_of::<$ty>();

                #[inline]
                fn write<E: Endian>(self, out: &mut Vec<u8>) {
                    self.to_bits().write::<E>(out);
                }

                #[inline]
                fn read<E: Endian>(bytes: &[u8]) -> Self {
                    <$ty>::from_bits(<$bits>::read::<E>(bytes))
                }
            }
        )*
    };
}

impl_wire_field_float!(f32 => u32, f64 => u64);

/// Raw bytes such as tags, never byte swapped
impl<const N: usize> WireField for [u8; N] {
    const SIZE: usize = N;

    #[inline]
    fn write<E: Endian>(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self);
    }

    #[inline]
    fn read<E: Endian>(bytes: &[u8]) -> Self {
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        raw
    }
}

/// Record with a fixed, padding free byte layout, usually declared with [`packed_record!`](crate::packed_record!)
pub trait PackedRecord: Sized {
    /// Sum of all field sizes
    const SIZE: usize;

    fn write_to(&self, out: &mut Vec<u8>);

    /// Read a record from the start of `bytes`, trailing bytes are ignored
    fn read_from(bytes: &[u8]) -> Result<Self, PackedError>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        self.write_to(&mut out);
        out
    }
}

/// Declare a struct together with its [`PackedRecord`] implementation
///
/// The type after the struct name selects the byte order of all fields.
#[macro_export]
macro_rules! packed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $endian:ty {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::PackedRecord for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::WireField>::SIZE )*;

            fn write_to(&self, out: &mut ::std::vec::Vec<u8>) {
                $(
                    <$ty as $crate::WireField>::write::<$endian>(self.$field, out);
                )*
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn read_from(bytes: &[u8]) -> ::std::result::Result<Self, $crate::PackedError> {
                if bytes.len() < <Self as $crate::PackedRecord>::SIZE {
                    return Err($crate::PackedError::BufferTooShort {
                        len: bytes.len(),
                        size: <Self as $crate::PackedRecord>::SIZE,
                    });
                }

                let mut offset = 0;
                $(
                    let end = offset + <$ty as $crate::WireField>::SIZE;
                    let $field = <$ty as $crate::WireField>::read::<$endian>(&bytes[offset..end]);
                    offset = end;
                )*

                Ok(Self { $($field),* })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian, NativeEndian};

    packed_record! {
        struct Size1: NativeEndian {
            a: i8,
        }
    }

    packed_record! {
        #[derive(Debug, PartialEq)]
        struct Size5: LittleEndian {
            a: i8,
            b: i32,
        }
    }

    packed_record! {
        #[derive(Debug, PartialEq)]
        struct Size15: BigEndian {
            a: i8,
            e: i16,
            b: i32,
            c: i64,
        }
    }

    packed_record! {
        #[derive(Debug, PartialEq)]
        struct Mixed: BigEndian {
            tag: [u8; 4],
            ratio: f32,
            big: u128,
        }
    }

    #[test]
    fn sizes_are_sum_of_fields() {
        assert_eq!(Size1::SIZE, 1);
        assert_eq!(Size5::SIZE, 5);
        assert_eq!(Size15::SIZE, 15);
        assert_eq!(Mixed::SIZE, 24);

        assert_eq!(Size1 { a: -1 }.to_bytes(), [0xFF]);
    }

    #[test]
    fn little_endian_layout() {
        let record = Size5 { a: 1, b: 0x01020304 };
        assert_eq!(record.to_bytes(), [1, 4, 3, 2, 1]);
        assert_eq!(Size5::read_from(&[1, 4, 3, 2, 1]).unwrap(), record);
    }

    #[test]
    fn big_endian_layout() {
        let record = Size15 {
            a: -2,
            e: 0x0102,
            b: 0x03040506,
            c: 0x0708090A0B0C0D0E,
        };

        let bytes = record.to_bytes();
        assert_eq!(
            bytes,
            [0xFE, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
        assert_eq!(Size15::read_from(&bytes).unwrap(), record);
    }

    #[test]
    fn tags_and_floats() {
        let record = Mixed {
            tag: *b"RIFF",
            ratio: 1.5,
            big: 1,
        };

        let bytes = record.to_bytes();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[4..8], &1.5f32.to_be_bytes());
        assert_eq!(bytes[23], 1);
        assert_eq!(Mixed::read_from(&bytes).unwrap(), record);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let record = Size5::read_from(&[9, 1, 0, 0, 0, 0xAA, 0xBB]).unwrap();
        assert_eq!(record, Size5 { a: 9, b: 1 });
    }

    #[test]
    fn short_buffer() {
        assert_eq!(
            Size15::read_from(&[0; 14]),
            Err(PackedError::BufferTooShort { len: 14, size: 15 })
        );
        assert_eq!(
            Size1::read_from(&[]).err(),
            Some(PackedError::BufferTooShort { len: 0, size: 1 })
        );
    }
}
