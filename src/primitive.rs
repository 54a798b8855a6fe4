/// Fixed width integer which can take part in byte level conversions
#[allow(private_bounds)]
pub trait Primitive: PrimitiveInternal + Copy + PartialEq + Default + Send + Sync + 'static {}

/// Unsigned [`Primitive`], the domain of the bit packing functions
#[allow(private_bounds)]
pub trait Unsigned: Primitive + UnsignedInternal {}

pub(crate) trait PrimitiveInternal: Sized {
    const BYTES: usize;

    fn swap_bytes(self) -> Self;
}

pub(crate) trait UnsignedInternal: Sized {
    fn to_u128(self) -> u128;

    /// Keeps the low `BYTES * 8` bits of `v`
    fn from_u128_truncate(v: u128) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty),*) => {
        $(
            impl Primitive for $ty {}

            impl PrimitiveInternal for $ty {
                const BYTES: usize = size_of::<$ty>();

                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Unsigned for $ty {}

            impl UnsignedInternal for $ty {
                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_u128_truncate(v: u128) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_widths() {
        assert_eq!(<u8 as PrimitiveInternal>::BYTES, 1);
        assert_eq!(<i16 as PrimitiveInternal>::BYTES, 2);
        assert_eq!(<u32 as PrimitiveInternal>::BYTES, 4);
        assert_eq!(<i64 as PrimitiveInternal>::BYTES, 8);
        assert_eq!(<u128 as PrimitiveInternal>::BYTES, 16);
    }

    #[test]
    fn truncate_keeps_low_bytes() {
        assert_eq!(u16::from_u128_truncate(0x1_2345), 0x2345);
        assert_eq!(u8::from_u128_truncate(0x1FF), 0xFF);
        assert_eq!(0xABCDu16.to_u128(), 0xABCD);
    }
}
