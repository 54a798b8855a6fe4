use crate::primitive::{PrimitiveInternal, Unsigned, UnsignedInternal};

#[inline(always)]
const fn group_mask<const N: u32>() -> u128 {
    const { assert!(N >= 1 && N <= 8, "bits per byte must be in 1..=8") };

    (1u128 << N) - 1
}

/// Pack `source` by keeping the low `N` bits of every byte
///
/// The kept bit groups are concatenated without gaps. The most significant byte of `source`
/// provides the most significant group of the result, independent of the target's byte order.
///
/// If any byte has bits set above the low `N` the value is not a packable representation
/// and is returned unchanged.
///
/// ```
/// use ezk_binutil::pack_bits;
///
/// assert_eq!(pack_bits::<7, u32>(0x1234), 0x0934);
/// assert_eq!(pack_bits::<4, u32>(0x0F0F0F0F), 0xFFFF);
/// assert_eq!(pack_bits::<7, u32>(0xFF7F7F7F), 0xFF7F7F7F);
/// ```
#[inline]
pub fn pack_bits<const N: u32, T: Unsigned>(source: T) -> T {
    let mask = group_mask::<N>();

    if N == 8 {
        return source;
    }

    let value = source.to_u128();
    let mut packed = 0u128;

    for i in 0..T::BYTES {
        let byte = (value >> (i * 8)) & 0xFF;

        if byte & !mask != 0 {
            return source;
        }

        packed |= byte << (i * N as usize);
    }

    T::from_u128_truncate(packed)
}

/// Expand every `N` bit group of `packed` into a full byte with the high bits cleared
///
/// Inverse of [`pack_bits`]: `pack_bits::<N, _>(unpack_bits::<N, _>(x)) == x` for every `x`
/// that fits into `N * size_of::<T>()` bits. Bits above that width are discarded.
///
/// ```
/// use ezk_binutil::unpack_bits;
///
/// assert_eq!(unpack_bits::<7, u32>(0x0934), 0x1234);
/// assert_eq!(unpack_bits::<4, u16>(0xAB), 0x0A0B);
/// ```
#[inline]
pub fn unpack_bits<const N: u32, T: Unsigned>(packed: T) -> T {
    let mask = group_mask::<N>();

    if N == 8 {
        return packed;
    }

    let value = packed.to_u128();
    let mut unpacked = 0u128;

    for i in 0..T::BYTES {
        let group = (value >> (i * N as usize)) & mask;
        unpacked |= group << (i * 8);
    }

    T::from_u128_truncate(unpacked)
}
