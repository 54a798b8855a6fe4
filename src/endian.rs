use crate::{ReverseBytes, reverse_bytes_in_place};

pub struct NativeEndian;
pub struct BigEndian;
pub struct LittleEndian;

pub trait Endian {
    const IS_NATIVE: bool;
}

impl Endian for NativeEndian {
    const IS_NATIVE: bool = true;
}

impl Endian for BigEndian {
    const IS_NATIVE: bool = cfg!(target_endian = "big");
}

impl Endian for LittleEndian {
    const IS_NATIVE: bool = cfg!(target_endian = "little");
}

/// Returns true if the target stores the most significant byte of an integer first
#[inline(always)]
pub const fn is_big_endian() -> bool {
    cfg!(target_endian = "big")
}

/// Convert `value` between the native byte order and `E`
///
/// The conversion is its own inverse, so the same call is used for both directions.
#[inline(always)]
pub fn convert<E: Endian, T: ReverseBytes>(value: T) -> T {
    if E::IS_NATIVE {
        value
    } else {
        value.reverse_bytes()
    }
}

/// Returns `value` unchanged on big endian targets, byte reversed otherwise
#[inline(always)]
pub fn to_big_endian<T: ReverseBytes>(value: T) -> T {
    convert::<BigEndian, T>(value)
}

/// Returns `value` unchanged on little endian targets, byte reversed otherwise
#[inline(always)]
pub fn to_little_endian<T: ReverseBytes>(value: T) -> T {
    convert::<LittleEndian, T>(value)
}

/// Convert every element of `values` in place between the native byte order and `E`
pub fn convert_slice<E: Endian, T: ReverseBytes + Copy>(values: &mut [T]) {
    if !E::IS_NATIVE {
        reverse_bytes_in_place(values);
    }
}
