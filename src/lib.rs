//! Bit exact building blocks for binary file and wire formats
//!
//! - [`to_big_endian`], [`to_little_endian`] and [`convert`] switch between byte orders
//! - [`reverse_bytes`] reverses integers and fixed size arrays
//! - [`pack_bits`] and [`unpack_bits`] squeeze redundant high bits out of every byte
//! - [`to_num`] and [`to_str`] convert between numbers and text in any radix from 2 to 36
//! - [`four_cc`] builds container tags like `RIFF` or `WAVE`
//! - [`packed_record!`] declares padding free records
//!
//! Everything is a pure function without global state.

pub use bits::{pack_bits, unpack_bits};
pub use endian::{
    BigEndian, Endian, LittleEndian, NativeEndian, convert, convert_slice, is_big_endian,
    to_big_endian, to_little_endian,
};
pub use fourcc::{FourCc, FourCcSource, four_cc, four_cc_const, four_cc_str};
pub use log::LogLevel;
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_slice_multi_thread;
pub use num_str::{
    NumText, Numeric, ParseNumError, TextContainer, to_num, to_num_radix, to_str, to_str_radix,
    to_string, to_string_radix, try_to_num, try_to_num_radix,
};
pub use packed::{PackedError, PackedRecord, WireField};
pub use primitive::{Primitive, Unsigned};
pub use reverse::{ReverseBytes, reverse_bytes, reverse_bytes_in_place};

mod bits;
mod endian;
mod fourcc;
pub mod log;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod num_str;
pub mod packed;
mod primitive;
mod reverse;
