use std::fmt;

/// Source of the four bytes of a FourCC tag
///
/// Fixed size sources only exist for a length of 4, so anything else fails to build:
///
/// ```compile_fail
/// ezk_binutil::four_cc(b"bad");
/// ```
///
/// ```compile_fail
/// ezk_binutil::four_cc(&[b'R', b'I', b'F', b'F', b'F']);
/// ```
///
/// Dynamically sized sources panic if their length is not 4.
pub trait FourCcSource {
    fn four_cc_bytes(&self) -> [u8; 4];
}

impl FourCcSource for [u8; 4] {
    fn four_cc_bytes(&self) -> [u8; 4] {
        *self
    }
}

impl FourCcSource for [i8; 4] {
    fn four_cc_bytes(&self) -> [u8; 4] {
        self.map(|b| b as u8)
    }
}

impl FourCcSource for [u8] {
    #[track_caller]
    fn four_cc_bytes(&self) -> [u8; 4] {
        match <[u8; 4]>::try_from(self) {
            Ok(bytes) => bytes,
            Err(_) => panic!("FourCC source must be 4 bytes long, got {}", self.len()),
        }
    }
}

impl FourCcSource for Vec<u8> {
    #[track_caller]
    fn four_cc_bytes(&self) -> [u8; 4] {
        self.as_slice().four_cc_bytes()
    }
}

impl FourCcSource for str {
    #[track_caller]
    fn four_cc_bytes(&self) -> [u8; 4] {
        self.as_bytes().four_cc_bytes()
    }
}

impl FourCcSource for String {
    #[track_caller]
    fn four_cc_bytes(&self) -> [u8; 4] {
        self.as_bytes().four_cc_bytes()
    }
}

/// Pack four bytes into a tag, first byte in the lowest order position
///
/// The result is the same on every target: `b0 | b1 << 8 | b2 << 16 | b3 << 24`.
///
/// ```
/// use ezk_binutil::four_cc;
///
/// assert_eq!(four_cc(b"RIFF"), 0x46464952);
/// assert_eq!(four_cc(&String::from("WAVE")), 0x45564157);
/// ```
#[inline]
#[track_caller]
pub fn four_cc(source: &(impl FourCcSource + ?Sized)) -> u32 {
    u32::from_le_bytes(source.four_cc_bytes())
}

/// Const version of [`four_cc`] for fixed byte arrays
#[inline]
pub const fn four_cc_const(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

/// Const version of [`four_cc`] for string slices
///
/// Evaluated in a const context a string with a length other than 4 fails to build, at runtime
/// it panics. The [`four_cc!`](crate::four_cc!) macro always evaluates at compile time.
pub const fn four_cc_str(s: &str) -> u32 {
    let b = s.as_bytes();
    assert!(b.len() == 4, "FourCC source must be 4 bytes long");

    four_cc_const(&[b[0], b[1], b[2], b[3]])
}

/// Compute a FourCC from a string literal at compile time
///
/// ```
/// const AVI: u32 = ezk_binutil::four_cc!("AVI ");
/// assert_eq!(AVI, 0x20495641);
/// ```
///
/// ```compile_fail
/// let _ = ezk_binutil::four_cc!("invalid");
/// ```
#[macro_export]
macro_rules! four_cc {
    ($s:literal) => {
        const { $crate::four_cc_str($s) }
    };
}

/// Typed FourCC tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCc(pub u32);

impl FourCc {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(four_cc_const(&bytes))
    }

    #[track_caller]
    pub fn from_source(source: &(impl FourCcSource + ?Sized)) -> Self {
        Self(four_cc(source))
    }

    /// The four bytes in tag order
    pub const fn bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<FourCc> for u32 {
    fn from(value: FourCc) -> Self {
        value.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes() {
            let c = if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            };

            fmt::Write::write_char(f, c)?;
        }

        Ok(())
    }
}
