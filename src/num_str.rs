use std::any::type_name;
use std::borrow::Cow;
use std::num::IntErrorKind;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Everything that can go wrong when parsing a number with [`try_to_num`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseNumError {
    #[error("input does not start with a number")]
    NoDigits,

    #[error("number does not fit into {0}")]
    OutOfRange(&'static str),
}

/// Integer or floating point type which can be converted from and to text
#[allow(private_bounds)]
pub trait Numeric: NumericInternal + Copy + Default + PartialEq + Send + Sync + 'static {}

pub(crate) trait NumericInternal: Sized {
    fn parse_prefix(text: &str, radix: u32) -> Result<Self, ParseNumError>;

    fn write_radix(self, radix: u32, out: &mut String);
}

/// Character sequence a number can be parsed from
///
/// Bytes are read as UTF-8 and `u16` sequences as UTF-16 (wide strings). Decoding stops at the
/// first invalid code unit, which then ends the number like any other non digit.
pub trait NumText {
    fn num_text(&self) -> Cow<'_, str>;
}

impl NumText for str {
    fn num_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NumText for String {
    fn num_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NumText for [u8] {
    fn num_text(&self) -> Cow<'_, str> {
        let valid = match std::str::from_utf8(self) {
            Ok(text) => return Cow::Borrowed(text),
            Err(e) => &self[..e.valid_up_to()],
        };

        // Safety: valid_up_to marks the end of the valid UTF-8 prefix
        Cow::Borrowed(unsafe { std::str::from_utf8_unchecked(valid) })
    }
}

impl<const N: usize> NumText for [u8; N] {
    fn num_text(&self) -> Cow<'_, str> {
        self.as_slice().num_text()
    }
}

impl NumText for Vec<u8> {
    fn num_text(&self) -> Cow<'_, str> {
        self.as_slice().num_text()
    }
}

impl NumText for [char] {
    fn num_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.iter().collect())
    }
}

impl NumText for Vec<char> {
    fn num_text(&self) -> Cow<'_, str> {
        self.as_slice().num_text()
    }
}

impl NumText for [u16] {
    fn num_text(&self) -> Cow<'_, str> {
        Cow::Owned(
            char::decode_utf16(self.iter().copied())
                .map_while(Result::ok)
                .collect(),
        )
    }
}

impl NumText for Vec<u16> {
    fn num_text(&self) -> Cow<'_, str> {
        self.as_slice().num_text()
    }
}

/// Character container a number can be formatted into
pub trait TextContainer: Sized {
    fn from_text(text: String) -> Self;
}

impl TextContainer for String {
    fn from_text(text: String) -> Self {
        text
    }
}

impl TextContainer for Box<str> {
    fn from_text(text: String) -> Self {
        text.into_boxed_str()
    }
}

impl TextContainer for Vec<u8> {
    fn from_text(text: String) -> Self {
        text.into_bytes()
    }
}

impl TextContainer for Vec<char> {
    fn from_text(text: String) -> Self {
        text.chars().collect()
    }
}

/// Wide string
impl TextContainer for Vec<u16> {
    fn from_text(text: String) -> Self {
        text.encode_utf16().collect()
    }
}

#[inline]
fn check_radix(radix: u32) {
    assert!(
        (2..=36).contains(&radix),
        "radix must be in 2..=36, got {radix}"
    );
}

fn count_matching(bytes: &[u8], f: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| f(b)).count()
}

/// Longest prefix of `text` forming an integer in `radix`
fn int_prefix(text: &str, radix: u32, signed: bool) -> &str {
    let bytes = text.as_bytes();
    let sign = usize::from(signed && bytes.first() == Some(&b'-'));
    let digits = count_matching(&bytes[sign..], |b| (b as char).is_digit(radix));

    if digits == 0 { "" } else { &text[..sign + digits] }
}

/// Longest prefix of `text` forming a decimal or scientific float, or an inf/nan literal
///
/// Returns the prefix and whether it is one of the literals.
fn float_prefix(text: &str) -> (&str, bool) {
    let bytes = text.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));

    for word in ["infinity", "inf", "nan"] {
        let rest = &bytes[i..];
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return (&text[..i + word.len()], true);
        }
    }

    let int_digits = count_matching(&bytes[i..], |b| b.is_ascii_digit());
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_matching(&bytes[i + 1..], |b| b.is_ascii_digit());
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return ("", false);
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }

        let exp_digits = count_matching(&bytes[j..], |b| b.is_ascii_digit());
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    (&text[..i], false)
}

fn write_magnitude(mut magnitude: u128, negative: bool, radix: u32, out: &mut String) {
    // 128 binary digits
    let mut buf = [0u8; 128];
    let mut pos = buf.len();
    let radix = u128::from(radix);

    loop {
        pos -= 1;
        buf[pos] = DIGITS[(magnitude % radix) as usize];
        magnitude /= radix;

        if magnitude == 0 {
            break;
        }
    }

    if negative {
        out.push('-');
    }

    out.extend(buf[pos..].iter().map(|&b| b as char));
}

/// Split the output of ryu into sign, significant digits and decimal point position
///
/// The value equals `0.DIGITS * 10^point`. Leading and trailing zeros are stripped, so zero
/// yields no digits.
fn decompose(formatted: &str) -> (bool, Vec<u8>, i32) {
    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted),
    };

    let (mantissa, exp) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut point = int_part.len() as i32 + exp;

    let leading = count_matching(&digits, |b| b == b'0');
    digits.drain(..leading);
    point -= leading as i32;

    while digits.last() == Some(&b'0') {
        digits.pop();
    }

    (negative, digits, point)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&b| b as char));
}

fn fixed_notation(digits: &[u8], point: i32) -> String {
    let mut out = String::with_capacity(digits.len() + point.unsigned_abs() as usize + 2);

    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        push_digits(&mut out, digits);
    } else if (point as usize) < digits.len() {
        let (int_part, frac_part) = digits.split_at(point as usize);
        push_digits(&mut out, int_part);
        out.push('.');
        push_digits(&mut out, frac_part);
    } else {
        push_digits(&mut out, digits);
        out.extend(std::iter::repeat_n('0', point as usize - digits.len()));
    }

    out
}

fn scientific_notation(digits: &[u8], point: i32) -> String {
    let mut out = String::with_capacity(digits.len() + 6);

    push_digits(&mut out, &digits[..1]);
    if digits.len() > 1 {
        out.push('.');
        push_digits(&mut out, &digits[1..]);
    }

    let exp = point - 1;
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    if exp.unsigned_abs() < 10 {
        out.push('0');
    }
    out.push_str(itoa::Buffer::new().format(exp.unsigned_abs()));

    out
}

/// Shortest round trip representation, fixed or scientific, whichever is shorter
fn write_shortest(formatted: &str, out: &mut String) {
    let (negative, digits, point) = decompose(formatted);

    if negative {
        out.push('-');
    }

    if digits.is_empty() {
        out.push('0');
        return;
    }

    let fixed = fixed_notation(&digits, point);
    let scientific = scientific_notation(&digits, point);

    if fixed.len() <= scientific.len() {
        out.push_str(&fixed);
    } else {
        out.push_str(&scientific);
    }
}

macro_rules! impl_numeric_int {
    ($($ty:ty => $signed:expr),*) => {
        $(
            impl Numeric for $ty {}

            impl NumericInternal for $ty {
                fn parse_prefix(text: &str, radix: u32) -> Result<Self, ParseNumError> {
                    let prefix = int_prefix(text, radix, $signed);

                    <$ty>::from_str_radix(prefix, radix).map_err(|e| match e.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ParseNumError::OutOfRange(type_name::<$ty>())
                        }
                        _ => ParseNumError::NoDigits,
                    })
                }

                fn write_radix(self, radix: u32, out: &mut String) {
                    if radix == 10 {
                        out.push_str(itoa::Buffer::new().format(self));
                        return;
                    }

                    #[allow(unused_comparisons)]
                    let negative = self < 0;
                    write_magnitude((self as i128).unsigned_abs(), negative, radix, out);
                }
            }
        )*
    };
}

impl_numeric_int!(
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true
);

impl Numeric for u128 {}

impl NumericInternal for u128 {
    fn parse_prefix(text: &str, radix: u32) -> Result<Self, ParseNumError> {
        let prefix = int_prefix(text, radix, false);

        u128::from_str_radix(prefix, radix).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ParseNumError::OutOfRange(type_name::<u128>()),
            _ => ParseNumError::NoDigits,
        })
    }

    fn write_radix(self, radix: u32, out: &mut String) {
        if radix == 10 {
            out.push_str(itoa::Buffer::new().format(self));
        } else {
            write_magnitude(self, false, radix, out);
        }
    }
}

macro_rules! impl_numeric_float {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {}

            impl NumericInternal for $ty {
                fn parse_prefix(text: &str, _radix: u32) -> Result<Self, ParseNumError> {
                    let (prefix, literal) = float_prefix(text);

                    let value = prefix
                        .parse::<$ty>()
                        .map_err(|_| ParseNumError::NoDigits)?;

                    if value.is_infinite() && !literal {
                        return Err(ParseNumError::OutOfRange(type_name::<$ty>()));
                    }

                    Ok(value)
                }

                fn write_radix(self, _radix: u32, out: &mut String) {
                    if self.is_nan() {
                        out.push_str("nan");
                    } else if self.is_infinite() {
                        out.push_str(if self < 0.0 { "-inf" } else { "inf" });
                    } else {
                        write_shortest(ryu::Buffer::new().format_finite(self), out);
                    }
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);

/// Parse a base 10 number from the start of `text`, see [`to_num_radix`]
#[inline]
pub fn to_num<T: Numeric>(text: &(impl NumText + ?Sized)) -> T {
    to_num_radix(text, 10)
}

/// Parse a number in `radix` from the start of `text`
///
/// The longest prefix forming a valid number is used, a leading `-` is accepted for signed and
/// floating point types. Yields zero if `text` does not start with a number or if the number
/// does not fit into `T`. Floating point types always parse decimal or scientific notation and
/// ignore `radix`.
///
/// Panics if `radix` is not in `2..=36`.
///
/// ```
/// use ezk_binutil::{to_num, to_num_radix};
///
/// assert_eq!(to_num::<i32>("-1234"), -1234);
/// assert_eq!(to_num::<u8>("1234"), 0);
/// assert_eq!(to_num_radix::<u32>("1234ABCD", 16), 0x1234ABCD);
/// assert_eq!(to_num::<f64>(b"-123.456"), -123.456);
/// ```
#[inline]
pub fn to_num_radix<T: Numeric>(text: &(impl NumText + ?Sized), radix: u32) -> T {
    try_to_num_radix(text, radix).unwrap_or_default()
}

/// Parse a base 10 number from the start of `text`, reporting why parsing failed
#[inline]
pub fn try_to_num<T: Numeric>(text: &(impl NumText + ?Sized)) -> Result<T, ParseNumError> {
    try_to_num_radix(text, 10)
}

/// Like [`to_num_radix`] but returns an error instead of zero
pub fn try_to_num_radix<T: Numeric>(
    text: &(impl NumText + ?Sized),
    radix: u32,
) -> Result<T, ParseNumError> {
    check_radix(radix);

    T::parse_prefix(&text.num_text(), radix)
}

/// Format `value` in base 10 into the container `C`, see [`to_str_radix`]
#[inline]
pub fn to_str<C: TextContainer>(value: impl Numeric) -> C {
    to_str_radix(value, 10)
}

/// Format `value` in `radix` into the container `C`
///
/// Integers use lowercase digits beyond 9. Floating point values ignore `radix` and use the
/// shortest representation that parses back to the same value, in fixed notation or in
/// scientific notation (`1.234e-05`), whichever is shorter. Ties prefer fixed notation.
///
/// Panics if `radix` is not in `2..=36`.
pub fn to_str_radix<C: TextContainer>(value: impl Numeric, radix: u32) -> C {
    check_radix(radix);

    let mut out = String::new();
    value.write_radix(radix, &mut out);
    C::from_text(out)
}

/// Format `value` in base 10 into a [`String`]
///
/// ```
/// use ezk_binutil::to_string;
///
/// assert_eq!(to_string(-1234), "-1234");
/// assert_eq!(to_string(0.00001234), "1.234e-05");
/// ```
#[inline]
pub fn to_string(value: impl Numeric) -> String {
    to_str_radix(value, 10)
}

/// Format `value` in `radix` into a [`String`]
#[inline]
pub fn to_string_radix(value: impl Numeric, radix: u32) -> String {
    to_str_radix(value, radix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integers() {
        assert_eq!(to_num::<u32>(&String::from("1234")), 1234);
        assert_eq!(to_num::<i32>(&String::from("-1234")), -1234);
        assert_eq!(to_num::<u8>("123"), 123);
        assert_eq!(to_num::<u16>(&vec![b'1', b'2', b'3']), 123);
        assert_eq!(to_num::<u16>(&vec!['1', '2', '3']), 123);
        assert_eq!(to_num::<u16>("123"), 123);
        assert_eq!(to_num::<u16>(b"123"), 123);
    }

    #[test]
    fn parse_overflow_is_zero() {
        assert_eq!(to_num::<u8>("1234"), 0);
        assert_eq!(to_num::<i8>("-129"), 0);
        assert_eq!(to_num::<u64>("99999999999999999999999"), 0);
        assert_eq!(try_to_num::<u8>("256"), Err(ParseNumError::OutOfRange("u8")));
        assert_eq!(try_to_num::<i8>("-129"), Err(ParseNumError::OutOfRange("i8")));
    }

    #[test]
    fn parse_radix() {
        assert_eq!(to_num_radix::<u32>("1234ABCD", 16), 0x1234ABCD);
        assert_eq!(to_num_radix::<u32>("1234abcd", 16), 0x1234ABCD);
        assert_eq!(to_num_radix::<i8>("1010101", 2), 0b1010101);
        assert_eq!(
            to_num_radix::<u64>(
                "1010101010101010101010101010101010101010101010101010101010101010",
                2
            ),
            0b1010101010101010101010101010101010101010101010101010101010101010
        );
        assert_eq!(to_num_radix::<u32>("zz", 36), 35 * 36 + 35);
    }

    #[test]
    fn parse_longest_prefix() {
        assert_eq!(to_num::<u32>("123abc"), 123);
        assert_eq!(to_num_radix::<u32>("ff-1", 16), 0xFF);
        assert_eq!(to_num_radix::<u8>("1012", 2), 0b101);
        assert_eq!(to_num::<i32>("-12-3"), -12);
        assert_eq!(to_num::<f64>("1.5e3xyz"), 1500.0);
        assert_eq!(to_num::<f64>("2.5e"), 2.5);
        assert_eq!(to_num::<f64>("2.5e+"), 2.5);
        assert_eq!(to_num::<f64>("7."), 7.0);
        assert_eq!(to_num::<f64>(".25"), 0.25);
        assert_eq!(to_num::<u32>(&b"42\xFF7"[..]), 42);
    }

    #[test]
    fn parse_rejects() {
        assert_eq!(try_to_num::<u32>(""), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<u32>("-5"), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<u32>("+5"), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<u32>(" 5"), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<i32>("-"), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<f64>("."), Err(ParseNumError::NoDigits));
        assert_eq!(try_to_num::<f64>("e5"), Err(ParseNumError::NoDigits));
        assert_eq!(to_num_radix::<u32>("9", 8), 0);
    }

    #[test]
    fn parse_floats() {
        assert_eq!(to_num::<f32>(&String::from("12.34")), 12.34f32);
        assert_eq!(to_num::<f64>(&String::from("-0.01234")), -0.01234);
        assert_eq!(to_num::<f64>(&String::from("0.00001234")), 0.00001234);
        assert_eq!(to_num::<f32>(&vec![b'1', b'2', b'.', b'3']), 12.3f32);
        assert_eq!(to_num::<f64>("-123.456"), -123.456);
        assert_eq!(to_num::<f64>("1e+06"), 1e6);
        assert_eq!(to_num::<f64>("1.234e-05"), 1.234e-5);
    }

    #[test]
    fn parse_float_specials() {
        assert_eq!(to_num::<f64>("inf"), f64::INFINITY);
        assert_eq!(to_num::<f64>("-Infinity"), f64::NEG_INFINITY);
        assert!(to_num::<f32>("nan").is_nan());
        assert_eq!(to_num::<f64>("1e400"), 0.0);
        assert_eq!(try_to_num::<f32>("1e39"), Err(ParseNumError::OutOfRange("f32")));
    }

    #[test]
    fn parse_wide() {
        let wide: Vec<u16> = "-4321".encode_utf16().collect();
        assert_eq!(to_num::<i32>(&wide), -4321);
        assert_eq!(to_num::<f64>(&wide[..]), -4321.0);
    }

    #[test]
    #[should_panic]
    fn parse_invalid_radix() {
        to_num_radix::<u32>("1", 37);
    }

    #[test]
    fn format_integers() {
        assert_eq!(to_str::<String>(1234u32), "1234");
        assert_eq!(to_string(1234u32), "1234");
        assert_eq!(to_string(-1234), "-1234");
        assert_eq!(to_string_radix(0x1234ABCD, 16), "1234abcd");
        assert_eq!(to_string_radix(0b1010101, 2), "1010101");
        assert_eq!(
            to_string_radix(0b1010101010101010101010101010101010101010101010101010101010101010u64, 2),
            "1010101010101010101010101010101010101010101010101010101010101010"
        );
        assert_eq!(to_string_radix(-255i16, 16), "-ff");
        assert_eq!(to_string_radix(i8::MIN, 2), "-10000000");
        assert_eq!(to_string_radix(u128::MAX, 16), "f".repeat(32));
        assert_eq!(to_string_radix(0u8, 7), "0");
        assert_eq!(to_string_radix(35u8, 36), "z");
    }

    #[test]
    fn format_floats() {
        assert_eq!(to_string(12.34f32), "12.34");
        assert_eq!(to_string(-0.01234), "-0.01234");
        assert_eq!(to_string(0.00001234), "1.234e-05");
        assert_eq!(to_string(0.001), "0.001");
        assert_eq!(to_string(0.0001), "1e-04");
        assert_eq!(to_string(0.0), "0");
        assert_eq!(to_string(-0.0), "-0");
        assert_eq!(to_string(1.0), "1");
        assert_eq!(to_string(100.0), "100");
        assert_eq!(to_string(1e6), "1e+06");
        assert_eq!(to_string(1.5e300), "1.5e+300");
        assert_eq!(to_string(123456.0), "123456");
        assert_eq!(to_string(f64::INFINITY), "inf");
        assert_eq!(to_string(f32::NEG_INFINITY), "-inf");
        assert_eq!(to_string(f64::NAN), "nan");
    }

    #[test]
    fn float_ignores_radix() {
        assert_eq!(to_string_radix(12.5, 16), "12.5");
        assert_eq!(to_num_radix::<f64>("12.5", 16), 12.5);
    }

    #[test]
    fn format_containers() {
        let wide: Vec<u16> = "1234".encode_utf16().collect();
        assert_eq!(to_str::<Vec<u16>>(1234u32), wide);
        assert_eq!(to_str::<Vec<u8>>(1234u32), b"1234".to_vec());
        assert_eq!(to_str::<Vec<char>>(1234u32), vec!['1', '2', '3', '4']);
        assert_eq!(&*to_str::<Box<str>>(-7i64), "-7");
    }

    #[test]
    fn integer_round_trip() {
        for radix in 2..=36 {
            for v in [i64::MIN, i64::MIN + 1, -1_000_000_007, -1, 0, 1, 42, i64::MAX] {
                assert_eq!(to_num_radix::<i64>(&to_string_radix(v, radix), radix), v);
            }

            for v in [0u64, 1, 35, 36, 0xDEAD_BEEF, u64::MAX] {
                assert_eq!(to_num_radix::<u64>(&to_string_radix(v, radix), radix), v);
            }

            for v in [0u128, u128::MAX, 1 << 100] {
                assert_eq!(to_num_radix::<u128>(&to_string_radix(v, radix), radix), v);
            }

            for v in [i8::MIN, -1, 0, i8::MAX] {
                assert_eq!(to_num_radix::<i8>(&to_string_radix(v, radix), radix), v);
            }
        }
    }

    #[test]
    fn float_round_trip() {
        for v in [
            0.1,
            -0.01234,
            0.00001234,
            1e-300,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::MIN,
            f64::EPSILON,
            123456789.125,
            5e-324,
        ] {
            assert_eq!(to_num::<f64>(&to_string(v)), v);
        }

        for v in [0.1f32, 12.34, f32::MAX, f32::MIN_POSITIVE, 3.0e-40, -7.5] {
            assert_eq!(to_num::<f32>(&to_string(v)), v);
        }
    }
}
