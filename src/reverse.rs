/// Values whose constituent bytes (or elements) can be put in reverse order
///
/// Reversing twice always yields the original value.
pub trait ReverseBytes: Sized {
    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_reverse_bytes {
    ($($ty:ty),*) => {
        $(
            impl ReverseBytes for $ty {
                #[inline(always)]
                fn reverse_bytes(self) -> Self {
                    <$ty as crate::primitive::PrimitiveInternal>::swap_bytes(self)
                }
            }
        )*
    };
}

impl_reverse_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T, const N: usize> ReverseBytes for [T; N] {
    #[inline(always)]
    fn reverse_bytes(mut self) -> Self {
        self.reverse();
        self
    }
}

/// Reverse the bytes of an integer, or the elements of a fixed size array
///
/// ```
/// use ezk_binutil::reverse_bytes;
///
/// assert_eq!(reverse_bytes(0x11223344u32), 0x44332211);
/// assert_eq!(reverse_bytes(*b"abcxyz"), *b"zyxcba");
/// ```
#[inline(always)]
pub fn reverse_bytes<T: ReverseBytes>(value: T) -> T {
    value.reverse_bytes()
}

/// Reverse every element of `values` in place
pub fn reverse_bytes_in_place<T: ReverseBytes + Copy>(values: &mut [T]) {
    #[inline(always)]
    fn impl_<T: ReverseBytes + Copy>(values: &mut [T]) {
        for v in values {
            *v = v.reverse_bytes();
        }
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("avx2") {
        #[target_feature(enable = "avx2")]
        unsafe fn call<T: ReverseBytes + Copy>(values: &mut [T]) {
            impl_(values);
        }

        // Safety: Did a feature check
        unsafe {
            return call(values);
        }
    }

    #[cfg(target_arch = "aarch64")]
    if std::arch::is_aarch64_feature_detected!("neon") {
        #[target_feature(enable = "neon")]
        unsafe fn call<T: ReverseBytes + Copy>(values: &mut [T]) {
            impl_(values);
        }

        // Safety: Did a feature check
        unsafe {
            return call(values);
        }
    }

    impl_(values)
}
