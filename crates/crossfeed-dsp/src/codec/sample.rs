//! Native in-memory sample types.

use super::IntWidth;

/// A native sample type the engine can process in place.
///
/// Integers go through the same width normalization as the wire codec;
/// unsigned types are biased by their top bit.
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

macro_rules! impl_signed_sample {
    ($($t:ty => $width:expr),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    $width.normalize(self as i32)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    $width.denormalize(value) as $t
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_sample {
    ($($t:ty as $s:ty => $width:expr),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    let bias = $width.sign_bit() as $t;
                    $width.normalize((self ^ bias) as $s as i32)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    let bias = $width.sign_bit() as $t;
                    ($width.denormalize(value) as $s as $t) ^ bias
                }
            }
        )*
    };
}

impl_signed_sample! {
    i8 => IntWidth::W8,
    i16 => IntWidth::W16,
    i32 => IntWidth::W32,
}

impl_unsigned_sample! {
    u8 as i8 => IntWidth::W8,
    u16 as i16 => IntWidth::W16,
    u32 as i32 => IntWidth::W32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ByteOrder, SampleFormat};

    #[test]
    fn test_signed_extremes() {
        assert_eq!(i16::MAX.to_f64(), 1.0);
        assert_eq!(i16::from_f64(-1.0), -32767);
        assert_eq!(i8::from_f64(1.0), 127);
        assert_eq!(i32::from_f64(1.0), i32::MAX);
    }

    #[test]
    fn test_unsigned_midpoint_is_silence() {
        assert_eq!(0x80u8.to_f64(), 0.0);
        assert_eq!(0x8000u16.to_f64(), 0.0);
        assert_eq!(0x8000_0000u32.to_f64(), 0.0);
        assert_eq!(u8::from_f64(0.0), 0x80);
        assert_eq!(u16::from_f64(1.0), 0xffff);
        assert_eq!(u16::from_f64(-1.0), 0x0001);
    }

    #[test]
    fn test_typed_agrees_with_wire_codec() {
        let values = [-1.0, -0.731, -0.25, 0.0, 0.1, 0.5, 0.999, 1.0];
        let fmt = SampleFormat::int(IntWidth::W16, false, ByteOrder::Native);
        for &v in &values {
            let typed = u16::from_f64(v);
            let mut bytes = [0u8; 2];
            fmt.encode(v, &mut bytes);
            assert_eq!(typed, u16::from_ne_bytes(bytes), "value {}", v);
            assert_eq!(typed.to_f64(), fmt.decode(&bytes));
        }
    }
}
