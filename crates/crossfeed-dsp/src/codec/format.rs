//! Wire sample formats and the parametrized decode/encode routine.

use byteorder::{ByteOrder as _, NativeEndian};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Byte order of multi-byte samples on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Native,
    Big,
    Little,
}

impl ByteOrder {
    /// Whether samples in this order can be read without swapping.
    #[inline]
    pub fn is_native(self) -> bool {
        match self {
            ByteOrder::Native => true,
            ByteOrder::Big => cfg!(target_endian = "big"),
            ByteOrder::Little => cfg!(target_endian = "little"),
        }
    }
}

/// Integer sample width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    W8,
    W16,
    W24,
    W32,
}

impl IntWidth {
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(IntWidth::W8),
            16 => Ok(IntWidth::W16),
            24 => Ok(IntWidth::W24),
            32 => Ok(IntWidth::W32),
            other => Err(Error::InvalidFormat(format!(
                "{} bits per integer sample (expected 8, 16, 24 or 32)",
                other
            ))),
        }
    }

    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W24 => 24,
            IntWidth::W32 => 32,
        }
    }

    #[inline]
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Largest positive value, the normalization divisor.
    #[inline]
    pub fn max_magnitude(self) -> f64 {
        match self {
            IntWidth::W8 => 127.0,
            IntWidth::W16 => 32767.0,
            IntWidth::W24 => 8388607.0,
            IntWidth::W32 => 2147483647.0,
        }
    }

    /// Top bit of the width; flipping it maps unsigned to signed and back.
    #[inline]
    pub fn sign_bit(self) -> u32 {
        1 << (self.bits() - 1)
    }

    #[inline]
    fn mask(self) -> u32 {
        u32::MAX >> (32 - self.bits())
    }

    /// Replicate the width's top bit into the upper bits.
    #[inline]
    fn sign_extend(self, raw: u32) -> i32 {
        let shift = 32 - self.bits();
        ((raw << shift) as i32) >> shift
    }

    #[inline]
    pub fn normalize(self, value: i32) -> f64 {
        value as f64 / self.max_magnitude()
    }

    /// Scale back to the integer range, truncating toward zero.
    #[inline]
    pub fn denormalize(self, value: f64) -> i32 {
        (value * self.max_magnitude()) as i32
    }
}

/// Sample encoding. Signedness only applies to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    Int { width: IntWidth, signed: bool },
    Float32,
    Float64,
}

/// Complete description of one interleaved stereo wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleFormat {
    pub encoding: Encoding,
    pub order: ByteOrder,
}

impl Default for SampleFormat {
    /// Signed 16-bit, native order.
    fn default() -> Self {
        Self::int(IntWidth::W16, true, ByteOrder::Native)
    }
}

impl SampleFormat {
    pub const fn new(encoding: Encoding, order: ByteOrder) -> Self {
        Self { encoding, order }
    }

    pub const fn int(width: IntWidth, signed: bool, order: ByteOrder) -> Self {
        Self::new(Encoding::Int { width, signed }, order)
    }

    pub const fn float32(order: ByteOrder) -> Self {
        Self::new(Encoding::Float32, order)
    }

    pub const fn float64(order: ByteOrder) -> Self {
        Self::new(Encoding::Float64, order)
    }

    /// Every supported combination of encoding, signedness and byte order.
    pub fn all() -> Vec<SampleFormat> {
        let orders = [ByteOrder::Native, ByteOrder::Big, ByteOrder::Little];
        let widths = [IntWidth::W8, IntWidth::W16, IntWidth::W24, IntWidth::W32];

        let mut formats = Vec::new();
        for &order in &orders {
            for &width in &widths {
                for signed in [true, false] {
                    formats.push(Self::int(width, signed, order));
                }
            }
            formats.push(Self::float32(order));
            formats.push(Self::float64(order));
        }
        formats
    }

    #[inline]
    pub fn bytes_per_sample(&self) -> usize {
        match self.encoding {
            Encoding::Int { width, .. } => width.bytes(),
            Encoding::Float32 => 4,
            Encoding::Float64 => 8,
        }
    }

    #[inline]
    pub fn bytes_per_frame(&self) -> usize {
        2 * self.bytes_per_sample()
    }

    /// One quantization step in the normalized domain.
    pub fn resolution(&self) -> f64 {
        match self.encoding {
            Encoding::Int { width, .. } => 1.0 / width.max_magnitude(),
            Encoding::Float32 => f32::EPSILON as f64,
            Encoding::Float64 => f64::EPSILON,
        }
    }

    /// Decode one sample. `bytes` must hold at least `bytes_per_sample()` bytes.
    #[inline]
    pub fn decode(&self, bytes: &[u8]) -> f64 {
        let n = self.bytes_per_sample();
        let raw = self.read_raw(&bytes[..n]);

        match self.encoding {
            Encoding::Int { width, signed } => {
                let raw = raw as u32;
                let raw = if signed { raw } else { raw ^ width.sign_bit() };
                width.normalize(width.sign_extend(raw))
            }
            Encoding::Float32 => f32::from_bits(raw as u32) as f64,
            Encoding::Float64 => f64::from_bits(raw),
        }
    }

    /// Encode one sample into the first `bytes_per_sample()` bytes.
    #[inline]
    pub fn encode(&self, value: f64, bytes: &mut [u8]) {
        let n = self.bytes_per_sample();

        let raw = match self.encoding {
            Encoding::Int { width, signed } => {
                let raw = width.denormalize(value) as u32 & width.mask();
                let raw = if signed { raw } else { raw ^ width.sign_bit() };
                raw as u64
            }
            Encoding::Float32 => (value as f32).to_bits() as u64,
            Encoding::Float64 => value.to_bits(),
        };

        self.write_raw(raw, &mut bytes[..n]);
    }

    /// Read as native, then swap when the wire order differs.
    #[inline]
    fn read_raw(&self, bytes: &[u8]) -> u64 {
        let raw = NativeEndian::read_uint(bytes, bytes.len());
        if self.order.is_native() {
            raw
        } else {
            swap_uint(raw, bytes.len())
        }
    }

    /// Swap into wire order when needed, then write as native.
    #[inline]
    fn write_raw(&self, raw: u64, bytes: &mut [u8]) {
        let raw = if self.order.is_native() {
            raw
        } else {
            swap_uint(raw, bytes.len())
        };
        NativeEndian::write_uint(bytes, raw, bytes.len());
    }
}

/// Reverse the low `nbytes` bytes of `raw`.
#[inline]
fn swap_uint(raw: u64, nbytes: usize) -> u64 {
    raw.swap_bytes() >> (64 - 8 * nbytes)
}

/// Reverse the byte order of every `bytes_per_sample`-sized sample in place.
///
/// Applying it twice restores the buffer. A trailing partial sample is left as is.
pub fn swap_byte_order(buffer: &mut [u8], bytes_per_sample: usize) {
    if bytes_per_sample < 2 {
        return;
    }
    buffer
        .chunks_exact_mut(bytes_per_sample)
        .for_each(|sample| sample.reverse());
}
