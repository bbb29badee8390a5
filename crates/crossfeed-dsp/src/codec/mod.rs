//! Conversion between wire PCM formats and the normalized `[-1.0, 1.0]` domain.
//!
//! Width, signedness and byte order are independent axes handled by one
//! routine ([`SampleFormat::decode`] / [`SampleFormat::encode`]):
//!
//! 1. read the raw bytes as native, swap if the wire order differs
//! 2. flip the top bit for unsigned formats
//! 3. sign-extend to 32 bits and divide by the width's max magnitude
//!
//! Encoding runs the same steps backwards, truncating toward zero.

mod format;
mod sample;

pub use format::{swap_byte_order, ByteOrder, Encoding, IntWidth, SampleFormat};
pub use sample::Sample;
