//! DSF (.dsf) container writing.
//!
//! The output side of the converter: bit/byte-order primitives, the
//! interleaved-to-planar sample transcoder, and the chunk header
//! writer. The crate knows nothing about the input container; it takes
//! the handful of format parameters and a payload stream.

pub mod bits;
pub mod transcode;
pub mod writer;

pub use bits::{reverse_bits, swap_bytes};
pub use transcode::{transcode, CHANNEL_BLOCK_SIZE};
pub use writer::{Format, HEADER_SIZE};
