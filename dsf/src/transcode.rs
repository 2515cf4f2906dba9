//! Interleaved-to-planar sample transcoding.

use crate::bits::reverse_bits;
use std::io::{self, ErrorKind, Read, Write};
use std::num::NonZeroU16;

/// Bytes of contiguous sample data per channel in every DSF data
/// block.
pub const CHANNEL_BLOCK_SIZE: usize = 4096;

/// Fills `buf` from `r` until it is full or the stream ends, returning
/// how many bytes arrived.
fn fill_window<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => (),
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Streams channel-interleaved one-bit sample data from `src` into
/// `dst` in planar block order.
///
/// Input byte `k` of a window belongs to channel `k % channels` at
/// in-channel position `k / channels`; it lands bit-reversed at
/// `k / channels + CHANNEL_BLOCK_SIZE * (k % channels)` of the output
/// window. The final window is zero-padded past the last whole frame,
/// so every channel block still comes out at full size. Memory stays
/// bounded by two windows of `CHANNEL_BLOCK_SIZE * channels` bytes.
///
/// `src` must already be limited to the payload span (`Read::take`);
/// the loop runs until a zero-length read. Returns the number of bytes
/// written.
pub fn transcode<R: Read, W: Write>(
    src: &mut R,
    dst: &mut W,
    channels: NonZeroU16,
) -> io::Result<u64> {
    let channels = usize::from(channels.get());
    let window = CHANNEL_BLOCK_SIZE * channels;
    let mut src_buf = vec![0u8; window];
    let mut dst_buf = vec![0u8; window];
    let mut written = 0u64;

    loop {
        let len = fill_window(src, &mut src_buf)?;
        if len == 0 {
            break;
        }
        if len < window {
            // final short window: pad with zero bits, not reversed
            // leftovers
            for b in dst_buf.iter_mut() {
                *b = 0;
            }
        }

        // whole frames only; a trailing partial frame falls into the
        // padding
        let frames = len / channels;
        for (k, &b) in src_buf[..frames * channels].iter().enumerate() {
            dst_buf[k / channels + CHANNEL_BLOCK_SIZE * (k % channels)] = reverse_bits(b);
        }

        dst.write_all(&dst_buf)?;
        written += window as u64;
    }

    Ok(written)
}
