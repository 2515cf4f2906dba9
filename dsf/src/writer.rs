//! DSF container chunk headers.

use crate::transcode::CHANNEL_BLOCK_SIZE;
use byteorder::{WriteBytesExt, LE};
use std::io::{self, Write};
use std::num::NonZeroU16;

/// Bytes occupied by the `DSD `, `fmt ` and `data` chunk headers that
/// precede the sample data.
pub const HEADER_SIZE: u64 = 28 + 52 + 12;

/// Format parameters of the output container, taken from the parsed
/// input properties.
#[derive(Debug, Clone, Copy)]
pub struct Format {
    pub sample_rate: u32,
    pub num_channels: NonZeroU16,
    /// Raw sample payload length in bytes, before block padding.
    pub sound_size: u64,
}

impl Format {
    /// Writes the `DSD `, `fmt ` and `data` chunk headers. All fields
    /// are little-endian. The caller streams the planar sample data
    /// right after, one full channel window per block.
    pub fn write_headers<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let channels = u32::from(self.num_channels.get());
        let too_large = || io::Error::new(io::ErrorKind::InvalidInput, "sound size out of range");
        let file_size = self
            .sound_size
            .checked_add(HEADER_SIZE)
            .ok_or_else(too_large)?;
        let sample_count =
            self.sound_size.checked_mul(8).ok_or_else(too_large)? / u64::from(channels);

        w.write_all(b"DSD ")?;
        w.write_u64::<LE>(28)?; // this chunk, id included
        w.write_u64::<LE>(file_size)?; // total file size
        w.write_u64::<LE>(0)?; // metadata pointer; none is written

        w.write_all(b"fmt ")?;
        w.write_u64::<LE>(52)?;
        w.write_u32::<LE>(1)?; // format version
        w.write_u32::<LE>(0)?; // format id: raw DSD
        w.write_u32::<LE>(2)?; // channel type: stereo
        w.write_u32::<LE>(channels)?;
        w.write_u32::<LE>(self.sample_rate)?;
        w.write_u32::<LE>(1)?; // bits per sample
        w.write_u64::<LE>(sample_count)?; // samples per channel
        w.write_u32::<LE>(CHANNEL_BLOCK_SIZE as u32)?;
        w.write_u32::<LE>(0)?; // reserved

        w.write_all(b"data")?;
        w.write_u64::<LE>(self.sound_size + 12)?;
        Ok(())
    }
}
