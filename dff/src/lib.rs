//! Basic support for DSDIFF (.dff) file reading.
//!
//! Only the properties needed to re-emit the sample data are
//! extracted; comments, markers and edit lists are skipped whole. The
//! walk is sequential and stateless apart from the cursor: every chunk
//! id is dispatched to a handler that consumes the body and leaves the
//! cursor at the next id.

mod chunks;
pub mod error;
pub mod types;

pub use error::{DffError, Result};
pub use types::ChunkId;

use chunks::ChunkKind;
use std::io::{Read, Seek};

/// Audio properties collected over one full chunk walk.
#[derive(Debug, Clone)]
pub struct Properties {
    /// Opaque `FVER` payload.
    pub version: [u8; 4],
    /// Samples per second per channel.
    pub sample_rate: u32,
    pub num_channels: u16,
    /// Byte offset of the raw sample data within the stream.
    pub sound_offset: u64,
    /// Raw sample data length in bytes.
    pub sound_size: u64,
}

#[derive(Debug, Default)]
pub(crate) struct PropertiesBuilder {
    pub version: Option<[u8; 4]>,
    pub sample_rate: Option<u32>,
    pub num_channels: Option<u16>,
    pub sound_offset: Option<u64>,
    pub sound_size: Option<u64>,
}

impl PropertiesBuilder {
    fn finish(self) -> Result<Properties> {
        Ok(Properties {
            version: self.version.ok_or(DffError::MissingChunk("FVER"))?,
            sample_rate: self.sample_rate.ok_or(DffError::MissingChunk("FS"))?,
            num_channels: self.num_channels.ok_or(DffError::MissingChunk("CHNL"))?,
            sound_offset: self.sound_offset.ok_or(DffError::MissingChunk("DSD"))?,
            sound_size: self.sound_size.ok_or(DffError::MissingChunk("DSD"))?,
        })
    }
}

impl Properties {
    /// Walks every chunk in the stream and collects the properties.
    ///
    /// The walk ends cleanly when fewer than four bytes remain for the
    /// next chunk id. It fails if a known chunk carries a bad
    /// signature, if an id is not in the known set, or if the stream
    /// ends without the sample rate, channel or sound data chunks ever
    /// appearing.
    pub fn read<R: Read + Seek>(r: &mut R) -> Result<Self> {
        let mut props = PropertiesBuilder::default();

        while let Some(id) = types::next_id(r)? {
            let kind = ChunkKind::of(id).ok_or(DffError::UnrecognizedChunk(id))?;
            log::debug!("{} chunk ({:?})", id, kind);
            kind.handle(r, &mut props)?;
        }

        props.finish()
    }
}
