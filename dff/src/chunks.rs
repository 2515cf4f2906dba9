use crate::error::*;
use crate::types::*;
use crate::PropertiesBuilder;
use std::io::{Read, Seek, SeekFrom};

/// Every chunk id the walker understands. An id outside this set stops
/// the walk with [`DffError::UnrecognizedChunk`]; the format does not
/// let us skip a chunk we cannot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChunkKind {
    /// `FRM8` — form container; validates the `DSD ` form type.
    Form,
    /// `FVER` — format version.
    FormatVersion,
    /// `PROP` — property list container; validates the `SND ` property
    /// type. Its children are handled flat, as ordinary top-level
    /// chunks, and the output depends on that exact sequencing.
    PropertyList,
    /// `FS  ` — sample rate.
    SampleRate,
    /// `CHNL` — channel count and channel ids.
    Channels,
    /// `CMPR` — compression type and name.
    Compression,
    /// `ABSS` — absolute start time, unused.
    AbsoluteStart,
    /// `DSD ` — the sample data itself.
    SoundData,
    /// `COMT` — comments, skipped whole.
    Comments,
    /// `DIIN` — edited master information, skipped whole.
    EditedMaster,
}

impl ChunkKind {
    pub(crate) fn of(id: ChunkId) -> Option<Self> {
        Some(match id.data() {
            b"FRM8" => ChunkKind::Form,
            b"FVER" => ChunkKind::FormatVersion,
            b"PROP" => ChunkKind::PropertyList,
            b"FS  " => ChunkKind::SampleRate,
            b"CHNL" => ChunkKind::Channels,
            b"CMPR" => ChunkKind::Compression,
            b"ABSS" => ChunkKind::AbsoluteStart,
            b"DSD " => ChunkKind::SoundData,
            b"COMT" => ChunkKind::Comments,
            b"DIIN" => ChunkKind::EditedMaster,
            _ => return None,
        })
    }

    /// Consumes the chunk body following its id, leaving the cursor at
    /// the start of the next chunk id.
    pub(crate) fn handle<R: Read + Seek>(
        self,
        r: &mut R,
        props: &mut PropertiesBuilder,
    ) -> Result<()> {
        match self {
            ChunkKind::Form => {
                skip(r, 8)?;
                expect_signature(r, b"DSD ", "form type")?;
            }
            ChunkKind::FormatVersion => {
                skip(r, 8)?;
                let mut version = [0u8; 4];
                read_bytes(r, &mut version, "FVER")?;
                props.version = Some(version);
            }
            ChunkKind::PropertyList => {
                skip(r, 8)?;
                expect_signature(r, b"SND ", "property type")?;
            }
            ChunkKind::SampleRate => {
                skip(r, 8)?;
                props.sample_rate = Some(read_u32_be(r, "FS")?);
            }
            ChunkKind::Channels => {
                skip(r, 8)?;
                props.num_channels = Some(read_u16_be(r, "CHNL")?);
                // only the standard stereo pair is accepted, whatever
                // the count above says
                expect_signature(r, b"SLFT", "channel id")?;
                expect_signature(r, b"SRGT", "channel id")?;
            }
            ChunkKind::Compression => {
                skip(r, 8)?;
                expect_signature(r, b"DSD ", "compression type")?;
                let name_len = read_u8(r, "CMPR")?;
                skip(r, u64::from(name_len))?;
                // the length byte plus the name are padded to a 4-byte
                // boundary
                let rem = (1 + u64::from(name_len)) % 4;
                if rem != 0 {
                    skip(r, 4 - rem)?;
                }
            }
            ChunkKind::AbsoluteStart => {
                skip(r, 8)?;
                skip(r, 8)?;
            }
            ChunkKind::SoundData => {
                let size = read_u64_be(r, "DSD")?;
                props.sound_size = Some(size);
                props.sound_offset = Some(r.seek(SeekFrom::Current(0))?);
                // the payload is streamed later by the transcoder
                skip(r, size)?;
            }
            ChunkKind::Comments => {
                let size = read_u64_be(r, "COMT")?;
                skip(r, size)?;
            }
            ChunkKind::EditedMaster => {
                let size = read_u64_be(r, "DIIN")?;
                skip(r, size)?;
            }
        }
        Ok(())
    }
}
