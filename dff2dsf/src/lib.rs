//! DFF to DSF conversion.
//!
//! Wires the input walker ([`dff`]) to the planar transcoder and
//! container writer ([`dsf`]): one input file in, one output file out,
//! single-threaded and deterministic. Each conversion owns its two
//! streams and releases them on every exit path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("output path is the same as the input path")]
    SamePath,
    #[error("channel count is zero")]
    NoChannels,
    #[error(transparent)]
    Dff(#[from] dff::DffError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Derives the output path from an input path: the extension replaced
/// with `dsf`, or appended when there is none.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("dsf")
}

/// Converts one DFF file into one DSF file.
///
/// The input is walked for its properties first; the output file is
/// only created once the input parsed, so a malformed input leaves no
/// output behind. Failures mid-transcode leave a partial output file
/// whose cleanup is the caller's policy.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(ConvertError::SamePath);
    }

    let mut reader = BufReader::new(File::open(input)?);
    let props = dff::Properties::read(&mut reader)?;
    let channels = NonZeroU16::new(props.num_channels).ok_or(ConvertError::NoChannels)?;
    log::info!(
        "{}: {} Hz, {} channel(s), {} payload bytes",
        input.display(),
        props.sample_rate,
        channels,
        props.sound_size,
    );

    let mut writer = BufWriter::new(File::create(output)?);
    let format = dsf::Format {
        sample_rate: props.sample_rate,
        num_channels: channels,
        sound_size: props.sound_size,
    };
    format.write_headers(&mut writer)?;

    reader.seek(SeekFrom::Start(props.sound_offset))?;
    let mut payload = reader.take(props.sound_size);
    dsf::transcode(&mut payload, &mut writer, channels)?;
    writer.flush()?;

    Ok(())
}
