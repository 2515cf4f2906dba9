use crate::error::*;
use byteorder::{ReadBytesExt, BE};
use std::convert::TryFrom;
use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

/// A 4-byte chunk id, space-padded where the format defines short ids
/// (`FS  `, `DSD `).
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct ChunkId(pub(crate) [u8; 4]);

impl ChunkId {
    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId(")?;
        fmt::Display::fmt(&self, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.0[0] as char, self.0[1] as char, self.0[2] as char, self.0[3] as char,
        )
    }
}

fn truncated(e: io::Error, what: &'static str) -> DffError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        DffError::Truncated(what)
    } else {
        e.into()
    }
}

/// Reads the next chunk id, or `None` on a clean end of stream (fewer
/// than four bytes left).
pub(crate) fn next_id<R: Read>(r: &mut R) -> Result<Option<ChunkId>> {
    let mut buf = [0u8; 4];
    match r.read_exact(&mut buf) {
        Ok(()) => Ok(Some(ChunkId(buf))),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Reads a fixed 4-byte signature and checks it against the expected
/// value.
pub(crate) fn expect_signature<R: Read>(
    r: &mut R,
    expected: &[u8; 4],
    what: &'static str,
) -> Result<()> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf).map_err(|e| truncated(e, what))?;
    if &buf != expected {
        return Err(DffError::BadSignature(what));
    }
    Ok(())
}

pub(crate) fn read_bytes<R: Read>(r: &mut R, buf: &mut [u8], what: &'static str) -> Result<()> {
    r.read_exact(buf).map_err(|e| truncated(e, what))
}

pub(crate) fn read_u16_be<R: Read>(r: &mut R, what: &'static str) -> Result<u16> {
    r.read_u16::<BE>().map_err(|e| truncated(e, what))
}

pub(crate) fn read_u32_be<R: Read>(r: &mut R, what: &'static str) -> Result<u32> {
    r.read_u32::<BE>().map_err(|e| truncated(e, what))
}

pub(crate) fn read_u64_be<R: Read>(r: &mut R, what: &'static str) -> Result<u64> {
    r.read_u64::<BE>().map_err(|e| truncated(e, what))
}

pub(crate) fn read_u8<R: Read>(r: &mut R, what: &'static str) -> Result<u8> {
    r.read_u8().map_err(|e| truncated(e, what))
}

/// Moves the cursor forward without reading. Seeking past the end of
/// the stream is legal; the next read reports end of stream instead.
/// A declared size too large for a relative seek is malformed, not a
/// backwards seek.
pub(crate) fn skip<R: Seek>(r: &mut R, amount: u64) -> Result<u64> {
    let amount = i64::try_from(amount).map_err(|_| DffError::BadSize(amount))?;
    Ok(r.seek(SeekFrom::Current(amount))?)
}
