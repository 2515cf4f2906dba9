//! Byte-order and bit-order primitives.

/// Mirrors the bit positions of a byte (bit 7 ↔ bit 0, bit 6 ↔ bit 1,
/// and so on). DFF stores samples most-significant-bit first, DSF
/// least-significant-bit first, so every payload byte goes through
/// this once.
pub fn reverse_bits(src: u8) -> u8 {
    let mut dst = (src & 0x80) >> 7;
    dst |= (src & 0x40) >> 5;
    dst |= (src & 0x20) >> 3;
    dst |= (src & 0x10) >> 1;
    dst |= (src & 0x08) << 1;
    dst |= (src & 0x04) << 3;
    dst |= (src & 0x02) << 5;
    dst |= (src & 0x01) << 7;
    dst
}

/// Reverses the byte order of a field image in place, converting a
/// big-endian field to little-endian order and back. Multi-byte reads
/// and writes go through `byteorder` instead; this is the raw-field
/// form for buffers that are not integers.
pub fn swap_bytes(field: &mut [u8]) {
    field.reverse();
}
