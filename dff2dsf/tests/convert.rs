use dff2dsf::{convert, output_path, ConvertError};
use dsf::{reverse_bits, CHANNEL_BLOCK_SIZE, HEADER_SIZE};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Builds a minimal stereo DFF stream around `payload`. The fixture is
/// synthesised at runtime so no binary assets live in the repository.
fn minimal_dff(payload: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();

    v.extend_from_slice(b"FRM8");
    v.extend_from_slice(&(payload.len() as u64 + 90).to_be_bytes());
    v.extend_from_slice(b"DSD ");

    v.extend_from_slice(b"FVER");
    v.extend_from_slice(&4u64.to_be_bytes());
    v.extend_from_slice(&[1, 5, 0, 0]);

    v.extend_from_slice(b"PROP");
    v.extend_from_slice(&(payload.len() as u64 + 50).to_be_bytes());
    v.extend_from_slice(b"SND ");

    v.extend_from_slice(b"FS  ");
    v.extend_from_slice(&4u64.to_be_bytes());
    v.extend_from_slice(&2_822_400u32.to_be_bytes());

    v.extend_from_slice(b"CHNL");
    v.extend_from_slice(&10u64.to_be_bytes());
    v.extend_from_slice(&2u16.to_be_bytes());
    v.extend_from_slice(b"SLFT");
    v.extend_from_slice(b"SRGT");

    v.extend_from_slice(b"DSD ");
    v.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    v.extend_from_slice(payload);

    v
}

fn le_u64(buf: &[u8], at: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[at..at + 8]);
    u64::from_le_bytes(bytes)
}

#[test]
fn converts_a_minimal_stereo_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    let output = dir.path().join("tone.dsf");

    let payload = [0x01, 0x02, 0x03, 0x04];
    fs::write(&input, minimal_dff(&payload)).unwrap();

    convert(&input, &output).unwrap();

    let out = fs::read(&output).unwrap();
    // one zero-padded stereo window after the fixed headers
    assert_eq!(out.len() as u64, HEADER_SIZE + (CHANNEL_BLOCK_SIZE * 2) as u64);
    assert_eq!(&out[0..4], b"DSD ");
    assert_eq!(le_u64(&out, 12), payload.len() as u64 + 92); // total file size field
    assert_eq!(le_u64(&out, 84), payload.len() as u64 + 12); // data chunk size

    let data = &out[HEADER_SIZE as usize..];
    assert_eq!(data[0], reverse_bits(0x01)); // left channel
    assert_eq!(data[1], reverse_bits(0x03));
    assert_eq!(data[CHANNEL_BLOCK_SIZE], reverse_bits(0x02)); // right channel
    assert_eq!(data[CHANNEL_BLOCK_SIZE + 1], reverse_bits(0x04));
    assert!(data[2..CHANNEL_BLOCK_SIZE].iter().all(|&b| b == 0));
    assert!(data[CHANNEL_BLOCK_SIZE + 2..].iter().all(|&b| b == 0));
}

#[test]
fn conversion_is_deterministic() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    fs::write(&input, minimal_dff(&[0xA5; 1000])).unwrap();

    let first = dir.path().join("first.dsf");
    let second = dir.path().join("second.dsf");
    convert(&input, &first).unwrap();
    convert(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn trailing_chunks_after_sound_data_are_not_transcoded() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    let output = dir.path().join("tone.dsf");

    let mut data = minimal_dff(&[0xFF; 8]);
    data.extend_from_slice(b"COMT");
    data.extend_from_slice(&4u64.to_be_bytes());
    data.extend_from_slice(b"hiya");
    fs::write(&input, data).unwrap();

    convert(&input, &output).unwrap();

    let out = fs::read(&output).unwrap();
    assert_eq!(out.len() as u64, HEADER_SIZE + (CHANNEL_BLOCK_SIZE * 2) as u64);
    let data = &out[HEADER_SIZE as usize..];
    assert!(data[4..CHANNEL_BLOCK_SIZE].iter().all(|&b| b == 0));
}

#[test]
fn refuses_identical_input_and_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    fs::write(&input, minimal_dff(&[0; 4])).unwrap();

    match convert(&input, &input) {
        Err(ConvertError::SamePath) => (),
        other => panic!("expected same-path refusal, got {:?}", other),
    }
}

#[test]
fn zero_channel_count_is_rejected_before_transcoding() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    let output = dir.path().join("tone.dsf");

    let mut data = minimal_dff(&[0; 4]);
    let pos = data.windows(4).position(|w| w == b"CHNL").unwrap();
    data[pos + 12..pos + 14].copy_from_slice(&0u16.to_be_bytes());
    fs::write(&input, data).unwrap();

    match convert(&input, &output) {
        Err(ConvertError::NoChannels) => (),
        other => panic!("expected zero-channel refusal, got {:?}", other),
    }
}

#[test]
fn malformed_input_produces_no_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.dff");
    let output = dir.path().join("tone.dsf");

    let mut data = minimal_dff(&[0; 4]);
    let pos = data.windows(4).position(|w| w == b"SND ").unwrap();
    data[pos..pos + 4].copy_from_slice(b"OOPS");
    fs::write(&input, data).unwrap();

    match convert(&input, &output) {
        Err(ConvertError::Dff(_)) => (),
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn output_path_swaps_or_appends_the_extension() {
    assert_eq!(output_path(Path::new("a/track.dff")), Path::new("a/track.dsf"));
    assert_eq!(output_path(Path::new("track")), Path::new("track.dsf"));
    assert_eq!(
        output_path(Path::new("album.2024/track.DFF")),
        Path::new("album.2024/track.dsf")
    );
}
