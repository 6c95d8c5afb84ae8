//! End-to-end conversion tests over synthetic AST streams.

use std::fs;

use astwav::ast::header::{AstHeader, Codec, STREAM_MAGIC};
use astwav::ast::{AstError, BLOCK_MAGIC};
use astwav::{convert_bytes, convert_dir, convert_file};

/// Build a synthetic AST stream for testing.
struct AstBuilder {
    codec: Codec,
    channels: u16,
    sample_rate: u32,
    total_samples: u32,
    loop_start: u32,
    loop_end: u32,
    /// Per-block, per-channel raw payloads
    blocks: Vec<Vec<Vec<u8>>>,
}

impl AstBuilder {
    fn new(codec: Codec) -> Self {
        Self {
            codec,
            channels: 1,
            sample_rate: 32000,
            total_samples: 0,
            loop_start: 0,
            loop_end: 0,
            blocks: Vec::new(),
        }
    }

    fn channels(mut self, n: u16) -> Self {
        self.channels = n;
        self
    }

    fn sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate = hz;
        self
    }

    fn looping(mut self, start: u32, end: u32, total: u32) -> Self {
        self.loop_start = start;
        self.loop_end = end;
        self.total_samples = total;
        self
    }

    fn block(mut self, per_channel: Vec<Vec<u8>>) -> Self {
        assert_eq!(per_channel.len(), self.channels as usize);
        self.blocks.push(per_channel);
        self
    }

    fn build(self) -> Vec<u8> {
        let mut body = Vec::new();
        for per_channel in &self.blocks {
            let size = per_channel[0].len() as u32;
            body.extend_from_slice(&BLOCK_MAGIC);
            body.extend_from_slice(&size.to_be_bytes());
            body.extend_from_slice(&[0u8; 24]);
            for payload in per_channel {
                body.extend_from_slice(payload);
            }
        }

        let header = AstHeader {
            magic: STREAM_MAGIC,
            stream_size: body.len() as u32,
            codec: self.codec,
            bit_depth: 16,
            channels: self.channels,
            reserved1: 0,
            sample_rate: self.sample_rate,
            total_samples: self.total_samples,
            loop_start: self.loop_start,
            loop_end: self.loop_end,
            first_block_size: self.blocks.first().map_or(0, |b| b[0].len() as u32),
            reserved2: 0,
            reserved3: 0,
        };

        let mut stream = header.to_bytes().to_vec();
        stream.extend_from_slice(&body);
        stream
    }
}

/// ADPCM payload of `frames` zero frames with a hold-free control byte:
/// decodes to `frames * 16` zero samples.
fn silent_adpcm(frames: usize) -> Vec<u8> {
    vec![0u8; frames * 9]
}

fn pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

fn data_chunk_size(wav: &[u8]) -> u32 {
    u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]])
}

fn riff_chunk_size(wav: &[u8]) -> u32 {
    u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]])
}

#[test]
fn adpcm_loop_without_fade_renders_expected_length() {
    // 13 ADPCM frames = 208 samples; loop [100, 200), repeat 2.
    // The 15 s fade (480000 frames at 32 kHz) exceeds the 100-frame
    // loop region, so no fade segment is appended.
    let stream = AstBuilder::new(Codec::Adpcm)
        .sample_rate(32000)
        .looping(100, 200, 208)
        .block(vec![silent_adpcm(13)])
        .build();

    let wav = convert_bytes(&stream, 2).unwrap();
    let rendered_frames = 200 + 2 * 100;
    assert_eq!(data_chunk_size(&wav), rendered_frames * 2);
    assert_eq!(riff_chunk_size(&wav), 36 + rendered_frames * 2);
    assert_eq!(wav.len(), 44 + rendered_frames as usize * 2);
}

#[test]
fn zero_loop_start_ignores_repeat_count() {
    let stream = AstBuilder::new(Codec::Pcm16)
        .looping(0, 4, 4)
        .block(vec![pcm16(&[1, 2, 3, 4])])
        .build();

    let wav = convert_bytes(&stream, 3).unwrap();
    assert_eq!(data_chunk_size(&wav), 4 * 2);
}

#[test]
fn fade_appended_when_loop_region_covers_it() {
    // At 1 Hz the fade is 15 frames; loop region is 30 frames.
    let samples: Vec<i16> = (0..60).map(|i| i * 100).collect();
    let stream = AstBuilder::new(Codec::Pcm16)
        .sample_rate(1)
        .looping(30, 60, 60)
        .block(vec![pcm16(&samples)])
        .build();

    let wav = convert_bytes(&stream, 1).unwrap();
    let rendered_frames = 60 + 30 + 15;
    assert_eq!(data_chunk_size(&wav), rendered_frames * 2);
    assert_eq!(riff_chunk_size(&wav), 36 + rendered_frames * 2);
}

#[test]
fn stereo_channels_are_sample_interleaved() {
    let stream = AstBuilder::new(Codec::Pcm16)
        .channels(2)
        .looping(0, 3, 3)
        .block(vec![pcm16(&[10, 20, 30]), pcm16(&[-10, -20, -30])])
        .build();

    let wav = convert_bytes(&stream, 1).unwrap();
    let payload: Vec<i16> = wav[44..]
        .chunks_exact(2)
        .map(|p| i16::from_le_bytes([p[0], p[1]]))
        .collect();
    assert_eq!(payload, vec![10, -10, 20, -20, 30, -30]);
}

#[test]
fn multi_block_adpcm_history_spans_blocks() {
    // Block 1 ends with sample 112 (scale 16, last nibble 7); block 2
    // holds history via coefficient pair 1, so every sample repeats 112.
    let mut first = vec![0u8; 9];
    first[0] = 0x40;
    first[8] = 0x07;
    let mut second = vec![0u8; 9];
    second[0] = 0x01;

    let stream = AstBuilder::new(Codec::Adpcm)
        .looping(0, 32, 32)
        .block(vec![first])
        .block(vec![second])
        .build();

    let wav = convert_bytes(&stream, 0).unwrap();
    let payload: Vec<i16> = wav[44..]
        .chunks_exact(2)
        .map(|p| i16::from_le_bytes([p[0], p[1]]))
        .collect();
    assert_eq!(payload.len(), 32);
    assert_eq!(payload[15], 112);
    assert!(payload[16..].iter().all(|&s| s == 112));
}

#[test]
fn corrupt_block_tag_aborts_conversion() {
    let mut stream = AstBuilder::new(Codec::Pcm16)
        .looping(0, 2, 2)
        .block(vec![pcm16(&[1, 2])])
        .build();
    stream[0x40] = b'J'; // clobber the BLCK tag

    let err = convert_bytes(&stream, 1).unwrap_err();
    assert!(matches!(err, AstError::CorruptStream { .. }));
}

#[test]
fn truncated_channel_fails_with_insufficient_samples() {
    // Claims 8 samples up to loop_end but the stream only decodes 4.
    let stream = AstBuilder::new(Codec::Pcm16)
        .looping(0, 8, 8)
        .block(vec![pcm16(&[1, 2, 3, 4])])
        .build();

    let err = convert_bytes(&stream, 1).unwrap_err();
    assert!(matches!(err, AstError::InsufficientSamples { .. }));
}

#[test]
fn header_shorter_than_fixed_size_is_a_format_error() {
    let err = convert_bytes(&[0u8; 0x3f], 1).unwrap_err();
    assert!(matches!(err, AstError::Format(_)));
}

#[test]
fn file_driver_writes_playable_wav() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("track.ast");
    let output = dir.path().join("track.wav");
    let stream = AstBuilder::new(Codec::Pcm16)
        .looping(0, 2, 2)
        .block(vec![pcm16(&[123, -123])])
        .build();
    fs::write(&input, &stream).unwrap();

    convert_file(&input, &output, 1).unwrap();
    let wav = fs::read(&output).unwrap();
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(data_chunk_size(&wav), 4);
}

#[test]
fn directory_driver_reports_failures_but_continues() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("converted");
    let good = AstBuilder::new(Codec::Pcm16)
        .looping(0, 2, 2)
        .block(vec![pcm16(&[1, 2])])
        .build();
    fs::write(dir.path().join("a_good.ast"), &good).unwrap();
    fs::write(dir.path().join("b_bad.ast"), b"junk").unwrap();
    fs::write(dir.path().join("z_good.ast"), &good).unwrap();

    let failures = convert_dir(dir.path(), &out_dir, 1).unwrap();
    assert_eq!(failures, 1);
    assert!(out_dir.join("a_good.wav").exists());
    assert!(out_dir.join("z_good.wav").exists());
}
