//! End-to-end conversion pipeline.
//!
//! Ties the stages together: header parse, block walk, per-channel
//! decode, interleave, loop/fade render, WAV serialization. The whole
//! track is materialized in memory; there is no incremental decode.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{new_decoder, AstHeader, AstResult, BlockReader};
use crate::render::{interleave, render_loop, RenderedWaveform};
use crate::wav::write_wav;

/// Decode an entire AST stream into per-channel sample sequences.
pub fn decode_channels(data: &[u8], header: &AstHeader) -> AstResult<Vec<Vec<i16>>> {
    let n = header.channels as usize;
    let mut decoders: Vec<_> = (0..n).map(|_| new_decoder(header.codec)).collect();
    let mut channels: Vec<Vec<i16>> = vec![Vec::new(); n];

    let mut reader = BlockReader::new(data, header);
    while let Some(block) = reader.next_block()? {
        for (c, raw) in block.channels.iter().enumerate() {
            decoders[c].decode_block(raw, &mut channels[c]);
        }
    }
    Ok(channels)
}

/// Convert an in-memory AST stream to a rendered waveform.
pub fn render_bytes(data: &[u8], repeat_count: u32) -> AstResult<RenderedWaveform> {
    let header = AstHeader::from_bytes(data)?;
    log::debug!(
        "{:?} stream: {} ch, {} Hz, {} samples, loop [{}, {})",
        header.codec,
        header.channels,
        header.sample_rate,
        header.total_samples,
        header.loop_start,
        header.loop_end,
    );

    let channels = decode_channels(data, &header)?;
    let base = interleave(&channels, header.loop_end as usize)?;
    Ok(render_loop(
        base,
        header.channels,
        header.sample_rate,
        header.loop_start,
        header.loop_end,
        repeat_count,
    ))
}

/// Convert an in-memory AST stream to a complete WAV file image.
pub fn convert_bytes(data: &[u8], repeat_count: u32) -> AstResult<Vec<u8>> {
    Ok(write_wav(&render_bytes(data, repeat_count)?))
}

/// Convert one AST file on disk to a WAV file.
pub fn convert_file(input: &Path, output: &Path, repeat_count: u32) -> AstResult<()> {
    log::info!("Converting {} to {}", input.display(), output.display());
    let data = fs::read(input)?;
    let wave = render_bytes(&data, repeat_count)?;
    log::info!(
        "{}: rendered {} frames ({} ch, {} Hz)",
        output.display(),
        wave.frames(),
        wave.channels,
        wave.sample_rate
    );
    fs::write(output, write_wav(&wave))?;
    Ok(())
}

/// Convert every `.ast` file directly under `input_dir` into
/// `output_dir`, substituting the `.wav` extension.
///
/// A failing file is reported and skipped; the rest of the batch
/// continues. Returns the number of failures.
pub fn convert_dir(input_dir: &Path, output_dir: &Path, repeat_count: u32) -> AstResult<usize> {
    fs::create_dir_all(output_dir)?;

    let mut failures = 0usize;
    let mut entries: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "ast"))
        .collect();
    entries.sort();

    for input in &entries {
        let mut output = output_dir.join(input.file_name().unwrap_or_default());
        output.set_extension("wav");
        if let Err(err) = convert_file(input, &output, repeat_count) {
            log::error!("{}: {}", input.display(), err);
            failures += 1;
        }
    }
    Ok(failures)
}
