//! PCM payload extraction and hashing.

/// Extracts the PCM payload from a WAVE file buffer.
///
/// Walks the chunk list after the RIFF preamble and returns the contents
/// of the `data` chunk, or `None` if the buffer is not a plausible WAVE
/// file.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body = pos + 8;
        if chunk_id == b"data" {
            return wav_data.get(body..body + chunk_size);
        }

        // chunks are word-aligned
        pos = body + chunk_size + chunk_size % 2;
    }

    None
}

/// BLAKE3 hash of a WAVE file's PCM payload, hex-encoded.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
