//! Heat pump model signature table.
//!
//! The factory 10-byte model signatures and their display names live in
//! a sibling module in the original implementation that was not part of
//! the retrieved source material (see DESIGN.md). This table is an
//! illustrative placeholder of the same shape — ten-byte signatures
//! compared verbatim against frame bytes 129..=138 — rather than a
//! guess at real hardware values.

/// Known 10-byte model signature, paired index-wise with [`MODEL_NAMES`].
pub const KNOWN_MODEL_SIGNATURES: &[[u8; 10]] = &[
    [0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x02, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];

/// Display names, index-aligned with [`KNOWN_MODEL_SIGNATURES`].
pub const MODEL_NAMES: &[&str] = &["WH-MDC05J3E5", "WH-MDC09J3E5", "WH-SXC09H3E5"];

/// Matches `frame[129..139]` against the known signature table; returns
/// the matching index or `-1` if none match.
pub fn model_index(frame: &[u8]) -> i64 {
    if frame.len() < 139 {
        return -1;
    }
    let signature = &frame[129..139];
    for (idx, known) in KNOWN_MODEL_SIGNATURES.iter().enumerate() {
        if signature == known {
            return idx as i64;
        }
    }
    -1
}

/// Display name for a model index, or `"Unknown"` when unmatched.
pub fn model_name(index: i64) -> &'static str {
    if index >= 0 && (index as usize) < MODEL_NAMES.len() {
        MODEL_NAMES[index as usize]
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_signature_yields_negative_one() {
        let mut frame = vec![0u8; 203];
        assert_eq!(model_index(&frame), -1);
        assert_eq!(model_name(model_index(&frame)), "Unknown");

        frame[129..139].copy_from_slice(&KNOWN_MODEL_SIGNATURES[1]);
        assert_eq!(model_index(&frame), 1);
        assert_eq!(model_name(1), "WH-MDC09J3E5");
    }
}
