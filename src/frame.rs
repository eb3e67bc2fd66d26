//! Frame sizes, templates and the length/checksum validation gate
//! shared by the codec and the scheduler (§4.3, §6).

use bytebuffer::ByteBuffer;

use crate::error::FrameError;
use crate::primitives::{checksum, valid_checksum};

/// Inbound/outbound main frame length, trailing checksum included.
pub const MAIN_LEN: usize = 203;
/// Inbound/outbound optional-PCB frame length, trailing checksum included.
pub const OPTIONAL_LEN: usize = 20;
/// Main poll/command body length, checksum excluded.
pub const MAIN_BODY_LEN: usize = 110;

const POLL_HEADER: [u8; 4] = [0x71, 0x6C, 0x01, 0x10];
const SEND_HEADER: [u8; 4] = [0xF1, 0x6C, 0x01, 0x10];
const OPTIONAL_TEMPLATE_BASE: [u8; 19] = [
    0xF1, 0x11, 0x01, 0x50, 0x00, 0x00, 0x40, 0xFF, 0xFF, 0xE5, 0xFF, 0xFF, 0x00, 0xFF, 0xEB,
    0xFF, 0xFF, 0x00, 0x00,
];

fn body_with_header(header: [u8; 4]) -> Vec<u8> {
    let mut buffer = ByteBuffer::new();
    for byte in header {
        buffer.write_u8(byte);
    }
    for _ in 0..(MAIN_BODY_LEN - header.len()) {
        buffer.write_u8(0);
    }
    buffer.as_bytes().to_vec()
}

/// §6 main command frame template: `F1 6C 01 10` + 106 zero bytes.
/// Callers splice one byte in before appending a checksum.
pub fn main_send_template() -> Vec<u8> {
    body_with_header(SEND_HEADER)
}

/// §6 optional-PCB outbound template (19 bytes, checksum not yet
/// appended).
pub fn optional_template() -> Vec<u8> {
    OPTIONAL_TEMPLATE_BASE.to_vec()
}

/// §4.4/§6 main poll frame: `71 6C 01 10` + 106 zero bytes + checksum.
pub fn poll_frame() -> Vec<u8> {
    let mut frame = body_with_header(POLL_HEADER);
    frame.push(checksum(&frame));
    frame
}

/// §4.4/§6 optional-PCB poll frame: the 19-byte template + checksum.
pub fn optional_poll_frame() -> Vec<u8> {
    let mut frame = optional_template();
    frame.push(checksum(&frame));
    frame
}

/// §3/§4.3 validation gate: a frame is valid iff its length is one of
/// {20, 203} and its trailing byte matches the checksum of the rest.
pub fn validate(frame: &[u8]) -> Result<(), FrameError> {
    if frame.len() != MAIN_LEN && frame.len() != OPTIONAL_LEN {
        return Err(FrameError::TooShortOrWrongLength(frame.len()));
    }
    if !valid_checksum(frame) {
        let expected = checksum(&frame[..frame.len() - 1]);
        let got = frame[frame.len() - 1];
        return Err(FrameError::BadChecksum { expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_frame_has_expected_shape() {
        let frame = poll_frame();
        assert_eq!(frame.len(), MAIN_BODY_LEN + 1);
        assert_eq!(&frame[..4], &POLL_HEADER);
        assert!(valid_checksum(&frame));
    }

    #[test]
    fn main_send_template_is_110_bytes_of_header_and_zeros() {
        let template = main_send_template();
        assert_eq!(template.len(), MAIN_BODY_LEN);
        assert_eq!(&template[..4], &SEND_HEADER);
        assert!(template[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn optional_poll_frame_is_20_bytes_and_valid() {
        let frame = optional_poll_frame();
        assert_eq!(frame.len(), OPTIONAL_LEN);
        assert!(valid_checksum(&frame));
    }

    #[test]
    fn validate_rejects_wrong_lengths() {
        assert_eq!(validate(&[0u8; 5]), Err(FrameError::TooShortOrWrongLength(5)));
    }

    #[test]
    fn validate_rejects_bad_checksum() {
        let mut frame = optional_poll_frame();
        let last = frame.len() - 1;
        frame[last] ^= 0xFF;
        assert!(matches!(validate(&frame), Err(FrameError::BadChecksum { .. })));
    }
}
