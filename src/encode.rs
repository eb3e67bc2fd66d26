//! Tagged-variant topic encoders: `(current_outbound_frame, value) ->
//! (byte_index, new_byte_value)`. Presence of an [`Encoder`] on a topic
//! makes it writable (§3).

use crate::primitives::{ntc_of_temp, update_byte};
use crate::value::Value;

#[derive(Debug, Clone, Copy)]
pub enum Encoder {
    /// Writes one of two fixed bytes depending on a boolean value.
    FixedBit { byte: usize, on_value: u8, off_value: u8 },
    /// `value + 128`
    Offset128 { byte: usize },
    /// `value + 1`
    Offset1 { byte: usize },
    /// §4.2 operating-mode encode table `[18,19,24,33,34,35,40]`.
    OpModeTable { byte: usize },
    /// `Config/Zones/State` encode table `[64,128,192]`.
    ZonesStateTable { byte: usize },
    /// Quiet mode level: `(clamp(0,3,mode)+1) * 8`.
    QuietLevelTable { byte: usize },
    /// Powerful mode: `clamp(0,3,mode) + 73`. Gated behind an open
    /// question — see DESIGN.md — but implemented per spec §9(a).
    PowerfulModeBias { byte: usize },
    /// `mode < 5 -> 0, else mode*2 + 34`
    DemandControlEncode { byte: usize },
    /// External pad heater tri-state: `0 -> 16, 1 -> 32, 2 -> 48`.
    PadHeaterTriTable { byte: usize },
    /// Temperature (°C) -> NTC sensor code.
    NtcEncode { byte: usize },
    /// Splices a multi-bit field into a byte via `update_byte`,
    /// preserving neighbouring bits already in the template.
    UpdateByteBit { byte: usize, shift: u8, mask: u8 },
}

fn as_bool(value: &Value) -> bool {
    match value {
        Value::Int(v) => *v != 0,
        Value::Float(v) => *v != 0.0,
        Value::Text(s) => !s.is_empty() && s != "0",
    }
}

fn as_i64(value: &Value) -> i64 {
    value.as_i64().unwrap_or(0)
}

/// Dispatches the encode, returning `(byte_index, new_byte_value)`.
/// `template` is the current state of the outbound frame (so
/// multi-field bytes can be spliced without clobbering neighbours).
pub fn encode(encoder: &Encoder, template: &[u8], value: &Value) -> (usize, u8) {
    match *encoder {
        Encoder::FixedBit { byte, on_value, off_value } => {
            (byte, if as_bool(value) { on_value } else { off_value })
        }
        Encoder::Offset128 { byte } => (byte, (as_i64(value) + 128) as u8),
        Encoder::Offset1 { byte } => (byte, (as_i64(value) + 1) as u8),
        Encoder::OpModeTable { byte } => {
            const TABLE: [u8; 7] = [18, 19, 24, 33, 34, 35, 40];
            let mode = as_i64(value);
            let new_byte = if (0..7).contains(&mode) { TABLE[mode as usize] } else { 0 };
            (byte, new_byte)
        }
        Encoder::ZonesStateTable { byte } => {
            const TABLE: [u8; 3] = [64, 128, 192];
            let mode = as_i64(value);
            let new_byte = if (0..3).contains(&mode) { TABLE[mode as usize] } else { 0 };
            (byte, new_byte)
        }
        Encoder::QuietLevelTable { byte } => {
            let mode = as_i64(value).clamp(0, 3);
            (byte, ((mode + 1) * 8) as u8)
        }
        Encoder::PowerfulModeBias { byte } => {
            let mode = as_i64(value).clamp(0, 3);
            (byte, (mode + 73) as u8)
        }
        Encoder::DemandControlEncode { byte } => {
            let mode = as_i64(value);
            let new_byte = if mode < 5 { 0 } else { (mode * 2 + 34) as u8 };
            (byte, new_byte)
        }
        Encoder::PadHeaterTriTable { byte } => {
            let new_byte = match as_i64(value) {
                2 => 48,
                1 => 32,
                _ => 16,
            };
            (byte, new_byte)
        }
        Encoder::NtcEncode { byte } => (byte, ntc_of_temp(as_i64(value) as i32)),
        Encoder::UpdateByteBit { byte, shift, mask } => {
            let new_value = (as_i64(value) as u8) & mask;
            (byte, update_byte(template[byte], new_value, mask, shift))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_mode_table_round_trips_dhw() {
        let template = [0u8; 110];
        let (idx, byte) = encode(&Encoder::OpModeTable { byte: 6 }, &template, &Value::Int(3));
        assert_eq!((idx, byte), (6, 34));
    }

    #[test]
    fn demand_control_known_vector() {
        let template = [0u8; 20];
        let (idx, byte) = encode(
            &Encoder::DemandControlEncode { byte: 14 },
            &template,
            &Value::Int(60),
        );
        assert_eq!((idx, byte), (14, 154));
    }

    #[test]
    fn update_byte_preserves_other_bits() {
        let mut template = [0u8; 20];
        template[6] = 0b1010_0000;
        let (idx, byte) = encode(
            &Encoder::UpdateByteBit { byte: 6, shift: 4, mask: 0b11 },
            &template,
            &Value::Int(0b10),
        );
        assert_eq!(idx, 6);
        assert_eq!(byte, 0b1010_0000 | (0b10 << 4));
    }

    #[test]
    fn powerful_mode_bias_matches_open_question() {
        let template = [0u8; 110];
        let (idx, byte) = encode(&Encoder::PowerfulModeBias { byte: 7 }, &template, &Value::Int(2));
        assert_eq!((idx, byte), (7, 75));
    }
}
