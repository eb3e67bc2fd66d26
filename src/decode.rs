//! Tagged-variant topic decoders.
//!
//! Rather than store a decode closure per topic (as the Python source
//! does), the catalogue stores one of these small variants plus the
//! byte index(es) it needs. [`decode`] dispatches on the tag with a
//! single match — pure data, no function pointers on the hot path.

use crate::model_table;
use crate::primitives::*;
use crate::value::Value;

#[derive(Debug, Clone, Copy)]
pub enum Decoder {
    Bit1(usize),
    Bits1_2(usize),
    Bits3_4(usize),
    Bits5_6(usize),
    Bits7_8(usize),
    Bits3_5(usize),
    Right3(usize),
    IMinus1(usize),
    IMinus128(usize),
    IMinus1Div5(usize),
    IMinus1Times10(usize),
    IMinus1Times50(usize),
    Energy(usize),
    LowNibbleMinus1(usize),
    HighNibbleMinus1(usize),
    TwoByteMinus1 { hi: usize, lo: usize },
    RawBits { byte: usize, shift: u8, mask: u8 },
    Const(i64),
    /// `1 if bits_5_6(byte) == 2 else 0` — the pump service-mode readback.
    ServiceModeFlag(usize),
    OpMode(usize),
    PumpFlow { b169: usize, b170: usize },
    ErrorInfo { b113: usize, b114: usize },
    InletTemp { int_byte: usize, frac_byte: usize },
    OutletTemp { int_byte: usize, frac_byte: usize },
    ModelId,
    ModelName,
    DemandControl(usize),
    NtcLookup(usize),
}

/// §4.2 operating-mode decode table: raw byte 6 (low 6 bits) -> mode
/// index, or `-1` for an unrecognised code.
pub fn op_mode_index(raw: u8) -> i64 {
    match raw & 0b0011_1111 {
        18 => 0,
        19 => 1,
        25 => 2,
        33 => 3,
        34 => 4,
        35 => 5,
        41 => 6,
        26 => 7,
        42 => 8,
        _ => -1,
    }
}

pub fn decode(decoder: &Decoder, frame: &[u8]) -> Value {
    match *decoder {
        Decoder::Bit1(i) => Value::Int(bit_1(frame[i])),
        Decoder::Bits1_2(i) => Value::Int(bits_1_2(frame[i])),
        Decoder::Bits3_4(i) => Value::Int(bits_3_4(frame[i])),
        Decoder::Bits5_6(i) => Value::Int(bits_5_6(frame[i])),
        Decoder::Bits7_8(i) => Value::Int(bits_7_8(frame[i])),
        Decoder::Bits3_5(i) => Value::Int(bits_3_5(frame[i])),
        Decoder::Right3(i) => Value::Int(right_3(frame[i])),
        Decoder::IMinus1(i) => Value::Int(i_minus_1(frame[i])),
        Decoder::IMinus128(i) => Value::Int(i_minus_128(frame[i])),
        Decoder::IMinus1Div5(i) => Value::Float(i_minus_1_div_5(frame[i])),
        Decoder::IMinus1Times10(i) => Value::Int(i_minus_1_times_10(frame[i])),
        Decoder::IMinus1Times50(i) => Value::Int(i_minus_1_times_50(frame[i])),
        Decoder::Energy(i) => Value::Int(energy(frame[i])),
        Decoder::LowNibbleMinus1(i) => Value::Int(low_nibble_minus_1(frame[i])),
        Decoder::HighNibbleMinus1(i) => Value::Int(high_nibble_minus_1(frame[i])),
        Decoder::TwoByteMinus1 { hi, lo } => {
            Value::Int((frame[hi] as i64) * 256 + (frame[lo] as i64) - 1)
        }
        Decoder::RawBits { byte, shift, mask } => {
            Value::Int(((frame[byte] >> shift) & mask) as i64)
        }
        Decoder::Const(v) => Value::Int(v),
        Decoder::ServiceModeFlag(i) => {
            Value::Int(if bits_5_6(frame[i]) == 2 { 1 } else { 0 })
        }
        Decoder::OpMode(i) => Value::Int(op_mode_index(frame[i])),
        Decoder::PumpFlow { b169, b170 } => {
            Value::Float(pump_flow(frame[b169], frame[b170]))
        }
        Decoder::ErrorInfo { b113, b114 } => {
            let error_type = frame[b113];
            let error_number = frame[b114] as i64 - 17;
            Value::Text(match error_type {
                49 => format!("F{:02X}", error_number),
                33 => format!("H{:02X}", error_number),
                other => format!("?{:02X}:{:02X}", other, frame[b114]),
            })
        }
        Decoder::InletTemp { int_byte, frac_byte } => {
            let base = i_minus_128(frame[int_byte]) as f64;
            Value::Float(base + quarter_fraction(frame[frac_byte]))
        }
        Decoder::OutletTemp { int_byte, frac_byte } => {
            let base = i_minus_128(frame[int_byte]) as f64;
            Value::Float(base + quarter_fraction(frame[frac_byte] >> 3))
        }
        Decoder::ModelId => Value::Int(model_table::model_index(frame)),
        Decoder::ModelName => {
            Value::Text(model_table::model_name(model_table::model_index(frame)).to_string())
        }
        Decoder::DemandControl(i) => {
            let raw = frame[i];
            Value::Float(if raw <= 43 {
                0.0
            } else if raw > 234 {
                100.0
            } else {
                (raw as f64 - 34.0) / 2.0
            })
        }
        Decoder::NtcLookup(i) => Value::Int(NTC_TABLE[frame[i] as usize] as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_mode_known_vector() {
        assert_eq!(op_mode_index(33), 3);
        assert_eq!(op_mode_index(99), -1);
    }

    #[test]
    fn inlet_temperature_known_vector() {
        let mut frame = vec![0u8; 203];
        frame[143] = 150;
        frame[118] = 0x1B; // low 3 bits = 3 -> +0.5
        let v = decode(
            &Decoder::InletTemp { int_byte: 143, frac_byte: 118 },
            &frame,
        );
        assert_eq!(v, Value::Float(22.5));
    }

    #[test]
    fn outlet_temperature_reads_next_three_bits() {
        let mut frame = vec![0u8; 203];
        frame[144] = 148;
        frame[118] = 0b0001_1000; // bits 3-5 = 3 -> +0.5
        let v = decode(
            &Decoder::OutletTemp { int_byte: 144, frac_byte: 118 },
            &frame,
        );
        assert_eq!(v, Value::Float(20.5));
    }

    #[test]
    fn energy_known_vector() {
        let mut frame = vec![0u8; 203];
        frame[194] = 6;
        assert_eq!(decode(&Decoder::Energy(194), &frame), Value::Int(1000));
    }

    #[test]
    fn demand_control_known_vector() {
        let mut frame = vec![0u8; 20];
        frame[14] = 154;
        assert_eq!(decode(&Decoder::DemandControl(14), &frame), Value::Float(60.0));
    }

    #[test]
    fn error_info_known_vectors() {
        let mut frame = vec![0u8; 203];
        frame[113] = 49;
        frame[114] = 17 + 0x0A;
        assert_eq!(
            decode(&Decoder::ErrorInfo { b113: 113, b114: 114 }, &frame),
            Value::Text("F0A".to_string())
        );
        frame[113] = 33;
        assert_eq!(
            decode(&Decoder::ErrorInfo { b113: 113, b114: 114 }, &frame),
            Value::Text("H0A".to_string())
        );
    }
}
