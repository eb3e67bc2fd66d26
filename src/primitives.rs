//! Bit/byte level decode helpers shared by the topic catalogue.
//!
//! Every primitive here mirrors one row of the bitfield table in the
//! protocol notes: a raw byte in, a signed logical quantity out. Most
//! subtract 1 from the extracted nibble/pair before treating it as an
//! enum index or magnitude, because the device reserves `0` for
//! "unknown/unsupported" on the wire.

use fixed::types::{I24F8, U24F8};

/// `b >> 7`
pub fn bit_1(b: u8) -> i64 {
    (b >> 7) as i64
}

/// `(b >> 6) - 1`
pub fn bits_1_2(b: u8) -> i64 {
    (b >> 6) as i64 - 1
}

/// `((b >> 4) & 3) - 1`
pub fn bits_3_4(b: u8) -> i64 {
    ((b >> 4) & 0b11) as i64 - 1
}

/// `((b >> 2) & 3) - 1`
pub fn bits_5_6(b: u8) -> i64 {
    ((b >> 2) & 0b11) as i64 - 1
}

/// `(b & 3) - 1`
pub fn bits_7_8(b: u8) -> i64 {
    (b & 0b11) as i64 - 1
}

/// `((b >> 3) & 7) - 1`
pub fn bits_3_5(b: u8) -> i64 {
    ((b >> 3) & 0b111) as i64 - 1
}

/// `(b & 7) - 1`
pub fn right_3(b: u8) -> i64 {
    (b & 0b111) as i64 - 1
}

/// low nibble, minus 1
pub fn low_nibble_minus_1(b: u8) -> i64 {
    (b & 0x0f) as i64 - 1
}

/// high nibble, minus 1
pub fn high_nibble_minus_1(b: u8) -> i64 {
    (b >> 4) as i64 - 1
}

/// `b - 1`
pub fn i_minus_1(b: u8) -> i64 {
    b as i64 - 1
}

/// `b - 128`, the signed temperature scale
pub fn i_minus_128(b: u8) -> i64 {
    b as i64 - 128
}

/// `(b - 1) / 5`, rounded to one decimal place
pub fn i_minus_1_div_5(b: u8) -> f64 {
    let value = I24F8::from_num(b as i32 - 1) / I24F8::from_num(5);
    (value.to_num::<f64>() * 10.0).round() / 10.0
}

/// `(b - 1) * 10`
pub fn i_minus_1_times_10(b: u8) -> i64 {
    (b as i64 - 1) * 10
}

/// `(b - 1) * 50`
pub fn i_minus_1_times_50(b: u8) -> i64 {
    (b as i64 - 1) * 50
}

/// `(b - 1) * 200` watts
pub fn energy(b: u8) -> i64 {
    (b as i64 - 1) * 200
}

/// Fractional part lookup shared by the inlet/outlet temperature decode:
/// `{2 => +0.25, 3 => +0.5, 4 => +0.75, _ => 0.0}`.
pub fn quarter_fraction(bits: u8) -> f64 {
    match bits & 0b111 {
        2 => 0.25,
        3 => 0.5,
        4 => 0.75,
        _ => 0.0,
    }
}

/// `((sum of bytes) ^ 0xFF) + 1) mod 256`
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
    (((sum ^ 0xFF) + 1) & 0xFF) as u8
}

/// A frame is valid iff its length is one of {20, 203} and its trailing
/// byte matches the checksum of everything before it.
pub fn valid_checksum(frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((&last, rest)) => checksum(rest) == last,
        None => false,
    }
}

/// `(current & ~(base_mask << shift)) | (val << shift)` — splices a
/// multi-bit field into a byte without disturbing its neighbours.
pub fn update_byte(current: u8, val: u8, base_mask: u8, shift: u8) -> u8 {
    (current & !(base_mask << shift)) | (val << shift)
}

/// 256-entry NTC thermistor lookup table: sensor code -> degrees Celsius.
/// Reproduced verbatim from the device's factory table.
pub const NTC_TABLE: [i32; 256] = [
    120, 120, 120, 120, 120, 120, 120, 120, 120, 120, 120, 120, 117, 114, 111, 108,
    106, 103, 101, 99, 97, 95, 93, 92, 90, 88, 87, 86, 84, 83, 82, 80,
    79, 78, 77, 76, 75, 74, 73, 72, 71, 70, 69, 68, 67, 66, 66, 65,
    64, 63, 62, 62, 61, 60, 60, 59, 58, 58, 57, 56, 56, 55, 54, 54,
    53, 53, 52, 51, 51, 50, 50, 49, 49, 48, 48, 47, 47, 46, 45, 45,
    44, 44, 44, 43, 43, 42, 42, 41, 41, 40, 40, 39, 39, 38, 38, 38,
    37, 37, 36, 36, 35, 35, 35, 34, 34, 33, 33, 32, 32, 32, 31, 31,
    30, 30, 30, 29, 29, 28, 28, 28, 27, 27, 27, 26, 26, 25, 25, 25,
    24, 24, 24, 23, 23, 22, 22, 22, 21, 21, 21, 20, 20, 19, 19, 19,
    18, 18, 18, 17, 17, 17, 16, 16, 15, 15, 15, 14, 14, 14, 13, 13,
    12, 12, 12, 11, 11, 11, 10, 10, 9, 9, 9, 8, 8, 8, 7, 7,
    6, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 1, 1, 0,
    0, 0, -1, -1, -2, -2, -3, -3, -4, -4, -4, -5, -5, -6, -6, -7,
    -7, -8, -8, -9, -9, -10, -10, -11, -12, -12, -13, -13, -14, -15, -15, -16,
    -16, -17, -18, -18, -19, -20, -21, -21, -22, -23, -24, -25, -26, -27, -28, -29,
    -30, -31, -32, -33, -35, -36, -38, -40, -41, -44, -46, -49, -53, -57, -64, -78,
];

/// Degrees Celsius -> sensor code: the lowest index whose table value is
/// `<=` the target temperature, or 255 if none qualifies.
pub fn ntc_of_temp(temp: i32) -> u8 {
    for (idx, &value) in NTC_TABLE.iter().enumerate() {
        if temp >= value {
            return idx as u8;
        }
    }
    255
}

/// `b170 + (b169 - 1)/256`, rounded to 2 decimals, as litres/minute.
pub fn pump_flow(b169: u8, b170: u8) -> f64 {
    let fraction = U24F8::from_num(b169 as i32 - 1) / U24F8::from_num(256);
    let value = U24F8::from_num(b170) + fraction;
    (value.to_num::<f64>() * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_known_vector() {
        assert_eq!(checksum(&[0x71, 0x6C, 0x01, 0x10]), 0x12);
    }

    #[test]
    fn checksum_round_trip() {
        let bytes = [0xF1u8, 0x6C, 0x01, 0x10, 0xAB, 0xCD];
        let mut framed = bytes.to_vec();
        framed.push(checksum(&bytes));
        assert!(valid_checksum(&framed));

        // P1: checksum(bytes ++ checksum(bytes)) == 0
        let total_sum: u32 = framed.iter().map(|&b| b as u32).sum();
        assert_eq!(((total_sum ^ 0xFF) + 1) & 0xFF, 0);
    }

    #[test]
    fn bitfield_primitives() {
        assert_eq!(bit_1(0b1000_0000), 1);
        assert_eq!(bits_1_2(0b1000_0000), 1); // (0b10)-1 = 1
        assert_eq!(bits_7_8(0b0000_0011), 2);
        assert_eq!(right_3(0b0000_0101), 3);
    }

    #[test]
    fn update_byte_preserves_neighbours() {
        let current = 0b1010_1010;
        let updated = update_byte(current, 0b11, 0b11, 4);
        assert_eq!(updated, 0b1011_1010);
    }

    #[test]
    fn ntc_lookup_is_monotonic_search() {
        assert_eq!(ntc_of_temp(120), 0);
        assert_eq!(ntc_of_temp(-78), 255);
        assert_eq!(ntc_of_temp(200), 0);
        assert_eq!(ntc_of_temp(-200), 255);
    }

    #[test]
    fn pump_flow_known_vector() {
        // b169=1 -> fraction 0, b170=12 -> 12.0 l/min
        assert_eq!(pump_flow(1, 12), 12.0);
    }

    #[test]
    fn quarter_fraction_table() {
        assert_eq!(quarter_fraction(2), 0.25);
        assert_eq!(quarter_fraction(3), 0.5);
        assert_eq!(quarter_fraction(4), 0.75);
        assert_eq!(quarter_fraction(0), 0.0);
    }
}
