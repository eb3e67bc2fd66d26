//! The topic catalogue: definitions (immutable, built once at startup)
//! and per-topic state (mutated only by the frame codec), kept in
//! parallel arrays indexed the same way rather than a shared mutable
//! graph (§9 Design Notes).

use std::time::Instant;

use crate::decode::{self, Decoder};
use crate::encode::{self, Encoder};
use crate::error::CommandError;
use crate::value::{Domain, Input, Value};

/// One entry of the topic catalogue. Constructed once at startup and
/// never mutated afterwards.
pub struct TopicDef {
    pub name: &'static str,
    pub help: &'static str,
    pub unit: Option<&'static str>,
    pub domain: Domain,
    pub decoder: Decoder,
    pub encoder: Option<Encoder>,
    /// Lives in the 20-byte optional-PCB frame rather than the 203-byte
    /// main frame.
    pub optional: bool,
    /// Seed value for outbound optional-PCB template bytes.
    pub default: Option<Value>,
}

impl TopicDef {
    pub fn writable(&self) -> bool {
        self.encoder.is_some()
    }
}

/// §3 `TopicState`: current value, change history, delegation flag.
#[derive(Debug, Default, Clone)]
pub struct TopicState {
    pub raw_value: Option<Value>,
    pub previous_value: Option<Value>,
    pub previous_duration_secs: Option<f64>,
    pub since: Option<Instant>,
    pub delegated: bool,
}

impl TopicState {
    /// Applies a freshly decoded value, following §4.3's change-tracking
    /// rules. Returns `true` iff the value actually changed.
    fn apply(&mut self, value: Value, now: Instant) -> bool {
        if self.raw_value.as_ref() == Some(&value) {
            return false;
        }
        if let Some(since) = self.since {
            self.previous_duration_secs = Some(now.duration_since(since).as_secs_f64());
        }
        self.previous_value = self.raw_value.take();
        self.raw_value = Some(value);
        self.since = Some(now);
        self.delegated = false;
        true
    }
}

/// The ordered sequence of topic definitions plus their parallel state
/// array. `find_topic` is a case-insensitive linear scan — acceptable
/// given the catalogue's small size (§4.2).
pub struct Catalogue {
    defs: Vec<TopicDef>,
    states: Vec<TopicState>,
}

impl Catalogue {
    pub fn new(defs: Vec<TopicDef>) -> Self {
        let states = defs
            .iter()
            .map(|def| TopicState {
                raw_value: def.default.clone(),
                delegated: true,
                ..Default::default()
            })
            .collect();
        Catalogue { defs, states }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn def(&self, index: usize) -> &TopicDef {
        &self.defs[index]
    }

    pub fn state(&self, index: usize) -> &TopicState {
        &self.states[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &TopicDef, &TopicState)> {
        self.defs
            .iter()
            .zip(self.states.iter())
            .enumerate()
            .map(|(i, (d, s))| (i, d, s))
    }

    /// Case-insensitive name lookup (§4.2 `find_topic`).
    pub fn find(&self, name: &str) -> Option<usize> {
        self.defs.iter().position(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// §4.3 `decode_and_update`: validates length and checksum, then
    /// runs every topic whose `optional` flag matches this frame's
    /// length through its decoder, applying §3's change-tracking rule.
    /// Returns the indices of topics whose value actually changed.
    pub fn decode_and_update(&mut self, frame: &[u8], now: Instant) -> Result<Vec<usize>, crate::error::FrameError> {
        crate::frame::validate(frame)?;

        let is_optional_frame = frame.len() == crate::frame::OPTIONAL_LEN;
        let mut changed = Vec::new();
        for (idx, def) in self.defs.iter().enumerate() {
            if def.optional != is_optional_frame {
                continue;
            }
            let decoded = decode::decode(&def.decoder, frame);
            if self.states[idx].apply(decoded, now) {
                changed.push(idx);
            }
        }
        Ok(changed)
    }

    /// §4.3 `encode_outbound`: splices one topic's encoded byte into a
    /// fresh copy of the appropriate template, then appends a checksum.
    pub fn encode_outbound(&self, index: usize, value: &Value) -> Vec<u8> {
        let def = &self.defs[index];
        let mut template = if def.optional {
            crate::frame::optional_template()
        } else {
            crate::frame::main_send_template()
        };
        self.splice(index, &mut template, value);
        template.push(crate::primitives::checksum(&template));
        template
    }

    /// Splices one topic's encoded byte directly into a caller-owned
    /// template, without framing it. Used on the scheduler's persistent
    /// optional-PCB scratch buffer so bit-packed fields set by earlier
    /// commands survive later ones (§4.2 `update_byte`).
    pub fn splice(&self, index: usize, template: &mut [u8], value: &Value) {
        let def = &self.defs[index];
        let encoder = def.encoder.expect("splice requires a writable topic");
        let (byte_index, byte_value) = encode::encode(&encoder, template, value);
        template[byte_index] = byte_value;
    }

    /// §4.5 `command(name, value)`: resolves a topic by name and parses
    /// an external input against its domain, without mutating state —
    /// the caller (the scheduler) is responsible for enqueuing the
    /// resulting `(index, value)` pair.
    pub fn resolve_command(&self, name: &str, input: Input) -> Result<(usize, Value), CommandError> {
        let idx = self
            .find(name)
            .ok_or_else(|| CommandError::UnknownTopic(name.to_string()))?;
        let def = &self.defs[idx];
        if !def.writable() {
            return Err(CommandError::NotWritable(name.to_string()));
        }
        let value = def.domain.parse(&input)?;
        Ok((idx, value))
    }

    /// Marks a topic's current value as delegated (handed off to the sink).
    pub fn mark_delegated(&mut self, index: usize) {
        self.states[index].delegated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame;
    use std::time::Duration;

    fn sample_catalogue() -> Catalogue {
        Catalogue::new(vec![
            TopicDef {
                name: "Status/Temp/Target",
                help: "target temperature",
                unit: Some("°C"),
                domain: Domain::Range { min: -128.0, max: 127.0 },
                decoder: Decoder::IMinus128(153),
                encoder: None,
                optional: false,
                default: None,
            },
            TopicDef {
                name: "Control/OperatingMode",
                help: "operating mode",
                unit: None,
                domain: Domain::Enum(&[
                    "Heat", "Cool", "Auto(heat)", "DHW", "Heat+DHW", "Cool+DHW",
                    "Auto(heat)+DHW", "Auto(cool)", "Auto(cool)+DHW",
                ]),
                decoder: Decoder::OpMode(6),
                encoder: Some(Encoder::OpModeTable { byte: 6 }),
                optional: false,
                default: None,
            },
        ])
    }

    fn valid_main_frame(mut set: impl FnMut(&mut [u8])) -> Vec<u8> {
        let mut frame = vec![0u8; frame::MAIN_LEN - 1];
        set(&mut frame);
        frame.push(crate::primitives::checksum(&frame));
        frame
    }

    #[test]
    fn p2_length_gate_rejects_wrong_sizes() {
        let mut cat = sample_catalogue();
        let bad = vec![0u8; 17];
        assert!(cat.decode_and_update(&bad, Instant::now()).is_err());
    }

    #[test]
    fn decode_and_update_tracks_change_and_duration() {
        let mut cat = sample_catalogue();
        let t0 = Instant::now();
        let frame1 = valid_main_frame(|f| f[153] = 148);
        cat.decode_and_update(&frame1, t0).unwrap();
        assert_eq!(cat.state(0).raw_value, Some(Value::Int(20)));
        assert_eq!(cat.state(0).previous_value, None);

        let t1 = t0 + Duration::from_secs(5);
        let frame2 = valid_main_frame(|f| f[153] = 150);
        cat.decode_and_update(&frame2, t1).unwrap();
        assert_eq!(cat.state(0).raw_value, Some(Value::Int(22)));
        assert_eq!(cat.state(0).previous_value, Some(Value::Int(20)));
        assert_eq!(cat.state(0).previous_duration_secs, Some(5.0));
    }

    #[test]
    fn p3_decode_is_idempotent_over_equal_inputs() {
        let mut cat = sample_catalogue();
        let t0 = Instant::now();
        let frame = valid_main_frame(|f| f[153] = 148);
        cat.decode_and_update(&frame, t0).unwrap();
        let since_before = cat.state(0).since;

        let t1 = t0 + Duration::from_secs(1);
        let changed = cat.decode_and_update(&frame, t1).unwrap();
        assert!(changed.is_empty());
        assert_eq!(cat.state(0).since, since_before);
    }

    #[test]
    fn p5_encode_reversibility_for_operating_mode() {
        let cat = sample_catalogue();
        let idx = cat.find("control/operatingmode").unwrap();
        let bytes = cat.encode_outbound(idx, &Value::Int(3));
        // byte 6 should decode back to mode 3 (DHW).
        assert_eq!(decode::decode(&Decoder::OpMode(6), &bytes), Value::Int(3));
    }

    #[test]
    fn find_is_case_insensitive() {
        let cat = sample_catalogue();
        assert_eq!(cat.find("STATUS/TEMP/TARGET"), Some(0));
        assert_eq!(cat.find("nonexistent"), None);
    }

    #[test]
    fn p7_command_rejects_values_outside_domain() {
        let cat = sample_catalogue();
        let err = cat
            .resolve_command("Control/OperatingMode", Input::Label("Nonsense".into()))
            .unwrap_err();
        assert_eq!(err, CommandError::OutOfDomain);
    }

    #[test]
    fn command_rejects_unknown_and_unwritable_topics() {
        let cat = sample_catalogue();
        assert_eq!(
            cat.resolve_command("Does/Not/Exist", Input::Number(1.0)).unwrap_err(),
            CommandError::UnknownTopic("Does/Not/Exist".to_string())
        );
        assert_eq!(
            cat.resolve_command("Status/Temp/Target", Input::Number(1.0)).unwrap_err(),
            CommandError::NotWritable("Status/Temp/Target".to_string())
        );
    }
}
