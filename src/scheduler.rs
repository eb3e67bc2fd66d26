//! §4.4 link scheduler: drives the serial line on a cooperative tick,
//! interleaving polls, queued command writes and optional-PCB replies
//! while enforcing the minimum inter-frame gap.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::config::{SerialConfig, MINIMUM_POLL_INTERVAL};
use crate::error::{CommandError, SchedulerError};
use crate::frame;
use crate::primitives::checksum;
use crate::sink::{FrameKind, Sink};
use crate::topic::Catalogue;
use crate::value::{Input, Value};

/// The byte-level transport the scheduler drives. Abstracted away from
/// a concrete `serialport::SerialPort` so the tick logic can be
/// exercised without real hardware (§5: no blocking reads, short
/// timeout, drains only what is currently available).
pub trait Link {
    fn read_available(&mut self) -> io::Result<Vec<u8>>;
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl Link for Box<dyn serialport::SerialPort> {
    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match io::Read::read(self, &mut byte) {
                Ok(0) => break,
                Ok(_) => buffer.push(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) => return Err(e),
            }
        }
        Ok(buffer)
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::Write::write_all(self, bytes)
    }
}

/// Drives one heat pump link: reads, timed polls, command drain,
/// optional-PCB impersonation. Owns the serial port exclusively (§5).
pub struct Scheduler<L: Link> {
    catalogue: Catalogue,
    link: L,
    next_poll: Option<Instant>,
    next_optional_poll: Option<Instant>,
    next_allowed_send: Instant,
    poll_interval: Option<Duration>,
    optional_poll_interval: Option<Duration>,
    /// Persistent optional-PCB scratch buffer (19 bytes, no checksum).
    /// Mutated in place by both the device echo and by optional-frame
    /// command encodes, so bit-packed fields accumulate correctly
    /// across separate commands (§4.2 `update_byte`).
    optional_scratch: Vec<u8>,
    command_tx: mpsc::Sender<(usize, Value)>,
    command_rx: mpsc::Receiver<(usize, Value)>,
}

impl<L: Link> Scheduler<L> {
    pub fn new(catalogue: Catalogue, link: L, config: &SerialConfig) -> Self {
        let now = Instant::now();
        let poll_interval = config.poll_interval();
        let optional_poll_interval = config.optional_poll_interval();

        match poll_interval {
            Some(interval) => info!(
                "heatpump: connected to {} with 9600-8-E-1, poll interval {:?}",
                config.device, interval
            ),
            None => info!("heatpump: connected to {} with 9600-8-E-1, no polling", config.device),
        }
        if let Some(interval) = optional_poll_interval {
            info!("heatpump: simulating optional pcb with poll interval {:?}", interval);
        }

        let (command_tx, command_rx) = mpsc::channel();

        Scheduler {
            catalogue,
            link,
            next_poll: poll_interval.map(|_| now + MINIMUM_POLL_INTERVAL),
            next_optional_poll: optional_poll_interval.map(|_| now),
            next_allowed_send: now + MINIMUM_POLL_INTERVAL,
            poll_interval,
            optional_poll_interval,
            optional_scratch: frame::optional_template(),
            command_tx,
            command_rx,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// A cloneable handle that lets other threads submit writes without
    /// touching the serial port directly (§5 command queue).
    pub fn command_sender(&self) -> mpsc::Sender<(usize, Value)> {
        self.command_tx.clone()
    }

    /// §4.5 `command(name, value)`: resolves and validates against the
    /// topic's domain, then enqueues. Never touches the serial port.
    pub fn command(&self, name: &str, input: Input) -> Result<(), CommandError> {
        let (index, value) = self.catalogue.resolve_command(name, input)?;
        let _ = self.command_tx.send((index, value));
        Ok(())
    }

    /// §4.4 on_receive: echoes bytes 4/5 of a 20-byte request into the
    /// persistent optional template before decoding it locally, then
    /// fans the decoded topics out to the sink.
    pub fn on_receive(&mut self, buffer: Vec<u8>, sink: &mut dyn Sink) {
        let frame = if buffer.len() == frame::OPTIONAL_LEN {
            self.optional_scratch[4] = buffer[4];
            self.optional_scratch[5] = buffer[5];
            let mut echoed = self.optional_scratch.clone();
            echoed.push(checksum(&echoed));
            echoed
        } else {
            buffer
        };

        match self.catalogue.decode_and_update(&frame, Instant::now()) {
            Ok(_changed) => {
                let kind = if frame.len() == frame::OPTIONAL_LEN { FrameKind::Optional } else { FrameKind::Main };
                sink.on_topic_data(kind, &frame);

                for index in 0..self.catalogue.len() {
                    if sink.on_topic_received(&self.catalogue, index) {
                        self.catalogue.mark_delegated(index);
                    }
                }
            }
            Err(err) => {
                warn!("heatpump: dropping frame: {err}");
            }
        }
    }

    /// §4.4 tick algorithm. Returns `true` to keep the timer alive,
    /// matching the source's cooperative-loop return convention.
    pub fn tick(&mut self, sink: &mut dyn Sink) -> bool {
        let now = Instant::now();

        match self.link.read_available() {
            Ok(buffer) if !buffer.is_empty() => self.on_receive(buffer, sink),
            Ok(_) => {}
            Err(err) => error!("heatpump: serial read failed: {}", SchedulerError::Io(err)),
        }

        if now >= self.next_allowed_send {
            if let Ok((index, value)) = self.command_rx.try_recv() {
                self.send_command(index, &value, now);
            } else if self.next_poll.map_or(false, |due| now >= due) {
                self.send_poll(now);
            } else if self.next_optional_poll.map_or(false, |due| now >= due) {
                self.send_optional_poll(now);
            }
        }

        true
    }

    fn send_command(&mut self, index: usize, value: &Value, now: Instant) {
        let optional = self.catalogue.def(index).optional;
        let outbound = if optional {
            self.catalogue.splice(index, &mut self.optional_scratch, value);
            let mut framed = self.optional_scratch.clone();
            framed.push(checksum(&framed));
            framed
        } else {
            self.catalogue.encode_outbound(index, value)
        };

        info!("heatpump: sending command {} -> {:?}", self.catalogue.def(index).name, outbound);
        match self.link.write_all(&outbound) {
            Ok(()) => self.next_allowed_send = now + MINIMUM_POLL_INTERVAL,
            Err(err) => error!("heatpump: command write failed: {}", SchedulerError::Io(err)),
        }
    }

    fn send_poll(&mut self, now: Instant) {
        let query = frame::poll_frame();
        debug!("heatpump: polling for new data");
        match self.link.write_all(&query) {
            Ok(()) => {
                self.next_poll = self.poll_interval.map(|interval| now + interval);
                self.next_allowed_send = now + MINIMUM_POLL_INTERVAL;
            }
            Err(err) => error!("heatpump: poll write failed: {}", SchedulerError::Io(err)),
        }
    }

    fn send_optional_poll(&mut self, now: Instant) {
        let mut query = self.optional_scratch.clone();
        query.push(checksum(&query));
        debug!("heatpump: polling for new optional data");
        match self.link.write_all(&query) {
            Ok(()) => {
                self.next_optional_poll = self.optional_poll_interval.map(|interval| now + interval);
                self.next_allowed_send = now + MINIMUM_POLL_INTERVAL;
            }
            Err(err) => error!("heatpump: optional poll write failed: {}", SchedulerError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decoder;
    use crate::encode::Encoder;
    use crate::topic::TopicDef;
    use crate::value::Domain;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeLink {
        incoming: std::collections::VecDeque<Vec<u8>>,
        written: Vec<Vec<u8>>,
    }

    impl Link for FakeLink {
        fn read_available(&mut self) -> io::Result<Vec<u8>> {
            Ok(self.incoming.pop_front().unwrap_or_default())
        }

        fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
            self.written.push(bytes.to_vec());
            Ok(())
        }
    }

    struct RecordingSink {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl Sink for RecordingSink {
        fn on_topic_received(&mut self, _catalogue: &Catalogue, index: usize) -> bool {
            self.seen.borrow_mut().push(index);
            true
        }
    }

    fn catalogue_with_one_optional_topic() -> Catalogue {
        Catalogue::new(vec![TopicDef {
            name: "Actor/Zones/1/WaterPump",
            help: "zone 1 pump",
            unit: None,
            domain: Domain::Enum(&["Off", "On"]),
            decoder: Decoder::RawBits { byte: 4, shift: 7, mask: 0b1 },
            encoder: Some(Encoder::UpdateByteBit { byte: 4, shift: 7, mask: 0b1 }),
            optional: true,
            default: None,
        }])
    }

    #[test]
    fn p6_send_pacing_blocks_until_next_allowed_send() {
        let config = SerialConfig::new("/dev/null", 0, 0).unwrap();
        let link = FakeLink::default();
        let mut scheduler = Scheduler::new(catalogue_with_one_optional_topic(), link, &config);
        let mut sink = RecordingSink { seen: Rc::new(RefCell::new(Vec::new())) };

        scheduler.command("Actor/Zones/1/WaterPump", Input::Label("On".into())).unwrap();
        scheduler.next_allowed_send = Instant::now() - Duration::from_millis(1);
        scheduler.tick(&mut sink);
        assert_eq!(scheduler.link.written.len(), 1);

        // A second command queued immediately must not be sent before
        // the minimum gap elapses.
        scheduler.command("Actor/Zones/1/WaterPump", Input::Label("Off".into())).unwrap();
        scheduler.tick(&mut sink);
        assert_eq!(scheduler.link.written.len(), 1);
    }

    #[test]
    fn optional_command_preserves_other_bits_across_sends() {
        let mut cat = Catalogue::new(vec![
            TopicDef {
                name: "Control/Optional/HeatCoolMode",
                help: "heat/cool",
                unit: None,
                domain: Domain::Enum(&["Heat", "Cool"]),
                decoder: Decoder::RawBits { byte: 6, shift: 7, mask: 0b1 },
                encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 7, mask: 0b1 }),
                optional: true,
                default: None,
            },
            TopicDef {
                name: "Control/Optional/SmartGridMode",
                help: "smart grid",
                unit: None,
                domain: Domain::Enum(&["Normal", "Off", "Capacity 1", "Capacity 2"]),
                decoder: Decoder::RawBits { byte: 6, shift: 4, mask: 0b11 },
                encoder: Some(Encoder::UpdateByteBit { byte: 6, shift: 4, mask: 0b11 }),
                optional: true,
                default: None,
            },
        ]);
        let _ = &mut cat;

        let config = SerialConfig::new("/dev/null", 0, 0).unwrap();
        let link = FakeLink::default();
        let mut scheduler = Scheduler::new(cat, link, &config);
        let mut sink = RecordingSink { seen: Rc::new(RefCell::new(Vec::new())) };

        scheduler.next_allowed_send = Instant::now() - Duration::from_millis(1);
        scheduler.command("Control/Optional/HeatCoolMode", Input::Label("Cool".into())).unwrap();
        scheduler.tick(&mut sink);

        scheduler.next_allowed_send = Instant::now() - Duration::from_millis(1);
        scheduler.command("Control/Optional/SmartGridMode", Input::Label("Capacity 2".into())).unwrap();
        scheduler.tick(&mut sink);

        // byte 6 in the persisted scratch should carry both fields.
        assert_eq!(scheduler.optional_scratch[6] & 0b1000_0000, 0b1000_0000);
        assert_eq!((scheduler.optional_scratch[6] >> 4) & 0b11, 3);
    }

    #[test]
    fn on_receive_echoes_bytes_four_and_five() {
        let config = SerialConfig::new("/dev/null", 0, 0).unwrap();
        let link = FakeLink::default();
        let mut scheduler = Scheduler::new(catalogue_with_one_optional_topic(), link, &config);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sink = RecordingSink { seen: seen.clone() };

        let mut incoming = vec![0u8; frame::OPTIONAL_LEN - 1];
        incoming[4] = 0x55;
        incoming[5] = 0xAA;
        incoming.push(checksum(&incoming));

        scheduler.on_receive(incoming, &mut sink);
        assert_eq!(scheduler.optional_scratch[4], 0x55);
        assert_eq!(scheduler.optional_scratch[5], 0xAA);
        assert_eq!(*seen.borrow(), vec![0]);
    }
}
