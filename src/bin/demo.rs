//! Reference entry point: opens the configured serial device, publishes
//! every non-delegated topic change to stdout, and runs the scheduler
//! on a plain 50 ms sleep loop. A real integrator swaps `StdoutSink`
//! for an MQTT or D-Bus publisher and likely drives `tick()` from an
//! event loop instead of sleeping.

use std::env;
use std::thread;
use std::time::Duration;

use log::info;

use aquarea_bridge::config::SerialConfig;
use aquarea_bridge::scheduler::Scheduler;
use aquarea_bridge::sink::{FrameKind, Sink};
use aquarea_bridge::catalogue;
use aquarea_bridge::topic::Catalogue;

struct StdoutSink;

impl Sink for StdoutSink {
    fn on_topic_received(&mut self, catalogue: &Catalogue, index: usize) -> bool {
        let state = catalogue.state(index);
        if state.delegated {
            return false;
        }
        let def = catalogue.def(index);
        let Some(value) = &state.raw_value else { return false };
        println!("{} = {}", def.name, def.domain.describe(value));
        true
    }

    fn on_topic_data(&mut self, kind: FrameKind, bytes: &[u8]) {
        info!("received {kind:?} frame, {} bytes", bytes.len());
    }
}

fn main() {
    env_logger::init();

    let device = env::args().nth(1).unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let config = SerialConfig::new(device, 10, 2).expect("invalid serial configuration");

    let port = serialport::new(&config.device, 9600)
        .timeout(Duration::from_millis(200))
        .data_bits(serialport::DataBits::Eight)
        .parity(serialport::Parity::Even)
        .stop_bits(serialport::StopBits::One)
        .open()
        .expect("failed to open heat pump serial device");

    let mut scheduler = Scheduler::new(catalogue::build(), port, &config);
    let mut sink = StdoutSink;

    info!("aquarea-bridge demo running against {}", config.device);
    loop {
        scheduler.tick(&mut sink);
        thread::sleep(Duration::from_millis(50));
    }
}
