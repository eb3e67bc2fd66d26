//! aquarea-bridge
//!
//! A serial protocol bridge for Panasonic Aquarea-class heat pumps: a
//! declarative topic catalogue, a fixed-frame codec and a cooperative
//! link scheduler that polls the device, drains queued writes and
//! mirrors the optional-PCB sensor interface when one isn't actually
//! installed.
//!
//! - [x] Main frame decode (203 bytes)
//! - [x] Optional-PCB frame decode/encode (20 bytes)
//! - [x] Change-tracked topic state with delegation
//! - [x] Command queue with domain validation
//! - [ ] D-Bus / MQTT sinks (left to the integrator, see [`Sink`])
//!
//! # Example
//! ```no_run
//! use aquarea_bridge::{catalogue, config::SerialConfig, scheduler::Scheduler, sink::{Sink, FrameKind}};
//!
//! struct StdoutSink;
//! impl Sink for StdoutSink {
//!     fn on_topic_received(&mut self, catalogue: &aquarea_bridge::topic::Catalogue, index: usize) -> bool {
//!         let def = catalogue.def(index);
//!         if let Some(value) = &catalogue.state(index).raw_value {
//!             println!("{} = {}", def.name, def.domain.describe(value));
//!         }
//!         true
//!     }
//! }
//!
//! let config = SerialConfig::new("/dev/ttyUSB0", 10, 0).unwrap();
//! let port = serialport::new(&config.device, 9600)
//!     .timeout(std::time::Duration::from_millis(200))
//!     .parity(serialport::Parity::Even)
//!     .open()
//!     .unwrap();
//! let mut scheduler = Scheduler::new(catalogue::build(), port, &config);
//! let mut sink = StdoutSink;
//! loop {
//!     scheduler.tick(&mut sink);
//! }
//! ```

pub mod catalogue;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod frame;
pub mod model_table;
pub mod primitives;
pub mod scheduler;
pub mod sink;
pub mod topic;
pub mod value;

pub use config::SerialConfig;
pub use error::{CommandError, ConfigError, FrameError, SchedulerError};
pub use scheduler::{Link, Scheduler};
pub use sink::{FrameKind, Sink};
pub use topic::{Catalogue, TopicDef, TopicState};
pub use value::{Domain, Input, Value};
