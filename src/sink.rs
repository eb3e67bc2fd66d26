//! §4.5/§6 sink boundary: the capability interface the scheduler holds
//! to fan out decoded topics, without depending on any concrete
//! transport (MQTT, D-Bus, ...).

use crate::topic::Catalogue;

/// Which frame class a raw, checksum-validated frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Main,
    Optional,
}

/// Implemented by whatever publishes topic values to the outside world.
/// The scheduler owns exactly one `Sink` and calls it from the same
/// single thread that runs the tick (§5).
pub trait Sink {
    /// Called once per topic after every successful frame decode. A
    /// `true` return means the sink has taken responsibility for
    /// publishing the topic's current value; the scheduler then marks
    /// it `delegated` so trivial re-notifies can be skipped.
    fn on_topic_received(&mut self, catalogue: &Catalogue, index: usize) -> bool;

    /// Optional diagnostic hook: the raw, checksum-validated frame.
    /// Invoked only when a full frame passed the checksum gate.
    fn on_topic_data(&mut self, _kind: FrameKind, _bytes: &[u8]) {}
}
