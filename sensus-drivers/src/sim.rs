//! Deterministic wire and clock simulator for driver tests.
//!
//! One [`SimBus`] models a single data wire observed through a virtual
//! microsecond clock. Reading the wire advances the clock by one
//! microsecond per poll and delays advance it directly, so a driver's
//! busy-wait loops sweep over a scripted waveform exactly as they would
//! over a real one, with no wall-clock time involved.
//!
//! The sensor side of the wire is a list of [`Segment`]s. The script is
//! anchored either explicitly ([`SimBus::anchor_at`]) or at the moment the
//! host enables the pull-up, which is where a one-wire peripheral starts
//! talking. Before the anchor the wire follows the host's writes; after
//! the script runs out it rests at the idle level.

use core::cell::{Cell, RefCell};

use sensus_hal::gpio::{InputPin, Level, OutputPin, Pull, PullControl};
use sensus_hal::time::{Clock, DelayUs};

/// A scripted stretch of wire time
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub level: Level,
    pub duration_us: u64,
}

/// Shorthand segment constructor
pub fn seg(level: Level, duration_us: u64) -> Segment {
    Segment { level, duration_us }
}

pub struct SimBus {
    now_us: Cell<u64>,
    script: RefCell<Vec<Segment>>,
    script_anchor: Cell<Option<u64>>,
    idle_level: Cell<Level>,
    host_level: Cell<Level>,
    host_writes: RefCell<Vec<(u64, Level)>>,
    pulls: RefCell<Vec<(u64, Pull)>>,
}

impl SimBus {
    /// A bus with no sensor script; the wire follows host writes, then
    /// idles high once anchored.
    pub fn new() -> Self {
        Self {
            now_us: Cell::new(0),
            script: RefCell::new(Vec::new()),
            script_anchor: Cell::new(None),
            idle_level: Cell::new(Level::High),
            host_level: Cell::new(Level::High),
            host_writes: RefCell::new(Vec::new()),
            pulls: RefCell::new(Vec::new()),
        }
    }

    /// A bus whose sensor side plays `script` once anchored
    pub fn with_script(script: &[Segment]) -> Self {
        let bus = Self::new();
        *bus.script.borrow_mut() = script.to_vec();
        bus
    }

    /// Level the wire rests at after the script is exhausted
    pub fn set_idle_level(&self, level: Level) {
        self.idle_level.set(level);
    }

    /// Anchor the script at an absolute timestamp
    pub fn anchor_at(&self, t_us: u64) {
        self.script_anchor.set(Some(t_us));
    }

    /// Handle for the simulated wire
    pub fn pin(&self) -> SimPin<'_> {
        SimPin { bus: self }
    }

    /// Handle for the simulated clock
    pub fn clock(&self) -> SimClock<'_> {
        SimClock { bus: self }
    }

    /// An output-only pin on its own wire, timestamped by this bus's clock
    pub fn recorder_pin(&self) -> RecorderPin<'_> {
        RecorderPin {
            bus: self,
            level: Cell::new(Level::Low),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn now(&self) -> u64 {
        self.now_us.get()
    }

    /// Host writes to the wire as `(timestamp, level)`
    pub fn host_writes(&self) -> Vec<(u64, Level)> {
        self.host_writes.borrow().clone()
    }

    /// Pull reconfigurations as `(timestamp, pull)`
    pub fn pulls(&self) -> Vec<(u64, Pull)> {
        self.pulls.borrow().clone()
    }

    fn level_at(&self, t_us: u64) -> Level {
        let anchor = match self.script_anchor.get() {
            None => return self.host_level.get(),
            Some(anchor) => anchor,
        };
        if t_us < anchor {
            return self.host_level.get();
        }
        let mut offset = t_us - anchor;
        for segment in self.script.borrow().iter() {
            if offset < segment.duration_us {
                return segment.level;
            }
            offset -= segment.duration_us;
        }
        self.idle_level.get()
    }
}

/// The simulated bidirectional wire
pub struct SimPin<'a> {
    bus: &'a SimBus,
}

impl InputPin for SimPin<'_> {
    fn is_high(&self) -> bool {
        let t = self.bus.now_us.get();
        // One microsecond of virtual time per poll
        self.bus.now_us.set(t + 1);
        self.bus.level_at(t) == Level::High
    }
}

impl OutputPin for SimPin<'_> {
    fn set_high(&mut self) {
        self.bus.host_level.set(Level::High);
        self.bus
            .host_writes
            .borrow_mut()
            .push((self.bus.now(), Level::High));
    }

    fn set_low(&mut self) {
        self.bus.host_level.set(Level::Low);
        self.bus
            .host_writes
            .borrow_mut()
            .push((self.bus.now(), Level::Low));
    }

    fn toggle(&mut self) {
        match self.bus.host_level.get() {
            Level::High => self.set_low(),
            Level::Low => self.set_high(),
        }
    }

    fn is_set_high(&self) -> bool {
        self.bus.host_level.get() == Level::High
    }
}

impl PullControl for SimPin<'_> {
    fn set_pull(&mut self, pull: Pull) {
        self.bus.pulls.borrow_mut().push((self.bus.now(), pull));
        // The peripheral starts talking once the host releases the wire
        // into input mode; anchor the script there unless a test pinned
        // it somewhere else already.
        if pull == Pull::Up && self.bus.script_anchor.get().is_none() {
            self.bus.script_anchor.set(Some(self.bus.now()));
        }
    }
}

/// Output-only pin with its own recorded waveform (e.g. a trigger line)
pub struct RecorderPin<'a> {
    bus: &'a SimBus,
    level: Cell<Level>,
    writes: RefCell<Vec<(u64, Level)>>,
}

impl RecorderPin<'_> {
    pub fn writes(&self) -> Vec<(u64, Level)> {
        self.writes.borrow().clone()
    }
}

impl OutputPin for RecorderPin<'_> {
    fn set_high(&mut self) {
        self.level.set(Level::High);
        self.writes.borrow_mut().push((self.bus.now(), Level::High));
    }

    fn set_low(&mut self) {
        self.level.set(Level::Low);
        self.writes.borrow_mut().push((self.bus.now(), Level::Low));
    }

    fn toggle(&mut self) {
        match self.level.get() {
            Level::High => self.set_low(),
            Level::Low => self.set_high(),
        }
    }

    fn is_set_high(&self) -> bool {
        self.level.get() == Level::High
    }
}

/// The simulated clock and delay source
pub struct SimClock<'a> {
    bus: &'a SimBus,
}

impl Clock for SimClock<'_> {
    fn now_us(&self) -> u64 {
        self.bus.now_us.get()
    }
}

impl DelayUs for SimClock<'_> {
    fn delay_us(&mut self, us: u32) {
        let t = self.bus.now_us.get();
        self.bus.now_us.set(t + us as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_playback() {
        let bus = SimBus::with_script(&[seg(Level::Low, 10), seg(Level::High, 5)]);
        bus.anchor_at(0);
        bus.set_idle_level(Level::Low);

        assert_eq!(bus.level_at(0), Level::Low);
        assert_eq!(bus.level_at(9), Level::Low);
        assert_eq!(bus.level_at(10), Level::High);
        assert_eq!(bus.level_at(14), Level::High);
        // Past the script: idle
        assert_eq!(bus.level_at(15), Level::Low);
    }

    #[test]
    fn test_polls_advance_clock() {
        let bus = SimBus::new();
        let pin = bus.pin();
        assert!(pin.is_high());
        assert!(pin.is_high());
        assert_eq!(bus.now(), 2);
    }

    #[test]
    fn test_anchor_on_pull_up() {
        let bus = SimBus::with_script(&[seg(Level::Low, 10)]);
        let mut pin = bus.pin();
        let mut clock = bus.clock();

        clock.delay_us(100);
        pin.set_pull(Pull::Up);

        assert_eq!(bus.level_at(100), Level::Low);
        assert_eq!(bus.level_at(110), Level::High);
    }
}
