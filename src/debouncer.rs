//! Single-input debouncing with stable-level edge detection.
//!
//! Provides [`Debouncer`] which filters one noisy digital input into a
//! settled logical level, handling raw-sample tracking, settling-window
//! timing, and edge reporting. Also defines the [`InputPin`] trait for
//! hardware abstraction.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::{Level, Polarity, PullMode};

/// Trait for abstracting digital input hardware.
///
/// Implement this for your input hardware (GPIO registers, HAL pin types,
/// port expanders, etc.) to allow a debouncer to sample it.
pub trait InputPin {
    /// Applies the input binding mode.
    ///
    /// Called once when a debouncer takes ownership of the pin. Platforms
    /// whose pins are configured at construction can ignore the call.
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_mode(&mut self, mode: PullMode);

    /// Samples the current electrical level.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn read(&mut self) -> Level;
}

/// Filters a single digital input into a stable logical level.
///
/// The raw pin is sampled on every [`update`](Debouncer::update) call, but a
/// changed level is only committed as the *stable* level once it has held
/// constant for the full debounce interval. Settling is measured against the
/// clock rather than a sample count, so behavior does not depend on how often
/// the poll loop runs - as long as it runs often relative to the interval.
///
/// A zero interval disables filtering entirely: the stable level tracks the
/// raw level on the same `update` call that observes a change. This is the
/// right setting for sources that are already clean, such as the logic-level
/// output of a radio receiver module.
///
/// Edges ([`fell`](Debouncer::fell) / [`rose`](Debouncer::rose)) are computed
/// from the stable level, never the raw one, so a single mechanical bounce
/// cannot register as two presses.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `P` - Input pin implementation type
pub struct Debouncer<I: TimeInstant, P: InputPin> {
    pin: P,
    polarity: Polarity,
    interval: I::Duration,
    raw_level: Level,
    stable_level: Level,
    last_change: I,
    rose: bool,
    fell: bool,
}

impl<I: TimeInstant, P: InputPin> Debouncer<I, P> {
    /// Creates a debouncer bound to the given pin.
    ///
    /// Applies `mode` to the pin and samples its current level as the
    /// initial raw *and* stable level, so no edge is reported for the state
    /// the input was already in at construction.
    ///
    /// # Arguments
    /// * `pin` - The input to sample; the debouncer takes ownership
    /// * `mode` - Input binding mode applied before the first sample
    /// * `polarity` - Which level counts as pressed/triggered
    /// * `interval` - Settling window; `ZERO` passes raw samples through
    /// * `now` - Current instant, used as the initial change timestamp
    pub fn new(
        mut pin: P,
        mode: PullMode,
        polarity: Polarity,
        interval: I::Duration,
        now: I,
    ) -> Self {
        pin.set_mode(mode);
        let level = pin.read();

        Self {
            pin,
            polarity,
            interval,
            raw_level: level,
            stable_level: level,
            last_change: now,
            rose: false,
            fell: false,
        }
    }

    /// Samples the pin and advances the settling state machine.
    ///
    /// If the sample differs from the last raw level, the raw level is
    /// replaced and the settling window restarts at `now`. The stable level
    /// is then committed only if the raw level disagrees with it and has
    /// held constant for at least the full interval.
    ///
    /// The stable level changes at most once per call. Edge queries report
    /// the transition made by the most recent call only; calling `update`
    /// again clears them unless a new transition settles.
    ///
    /// Never blocks - the method samples the clock value it is given and
    /// returns immediately regardless of settling state.
    pub fn update(&mut self, now: I) {
        self.rose = false;
        self.fell = false;

        let sample = self.pin.read();
        if sample != self.raw_level {
            self.raw_level = sample;
            self.last_change = now;
        }

        if self.raw_level != self.stable_level
            && now.duration_since(self.last_change).as_millis() >= self.interval.as_millis()
        {
            self.stable_level = self.raw_level;
            match self.stable_level {
                Level::High => self.rose = true,
                Level::Low => self.fell = true,
            }
        }
    }

    /// Returns the current stable (debounced) level.
    pub fn read(&self) -> Level {
        self.stable_level
    }

    /// Returns the most recent raw sample, before debouncing.
    pub fn raw(&self) -> Level {
        self.raw_level
    }

    /// Returns true if the last `update` settled a high-to-low transition.
    pub fn fell(&self) -> bool {
        self.fell
    }

    /// Returns true if the last `update` settled a low-to-high transition.
    pub fn rose(&self) -> bool {
        self.rose
    }

    /// Returns true if the stable level is at this input's active level.
    pub fn is_active(&self) -> bool {
        self.stable_level == self.polarity.active_level()
    }

    /// Returns true if the last `update` settled a transition *into* the
    /// active level - a press for `ActiveLow`, a trigger for `ActiveHigh`.
    pub fn became_active(&self) -> bool {
        match self.polarity {
            Polarity::ActiveLow => self.fell,
            Polarity::ActiveHigh => self.rose,
        }
    }

    /// Returns true if the last `update` settled a transition *out of* the
    /// active level.
    pub fn became_inactive(&self) -> bool {
        match self.polarity {
            Polarity::ActiveLow => self.rose,
            Polarity::ActiveHigh => self.fell,
        }
    }

    /// Returns the configured settling interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }

    /// Returns the configured polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}
