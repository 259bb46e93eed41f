//! Logical button fused from up to two debounced signal sources.
//!
//! Provides [`Button`] which owns a debouncer for a directly wired contact
//! and, optionally, a second debouncer for a remotely triggered input, and
//! fuses their settled states into one press/hold signal. [`ButtonBuilder`]
//! carries the construction-time configuration.

use crate::debouncer::{Debouncer, InputPin};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Polarity, PullMode};
use crate::{DEFAULT_PRIMARY_DEBOUNCE_MS, DEFAULT_REMOTE_DEBOUNCE_MS};

/// A logical button driven by one or two independent signal sources.
///
/// The *primary* source is a directly wired contact: pull-up input,
/// active-low, debounced (mechanical contacts bounce). The optional *remote*
/// source is a pre-conditioned logic signal such as a radio receiver output:
/// floating input, active-high, unfiltered by default. A press or hold from
/// either source counts; neither source ever suppresses the other.
///
/// Call [`update`](Button::update) once per iteration of your control loop,
/// at a period small relative to the shortest configured debounce interval,
/// then act on [`just_pressed`](Button::just_pressed) /
/// [`is_held`](Button::is_held) once per iteration.
///
/// Queries made before the first `update` reflect the pin levels sampled at
/// construction.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input pin implementation type
/// * `T` - Time source implementation type
pub struct Button<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> {
    primary: Debouncer<I, P>,
    remote: Option<Debouncer<I, P>>,
    time_source: &'t T,
    pressed_at: Option<I>,
}

impl<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> Button<'t, I, P, T> {
    /// Creates a button with only a wired contact, using default settings.
    pub fn new(primary_pin: P, time_source: &'t T) -> Self {
        ButtonBuilder::new(primary_pin).build(time_source)
    }

    /// Creates a button with a wired contact and a remote input, using
    /// default settings.
    pub fn with_remote(primary_pin: P, remote_pin: P, time_source: &'t T) -> Self {
        ButtonBuilder::new(primary_pin)
            .remote_pin(remote_pin)
            .build(time_source)
    }

    /// Samples the clock once and advances every configured source.
    ///
    /// A missing remote source is skipped without side effects. Never
    /// blocks; constant time.
    pub fn update(&mut self) {
        let now = self.time_source.now();

        self.primary.update(now);
        if let Some(remote) = self.remote.as_mut() {
            remote.update(now);
        }

        if self.is_held() {
            if self.pressed_at.is_none() {
                self.pressed_at = Some(now);
            }
        } else {
            self.pressed_at = None;
        }
    }

    /// Returns true on the update cycle where a press settled on any source.
    ///
    /// Edge-based: fires exactly once per press, on the `update` call that
    /// committed the source's transition into its active level.
    pub fn just_pressed(&self) -> bool {
        self.primary.became_active()
            || self.remote.as_ref().is_some_and(|remote| remote.became_active())
    }

    /// Returns true while any source's stable level is at its active level.
    ///
    /// Level-based, not edge-based - reflects the current sustained state,
    /// useful for long-press and repeat logic in the host.
    pub fn is_held(&self) -> bool {
        self.primary.is_active()
            || self.remote.as_ref().is_some_and(|remote| remote.is_active())
    }

    /// Returns true on the update cycle where the last active source
    /// settled back to its inactive level.
    pub fn just_released(&self) -> bool {
        if self.is_held() {
            return false;
        }

        self.primary.became_inactive()
            || self.remote.as_ref().is_some_and(|remote| remote.became_inactive())
    }

    /// Returns how long the button has been held, if it is held.
    pub fn held_duration(&self) -> Option<I::Duration> {
        self.pressed_at.map(|pressed| {
            let now = self.time_source.now();
            now.duration_since(pressed)
        })
    }

    /// Returns true if a remote source is configured.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Returns a reference to the primary source's debouncer.
    pub fn primary(&self) -> &Debouncer<I, P> {
        &self.primary
    }

    /// Returns a reference to the remote source's debouncer, if configured.
    pub fn remote(&self) -> Option<&Debouncer<I, P>> {
        self.remote.as_ref()
    }
}

/// Builder for configuring a [`Button`] before its pins are bound.
///
/// Records pin assignments and debounce intervals;
/// [`build`](ButtonBuilder::build) binds the pins and constructs the
/// debouncers with the wiring convention described on [`Button`].
pub struct ButtonBuilder<I: TimeInstant, P: InputPin> {
    primary_pin: P,
    remote_pin: Option<P>,
    primary_debounce: I::Duration,
    remote_debounce: I::Duration,
}

impl<I: TimeInstant, P: InputPin> ButtonBuilder<I, P> {
    /// Creates a builder with default debounce intervals.
    pub fn new(primary_pin: P) -> Self {
        Self {
            primary_pin,
            remote_pin: None,
            primary_debounce: I::Duration::from_millis(DEFAULT_PRIMARY_DEBOUNCE_MS),
            remote_debounce: I::Duration::from_millis(DEFAULT_REMOTE_DEBOUNCE_MS),
        }
    }

    /// Adds a remote signal source.
    pub fn remote_pin(mut self, pin: P) -> Self {
        self.remote_pin = Some(pin);
        self
    }

    /// Overrides the settling interval for the wired contact.
    ///
    /// Default is 50ms.
    pub fn primary_debounce(mut self, interval: I::Duration) -> Self {
        self.primary_debounce = interval;
        self
    }

    /// Overrides the settling interval for the remote source.
    ///
    /// Default is zero - no filtering - which assumes the remote hardware
    /// already emits clean transitions. If your receiver output is noisy,
    /// set a non-zero interval here.
    pub fn remote_debounce(mut self, interval: I::Duration) -> Self {
        self.remote_debounce = interval;
        self
    }

    /// Binds the configured pins and constructs the button.
    ///
    /// The primary pin is bound with its pull-up enabled and sampled
    /// active-low; the remote pin, if configured, is bound floating and
    /// sampled active-high.
    pub fn build<'t, T: TimeSource<I>>(self, time_source: &'t T) -> Button<'t, I, P, T> {
        let now = time_source.now();

        let primary = Debouncer::new(
            self.primary_pin,
            PullMode::PullUp,
            Polarity::ActiveLow,
            self.primary_debounce,
            now,
        );

        let remote = self.remote_pin.map(|pin| {
            Debouncer::new(
                pin,
                PullMode::Floating,
                Polarity::ActiveHigh,
                self.remote_debounce,
                now,
            )
        });

        Button {
            primary,
            remote,
            time_source,
            pressed_at: None,
        }
    }
}
