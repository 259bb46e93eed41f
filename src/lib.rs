#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Fuses up to two independently-debounced signal sources into one logical press/hold signal
//! - **`ButtonBuilder`**: Construction-time configuration (pins, debounce intervals)
//! - **`Debouncer`**: Filters one noisy digital input into a stable level with edge detection
//! - **`InputPin`**: Trait to implement for your digital input hardware
//! - **`Level` / `Polarity` / `PullMode`**: Electrical level, per-source pressed convention, input binding mode
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ButtonCollection`**: Polls several independent buttons behind stable IDs
//!
//! Debounce settling is measured in wall-clock time against the host's
//! monotonic clock, so behavior is independent of poll-loop frequency as
//! long as the loop runs often relative to the configured intervals.

pub mod button;
pub mod collection;
pub mod debouncer;
pub mod time;
pub mod types;

pub use button::{Button, ButtonBuilder};
pub use collection::{ButtonCollection, ButtonId, CollectionError};
pub use debouncer::{Debouncer, InputPin};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Level, Polarity, PullMode};

/// Default settling interval for the wired contact, in milliseconds.
pub const DEFAULT_PRIMARY_DEBOUNCE_MS: u64 = 50;

/// Default settling interval for the remote source, in milliseconds.
/// Zero: receiver modules are assumed to emit clean transitions.
pub const DEFAULT_REMOTE_DEBOUNCE_MS: u64 = 0;
