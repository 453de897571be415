//! # cs3310
//!
//! A `no_std`, platform-agnostic driver for the Cirrus Logic CS3310 stereo
//! digital volume control, written against the
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) 1.0
//! traits. It works with any HAL that provides a blocking SPI bus, two
//! push-pull output pins (chip-select and the chip's active-low MUTE
//! input) and a delay source.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Mapping | [`gain`] | dB ↔ 8-bit code conversion with saturation |
//! | Driver | [`Cs3310`] | Chip-select sequencing, gain frames, mute line |
//! | Trait | [`control`] | [`VolumeControl`](control::VolumeControl) surface |
//!
//! ## Quick start
//!
//! ```ignore
//! use cs3310::Cs3310;
//!
//! // spi, cs_pin, mute_pin and delay come from your HAL, already
//! // configured (mode 0, CS and MUTE as push-pull outputs).
//! let mut vol = Cs3310::new(spi, cs_pin, mute_pin, delay);
//!
//! vol.set_gain(-20.0, -20.0)?;   // −20 dB on both channels
//! vol.unmute()?;
//!
//! // Get the peripherals back
//! let (spi, cs_pin, mute_pin, delay) = vol.release();
//! ```
//!
//! Construction performs no I/O; the chip's power-on defaults hold until
//! the first explicit `set_gain`/`mute`/`unmute` call. All operations
//! block the caller for the duration of their hardware activity
//! (millisecond-scale chip-select settling plus the transfer itself).

#![no_std]

pub mod control;
pub mod gain;

mod cs3310;

pub use cs3310::{Config, Cs3310, Error};
