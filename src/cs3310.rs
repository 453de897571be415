//! CS3310 stereo digital volume control driver.
//!
//! The chip has no register map; a volume update is a single 16-bit frame
//! clocked in over SPI while chip-select is held low, left channel byte
//! first. Two discrete lines complete the interface: chip-select and the
//! active-low hardware MUTE input.
//!
//! The driver is generic over any [`embedded_hal::spi::SpiBus`],
//! [`embedded_hal::digital::OutputPin`] and
//! [`embedded_hal::delay::DelayNs`] implementation.
//!
//! # Example
//!
//! ```ignore
//! let mut vol = Cs3310::new(spi, cs_pin, mute_pin, delay);
//! vol.set_gain(-20.0, -20.0)?;   // −20 dB both channels
//! vol.unmute()?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::control::VolumeControl;
use crate::gain::GainScale;

// ── Error type ─────────────────────────────────────────────────────────────

/// Driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SpiE, PinE> {
    /// The serial transfer failed. A bus timeout in the HAL implementation
    /// surfaces here as the bus's own error value.
    Spi(SpiE),
    /// Driving the chip-select or mute line failed.
    Pin(PinE),
}

// ── Configuration ──────────────────────────────────────────────────────────

/// Construction-time configuration.
///
/// The defaults match the CS3310 on a comfortably-clocked bus; override the
/// gain constants for other parts in the family and the delays for faster
/// or slower wiring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// dB-to-code mapping constants.
    pub gain: GainScale,
    /// Chip-select-to-first-clock setup time in milliseconds. The chip
    /// requires a non-zero setup time.
    pub cs_setup_ms: u32,
    /// Hold time in milliseconds between the last clock edge and
    /// chip-select release. Must likewise be non-zero.
    pub cs_hold_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gain: GainScale::default(),
            cs_setup_ms: 1,
            cs_hold_ms: 1,
        }
    }
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// CS3310 driver.
///
/// Owns the bus, the two control lines and the delay provider for its
/// lifetime; [`release()`](Self::release) hands them back. All operations
/// take `&mut self`, so a shared controller is serialized by the borrow
/// checker — the chip-select window of one call can never interleave with
/// another.
pub struct Cs3310<SPI, CS, MUTE, D> {
    spi: SPI,
    cs: CS,
    mute: MUTE,
    delay: D,
    config: Config,
}

impl<SPI, CS, MUTE, D> Cs3310<SPI, CS, MUTE, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    MUTE: OutputPin<Error = CS::Error>,
    D: DelayNs,
{
    /// Create a driver with the default [`Config`].
    ///
    /// Performs no I/O: no reset, no mute toggle, no gain write. The chip's
    /// power-on state governs until the first explicit call, so callers
    /// wanting a known starting state should follow construction with
    /// [`mute()`](Self::mute) or [`set_gain()`](Self::set_gain).
    pub fn new(spi: SPI, cs: CS, mute: MUTE, delay: D) -> Self {
        Self::new_with_config(spi, cs, mute, delay, Config::default())
    }

    /// Create a driver with a specific configuration. Performs no I/O.
    pub fn new_with_config(spi: SPI, cs: CS, mute: MUTE, delay: D, config: Config) -> Self {
        Self {
            spi,
            cs,
            mute,
            delay,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Mute control ───────────────────────────────────────────────────

    /// Mute both channels via the hardware MUTE line (drives it low).
    ///
    /// Single pin write; no delays, no bus traffic.
    pub fn mute(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        self.mute.set_low().map_err(Error::Pin)
    }

    /// Release the hardware mute (drives the MUTE line high).
    pub fn unmute(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        self.mute.set_high().map_err(Error::Pin)
    }

    // ── Gain control ───────────────────────────────────────────────────

    /// Set both channel gains in dB.
    ///
    /// Out-of-range values saturate at the ends of the code range (see
    /// [`GainScale::code`]). The chip's serial port takes both channels in
    /// one 16-bit frame, left byte first; there is no single-channel
    /// update.
    ///
    /// Chip-select is released on every exit path: a failed transfer still
    /// runs the hold delay and deasserts the line before the error is
    /// returned, so the chip is never left selected.
    pub fn set_gain(
        &mut self,
        left_db: f32,
        right_db: f32,
    ) -> Result<(), Error<SPI::Error, CS::Error>> {
        let frame = [
            self.config.gain.code(left_db),
            self.config.gain.code(right_db),
        ];

        self.cs.set_low().map_err(Error::Pin)?;
        self.delay.delay_ms(self.config.cs_setup_ms);
        let transfer = self.spi.write(&frame).and_then(|_| self.spi.flush());
        self.delay.delay_ms(self.config.cs_hold_ms);
        let released = self.cs.set_high();
        transfer.map_err(Error::Spi)?;
        released.map_err(Error::Pin)?;
        Ok(())
    }

    /// Set both channels from a normalized level (0.0 = silent, 1.0 =
    /// unity gain), converted through `20·log10(level)`.
    ///
    /// A level of zero (or below) writes full attenuation; it does not
    /// touch the MUTE line.
    pub fn set_volume(&mut self, level: f32) -> Result<(), Error<SPI::Error, CS::Error>> {
        let db = if level > 0.0 {
            20.0 * libm::log10f(level)
        } else {
            self.config.gain.full_mute_db()
        };
        self.set_gain(db, db)
    }

    // ── Release ────────────────────────────────────────────────────────

    /// Consume the driver and return the bus, both pins and the delay.
    pub fn release(self) -> (SPI, CS, MUTE, D) {
        (self.spi, self.cs, self.mute, self.delay)
    }
}

// ── VolumeControl trait implementation ─────────────────────────────────────

impl<SPI, CS, MUTE, D> VolumeControl for Cs3310<SPI, CS, MUTE, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    MUTE: OutputPin<Error = CS::Error>,
    D: DelayNs,
{
    type Error = Error<SPI::Error, CS::Error>;

    fn mute(&mut self) -> Result<(), Self::Error> {
        Cs3310::mute(self)
    }

    fn unmute(&mut self) -> Result<(), Self::Error> {
        Cs3310::unmute(self)
    }

    fn set_volume(&mut self, level: f32) -> Result<(), Self::Error> {
        Cs3310::set_volume(self, level)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
