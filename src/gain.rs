//! dB-to-code mapping for the CS3310 attenuator.
//!
//! The chip's transfer characteristic is affine: each channel's 8-bit code
//! covers +31.5 dB (code 255) down to −95.5 dB (code 1) in 0.5 dB steps,
//! with code 0 muting the channel. In code units that is
//! `code = 2 × dB + 192`. Related parts in the family use the same shape
//! with different constants, so the slope and offset are configuration
//! rather than hard-wired.

/// Mapping between a decibel gain value and the chip's 8-bit gain code.
///
/// The default constants are the CS3310's (`code = 2 × dB + 192`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainScale {
    /// Code steps per dB. 2.0 for the CS3310 (0.5 dB per step).
    pub slope: f32,
    /// Code transmitted for a 0 dB setting. 192 for the CS3310.
    pub code_offset: i16,
}

impl Default for GainScale {
    fn default() -> Self {
        Self {
            slope: 2.0,
            code_offset: 192,
        }
    }
}

impl GainScale {
    /// Create a scale with custom constants for a different part in the
    /// family.
    pub const fn new(slope: f32, code_offset: i16) -> Self {
        Self { slope, code_offset }
    }

    /// Convert a gain in dB to the chip's 8-bit code.
    ///
    /// The raw value is clamped into the code range, so out-of-range input
    /// saturates at 0 or 255 rather than failing. Pure function; touches no
    /// shared state.
    pub fn code(&self, db: f32) -> u8 {
        // Single truncation of the full expression; the f32 → i32 cast
        // saturates, so extreme inputs cannot wrap.
        let raw = (self.slope * db + self.code_offset as f32) as i32;
        raw.clamp(0, 255) as u8
    }

    /// The dB value that maps to full scale (code 255).
    pub fn full_scale_db(&self) -> f32 {
        (255 - self.code_offset) as f32 / self.slope
    }

    /// The dB value that maps to full attenuation (code 0).
    pub fn full_mute_db(&self) -> f32 {
        -(self.code_offset as f32) / self.slope
    }
}
