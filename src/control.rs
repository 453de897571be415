/// Trait for audio components with a runtime volume/mute surface.
pub trait VolumeControl {
    /// Error type for control operations.
    type Error;

    /// Mute the audio output.
    fn mute(&mut self) -> Result<(), Self::Error>;

    /// Unmute the audio output.
    fn unmute(&mut self) -> Result<(), Self::Error>;

    /// Set the output volume (0.0 = silent, 1.0 = unity gain).
    fn set_volume(&mut self, level: f32) -> Result<(), Self::Error>;
}
