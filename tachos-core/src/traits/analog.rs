//! Analog input trait

/// Errors that can occur reading an analog input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
}

/// Raw analog sample source (e.g. a potentiometer on an ADC channel)
///
/// Out-of-range samples are not an error here; the speed mapping clamps.
#[allow(async_fn_in_trait)]
pub trait AnalogInput {
    /// Read one raw sample
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    async fn read_raw(&mut self) -> Result<u16, SensorError>;
}
