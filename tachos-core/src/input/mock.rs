//! Fake input pins for host tests

use core::convert::Infallible;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};

/// Pin stuck at a fixed level
pub struct FakePin(pub bool);

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0)
    }
}

/// Pin whose every read fails
pub struct BrokenPin;

#[derive(Debug)]
pub struct ReadFault;

impl Error for ReadFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = ReadFault;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, ReadFault> {
        Err(ReadFault)
    }

    fn is_low(&mut self) -> Result<bool, ReadFault> {
        Err(ReadFault)
    }
}
