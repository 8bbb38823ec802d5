//! Pin allocation by GPIO number
//!
//! The pin map comes from `thermometer.toml`, so pins are requested by
//! number at boot instead of being named in code.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Create a pin bank from the embassy peripherals
    ///
    /// Takes ownership of every GPIO; the remaining peripherals are unused
    /// by the thermometer and are dropped.
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin_num));
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Take several pins at once, in order
    pub fn take_many<const N: usize>(
        &mut self,
        pin_nums: &[u8; N],
    ) -> Result<[Peri<'static, AnyPin>; N], PinError> {
        // Validate everything first so a failure leaves the bank untouched
        for (i, &num) in pin_nums.iter().enumerate() {
            if !self.is_available(num) {
                return Err(if num as usize >= GPIO_COUNT {
                    PinError::InvalidPin(num)
                } else {
                    PinError::AlreadyTaken(num)
                });
            }
            if pin_nums[..i].contains(&num) {
                return Err(PinError::AlreadyTaken(num));
            }
        }

        let mut taken = pin_nums.map(|num| self.pins[num as usize].take());
        Ok(core::array::from_fn(|i| match taken[i].take() {
            Some(pin) => pin,
            // Checked above
            None => unreachable!(),
        }))
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        if pin_num as usize >= GPIO_COUNT {
            return false;
        }
        self.pins[pin_num as usize].is_some()
    }
}
