//! ESP-IDF bindings for the controller capabilities.
//!
//! Pins are taken from `Peripherals` by the caller and handed over
//! downgraded, so no GPIO is claimed twice.

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::gpio::{self, AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

use super::{DigitalIo, Pin, SerialLink};

/// Button input and LED outputs.
pub struct EspIo {
    button: PinDriver<'static, AnyIOPin, Input>,
    red: PinDriver<'static, AnyOutputPin, Output>,
    yellow: PinDriver<'static, AnyOutputPin, Output>,
    green: PinDriver<'static, AnyOutputPin, Output>,
}

fn led(pin: AnyOutputPin) -> Result<PinDriver<'static, AnyOutputPin, Output>, EspError> {
    let mut driver = PinDriver::output(pin)?;
    driver.set_low()?;
    Ok(driver)
}

impl EspIo {
    /// Take ownership of the four GPIOs. Button gets the internal pull-up.
    pub fn new(
        button: AnyIOPin,
        red: AnyOutputPin,
        yellow: AnyOutputPin,
        green: AnyOutputPin,
    ) -> Result<Self, EspError> {
        let mut button = PinDriver::input(button)?;
        button.set_pull(Pull::Up)?;

        Ok(Self {
            button,
            red: led(red)?,
            yellow: led(yellow)?,
            green: led(green)?,
        })
    }
}

impl DigitalIo for EspIo {
    fn read(&mut self, pin: Pin) -> bool {
        match pin {
            Pin::Button => self.button.is_high(),
            Pin::Red => self.red.is_set_high(),
            Pin::Yellow => self.yellow.is_set_high(),
            Pin::Green => self.green.is_set_high(),
        }
    }

    fn write(&mut self, pin: Pin, high: bool) {
        let level = gpio::Level::from(high);
        let _ = match pin {
            Pin::Button => return,
            Pin::Red => self.red.set_level(level),
            Pin::Yellow => self.yellow.set_level(level),
            Pin::Green => self.green.set_level(level),
        };
    }

    fn now_millis(&self) -> u32 {
        // SAFETY: esp_timer_get_time is always safe to call
        let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        (us / 1000) as u32
    }
}

/// UART link to the host.
pub struct EspSerial<'d> {
    uart: UartDriver<'d>,
}

impl<'d> EspSerial<'d> {
    pub fn new<U: uart::Uart>(
        uart: impl Peripheral<P = U> + 'd,
        tx: impl Peripheral<P = impl gpio::OutputPin> + 'd,
        rx: impl Peripheral<P = impl gpio::InputPin> + 'd,
        baud_rate: u32,
    ) -> Result<Self, EspError> {
        let config = uart::config::Config::default().baudrate(Hertz(baud_rate));

        let uart = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<gpio::AnyIOPin>::None, // CTS
            Option::<gpio::AnyIOPin>::None, // RTS
            &config,
        )?;

        Ok(Self { uart })
    }
}

impl core::fmt::Write for EspSerial<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.uart.write(s.as_bytes()).map(|_| ()).map_err(|_| core::fmt::Error)
    }
}

impl SerialLink for EspSerial<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, NON_BLOCK) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}
