//! CalmWave controller - firmware entry point
//!
//! 1. Bring up the button, LEDs and host UART
//! 2. Wait for the link to settle, announce the boot
//! 3. Loop forever: tick, flush diagnostics, short delay

#[cfg(target_os = "espidf")]
fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    use calmwave_controller::hal::esp;
    use calmwave_controller::hal::DigitalIo;
    use calmwave_controller::{ControllerConfig, DeviceController, LogStream};
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::gpio::{IOPin, OutputPin};
    use esp_idf_svc::hal::peripherals::Peripherals;

    static LOG_STREAM: LogStream = LogStream::new();

    esp_idf_svc::sys::link_patches();

    let config = ControllerConfig::default();
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    // Wiring as listed in ControllerConfig::DEFAULT.pins
    let mut io = esp::EspIo::new(
        pins.gpio8.downgrade(),
        pins.gpio7.downgrade_output(),
        pins.gpio5.downgrade_output(),
        pins.gpio6.downgrade_output(),
    )?;
    let mut serial = esp::EspSerial::new(
        peripherals.uart1,
        pins.gpio17,
        pins.gpio18,
        config.baud_rate,
    )?;

    FreeRtos::delay_ms(config.startup_delay_ms);

    let mut controller = DeviceController::new(config, &LOG_STREAM);
    controller.start(&mut io);

    loop {
        controller.tick(&mut io, &mut serial);
        controller.flush_diagnostics(&mut serial, io.now_millis());
        FreeRtos::delay_ms(config.loop_delay_ms);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "{}: firmware for ESP-IDF targets; run `cargo test` for host checks",
        calmwave_controller::VERSION
    );
}
