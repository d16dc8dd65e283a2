//! The control loop body.
//!
//! One `DeviceController` is built at startup and owned by the loop driver.
//! Each [`tick`](DeviceController::tick) runs to completion:
//!
//! 1. Sample the button, apply a debounced press to the session
//! 2. Take at most one complete host line, apply it to the session
//! 3. Recompute the LEDs
//!
//! The driver then flushes queued diagnostics and sleeps for the loop delay.

use crate::config::ControllerConfig;
use crate::debounce::ButtonDebouncer;
use crate::hal::{DigitalIo, Pin, SerialLink};
use crate::indicator::{show_solid, StatusIndicator};
use crate::logging::LogStream;
use crate::serial::{parse_line, CommandError, CommandReader, HostCommand};
use crate::session::{Session, SessionState};
use crate::{diag_debug, diag_info, uart_logger, VERSION};

/// Button, session, host commands and LEDs for one board.
pub struct DeviceController<'a> {
    session: Session,
    button: ButtonDebouncer,
    reader: CommandReader,
    indicator: StatusIndicator,
    log: &'a LogStream,
}

impl<'a> DeviceController<'a> {
    /// Create a controller in the idle state.
    ///
    /// Applies `config.log_level` to `log`.
    pub fn new(config: ControllerConfig, log: &'a LogStream) -> Self {
        log.set_level(config.log_level);

        Self {
            session: Session::new(),
            button: ButtonDebouncer::new(config.debounce_ms),
            reader: CommandReader::new(),
            indicator: StatusIndicator::new(config.recording_blink_ms, config.sending_blink_ms),
            log,
        }
    }

    /// Current mode.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Blink bookkeeping, exposed for inspection.
    pub fn indicator(&self) -> &StatusIndicator {
        &self.indicator
    }

    /// Announce the boot and light the idle LED.
    ///
    /// Call once, after the serial link has settled.
    pub fn start<IO: DigitalIo>(&mut self, io: &mut IO) {
        let now = io.now_millis();
        diag_info!(self.log, now, "Sistema CalmWave iniciado. {}", VERSION);
        diag_info!(self.log, now, "Aguardando START/STOP do botao ou do host.");

        show_solid(io, Pin::Red);
    }

    /// Run one loop iteration.
    pub fn tick<IO: DigitalIo, S: SerialLink>(&mut self, io: &mut IO, serial: &mut S) {
        let now = io.now_millis();

        let level = io.read(Pin::Button);
        if self.button.sample(level, now) {
            self.on_press(serial, now);
        }

        let parsed = match self.reader.poll(serial) {
            Some(Ok(line)) => {
                let parsed = parse_line(line);
                if parsed == Err(CommandError::UnknownCommand) {
                    diag_debug!(self.log, now, "Linha ignorada: '{}'", line.trim());
                }
                Some(parsed)
            }
            Some(Err(err)) => {
                diag_debug!(self.log, now, "Linha ignorada ({})", err);
                Some(Err(err))
            }
            None => None,
        };
        if let Some(Ok(command)) = parsed {
            self.on_command(command, now);
        }

        self.indicator.update(io, self.session.state());
    }

    /// Write queued diagnostics to `serial`. Returns lines written.
    pub fn flush_diagnostics<S: SerialLink>(&self, serial: &mut S, now_ms: u32) -> usize {
        uart_logger::drain_to(self.log, serial, now_ms)
    }

    fn on_press<S: SerialLink>(&mut self, serial: &mut S, now: u32) {
        match self.session.press() {
            Some(announcement) => {
                serial.write_line(announcement.as_str());
                if self.session.state().is_recording() {
                    diag_info!(self.log, now, "Iniciando gravacao via botao.");
                } else {
                    diag_info!(self.log, now, "Parando gravacao via botao.");
                }
            }
            None => {
                diag_debug!(self.log, now, "Botao ignorado durante o envio.");
            }
        }
    }

    fn on_command(&mut self, command: HostCommand, now: u32) {
        match command {
            HostCommand::Sending => {
                self.session.sending();
                diag_info!(
                    self.log,
                    now,
                    "Recebido '{}' do host. Transicao para modo de envio.",
                    command.as_str()
                );
            }
            HostCommand::SentComplete => {
                self.session.sent_complete();
                diag_info!(
                    self.log,
                    now,
                    "Recebido '{}' do host. Transicao para modo inativo.",
                    command.as_str()
                );
            }
        }
    }
}
