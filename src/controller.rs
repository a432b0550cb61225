use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::{DEBOUNCE_MS, PULSE_MS};

/// Timing for one pulse-and-debounce cycle, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseConfig {
    /// How long the output is held high once the input reads high
    pub pulse_ms: u32,
    /// Hold-off after the output returns low, during which the input is not sampled
    pub debounce_ms: u32,
}

impl PulseConfig {
    pub const fn new() -> Self {
        Self {
            pulse_ms: PULSE_MS,
            debounce_ms: DEBOUNCE_MS,
        }
    }

    pub const fn with_pulse_ms(mut self, pulse_ms: u32) -> Self {
        self.pulse_ms = pulse_ms;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Time the controller is busy after a trigger, before the input is read again
    pub const fn cycle_ms(&self) -> u32 {
        self.pulse_ms.saturating_add(self.debounce_ms)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A pin operation failed. Carries the HAL error of whichever pin reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I, O> {
    Input(I),
    Output(O),
}

/// Error type of a controller built from input pin `I` and output pin `O`.
pub type PinError<I, O> = Error<<I as ErrorType>::Error, <O as ErrorType>::Error>;

/// What a single poll of the input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Input was low, nothing happened and no time was spent waiting
    Idle,
    /// Input was high, a full pulse and debounce cycle has completed
    Pulsed,
}

/// Drives `output` high for a fixed time whenever `input` reads high.
///
/// The controller owns both pins and the delay provider for its whole lifetime. The output is
/// forced low on construction and is only ever high while a pulse is being serviced.
pub struct PulseController<I, O, D> {
    input: I,
    output: O,
    delay: D,
    config: PulseConfig,
}

impl<I, O, D> PulseController<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the pins and put the output into its inactive (low) state.
    ///
    /// # Parameters
    /// * `input` - Externally driven trigger line
    /// * `output` - Line the pulse is emitted on
    /// * `delay` - Timer backed delay used for the pulse width and the debounce hold-off
    /// * `config` - Pulse and debounce timing
    pub fn new(
        input: I,
        mut output: O,
        delay: D,
        config: PulseConfig,
    ) -> Result<Self, PinError<I, O>> {
        output.set_low().map_err(Error::Output)?;
        Ok(Self {
            input,
            output,
            delay,
            config,
        })
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Sample the input once. A high level runs one complete pulse and debounce cycle before
    /// returning; a low level returns straight away.
    pub async fn poll(&mut self) -> Result<Outcome, PinError<I, O>> {
        if !self.input.is_high().map_err(Error::Input)? {
            return Ok(Outcome::Idle);
        }
        self.pulse().await?;
        Ok(Outcome::Pulsed)
    }

    async fn pulse(&mut self) -> Result<(), PinError<I, O>> {
        debug!("PULSE: Input high, pulsing for {} ms", self.config.pulse_ms);
        self.output.set_high().map_err(Error::Output)?;
        self.delay.delay_ms(self.config.pulse_ms).await;
        self.output.set_low().map_err(Error::Output)?;
        trace!(
            "PULSE: Output low, ignoring input for {} ms",
            self.config.debounce_ms
        );
        self.delay.delay_ms(self.config.debounce_ms).await;
        Ok(())
    }

    /// Poll forever. Low reads are retried immediately, so this only returns if a pin fails.
    pub async fn run(&mut self) -> Result<Infallible, PinError<I, O>> {
        info!(
            "PULSE: Polling input ({} ms pulse, {} ms debounce)",
            self.config.pulse_ms, self.config.debounce_ms
        );
        loop {
            if let Err(e) = self.poll().await {
                error!("PULSE: Pin access failed, stopping");
                return Err(e);
            }
        }
    }

    /// Give the pins and delay back, e.g. to reconfigure them.
    pub fn release(self) -> (I, O, D) {
        (self.input, self.output, self.delay)
    }
}
