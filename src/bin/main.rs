#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Delay;
use esp_hal::{
    Config,
    clock::CpuClock,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    timer::systimer::SystemTimer,
};
use panic_rtt_target as _;
use pulse_trigger::{PulseConfig, PulseController};

/// The trigger input floats low so an unconnected sensor never fires the output
const INPUT_PULL: Pull = Pull::Down;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    #[cfg(all(feature = "rtt", feature = "defmt"))]
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    // Trigger on GPIO4, pulse out on GPIO5
    let trigger = Input::new(peripherals.GPIO4, InputConfig::default().with_pull(INPUT_PULL));
    let pulse = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());

    let mut controller = PulseController::new(trigger, pulse, Delay, PulseConfig::default())
        .expect("Failed to initialise pulse controller");

    let config = controller.config();
    info!(
        "MAIN: Starting pulse loop ({} ms pulse, {} ms debounce, {} ms per trigger)",
        config.pulse_ms,
        config.debounce_ms,
        config.cycle_ms()
    );
    // esp-hal GPIO errors are Infallible, so this is unreachable on the ESP32-C3
    let Err(e) = controller.run().await;
    panic!("MAIN: Pulse controller stopped: {:?}", e);
}
