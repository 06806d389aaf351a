//! BigTime - Digital Watch Face Firmware
//!
//! Host adapter for RP2040 boards: reads the RTC, battery and BLE link
//! state, runs the board-agnostic watch face model and streams its glyph
//! selections to an external renderer over UART.

#![no_std]
#![no_main]

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::rtc::Rtc;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::channels::{BATTERY_STATE, LINK_UP};
use crate::host::FirmwareHost;
use crate::tasks::BatterySense;

mod channels;
mod config;
mod display;
mod host;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("BigTime firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let watch_config = config::load_config();

    // RTC has no backup supply; start from the build time
    let mut rtc = Rtc::new(p.RTC);
    let seed = tasks::build_datetime();
    info!(
        "Seeding RTC to {}-{:02}-{:02} {:02}:{:02}:{:02}",
        seed.year, seed.month, seed.day, seed.hour, seed.minute, seed.second
    );
    if let Err(e) = rtc.set_datetime(seed) {
        error!("Failed to seed RTC: {:?}", Debug2Format(&e));
    }

    // Renderer link (115200 baud default)
    let uart_config = UartConfig::default();
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for renderer link");

    // Battery sensing: VSYS/3 on GPIO29, VBUS on GPIO24, charger CHRG on GPIO22
    let mut battery = BatterySense {
        adc: Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default()),
        vsys: Channel::new_pin(p.PIN_29, Pull::None),
        vbus: Input::new(p.PIN_24, Pull::None),
        chrg: Input::new(p.PIN_22, Pull::Up),
    };
    if let Some(reading) = battery.sample().await {
        BATTERY_STATE.lock(|state| state.set(reading));
        info!("Battery at {}%", reading.charge_percent);
    }

    // BLE module STATE output on GPIO21
    let link_pin = Input::new(p.PIN_21, Pull::Down);
    LINK_UP.store(link_pin.is_high(), Ordering::Relaxed);

    let host = FirmwareHost { prefers_24h: true };

    spawner.spawn(tasks::tick_task(rtc)).unwrap();
    spawner.spawn(tasks::battery_task(battery)).unwrap();
    spawner.spawn(tasks::link_task(link_pin)).unwrap();
    spawner.spawn(tasks::display_rx_task(rx)).unwrap();
    spawner.spawn(tasks::display_tx_task(tx)).unwrap();
    spawner.spawn(tasks::face_task(watch_config, host)).unwrap();

    info!("All tasks spawned, firmware running");
}
