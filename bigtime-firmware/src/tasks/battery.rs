//! Battery monitoring task
//!
//! Samples VSYS through the on-board /3 divider, the VBUS sense pin and the
//! charger's CHRG output once per second.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use bigtime_core::battery::{percent_from_millivolts, BatteryReading};
use bigtime_core::WatchEvent;

use crate::channels::{BATTERY_STATE, EVENT_CHANNEL};

/// Sample interval in milliseconds
const SAMPLE_INTERVAL_MS: u64 = 1000;

/// ADC reference voltage in millivolts
const ADC_REF_MV: u32 = 3300;

/// 12-bit ADC full scale
const ADC_MAX: u32 = 4096;

/// VSYS divider ratio on GPIO29
const VSYS_DIVIDER: u32 = 3;

/// Battery sensing peripherals
pub struct BatterySense {
    pub adc: Adc<'static, Async>,
    pub vsys: Channel<'static>,
    /// High while external power is present
    pub vbus: Input<'static>,
    /// Charger status output, low while charging
    pub chrg: Input<'static>,
}

impl BatterySense {
    /// Take one reading, or `None` if the ADC conversion failed
    pub async fn sample(&mut self) -> Option<BatteryReading> {
        let raw = match self.adc.read(&mut self.vsys).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Battery ADC read failed: {:?}", Debug2Format(&e));
                return None;
            }
        };

        let millivolts = (raw as u32 * ADC_REF_MV * VSYS_DIVIDER / ADC_MAX) as u16;
        let is_plugged = self.vbus.is_high();

        Some(BatteryReading {
            charge_percent: percent_from_millivolts(millivolts),
            is_plugged,
            is_charging: is_plugged && self.chrg.is_low(),
        })
    }
}

/// Battery task - publishes readings and queues an event on change
#[embassy_executor::task]
pub async fn battery_task(mut sense: BatterySense) {
    info!("Battery task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut last = BATTERY_STATE.lock(|state| state.get());

    loop {
        ticker.next().await;

        let Some(reading) = sense.sample().await else {
            continue;
        };

        BATTERY_STATE.lock(|state| state.set(reading));

        if reading != last {
            debug!(
                "Battery {}% plugged={} charging={}",
                reading.charge_percent, reading.is_plugged, reading.is_charging
            );
            if EVENT_CHANNEL.try_send(WatchEvent::Battery(reading)).is_err() {
                warn!("Event channel full, dropping battery event");
            }
            last = reading;
        }
    }
}
