//! Tick task for wall-clock updates
//!
//! Reads the RP2040 RTC once per second and hands the breakdown to the
//! face task.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_time::{Duration, Ticker};

use bigtime_core::clock::TimeReading;

use crate::channels::TICK;

mod build_time {
    include!(concat!(env!("OUT_DIR"), "/build_time.rs"));
}

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Time the firmware was built, used to seed the RTC at power-on
pub fn build_datetime() -> DateTime {
    DateTime {
        year: build_time::BUILD_YEAR,
        month: build_time::BUILD_MONTH,
        day: build_time::BUILD_DAY,
        day_of_week: day_of_week(build_time::BUILD_WEEKDAY),
        hour: build_time::BUILD_HOUR,
        minute: build_time::BUILD_MINUTE,
        second: build_time::BUILD_SECOND,
    }
}

/// Days since Sunday to the RTC weekday
fn day_of_week(days_from_sunday: u8) -> DayOfWeek {
    match days_from_sunday % 7 {
        0 => DayOfWeek::Sunday,
        1 => DayOfWeek::Monday,
        2 => DayOfWeek::Tuesday,
        3 => DayOfWeek::Wednesday,
        4 => DayOfWeek::Thursday,
        5 => DayOfWeek::Friday,
        _ => DayOfWeek::Saturday,
    }
}

/// RTC reading to the face's time breakdown (month 0-based, Sunday = 0)
fn time_reading(now: &DateTime) -> TimeReading {
    TimeReading::hms(now.hour, now.minute, now.second).with_date(
        now.year,
        now.month.saturating_sub(1),
        now.day,
        now.day_of_week as u8,
    )
}

/// Tick task - publishes the RTC time every second
#[embassy_executor::task]
pub async fn tick_task(rtc: Rtc<'static, RTC>) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        match rtc.now() {
            Ok(now) => {
                trace!("Tick {:02}:{:02}:{:02}", now.hour, now.minute, now.second);
                TICK.signal(time_reading(&now));
            }
            Err(e) => {
                warn!("RTC read failed: {:?}", Debug2Format(&e));
            }
        }
    }
}
