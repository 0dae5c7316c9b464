//! Wall clock for the browser and the server render.
//!
//! `std::time::SystemTime::now` panics on `wasm32-unknown-unknown`, so the
//! hydrated build reads `Date.now()` instead.

use buildsim::Clock;
use time::{Date, OffsetDateTime};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let now = js_sys::Date::now() as u64;
            now
        }
        #[cfg(not(feature = "hydrate"))]
        {
            buildsim::SystemClock.now_ms()
        }
    }
}

/// Today's UTC calendar date.
pub fn today() -> Date {
    let ms = i128::from(BrowserClock.now_ms());
    OffsetDateTime::from_unix_timestamp_nanos(ms * 1_000_000)
        .map_or(OffsetDateTime::UNIX_EPOCH.date(), OffsetDateTime::date)
}
