use orrery_engine::Clock;

/// Wall-clock time from the browser, in seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateClock;

impl Clock for DateClock {
    fn now(&self) -> f64 {
        js_sys::Date::now() / 1000.0
    }
}
