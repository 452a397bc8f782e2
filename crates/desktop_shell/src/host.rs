//! Browser environment queries with deterministic native fallbacks, so the
//! rest of the shell can be exercised in host-side unit tests.

use window_core::WindowRect;

/// Returns the desktop viewport rect available to the window manager: the
/// browser window minus the reserved bottom dock band.
pub fn desktop_viewport(dock_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - dock_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - dock_height_px,
    }
}

/// Wall-clock snapshot shared by the dock clock and the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    /// Zero-padded `HH:MM`, 24-hour.
    pub fn hour_minute(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Long date line for the lock screen, e.g. `Thursday, January 1`.
    pub fn long_date(&self) -> String {
        format!("{}, {} {}", self.weekday_name(), self.month_name(), self.day)
    }

    fn weekday_name(&self) -> &'static str {
        match self.weekday % 7 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }

    fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> ClockSnapshot {
        ClockSnapshot {
            year: 2024,
            month: 3,
            day: 9,
            weekday: 6,
            hour: 7,
            minute: 5,
            second: 30,
        }
    }

    #[test]
    fn clock_renders_zero_padded_24_hour_time() {
        assert_eq!(snapshot().hour_minute(), "07:05");
    }

    #[test]
    fn lock_screen_date_line_spells_out_the_day() {
        assert_eq!(snapshot().long_date(), "Saturday, March 9");
    }
}
