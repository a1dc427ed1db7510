//! Remaining-time math for auction countdowns.
//!
//! DESIGN
//! ======
//! Formatting is a pure function of `(end_ms, now_ms)` so the ticking
//! component only has to sample the clock and store the string. Once the
//! distance goes negative both variants clamp to `"Ended"`.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Tick period for countdown components.
pub const TICK_MS: u32 = 1_000;

/// Label shown once the end time has passed.
pub const ENDED: &str = "Ended";

/// Which layout a countdown renders with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountdownStyle {
    /// Two largest units, used on product cards.
    #[default]
    Compact,
    /// Three units with seconds below a day, used on the product page.
    Detailed,
}

/// Non-negative distance broken into whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Decompose `distance_ms`. Returns `None` for negative distances.
    pub fn from_distance(distance_ms: i64) -> Option<Self> {
        if distance_ms < 0 {
            return None;
        }
        Some(Self {
            days: distance_ms / MS_PER_DAY,
            hours: (distance_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    fn compact(self) -> String {
        if self.days > 0 {
            format!("{}d {}h", self.days, self.hours)
        } else if self.hours > 0 {
            format!("{}h {}m", self.hours, self.minutes)
        } else {
            format!("{}m", self.minutes)
        }
    }

    fn detailed(self) -> String {
        if self.days > 0 {
            format!("{}d {}h {}m", self.days, self.hours, self.minutes)
        } else if self.hours > 0 {
            format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
        } else {
            format!("{}m {}s", self.minutes, self.seconds)
        }
    }
}

/// Render the time left until `end_ms` as seen at `now_ms`.
pub fn format_remaining(end_ms: i64, now_ms: i64, style: CountdownStyle) -> String {
    match Remaining::from_distance(end_ms - now_ms) {
        None => ENDED.to_owned(),
        Some(remaining) => match style {
            CountdownStyle::Compact => remaining.compact(),
            CountdownStyle::Detailed => remaining.detailed(),
        },
    }
}

/// Coarse elapsed time for "sent 2h ago" style labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Age {
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl Age {
    /// Largest whole unit elapsed between `then_ms` and `now_ms`. Future
    /// timestamps read as zero minutes.
    pub fn since(then_ms: i64, now_ms: i64) -> Self {
        let elapsed = (now_ms - then_ms).max(0);
        if elapsed < MS_PER_HOUR {
            Self::Minutes(elapsed / MS_PER_MINUTE)
        } else if elapsed < MS_PER_DAY {
            Self::Hours(elapsed / MS_PER_HOUR)
        } else {
            Self::Days(elapsed / MS_PER_DAY)
        }
    }

    pub fn count(self) -> i64 {
        match self {
            Self::Minutes(n) | Self::Hours(n) | Self::Days(n) => n,
        }
    }

    /// Translation key; the entry carries an `{n}` placeholder.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Minutes(_) => "time.minutesAgo",
            Self::Hours(_) => "time.hoursAgo",
            Self::Days(_) => "time.daysAgo",
        }
    }
}

/// True once `format_remaining` would print `ENDED` for every later `now_ms`.
pub fn has_ended(end_ms: i64, now_ms: i64) -> bool {
    end_ms < now_ms
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as i64)
    }
}
