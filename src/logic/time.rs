// Time-related operations.
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Time, Weekday};

// Use these formats for formatting and parsing dates and times of day.
static ISO_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
static CLOCK_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

// JSON serialisation and deserialisation for ISO dates.
pub mod iso_date_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let s = super::date_to_string(*date).map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        super::string_to_date(&s).map_err(D::Error::custom)
    }

    // Same thing for optional dates.
    pub mod option {
        use serde::{de::Error, Deserialize, Deserializer, Serializer};
        use time::Date;

        pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
            match date {
                Some(d) => super::serialize(d, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
        where D: Deserializer<'de> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) => super::super::string_to_date(&s).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}

// JSON serialisation and deserialisation for "HH:MM" times of day.
pub mod clock_time_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::Time;

    pub fn serialize<S>(clock: &Time, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let s = super::clock_time_to_string(*clock).map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Time, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        super::string_to_clock_time(&s).map_err(D::Error::custom)
    }
}

// Convert a Date object to an ISO string.
pub fn date_to_string(date: Date) -> Result<String, time::error::Format> {
    date.format(&ISO_FORMAT)
}

// Convert an ISO string to Date object.
pub fn string_to_date(date: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date, ISO_FORMAT)
}

// Convert a time of day to "HH:MM".
pub fn clock_time_to_string(clock: Time) -> Result<String, time::error::Format> {
    clock.format(&CLOCK_FORMAT)
}

// Convert "HH:MM" to a time of day.
pub fn string_to_clock_time(clock: &str) -> Result<Time, time::error::Parse> {
    Time::parse(clock.trim(), CLOCK_FORMAT)
}

// Parse an English weekday name. Full names and three-letter abbreviations are accepted.
pub fn string_to_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return None,
    };

    return Some(weekday);
}

// The days of the week on which matches may be played.
// Indexed by days from Monday, so iteration order never depends on the input order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeekdaySet {
    days: [bool; 7],
}

impl WeekdaySet {
    pub fn build(weekdays: &[Weekday]) -> Self {
        let mut set = Self::default();
        for weekday in weekdays {
            set.days[weekday.number_days_from_monday() as usize] = true;
        }
        return set;
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.number_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.days.iter().any(|d| *d)
    }

    // Enabled days in Monday-first order.
    pub fn weekdays(&self) -> Vec<Weekday> {
        let mut weekday = Weekday::Monday;
        let mut weekdays = Vec::new();
        for enabled in self.days {
            if enabled { weekdays.push(weekday); }
            weekday = weekday.next();
        }
        return weekdays;
    }

    // Get the first enabled date on or after the given date.
    // None if the set is empty or the calendar runs out.
    pub fn first_enabled_from(&self, date: Date) -> Option<Date> {
        if self.is_empty() { return None; }

        let mut cursor = date;
        while !self.contains(cursor.weekday()) {
            cursor = cursor.next_day()?;
        }
        return Some(cursor);
    }

    // Get the first enabled date strictly after the given date.
    pub fn next_enabled_after(&self, date: Date) -> Option<Date> {
        self.first_enabled_from(date.next_day()?)
    }
}
