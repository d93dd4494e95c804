//! Service calendar for determining when trips run.
//!
//! Implements the regular weekly schedule of GTFS calendar.txt. Exception
//! dates (calendar_dates.txt) are not consulted.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::identifiers::ServiceIdentifier;

/// Determines which days a transit service operates
#[derive(Clone, Debug)]
pub struct ServiceCalendar {
    pub service_id: ServiceIdentifier,

    // Validity window, inclusive on both ends
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekdays: WeekdayFlags,
}

/// Compact representation of which weekdays a service runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeekdayFlags {
    pub(crate) flags: u8,
}

impl WeekdayFlags {
    pub fn new() -> Self {
        Self { flags: 0 }
    }

    pub fn set(&mut self, weekday: Weekday) {
        self.flags |= 1 << weekday.number_from_monday();
    }

    pub fn unset(&mut self, weekday: Weekday) {
        self.flags &= !(1 << weekday.number_from_monday());
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        (self.flags & (1 << weekday.number_from_monday())) != 0
    }

    pub fn from_bools(mon: bool, tue: bool, wed: bool, thu: bool, fri: bool, sat: bool, sun: bool) -> Self {
        let mut flags = Self::new();
        if mon { flags.set(Weekday::Mon); }
        if tue { flags.set(Weekday::Tue); }
        if wed { flags.set(Weekday::Wed); }
        if thu { flags.set(Weekday::Thu); }
        if fri { flags.set(Weekday::Fri); }
        if sat { flags.set(Weekday::Sat); }
        if sun { flags.set(Weekday::Sun); }
        flags
    }

    /// Monday through Friday
    pub fn weekdays() -> Self {
        Self::from_bools(true, true, true, true, true, false, false)
    }
}

impl ServiceCalendar {
    pub fn new(
        service_id: impl Into<ServiceIdentifier>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekdays: WeekdayFlags,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            start_date,
            end_date,
            weekdays,
        }
    }

    /// Check if the service runs on a given date
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date || date > self.end_date {
            return false;
        }

        self.weekdays.contains(date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_weekday_flags() {
        let mut flags = WeekdayFlags::new();
        flags.set(Weekday::Mon);
        flags.set(Weekday::Wed);
        flags.set(Weekday::Fri);

        assert!(flags.contains(Weekday::Mon));
        assert!(!flags.contains(Weekday::Tue));
        assert!(flags.contains(Weekday::Wed));

        flags.unset(Weekday::Wed);
        assert!(!flags.contains(Weekday::Wed));
    }

    #[test]
    fn test_sunday_has_its_own_bit() {
        let flags = WeekdayFlags::from_bools(false, false, false, false, false, false, true);
        assert!(flags.contains(Weekday::Sun));
        assert!(!flags.contains(Weekday::Mon));
        assert!(!flags.contains(Weekday::Sat));
    }

    #[test]
    fn test_service_calendar() {
        let calendar = ServiceCalendar::new(
            "weekday",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            WeekdayFlags::weekdays(),
        );

        // Regular weekday
        assert!(calendar.runs_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())); // Tuesday

        // Weekend
        assert!(!calendar.runs_on(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())); // Saturday

        // Window bounds are inclusive
        assert!(calendar.runs_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())); // Monday
        assert!(calendar.runs_on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())); // Tuesday

        // Out of range
        assert!(!calendar.runs_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!calendar.runs_on(NaiveDate::from_ymd_opt(2023, 12, 29).unwrap()));
    }
}
