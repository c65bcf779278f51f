//! Month calendar computations
//!
//! Everything in here is pure: given a reference date (and a locale), this computes the cells of a traditional
//! 7-column month grid and the labels to display above it.
//!
//! The grid always has [`GRID_CELLS`] cells (6 weeks), whatever the month, so that a calendar view keeps the same height
//! when the user switches months.

pub mod month_grid;
pub use month_grid::{DayCell, MonthGrid};

use chrono::{DateTime, Datelike, Duration, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

pub const DAYS_PER_WEEK: usize = 7;
/// How many cells a month grid contains (6 weeks of 7 days)
pub const GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// Anything that falls on a calendar day.
///
/// Time-of-day (if any) is ignored. A `DateTime` is considered in its own timezone.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Whether two points in time fall on the same year, month and day
pub fn is_same_day<A: CalendarDay, B: CalendarDay>(a: A, b: B) -> bool {
    a.calendar_day() == b.calendar_day()
}


/// The language and week layout to display calendars with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarLocale {
    locale: Locale,
    first_weekday: Weekday,
}

impl CalendarLocale {
    pub fn new(locale: Locale, first_weekday: Weekday) -> Self {
        Self { locale, first_weekday }
    }

    pub fn locale(&self) -> Locale          { self.locale        }
    pub fn first_weekday(&self) -> Weekday  { self.first_weekday }
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self::new(Locale::en_US, crate::config::default_first_weekday())
    }
}


/// The seven days of a week, starting from `first_weekday`
pub fn ordered_weekdays(first_weekday: Weekday) -> Vec<Weekday> {
    std::iter::successors(Some(first_weekday), |day| Some(day.succ()))
        .take(DAYS_PER_WEEK)
        .collect()
}

/// Short weekday names (e.g. "Sun", "Mon"...) in the locale language, starting from the locale's first day of week
pub fn weekday_header_labels(locale: &CalendarLocale) -> Vec<String> {
    ordered_weekdays(locale.first_weekday())
        .into_iter()
        .map(|day| capitalize(&format_localized(any_date_on(day), "%a", locale.locale())))
        .collect()
}

/// The capitalized first letter of every weekday (e.g. "S", "M", "T"...), starting from the locale's first day of week
pub fn weekday_initials(locale: &CalendarLocale) -> Vec<String> {
    weekday_header_labels(locale)
        .into_iter()
        .map(|label| label.chars().next().map(|c| c.to_string()).unwrap_or_default())
        .collect()
}

/// The dates to display in a month grid.
///
/// This returns [`GRID_CELLS`] consecutive dates. The first one is the beginning of the week the 1st of the month of
/// `reference` belongs to, so that the grid starts with the trailing days of the previous month and ends with the leading
/// days of the next month. \
/// Callers tell whether a cell belongs to the displayed month by comparing its month with the month of `reference`.
///
/// Returns `None` when the grid would not fit in the range of representable dates (i.e. around `NaiveDate::MIN` or
/// `NaiveDate::MAX`).
pub fn month_grid_days(reference: NaiveDate, first_weekday: Weekday) -> Option<Vec<NaiveDate>> {
    let first = first_of_month(reference);
    let leading_days = days_from(first_weekday, first.weekday());
    let grid_start = first.checked_sub_signed(Duration::days(leading_days as i64))?;

    let days: Vec<NaiveDate> = grid_start.iter_days().take(GRID_CELLS).collect();
    if days.len() < GRID_CELLS {
        log::debug!("The grid of {} does not fit before the last representable date", first);
        return None;
    }
    Some(days)
}

/// The number of days in a month, or `None` if `month` is not in `1..=12`
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap(/* this cannot panic since every month has a first day */)
}

/// How many days from `from` (included) to the next `to` (excluded)
fn days_from(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7
}

/// A date that falls on the given weekday
fn any_date_on(weekday: Weekday) -> NaiveDate {
    // 2023-01-01 was a Sunday
    let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(/* this is a valid date */);
    sunday + Duration::days(weekday.num_days_from_sunday() as i64)
}

pub(crate) fn format_localized(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    let noon = date.and_hms_opt(12, 0, 0).unwrap(/* this cannot panic since 12:00:00 is a valid time */);
    Utc.from_utc_datetime(&noon)
        .format_localized(fmt, locale)
        .to_string()
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_ignores_time() {
        let morning = date(2025, 3, 15).and_hms_opt(0, 0, 1).unwrap();
        let evening = date(2025, 3, 15).and_hms_opt(23, 59, 59).unwrap();
        assert!(is_same_day(morning, evening));
        assert!(is_same_day(&morning, date(2025, 3, 15)));
        assert_eq!(is_same_day(evening, date(2025, 3, 16)), false);
        assert_eq!(is_same_day(date(2024, 3, 15), date(2025, 3, 15)), false);
    }

    #[test]
    fn same_day_uses_the_datetime_timezone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let late_utc = Utc.with_ymd_and_hms(2025, 3, 15, 20, 0, 0).unwrap();
        let in_tokyo = late_utc.with_timezone(&tz);
        assert!(is_same_day(late_utc, date(2025, 3, 15)));
        assert!(is_same_day(in_tokyo, date(2025, 3, 16)));
    }

    #[test]
    fn weekday_offsets() {
        assert_eq!(days_from(Weekday::Sun, Weekday::Sat), 6);
        assert_eq!(days_from(Weekday::Mon, Weekday::Sat), 5);
        assert_eq!(days_from(Weekday::Mon, Weekday::Sun), 6);
        assert_eq!(days_from(Weekday::Wed, Weekday::Wed), 0);
        assert_eq!(any_date_on(Weekday::Thu).weekday(), Weekday::Thu);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn grids_at_the_edges_of_the_date_range() {
        let first = first_of_month(NaiveDate::MIN);
        // No leading day is needed when the month starts on the first weekday
        let fitting = month_grid_days(first, first.weekday()).unwrap();
        assert_eq!(fitting.len(), GRID_CELLS);
        assert_eq!(fitting[0], first);
        assert_eq!(month_grid_days(NaiveDate::MIN, first.weekday().succ()), None);

        for weekday in ordered_weekdays(Weekday::Sun) {
            assert_eq!(month_grid_days(NaiveDate::MAX, weekday), None);
        }
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize("dim."), "Dim.");
        assert_eq!(capitalize("ßa"), "SSa");
        assert_eq!(capitalize(""), "");
    }
}
