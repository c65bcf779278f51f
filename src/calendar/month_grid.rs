use chrono::{Datelike, Months, NaiveDate};

use super::{CalendarDay, CalendarLocale, DAYS_PER_WEEK};

/// A cell of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    date: NaiveDate,
    /// `false` for the padding days that belong to the previous or the next month
    in_month: bool,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate { self.date     }
    pub fn in_month(&self) -> bool  { self.in_month }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_today<D: CalendarDay>(&self, today: D) -> bool {
        super::is_same_day(self.date, today)
    }
}


/// The month a calendar view currently displays
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    first_of_month: NaiveDate,
    locale: CalendarLocale,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// The grid of the month `reference` belongs to, or `None` if this grid does not fit in the range of representable dates
    pub fn new(reference: NaiveDate, locale: &CalendarLocale) -> Option<Self> {
        let first_of_month = super::first_of_month(reference);
        let cells = super::month_grid_days(first_of_month, locale.first_weekday())?
            .into_iter()
            .map(|date| DayCell {
                date,
                in_month: date.year() == first_of_month.year() && date.month() == first_of_month.month(),
            })
            .collect();

        Some(Self { first_of_month, locale: *locale, cells })
    }

    pub fn first_of_month(&self) -> NaiveDate { self.first_of_month }
    pub fn year(&self) -> i32 { self.first_of_month.year() }
    pub fn month(&self) -> u32 { self.first_of_month.month() }
    pub fn locale(&self) -> &CalendarLocale { &self.locale }

    /// E.g. "March 2025"
    pub fn title(&self) -> String {
        super::capitalize(&super::format_localized(self.first_of_month, "%B %Y", self.locale.locale()))
    }

    pub fn header_labels(&self) -> Vec<String> {
        super::weekday_header_labels(&self.locale)
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The rows of the grid, 7 days each
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The grid of the following month, or `None` past the last representable date
    pub fn next(&self) -> Option<Self> {
        self.first_of_month
            .checked_add_months(Months::new(1))
            .and_then(|first| Self::new(first, &self.locale))
    }

    /// The grid of the preceding month, or `None` before the first representable date
    pub fn previous(&self) -> Option<Self> {
        self.first_of_month
            .checked_sub_months(Months::new(1))
            .and_then(|first| Self::new(first, &self.locale))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Locale, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn march_2025() {
        let grid = MonthGrid::new(date(2025, 3, 20), &CalendarLocale::new(Locale::en_US, Weekday::Sun)).unwrap();
        assert_eq!(grid.title(), "March 2025");
        assert_eq!(grid.first_of_month(), date(2025, 3, 1));
        assert_eq!(grid.weeks().count(), 6);

        let in_month: Vec<u32> = grid.cells().iter().filter(|c| c.in_month()).map(|c| c.day()).collect();
        assert_eq!(in_month, (1..=31).collect::<Vec<u32>>());

        // Feb 23 - Feb 28, then March 1 on the Saturday
        assert_eq!(grid.cells()[0].date(), date(2025, 2, 23));
        assert_eq!(grid.cells()[6].date(), date(2025, 3, 1));
        assert_eq!(grid.cells()[36].date(), date(2025, 3, 31));
        assert_eq!(grid.cells()[37].date(), date(2025, 4, 1));
        assert_eq!(grid.cells()[41].in_month(), false);
    }

    #[test]
    fn navigation_across_years() {
        let locale = CalendarLocale::new(Locale::en_US, Weekday::Mon);
        let december = MonthGrid::new(date(2024, 12, 31), &locale).unwrap();
        let january = december.next().unwrap();
        assert_eq!((january.year(), january.month()), (2025, 1));
        assert_eq!(january.locale().first_weekday(), Weekday::Mon);

        let back = january.previous().unwrap();
        assert_eq!(back, december);
    }

    #[test]
    fn no_grid_past_the_date_range() {
        let first = NaiveDate::MIN;
        let locale = CalendarLocale::new(Locale::en_US, first.weekday());
        let earliest = MonthGrid::new(first, &locale).unwrap();
        assert_eq!(earliest.previous(), None);

        // One more leading day would be needed before the first representable date
        let shifted = CalendarLocale::new(Locale::en_US, first.weekday().succ());
        assert_eq!(MonthGrid::new(first, &shifted), None);
        let second_month = MonthGrid::new(date(first.year(), 2, 1), &shifted).unwrap();
        assert_eq!(second_month.previous(), None);

        let last = NaiveDate::MAX;
        assert_eq!(MonthGrid::new(last, &locale), None);
        let november = MonthGrid::new(date(last.year(), 11, 1), &CalendarLocale::new(Locale::en_US, Weekday::Sun)).unwrap();
        assert_eq!(november.next(), None);
    }

    #[test]
    fn today_highlight() {
        let grid = MonthGrid::new(date(2025, 3, 1), &CalendarLocale::new(Locale::en_US, Weekday::Sun)).unwrap();
        let today = date(2025, 3, 15).and_hms_opt(18, 45, 0).unwrap();
        let highlighted: Vec<&DayCell> = grid.cells().iter().filter(|c| c.is_today(today)).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].date(), date(2025, 3, 15));
    }

    #[test]
    fn localized_title() {
        let grid = MonthGrid::new(date(2025, 3, 1), &CalendarLocale::new(Locale::fr_FR, Weekday::Mon)).unwrap();
        assert_eq!(grid.title(), "Mars 2025");
    }
}
