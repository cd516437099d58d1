//! Date-range matching

use super::sign::SignRecord;
use super::value_objects::CalendarDate;

/// Whether `date` falls inside the record's range
///
/// A range inside one month needs the month to match and the day to sit
/// between both ends. A range over two months (including December into
/// January) matches the tail of the start month or the head of the end month.
pub fn contains(record: &SignRecord, date: CalendarDate) -> bool {
    let start = record.range_start;
    let end = record.range_end;

    if !record.spans_months() {
        date.month == start.month && (start.day..=end.day).contains(&date.day)
    } else {
        (date.month == start.month && date.day >= start.day)
            || (date.month == end.month && date.day <= end.day)
    }
}

/// First record, in the given order, whose range contains `date`
pub fn match_sign(date: CalendarDate, records: &[SignRecord]) -> Option<&SignRecord> {
    records.iter().find(|record| contains(record, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::value_objects::DayMonth;

    fn sign(name: &str, start: &str, end: &str) -> SignRecord {
        SignRecord::new(
            name,
            "*",
            start.parse::<DayMonth>().unwrap(),
            end.parse::<DayMonth>().unwrap(),
            format!("{name} description"),
        )
    }

    fn zodiac() -> Vec<SignRecord> {
        vec![
            sign("Áries", "21/03", "19/04"),
            sign("Touro", "20/04", "20/05"),
            sign("Gêmeos", "21/05", "20/06"),
            sign("Câncer", "21/06", "22/07"),
            sign("Leão", "23/07", "22/08"),
            sign("Virgem", "23/08", "22/09"),
            sign("Libra", "23/09", "22/10"),
            sign("Escorpião", "23/10", "21/11"),
            sign("Sagitário", "22/11", "21/12"),
            sign("Capricórnio", "22/12", "19/01"),
            sign("Aquário", "20/01", "18/02"),
            sign("Peixes", "19/02", "20/03"),
        ]
    }

    fn name_for(day: u32, month: u32) -> Option<String> {
        let catalog = zodiac();
        match_sign(CalendarDate::new(day, month), &catalog).map(|s| s.name.clone())
    }

    #[test]
    fn test_wraparound_december_side() {
        assert_eq!(name_for(25, 12).as_deref(), Some("Capricórnio"));
        assert_eq!(name_for(22, 12).as_deref(), Some("Capricórnio"));
        assert_eq!(name_for(31, 12).as_deref(), Some("Capricórnio"));
    }

    #[test]
    fn test_wraparound_january_side() {
        assert_eq!(name_for(1, 1).as_deref(), Some("Capricórnio"));
        assert_eq!(name_for(19, 1).as_deref(), Some("Capricórnio"));
        assert_eq!(name_for(20, 1).as_deref(), Some("Aquário"));
    }

    #[test]
    fn test_boundaries_between_adjacent_signs() {
        assert_eq!(name_for(21, 12).as_deref(), Some("Sagitário"));
        assert_eq!(name_for(20, 3).as_deref(), Some("Peixes"));
        assert_eq!(name_for(21, 3).as_deref(), Some("Áries"));
        assert_eq!(name_for(20, 6).as_deref(), Some("Gêmeos"));
        assert_eq!(name_for(21, 6).as_deref(), Some("Câncer"));
    }

    #[test]
    fn test_first_of_june_uses_two_month_rule() {
        assert_eq!(name_for(1, 6).as_deref(), Some("Gêmeos"));
    }

    #[test]
    fn test_every_day_of_the_year_has_exactly_one_sign() {
        let catalog = zodiac();
        let days_in_month = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in days_in_month.iter().enumerate() {
            let month = i as u32 + 1;
            for day in 1..=*days {
                let date = CalendarDate::new(day, month);
                let hits = catalog.iter().filter(|r| contains(r, date)).count();
                assert_eq!(hits, 1, "{day}/{month}");
            }
        }
    }

    #[test]
    fn test_same_month_range() {
        let record = sign("Quinzena", "01/06", "15/06");
        assert!(contains(&record, CalendarDate::new(1, 6)));
        assert!(contains(&record, CalendarDate::new(15, 6)));
        assert!(!contains(&record, CalendarDate::new(16, 6)));
        assert!(!contains(&record, CalendarDate::new(10, 7)));
    }

    #[test]
    fn test_same_month_range_does_not_leak_into_other_months() {
        let catalog = vec![sign("Quinzena", "01/06", "15/06")];
        assert!(match_sign(CalendarDate::new(10, 5), &catalog).is_none());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let catalog = vec![sign("Primeiro", "01/05", "31/05"), sign("Segundo", "10/05", "20/05")];
        let found = match_sign(CalendarDate::new(15, 5), &catalog).unwrap();
        assert_eq!(found.name, "Primeiro");
    }

    #[test]
    fn test_no_match() {
        let catalog = vec![sign("Áries", "21/03", "19/04")];
        assert!(match_sign(CalendarDate::new(25, 12), &catalog).is_none());
        assert!(match_sign(CalendarDate::new(1, 1), &[]).is_none());
    }
}
