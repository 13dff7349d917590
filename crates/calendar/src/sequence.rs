//! Hour sequence generation for the annual hourly grid.

use crate::hour::{HOURS_PER_YEAR, HourOfYear};

/// Generates every hour of the year in order, from hour 0 (Jan 1, 00:00)
/// to hour 8759 (Dec 31, 23:00).
pub fn hour_sequence() -> Vec<HourOfYear> {
    (0..HOURS_PER_YEAR)
        .filter_map(|i| HourOfYear::new(i).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_year() {
        let hours = hour_sequence();
        assert_eq!(hours.len(), HOURS_PER_YEAR);
        assert_eq!(hours[0].index(), 0);
        assert_eq!(hours[HOURS_PER_YEAR - 1].index(), HOURS_PER_YEAR - 1);
    }

    #[test]
    fn contiguous() {
        let hours = hour_sequence();
        for w in hours.windows(2) {
            assert_eq!(w[1].index(), w[0].index() + 1);
        }
    }

    #[test]
    fn day_rollover() {
        let hours = hour_sequence();
        assert_eq!(hours[23].doy().get(), 1);
        assert_eq!(hours[24].doy().get(), 2);
        assert_eq!(hours[24].hour(), 0);
    }

    #[test]
    fn year_rollover_absent() {
        let hours = hour_sequence();
        let last = hours.last().unwrap();
        assert_eq!(last.month(), 12);
        assert_eq!(last.doy().day(), 31);
        assert_eq!(last.hour(), 23);
    }
}
