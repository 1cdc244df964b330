use chrono::{Datelike, Local};

/// How many years past the current one can be predicted.
pub const YEARS_AHEAD: i32 = 2;

/// The fixed list of years offered by the year picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOptions(Vec<String>);

impl YearOptions {
    /// `start` followed by the next [`YEARS_AHEAD`] years.
    pub fn starting_at(start: i32) -> Self {
        Self((start..=start + YEARS_AHEAD).map(|year| year.to_string()).collect())
    }

    /// Options starting at the current calendar year of the system clock.
    pub fn from_clock() -> Self {
        Self::starting_at(Local::now().year())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, year: &str) -> bool {
        self.0.iter().any(|option| option == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_consecutive_years() {
        let years = YearOptions::starting_at(2025);
        assert_eq!(years.as_slice(), ["2025", "2026", "2027"]);
    }

    #[test]
    fn test_from_clock_starts_at_current_year() {
        let current = Local::now().year();
        let years = YearOptions::from_clock();

        assert_eq!(years.as_slice().len(), 3);
        for (offset, year) in years.as_slice().iter().enumerate() {
            assert_eq!(year.parse::<i32>().unwrap(), current + offset as i32);
        }
    }

    #[test]
    fn test_contains() {
        let years = YearOptions::starting_at(2030);
        assert!(years.contains("2032"));
        assert!(!years.contains("2033"));
        assert!(!years.contains(""));
    }
}
