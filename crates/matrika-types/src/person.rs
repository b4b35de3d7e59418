//! Person and address records plus birth-date arithmetic.
//!
//! A [`Person`] always carries its [`Address`]: the reference is mandatory
//! in the schema and the query layer fetches it eagerly with a join, so no
//! lazily-resolved handle exists anywhere in the application.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A place where one or more persons live.
///
/// Owned independently of [`Person`]; the registry only reads addresses,
/// it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Storage-generated surrogate key.
    pub id: i64,
    /// Street and house number.
    pub street: String,
    /// Municipality name, matched exactly by the municipality filter.
    pub municipality: String,
    /// Postal code.
    pub postal_code: String,
}

/// An individual in the registry, linked to exactly one [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Storage-generated surrogate key.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Surname, used by the prefix filter and the default sort order.
    pub last_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// The linked address, fetched eagerly by every listing query.
    pub address: Address,
}

/// The latest birth date a person may have to be at least `years` old on
/// `today`.
///
/// Subtracts a whole number of calendar years. A `today` of February 29
/// in a non-leap target year clamps to February 28, matching the usual
/// legal convention for birthday arithmetic.
pub fn latest_birth_date_for_age(today: NaiveDate, years: u32) -> NaiveDate {
    let Some(year) = today
        .year()
        .checked_sub(i32::try_from(years).unwrap_or(i32::MAX))
    else {
        return NaiveDate::MIN;
    };
    today.with_year(year).unwrap_or_else(|| {
        // Only Feb 29 can fail to exist in the target year.
        NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(NaiveDate::MIN)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_year_subtraction() {
        let cutoff = latest_birth_date_for_age(date(2026, 8, 24), 18);
        assert_eq!(cutoff, date(2008, 8, 24));
    }

    #[test]
    fn zero_years_is_today() {
        let today = date(2026, 8, 24);
        assert_eq!(latest_birth_date_for_age(today, 0), today);
    }

    #[test]
    fn leap_day_clamps_to_feb_28() {
        let cutoff = latest_birth_date_for_age(date(2020, 2, 29), 1);
        assert_eq!(cutoff, date(2019, 2, 28));
    }

    #[test]
    fn leap_day_to_leap_year_stays_feb_29() {
        let cutoff = latest_birth_date_for_age(date(2020, 2, 29), 4);
        assert_eq!(cutoff, date(2016, 2, 29));
    }

    #[test]
    fn exact_birthday_is_included_by_lte_comparison() {
        // A person born exactly 18 years before today satisfies
        // birth_date <= cutoff; one born a day later does not.
        let cutoff = latest_birth_date_for_age(date(2026, 8, 24), 18);
        assert!(date(2008, 8, 24) <= cutoff);
        assert!(date(2008, 8, 25) > cutoff);
    }

    #[test]
    fn person_serializes_with_nested_address() {
        let person = Person {
            id: 1,
            first_name: "Jana".to_owned(),
            last_name: "Nováková".to_owned(),
            birth_date: date(1990, 5, 1),
            address: Address {
                id: 2,
                street: "Dlouhá 12".to_owned(),
                municipality: "Praha".to_owned(),
                postal_code: "110 00".to_owned(),
            },
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["last_name"], "Nováková");
        assert_eq!(json["birth_date"], "1990-05-01");
        assert_eq!(json["address"]["municipality"], "Praha");
    }
}
