use horology::calendar::*;

#[test]
fn test_is_leap_year_divisible_by_four() {
    assert!(is_leap_year(2012));
    assert!(is_leap_year(2024));
}

#[test]
fn test_is_leap_year_century_is_common() {
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
}

#[test]
fn test_is_leap_year_divisible_by_four_hundred() {
    assert!(is_leap_year(1600));
    assert!(is_leap_year(2000));
}

#[test]
fn test_is_leap_year_common_years() {
    assert!(!is_leap_year(2001));
    assert!(!is_leap_year(2015));
}

#[test]
fn test_is_leap_year_matches_gregorian_rule() {
    for year in 1582..2400 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "year {year}");
    }
}

#[test]
fn test_days_in_year() {
    assert_eq!(days_in_year(2023), 365);
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(1900), 365);
}

#[test]
fn test_days_in_month_february() {
    assert_eq!(days_in_month(2024, 2), Some(29)); // leap year
    assert_eq!(days_in_month(2023, 2), Some(28));
}

#[test]
fn test_days_in_month_fixed_months() {
    assert_eq!(days_in_month(2023, 1), Some(31));
    assert_eq!(days_in_month(2023, 4), Some(30));
    assert_eq!(days_in_month(2023, 12), Some(31));
}

#[test]
fn test_days_in_month_out_of_range() {
    assert_eq!(days_in_month(2023, 0), None);
    assert_eq!(days_in_month(2023, 13), None);
}
