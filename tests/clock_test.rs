use std::f64::consts::{FRAC_PI_2, PI};

use chrono::{DateTime, TimeZone, Utc};
use horology::clock::*;

const EPSILON: f64 = 1e-9;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, hour, min, 0).unwrap()
}

#[test]
fn test_noon_hands_overlap() {
    assert!(clock_angle(at(12, 0)).abs() < EPSILON);
}

#[test]
fn test_three_o_clock() {
    assert!((clock_angle(at(3, 0)) - FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn test_six_o_clock() {
    assert!((clock_angle(at(6, 0)) - PI).abs() < EPSILON);
}

#[test]
fn test_nine_o_clock_is_not_reflex() {
    // 270 raw degrees folds back to the 90-degree side
    assert!((clock_angle(at(9, 0)) - FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn test_half_past_three() {
    // hour hand at 105, minute hand at 180
    assert!((clock_angle(at(3, 30)) - 75.0_f64.to_radians()).abs() < EPSILON);
}

#[test]
fn test_angle_always_in_range() {
    for hour in 0..24 {
        for min in 0..60 {
            let angle = clock_angle(at(hour, min));
            assert!(
                (0.0..=PI + EPSILON).contains(&angle),
                "angle out of range at {hour:02}:{min:02}"
            );
        }
    }
}

#[test]
fn test_mirror_hours_are_symmetric() {
    assert!((clock_angle(at(3, 0)) - clock_angle(at(9, 0))).abs() < EPSILON);
    assert!((clock_angle(at(1, 0)) - clock_angle(at(11, 0))).abs() < EPSILON);
}

#[test]
fn test_twelve_hour_period() {
    assert!((clock_angle(at(2, 30)) - clock_angle(at(14, 30))).abs() < EPSILON);
}

#[test]
fn test_offset_shifts_wall_clock() {
    // noon UTC read three hours east shows 15:00
    let angle = clock_angle_with_offset(at(12, 0), 180);
    assert!((angle - FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn test_negative_offset() {
    // midnight UTC read six hours west shows 18:00
    let angle = clock_angle_with_offset(at(0, 0), -360);
    assert!((angle - PI).abs() < EPSILON);
}

#[test]
fn test_zero_offset_matches_default() {
    let instant = at(7, 42);
    assert_eq!(clock_angle(instant), clock_angle_with_offset(instant, 0));
}

#[test]
fn test_hand_angle_direct() {
    // 5:20 - hour hand at 160, minute hand at 120
    assert!((hand_angle(5, 20) - 40.0_f64.to_radians()).abs() < EPSILON);
}

#[test]
fn test_hand_angle_wraps_hour_field() {
    assert_eq!(hand_angle(15, 0), hand_angle(3, 0));
}
