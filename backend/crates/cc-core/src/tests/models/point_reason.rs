use crate::PointReason;

use std::str::FromStr;

#[test]
fn test_point_reason_as_str() {
    assert_eq!(PointReason::WelcomeBonus.as_str(), "welcome_bonus");
}

#[test]
fn test_point_reason_from_str() {
    assert_eq!(
        PointReason::from_str("welcome_bonus").unwrap(),
        PointReason::WelcomeBonus
    );
    assert!(PointReason::from_str("daily_login").is_err());
}
