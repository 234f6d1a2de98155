use crate::UserType;

use std::str::FromStr;

#[test]
fn test_user_type_as_str() {
    assert_eq!(UserType::Advisor.as_str(), "advisor");
    assert_eq!(UserType::Investor.as_str(), "investor");
    assert_eq!(UserType::Startup.as_str(), "startup");
}

#[test]
fn test_user_type_from_str() {
    assert_eq!(UserType::from_str("advisor").unwrap(), UserType::Advisor);
    assert_eq!(UserType::from_str("investor").unwrap(), UserType::Investor);
    assert_eq!(UserType::from_str("startup").unwrap(), UserType::Startup);
    assert!(UserType::from_str("founder").is_err());
    assert!(UserType::from_str("").is_err());
}

#[test]
fn test_user_type_default_is_startup() {
    assert_eq!(UserType::default(), UserType::Startup);
}

#[test]
fn test_user_type_serializes_lowercase() {
    let json = serde_json::to_string(&UserType::Investor).unwrap();
    assert_eq!(json, "\"investor\"");
}
