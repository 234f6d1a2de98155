use crate::{Identity, Session, SessionStatus, UserProfile};

use std::str::FromStr;

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_default_session_then_authenticating_and_empty() {
    let session = Session::default();

    assert_that!(session.status(), eq(SessionStatus::Authenticating));
    assert_that!(session.identity(), none());
    assert_that!(session.profile(), none());
    assert_that!(session.error_message(), none());
    assert!(session.is_loading());
}

#[test]
fn given_authenticated_session_then_identity_and_profile_present() {
    let identity = Identity::new("u1");
    let profile = UserProfile::from_federated(&identity, Utc::now());

    let session = Session::authenticated(identity.clone(), profile);

    assert_that!(session.status(), eq(SessionStatus::Authenticated));
    assert_that!(session.identity(), some(eq(&identity)));
    assert_that!(session.profile(), some(anything()));
    assert_that!(session.error_message(), none());
}

#[test]
fn given_no_profile_session_then_identity_without_profile() {
    let session = Session::authenticated_no_profile(Identity::new("u1"));

    assert_that!(session.status(), eq(SessionStatus::AuthenticatedNoProfile));
    assert_that!(session.identity(), some(anything()));
    assert_that!(session.profile(), none());
    assert!(session.status().is_signed_in());
}

#[test]
fn given_error_session_then_message_and_identity_retained() {
    let session = Session::error(Some(Identity::new("u1")), "Failed to load user profile");

    assert_that!(session.status(), eq(SessionStatus::Error));
    assert_that!(session.error_message(), some(eq("Failed to load user profile")));
    assert_that!(session.identity(), some(anything()));
    assert!(!session.status().is_signed_in());
}

#[test]
fn test_session_status_round_trips_through_str() {
    for status in [
        SessionStatus::Unauthenticated,
        SessionStatus::Authenticating,
        SessionStatus::Authenticated,
        SessionStatus::AuthenticatedNoProfile,
        SessionStatus::Error,
    ] {
        assert_eq!(SessionStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(SessionStatus::from_str("signed_in").is_err());
}
