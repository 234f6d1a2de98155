use crate::{Identity, ProfileFields, UserProfile, UserType};

use chrono::Utc;
use googletest::prelude::*;

fn fields() -> ProfileFields {
    ProfileFields {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        company: Some("Navy".to_string()),
        role: Some("Admiral".to_string()),
        user_type: UserType::Advisor,
    }
}

#[test]
fn given_profile_fields_when_new_then_timestamps_equal_and_fields_copied() {
    let now = Utc::now();

    let profile = UserProfile::new("uid-1", "grace@navy.mil", fields(), now);

    assert_that!(profile.id, eq("uid-1"));
    assert_that!(profile.email, eq("grace@navy.mil"));
    assert_that!(profile.first_name, eq("Grace"));
    assert_that!(profile.last_name, eq("Hopper"));
    assert_that!(profile.company, some(eq("Navy")));
    assert_that!(profile.role, some(eq("Admiral")));
    assert_that!(profile.user_type, eq(UserType::Advisor));
    assert_that!(profile.created_at, eq(now));
    assert_that!(profile.last_login_at, eq(profile.created_at));
}

#[test]
fn given_federated_identity_when_from_federated_then_startup_with_split_name() {
    let now = Utc::now();
    let identity = Identity::new("g-1")
        .with_email("ada@example.com")
        .with_display_name("Ada King Lovelace");

    let profile = UserProfile::from_federated(&identity, now);

    assert_that!(profile.id, eq("g-1"));
    assert_that!(profile.first_name, eq("Ada"));
    assert_that!(profile.last_name, eq("King Lovelace"));
    assert_that!(profile.user_type, eq(UserType::Startup));
    assert_that!(profile.company, none());
    assert_that!(profile.role, none());
    assert_that!(profile.created_at, eq(profile.last_login_at));
}

#[test]
fn given_federated_identity_without_email_when_from_federated_then_email_empty() {
    let profile = UserProfile::from_federated(&Identity::new("g-2"), Utc::now());

    assert_that!(profile.email, eq(""));
    assert_that!(profile.first_name, eq(""));
    assert_that!(profile.last_name, eq(""));
}

#[test]
fn given_profile_fields_when_display_name_then_joined_with_space() {
    assert_that!(fields().display_name(), eq("Grace Hopper"));
}
