use crate::{Identity, split_display_name};

use googletest::prelude::*;

#[test]
fn given_two_word_display_name_when_split_then_first_and_last() {
    let (first, last) = split_display_name(Some("Ada Lovelace"));

    assert_that!(first, eq("Ada"));
    assert_that!(last, eq("Lovelace"));
}

#[test]
fn given_many_words_when_split_then_rest_joined_by_single_space() {
    let (first, last) = split_display_name(Some("  Jean   Luc  de Picard "));

    assert_that!(first, eq("Jean"));
    assert_that!(last, eq("Luc de Picard"));
}

#[test]
fn given_single_word_when_split_then_last_is_empty() {
    let (first, last) = split_display_name(Some("Cher"));

    assert_that!(first, eq("Cher"));
    assert_that!(last, eq(""));
}

#[test]
fn given_no_display_name_when_split_then_both_empty() {
    assert_that!(split_display_name(None), eq(&(String::new(), String::new())));
    assert_that!(
        split_display_name(Some("   ")),
        eq(&(String::new(), String::new()))
    );
}

#[test]
fn given_identity_builder_when_built_then_fields_set() {
    let identity = Identity::new("uid-1")
        .with_email("a@b.com")
        .with_display_name("A B");

    assert_that!(identity.id, eq("uid-1"));
    assert_that!(identity.email, some(eq("a@b.com")));
    assert_that!(identity.split_name(), eq(&("A".to_string(), "B".to_string())));
}
