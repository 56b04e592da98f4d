//! Tests for user identifiers and record serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("1", 1)]
#[case("42", 42)]
#[case("007", 7)]
#[case("+5", 5)]
#[case("-3", -3)]
fn user_id_parses_integer_tokens(#[case] token: &str, #[case] expected: i64) {
    let id: UserId = token.parse().expect("integer token");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("1.5")]
#[case(" 1")]
#[case("1/2")]
#[case("99999999999999999999")]
fn user_id_rejects_non_integer_tokens(#[case] token: &str) {
    assert!(token.parse::<UserId>().is_err());
}

#[rstest]
fn user_serialises_in_field_order() {
    let user = User::new(UserId::new(1), "John Doe", "john@example.com");
    let encoded = serde_json::to_string(&user).expect("serialise user");
    assert_eq!(
        encoded,
        r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#
    );
}

#[rstest]
fn new_user_takes_assigned_id() {
    let user = NewUser::new("New Guy", "new@x.com").with_id(UserId::new(3));
    assert_eq!(
        serde_json::to_value(&user).expect("serialise user"),
        json!({"id": 3, "name": "New Guy", "email": "new@x.com"})
    );
}

#[rstest]
fn seed_users_are_john_and_jane() {
    let seeds = seed_users();
    let names: Vec<_> = seeds.iter().map(|u| (u.id().get(), u.name())).collect();
    assert_eq!(names, vec![(1, "John Doe"), (2, "Jane Smith")]);
}
