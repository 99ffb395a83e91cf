//! Tests for user value types and their JSON shape.

use super::*;
use rstest::rstest;
use serde_json::{Value, json};

const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn bob() -> User {
    User::try_from_strings(USER_ID, "bob", "b@x.com").expect("valid user")
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw).expect_err("invalid id"), expected);
}

#[rstest]
#[case("ab", UserValidationError::UserNameTooShort { min: USER_NAME_MIN })]
#[case("  ab  ", UserValidationError::UserNameTooShort { min: USER_NAME_MIN })]
#[case(&"x".repeat(USER_NAME_MAX + 1), UserValidationError::UserNameTooLong { max: USER_NAME_MAX })]
fn user_name_enforces_length(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserName::new(raw).expect_err("invalid name"), expected);
}

#[rstest]
fn user_name_is_trimmed() {
    let name = UserName::new("  bob ").expect("valid name");
    assert_eq!(name.as_ref(), "bob");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("   ", UserValidationError::EmptyEmail)]
#[case(&"e".repeat(EMAIL_MAX + 1), UserValidationError::EmailTooLong { max: EMAIL_MAX })]
fn email_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(EmailAddress::new(raw).expect_err("invalid email"), expected);
}

#[rstest]
fn avatar_image_rejects_blank_payloads() {
    assert_eq!(
        AvatarImage::new("  ").expect_err("blank image"),
        UserValidationError::EmptyAvatarImage
    );
}

#[rstest]
#[case(false, "", false, "")]
#[case(true, "", false, "")]
#[case(false, "PHN2Zz4=", false, "")]
#[case(true, "PHN2Zz4=", true, "PHN2Zz4=")]
fn avatar_from_stored_keeps_flag_and_image_consistent(
    #[case] is_set: bool,
    #[case] image: &str,
    #[case] expected_set: bool,
    #[case] expected_image: &str,
) {
    let avatar = Avatar::from_stored(is_set, image.to_owned());
    assert_eq!(avatar.is_set(), expected_set);
    assert_eq!(avatar.image(), expected_image);
}

#[rstest]
fn new_user_serialises_with_default_avatar_fields() {
    let value = serde_json::to_value(bob()).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": USER_ID,
            "userName": "bob",
            "email": "b@x.com",
            "isAvatarImageSet": false,
            "avatarImage": "",
        })
    );
}

#[rstest]
fn serialised_user_has_no_password_field() {
    let value = serde_json::to_value(bob()).expect("serialise user");
    let object = value.as_object().expect("object");
    assert!(object.keys().all(|key| !key.to_lowercase().contains("password")));
}

#[rstest]
fn user_deserialises_avatar_state() {
    let user: User = serde_json::from_value(json!({
        "id": USER_ID,
        "userName": "bob",
        "email": "b@x.com",
        "isAvatarImageSet": true,
        "avatarImage": "PHN2Zz4=",
    }))
    .expect("valid payload");
    assert!(user.avatar().is_set());
    assert_eq!(user.avatar().image(), "PHN2Zz4=");
}

#[rstest]
fn user_deserialisation_enforces_invariants() {
    let result = serde_json::from_value::<User>(json!({
        "id": USER_ID,
        "userName": "bo",
        "email": "b@x.com",
    }));
    assert!(result.is_err());
}

#[rstest]
fn password_hash_debug_is_redacted() {
    let hash = PasswordHash::new("$2b$10$abcdefghijklmnopqrstuv").expect("non-empty hash");
    let rendered = format!("{hash:?}");
    assert!(!rendered.contains("$2b$"));
}

#[rstest]
fn credentials_into_user_drops_hash() {
    let hash = PasswordHash::new("$2b$10$abcdefghijklmnopqrstuv").expect("non-empty hash");
    let credentials = UserCredentials::new(bob(), hash);
    let user = credentials.into_user();
    let value: Value = serde_json::to_value(user).expect("serialise user");
    assert!(value.get("passwordHash").is_none());
}
