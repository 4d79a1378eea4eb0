use super::*;

// =============================================================
// CurrentUser
// =============================================================

#[test]
fn current_user_parses_restaurant_login_response() {
    let raw = r#"{"userId":3,"role":"RESTAURANT","restaurantId":12,"deliveryStaffId":null,"token":"t-1"}"#;
    let user: CurrentUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_id, 3);
    assert_eq!(user.role, "RESTAURANT");
    assert_eq!(user.restaurant_id, Some(12));
    assert_eq!(user.delivery_staff_id, None);
}

#[test]
fn current_user_tolerates_missing_optional_ids() {
    let raw = r#"{"userId":9,"role":"CUSTOMER","token":"abc"}"#;
    let user: CurrentUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.restaurant_id, None);
    assert_eq!(user.delivery_staff_id, None);
}

#[test]
fn current_user_serializes_camel_case() {
    let user = CurrentUser {
        user_id: 5,
        role: "DELIVERY".to_owned(),
        restaurant_id: None,
        delivery_staff_id: Some(44),
        token: "tok".to_owned(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["userId"], 5);
    assert_eq!(json["deliveryStaffId"], 44);
}

// =============================================================
// LoginRequest / ErrorBody
// =============================================================

#[test]
fn login_request_serializes_plain_fields() {
    let req = LoginRequest {
        username: "alice".to_owned(),
        password: "pw".to_owned(),
        role: "CUSTOMER".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"username": "alice", "password": "pw", "role": "CUSTOMER"}));
}

#[test]
fn error_body_reads_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
    assert_eq!(body.message, "bad credentials");
}
