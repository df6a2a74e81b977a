use super::*;

#[test]
fn classify_prefers_the_server_message() {
    let body = ErrorBody {
        message: Some("Invalid credentials".to_owned()),
    };
    let err = classify(400, Some(body));
    assert_eq!(
        err,
        ApiError::Auth {
            status: 400,
            message: "Invalid credentials".to_owned(),
        }
    );
}

#[test]
fn classify_falls_back_to_the_status_code() {
    assert_eq!(
        classify(500, None),
        ApiError::Auth {
            status: 500,
            message: "request failed: 500".to_owned(),
        }
    );
    assert_eq!(
        classify(422, Some(ErrorBody::default())),
        ApiError::Auth {
            status: 422,
            message: "request failed: 422".to_owned(),
        }
    );
}

#[test]
fn display_shows_the_message_users_should_read() {
    let err = ApiError::Auth {
        status: 400,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "session expired, please sign in again"
    );
}

#[test]
fn error_body_tolerates_a_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());

    let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("nope"));
}
