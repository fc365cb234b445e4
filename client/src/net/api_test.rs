use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(
        login_endpoint("http://localhost:8080"),
        "http://localhost:8080/v1/auth/login"
    );
}

#[test]
fn users_endpoint_formats_expected_path() {
    assert_eq!(
        users_endpoint("http://localhost:8080"),
        "http://localhost:8080/v1/users"
    );
}

#[test]
fn user_endpoint_interpolates_id() {
    assert_eq!(
        user_endpoint("http://localhost:8080", "u-123"),
        "http://localhost:8080/v1/users/u-123"
    );
}

#[test]
fn product_endpoint_interpolates_id() {
    assert_eq!(
        product_endpoint("http://localhost:8080", "p-9"),
        "http://localhost:8080/v1/products/p-9"
    );
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_trims_trailing_slashes() {
    let client = ApiClient::new("http://localhost:8080///");
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn new_keeps_clean_base_untouched() {
    let client = ApiClient::new("https://api.example.com");
    assert_eq!(client.base_url(), "https://api.example.com");
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn api_error_carries_gateway_body() {
    let err = api_error(
        404,
        Some(ErrorBody {
            code: 5,
            message: "user not found".to_owned(),
        }),
    );
    match err {
        ApiError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, 5);
            assert_eq!(message, "user not found");
        }
        other => panic!("expected Api variant, got {other:?}"),
    }
}

#[test]
fn api_error_degrades_without_body() {
    let err = api_error(503, None);
    match err {
        ApiError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 503);
            assert_eq!(code, 2);
            assert_eq!(message, "status 503");
        }
        other => panic!("expected Api variant, got {other:?}"),
    }
}

#[test]
fn gateway_error_fixture_maps_to_api_error() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"code":7,"message":"forbidden","details":[]}"#).unwrap();
    let err = api_error(403, Some(body));
    assert_eq!(err.to_string(), "api error 403: forbidden");
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ApiError::Api {
            status: 401,
            code: 16,
            message: "token expired".to_owned(),
        }
        .to_string(),
        "api error 401: token expired"
    );
    assert_eq!(
        ApiError::Decode("missing field `id`".to_owned()).to_string(),
        "invalid response body: missing field `id`"
    );
    assert_eq!(
        ApiError::Unavailable.to_string(),
        "api is unavailable outside the browser"
    );
}

// =============================================================
// Native stubs
// =============================================================

#[cfg(not(feature = "browser"))]
#[test]
fn login_is_unavailable_without_a_browser() {
    let client = ApiClient::new("http://localhost:8080");
    let req = LoginPasswordRequest {
        user_id: "u-1".to_owned(),
        password: "hunter2".to_owned(),
    };
    let err = futures::executor::block_on(client.login(&req)).expect_err("stub must fail");
    assert!(matches!(err, ApiError::Unavailable));
}

#[cfg(not(feature = "browser"))]
#[test]
fn view_product_is_unavailable_without_a_browser() {
    let client = ApiClient::new("http://localhost:8080");
    let err = futures::executor::block_on(client.view_product("p-1")).expect_err("stub must fail");
    assert!(matches!(err, ApiError::Unavailable));
}
