use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const IMAGE_PATH: &str = "/image";

/// Outermost layer: answer preflight before any route dispatch and stamp
/// the allow-origin header on every other response, errors included.
pub async fn apply(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight(request.uri().path());
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

fn preflight(path: &str) -> Response {
    let allow_methods = if path == IMAGE_PATH {
        "GET, POST, OPTIONS"
    } else {
        "POST, OPTIONS"
    };

    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, allow_methods),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}
