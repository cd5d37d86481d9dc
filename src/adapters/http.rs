use crate::core::converter::convert;
use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub const INVALID_URL_FORMAT: &str = "Invalid URL format";

pub const USAGE_GUIDE: &str = "
Usage Guide:
GET /convert/<value>/<input-format>/<output-format>

<value>: Any alphanumeric value in the format specified by <input-format>
<input-format> and <output-format>:
  dec: Decimal (base-10) format
  bin: Binary (base-2) format
  hex: Hexadecimal (base-16) format

Example: /convert/1010/bin/dec
";

pub fn router() -> Router {
    Router::new()
        .route("/", get(usage_guide))
        .route("/health", get(health_check))
        .route("/convert/*path", get(convert_handler))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

async fn usage_guide() -> &'static str {
    USAGE_GUIDE
}

async fn health_check() -> &'static str {
    "OK"
}

async fn convert_handler(Path(path): Path<String>) -> Response {
    let segments: Vec<&str> = path.split('/').collect();
    let [value, input_format, output_format] = segments.as_slice() else {
        tracing::debug!(path = %path, segments = segments.len(), "rejecting convert path");
        return bad_request(INVALID_URL_FORMAT.to_string());
    };

    match convert(value, input_format, output_format) {
        Ok(result) => result.into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "conversion failed");
            bad_request(e.to_string())
        }
    }
}

/// `/convert` 與 `/convert/` 不帶片段時視為格式錯誤，其餘路徑回傳使用說明
async fn fallback(uri: Uri) -> Response {
    match uri.path() {
        "/convert" | "/convert/" => bad_request(INVALID_URL_FORMAT.to_string()),
        _ => USAGE_GUIDE.into_response(),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}
