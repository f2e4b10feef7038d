//! Status checking and body decoding shared by every client.

use serde_json::Value;

use crate::error::ApiError;
use crate::format::{Payload, ResponseFormat};
use crate::http::HttpResponse;

/// Map a non-2xx status to `ApiError::Remote`.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(status = response.status, "request failed");
    Err(ApiError::Remote {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status and decode the body as JSON.
pub fn parse_json(response: HttpResponse) -> Result<Value, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check the status and decode according to `format`; XML bodies are
/// returned unparsed.
pub fn parse_payload(response: HttpResponse, format: ResponseFormat) -> Result<Payload, ApiError> {
    match format {
        ResponseFormat::Json => parse_json(response).map(Payload::Json),
        ResponseFormat::Xml => {
            check_status(&response)?;
            Ok(Payload::Text(response.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn parse_json_success() {
        let value = parse_json(response(200, r#"{"results":[1,2]}"#)).unwrap();
        assert_eq!(value["results"][1], 2);
    }

    #[test]
    fn parse_json_bad_body_is_decode_error() {
        let err = parse_json(response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn non_success_is_remote_error_with_body() {
        let err = parse_json(response(503, "maintenance")).unwrap_err();
        match err {
            ApiError::Remote { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_is_checked_before_decoding() {
        let err = parse_json(response(404, "not json")).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn xml_payload_is_returned_verbatim() {
        let body = "<BEAAPI><Results/></BEAAPI>";
        let payload = parse_payload(response(200, body), ResponseFormat::Xml).unwrap();
        assert_eq!(payload.as_text(), Some(body));
    }

    #[test]
    fn xml_payload_still_checks_status() {
        let err = parse_payload(response(500, "<Error/>"), ResponseFormat::Xml).unwrap_err();
        assert!(matches!(err, ApiError::Remote { status: 500, .. }));
    }
}
