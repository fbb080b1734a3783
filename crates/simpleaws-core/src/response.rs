//! Response wrapping, envelope unwrapping, and AWS error classification.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::body::{BodyValue, parse_body};
use crate::connection::RawResponse;
use crate::error::Error;
use crate::proxy::ResponseProxy;

/// A successful response from AWS.
///
/// Construction from a [`RawResponse`] fails with a classified error when
/// the status is unsuccessful; a `Response` therefore always represents a
/// 2xx result and is immutable once built.
///
/// Traversal starts past the outer `{Action}Response` envelope: if the
/// level-two node contains a key ending in `Result`, that child becomes the
/// proxy root, otherwise the level-one node is used directly. This matches
/// the two envelope layouts AWS uses:
///
/// ```xml
/// <DescribeFooResponse>
///   <requestId>...</requestId>
///   <fooSet>...</fooSet>
/// </DescribeFooResponse>
/// ```
///
/// ```xml
/// <DescribeFooResponse>
///   <DescribeFooResult>...</DescribeFooResult>
///   <ResponseMetadata><RequestId>...</RequestId></ResponseMetadata>
/// </DescribeFooResponse>
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: BTreeMap<String, String>,
    body: BodyValue,
}

impl Response {
    /// Wrap one raw transport result.
    ///
    /// # Errors
    ///
    /// On a non-2xx status, returns [`Error::UnsuccessfulResponse`] when the
    /// body matches a known AWS error shape, or
    /// [`Error::UnknownErrorResponse`] carrying the raw body when it does
    /// not.
    pub fn from_raw(raw: RawResponse) -> Result<Self, Error> {
        let content_type = raw.content_type().map(ToOwned::to_owned);
        let body = parse_body(content_type.as_deref(), &raw.body);

        if !(200..300).contains(&raw.status) {
            return Err(match body.tree().and_then(parse_error_from) {
                Some((error_type, message)) => Error::UnsuccessfulResponse {
                    code: raw.status,
                    error_type,
                    message,
                },
                None => Error::UnknownErrorResponse { body: raw.body },
            });
        }

        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            body,
        })
    }

    /// The HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response headers.
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The parsed (or raw) body.
    #[must_use]
    pub fn body(&self) -> &BodyValue {
        &self.body
    }

    /// The raw body string for unparsed bodies (object downloads).
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        self.body.as_raw()
    }

    /// The traversal root, past the response envelope. `None` when the body
    /// was not a parsable tree.
    #[must_use]
    pub fn root(&self) -> Option<ResponseProxy<'_>> {
        let inner = self.body.tree()?.as_object()?.values().next()?;
        let node = inner
            .as_object()
            .and_then(|map| {
                map.iter()
                    .find(|(key, _)| key.ends_with("Result"))
                    .map(|(_, value)| value)
            })
            .unwrap_or(inner);
        Some(ResponseProxy::new(node))
    }

    /// Tolerant key lookup on the traversal root.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ResponseProxy<'_>> {
        self.root()?.get(key)
    }

    /// Case-insensitive logical field access on the traversal root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchField`] when the field is absent or the body
    /// has no traversable root.
    pub fn field(&self, name: &str) -> Result<ResponseProxy<'_>, Error> {
        self.root()
            .ok_or_else(|| Error::NoSuchField(name.to_owned()))?
            .field(name)
    }

    /// The request ID, found at `ResponseMetadata.RequestId` or as a flat
    /// `requestId` sibling. Some APIs (CloudFront) return none.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        let inner = self.body.tree()?.as_object()?.values().next()?;

        if let Some(id) = inner
            .get("ResponseMetadata")
            .and_then(|metadata| metadata.get("RequestId"))
            .and_then(Value::as_str)
        {
            return Some(id);
        }

        inner.get("requestId").and_then(Value::as_str)
    }
}

/// Locate the error node in a failing body, trying each AWS error shape in
/// order. Returns `(error_type, message)` when one matches.
fn parse_error_from(tree: &Value) -> Option<(String, String)> {
    let obj = tree.as_object()?;

    if let Some(error) = obj.get("ErrorResponse").and_then(|v| v.get("Error")) {
        return Some(code_and_message(error));
    }

    if let Some(error) = obj.get("Error") {
        let (code, mut message) = code_and_message(error);
        // S3 includes the server-side StringToSign on signature mismatches;
        // surfacing it makes those failures debuggable.
        if let Some(string_to_sign) = error.get("StringToSign").and_then(Value::as_str) {
            message.push_str(&format!(" String to Sign: {string_to_sign:?}"));
        }
        return Some((code, message));
    }

    if let Some(error) = obj
        .get("Response")
        .and_then(|v| v.get("Errors"))
        .and_then(|v| v.get("Error"))
    {
        return Some(code_and_message(error));
    }

    if let Some(error_type) = obj.get("__type").and_then(Value::as_str) {
        let message = obj
            .get("Message")
            .or_else(|| obj.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Some((error_type.to_owned(), message.to_owned()));
    }

    None
}

fn code_and_message(error: &Value) -> (String, String) {
    let code = error
        .get("Code")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let message = error
        .get("Message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    (code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, content_type: &str, body: &str) -> RawResponse {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_owned(), content_type.to_owned());
        RawResponse {
            status,
            headers,
            body: body.to_owned(),
        }
    }

    #[test]
    fn test_should_unwrap_result_envelope() {
        let response = Response::from_raw(raw(
            200,
            "text/xml",
            "<CreateQueueResponse>\
               <CreateQueueResult><QueueUrl>https://q</QueueUrl></CreateQueueResult>\
               <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>\
             </CreateQueueResponse>",
        ))
        .unwrap();

        assert_eq!(
            response.field("queue_url").unwrap().as_str(),
            Some("https://q")
        );
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_should_use_level_one_node_without_result_key() {
        let response = Response::from_raw(raw(
            200,
            "text/xml",
            "<DescribeInstancesResponse>\
               <requestId>req-2</requestId>\
               <reservationSet><item><reservationId>r-1</reservationId></item></reservationSet>\
             </DescribeInstancesResponse>",
        ))
        .unwrap();

        let reservations = response.field("reservation_set").unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(
            reservations
                .get_index(0)
                .unwrap()
                .field("reservation_id")
                .unwrap()
                .as_str(),
            Some("r-1")
        );
        assert_eq!(response.request_id(), Some("req-2"));
    }

    #[test]
    fn test_should_classify_query_error_response_shape() {
        let result = Response::from_raw(raw(
            403,
            "text/xml",
            "<Response><Errors><Error>\
               <Code>AuthFailure</Code><Message>m</Message>\
             </Error></Errors></Response>",
        ));

        match result {
            Err(Error::UnsuccessfulResponse {
                code,
                error_type,
                message,
            }) => {
                assert_eq!(code, 403);
                assert_eq!(error_type, "AuthFailure");
                assert_eq!(message, "m");
            }
            other => panic!("expected UnsuccessfulResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_should_classify_error_response_wrapper_shape() {
        let result = Response::from_raw(raw(
            400,
            "text/xml",
            "<ErrorResponse><Error>\
               <Code>InvalidParameterValue</Code><Message>bad</Message>\
             </Error></ErrorResponse>",
        ));

        assert!(matches!(
            result,
            Err(Error::UnsuccessfulResponse { error_type, .. }) if error_type == "InvalidParameterValue"
        ));
    }

    #[test]
    fn test_should_enrich_message_with_string_to_sign() {
        let result = Response::from_raw(raw(
            403,
            "text/xml",
            "<Error>\
               <Code>SignatureDoesNotMatch</Code><Message>mismatch</Message>\
               <StringToSign>GET\n/</StringToSign>\
             </Error>",
        ));

        match result {
            Err(Error::UnsuccessfulResponse { message, .. }) => {
                assert!(message.starts_with("mismatch"));
                assert!(message.contains("String to Sign"));
            }
            other => panic!("expected UnsuccessfulResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_should_classify_json_type_errors() {
        let result = Response::from_raw(raw(
            400,
            "application/x-amz-json-1.0",
            r#"{"__type":"com.amazonaws.dynamodb.v20111205#ResourceNotFoundException","message":"no table"}"#,
        ));

        match result {
            Err(Error::UnsuccessfulResponse {
                error_type,
                message,
                ..
            }) => {
                assert!(error_type.ends_with("ResourceNotFoundException"));
                assert_eq!(message, "no table");
            }
            other => panic!("expected UnsuccessfulResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_should_fall_back_to_unknown_error_response() {
        let result = Response::from_raw(raw(500, "text/html", "<html>oops</html>"));

        assert!(matches!(
            result,
            Err(Error::UnknownErrorResponse { body }) if body == "<html>oops</html>"
        ));
    }

    #[test]
    fn test_should_format_unsuccessful_response_display() {
        let error = Error::UnsuccessfulResponse {
            code: 403,
            error_type: "AuthFailure".to_owned(),
            message: "nope".to_owned(),
        };
        assert_eq!(error.to_string(), "AuthFailure (403): nope");
    }

    #[test]
    fn test_should_keep_raw_bodies_accessible() {
        let response = Response::from_raw(raw(200, "application/octet-stream", "file data")).unwrap();

        assert!(response.root().is_none());
        assert_eq!(response.raw_body(), Some("file data"));
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_should_find_flat_request_id() {
        let response = Response::from_raw(raw(
            200,
            "text/xml",
            "<R><requestId>flat-id</requestId><data>x</data></R>",
        ))
        .unwrap();
        assert_eq!(response.request_id(), Some("flat-id"));
    }
}
