//! The uniform response envelope.
//!
//! Every operation answers in exactly one of two shapes:
//! `{"data": <payload>}` on success, `{"error": {"message": <text>}}` on
//! failure. Nothing else ever leaves the service.

use serde::Serialize;
use serde_json::json;

/// Message for a failed token check.
pub const UNAUTHORIZED: &str = "Unauthorized access";

/// Message for a mutation against a nonexistent collection.
pub const UNKNOWN_SOURCE: &str = "Unable to find datasource";

/// Message for a recovered internal query fault.
pub const QUERY_FAULT: &str = "No method recognized";

/// Message for the declared-but-unimplemented XML output mode.
pub const XML_UNSUPPORTED: &str = "Xml output is not supported";

/// Status text for a successful append.
pub const DATA_INSERTED: &str = "Data inserted";

/// Status text for a completed update pass.
pub const DATA_UPDATED: &str = "Data updated";

/// Serialize a success envelope around `payload`.
pub fn data<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    Ok(json!({ "data": serde_json::to_value(payload)? }).to_string())
}

/// A success envelope carrying only a status text.
pub fn text(message: &str) -> String {
    json!({ "data": { "text": message } }).to_string()
}

/// An error envelope with the given message.
pub fn error(message: &str) -> String {
    json!({ "error": { "message": message } }).to_string()
}
