//! Structural classification of opaque boundary values.
//!
//! Values arriving from untyped boundaries (deserialized JSON, foreign SDK
//! returns) carry no kind tag, so classification checks field presence only
//! and tolerates any object shape.

use serde_json::Value;

/// True iff the value looks like a lazy streaming result: it exposes a
/// `locked` state flag, a `cancel` operation and a reader-acquisition
/// operation.
pub fn is_streaming_result(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| {
        obj.contains_key("locked") && obj.contains_key("cancel") && obj.contains_key("getReader")
    })
}

/// True iff the value is a named tool-choice directive: a `type` field, a
/// nested `function` object, and a `name` inside that object.
pub fn is_named_tool_choice(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| {
        obj.contains_key("type")
            && obj
                .get("function")
                .and_then(Value::as_object)
                .is_some_and(|function| function.contains_key("name"))
    })
}
