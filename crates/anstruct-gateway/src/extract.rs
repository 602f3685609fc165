//! Blueprint extraction from a `generateContent` response.
//!
//! The response is walked as untyped JSON so that any missing or
//! mistyped segment simply ends the walk.

use serde_json::Value;

/// One step in a JSON path.
#[derive(Debug, Clone, Copy)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// `candidates[0].content.parts[0].text`
const BLUEPRINT_PATH: [Segment; 6] = [
    Segment::Key("candidates"),
    Segment::Index(0),
    Segment::Key("content"),
    Segment::Key("parts"),
    Segment::Index(0),
    Segment::Key("text"),
];

fn lookup<'a>(root: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| match *segment {
        Segment::Key(key) => node.as_object()?.get(key),
        Segment::Index(index) => node.as_array()?.get(index),
    })
}

/// Extract the first candidate's first text part.
///
/// Returns an empty string when any segment is missing or the leaf is not
/// a string. An empty blueprint is a valid gateway result.
#[must_use]
pub fn extract_blueprint(response: &Value) -> String {
    lookup(response, &BLUEPRINT_PATH)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
