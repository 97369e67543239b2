use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit `{"event": <event>, "command": <command>, ...payload}`
pub fn emit_result(command: &str, event: &str, payload: &impl Serialize) -> io::Result<()> {
    let mut value = serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({}));
    if !value.is_object() {
        value = serde_json::json!({ "data": value });
    }
    if let Some(obj) = value.as_object_mut() {
        obj.insert("event".to_string(), serde_json::json!(event));
        obj.insert("command".to_string(), serde_json::json!(command));
    }
    emit(value)
}
