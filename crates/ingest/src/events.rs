use serde_json::Value;

/// Emit a structured ingestion event as a single log line, `kind => {json}`.
///
/// Fire-and-forget: telemetry is best-effort and can never fail the
/// ingestion that produced it.
pub fn emit(kind: &str, fields: &Value) {
    log::info!("{kind} => {fields}");
}
