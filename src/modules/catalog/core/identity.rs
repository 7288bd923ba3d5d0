use uuid::Uuid;

/// Mints an opaque identifier for a new record. Callers must not read any
/// structure into the value; uniqueness within the process lifetime is the
/// only guarantee.
pub fn fresh_id() -> String {
    Uuid::now_v7().to_string()
}
