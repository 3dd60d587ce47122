/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// An untrusted key-value payload as received from a client.
pub type SpecMap = serde_json::Map<String, serde_json::Value>;
