pub const SCHEMA: &str = r#"
-- Each row holds one whole JSON document; writes replace the value in full
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT DEFAULT (datetime('now'))
);
"#;
