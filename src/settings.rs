use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Keys holding password-like values: a blank submission in a batch save
/// keeps the stored value instead of wiping it.
const SECRET_KEYS: &[&str] = &["email_smtp_password"];

/// In-memory key/value settings table, grouped by prefix: `general_*`,
/// `email_*`, `security_*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Settings::default()
    }

    /// Fresh settings pre-populated with the stock defaults for every group.
    pub fn with_defaults() -> Self {
        let mut settings = Settings::new();
        for (key, value) in DEFAULTS {
            settings.values.insert(key.to_string(), value.to_string());
        }
        settings
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).map(|v| v == "true" || v == "1").unwrap_or(false)
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Batch save, as submitted by one settings tab. Blank values for secret
    /// keys leave the stored value untouched.
    pub fn set_many(&mut self, updates: &HashMap<String, String>) {
        for (key, value) in updates {
            if value.is_empty() && SECRET_KEYS.contains(&key.as_str()) && self.values.contains_key(key) {
                continue;
            }
            self.values.insert(key.clone(), value.clone());
        }
    }

    pub fn get_group(&self, prefix: &str) -> HashMap<String, String> {
        self.values
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn all(&self) -> HashMap<String, String> {
        self.values.clone()
    }

    pub fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Serialize for handoff to whatever persistence the embedder wires in.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

const DEFAULTS: &[(&str, &str)] = &[
    // General
    ("general_site_name", "CMS Dashboard"),
    ("general_admin_email", "admin@example.com"),
    ("general_time_zone", "America/New_York"),
    ("general_date_format", "MM/DD/YYYY"),
    // Email
    ("email_smtp_host", "smtp.gmail.com"),
    ("email_smtp_port", "587"),
    ("email_smtp_username", "your-email@gmail.com"),
    ("email_smtp_password", ""),
    ("email_use_ssl", "true"),
    ("email_notification_email", "admin@example.com"),
    ("email_from_name", "CMS Dashboard"),
    // Security
    ("security_require_two_factor", "false"),
    ("security_session_timeout_minutes", "60"),
    ("security_max_login_attempts", "5"),
    ("security_password_min_length", "8"),
    ("security_require_password_complexity", "true"),
];
