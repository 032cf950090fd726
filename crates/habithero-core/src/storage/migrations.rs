//! Migration of state documents written by older versions.
//!
//! Applied on every load, before deserializing. Each step only fills in
//! what is absent or unusable; fields that are present and valid are left
//! untouched so a document written by this version round-trips unchanged.

use serde_json::{Map, Value};

use crate::model::{AppSettings, ReminderTime, DEFAULT_REMINDER_TIME};

/// Bring a raw state document up to the current shape.
pub fn migrate_document(mut doc: Value) -> Value {
    if let Some(root) = doc.as_object_mut() {
        backfill_lists(root);
        merge_settings(root);
    }
    doc
}

/// `achievedGoals` and `records` were not always written.
fn backfill_lists(root: &mut Map<String, Value>) {
    for key in ["achievedGoals", "records"] {
        let missing = root.get(key).map_or(true, Value::is_null);
        if missing {
            root.insert(key.to_string(), Value::Array(Vec::new()));
        }
    }
}

/// Lay stored settings over the defaults and repair the reminder time.
fn merge_settings(root: &mut Map<String, Value>) {
    let mut merged = match serde_json::to_value(AppSettings::default()) {
        Ok(Value::Object(defaults)) => defaults,
        _ => Map::new(),
    };
    if let Some(Value::Object(stored)) = root.get("settings") {
        for (key, value) in stored {
            if !value.is_null() {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    let reminder_ok = merged
        .get("dailyReminderTime")
        .and_then(Value::as_str)
        .is_some_and(|s| ReminderTime::parse(s).is_ok());
    if !reminder_ok {
        merged.insert(
            "dailyReminderTime".to_string(),
            Value::String(DEFAULT_REMINDER_TIME.to_string()),
        );
    }

    root.insert("settings".to_string(), Value::Object(merged));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backfills_missing_lists() {
        let doc = migrate_document(json!({"habit": null, "goal": null, "settings": {}}));
        assert_eq!(doc["achievedGoals"], json!([]));
        assert_eq!(doc["records"], json!([]));
    }

    #[test]
    fn keeps_present_lists() {
        let doc = migrate_document(json!({"records": [{"id": "1"}], "achievedGoals": null}));
        assert_eq!(doc["records"], json!([{"id": "1"}]));
        assert_eq!(doc["achievedGoals"], json!([]));
    }

    #[test]
    fn merges_settings_over_defaults() {
        let doc = migrate_document(json!({"settings": {"theme": "dark", "onboardingCompleted": true}}));
        let settings = &doc["settings"];
        assert_eq!(settings["theme"], "dark");
        assert_eq!(settings["onboardingCompleted"], true);
        assert_eq!(settings["dailyReminder"], true);
        assert_eq!(settings["dailyReminderTime"], "18:00");
    }

    #[test]
    fn repairs_empty_or_invalid_reminder_time() {
        for bad in [json!(""), json!("late"), json!(1800)] {
            let doc = migrate_document(json!({"settings": {"dailyReminderTime": bad}}));
            assert_eq!(doc["settings"]["dailyReminderTime"], "18:00");
        }
        let doc = migrate_document(json!({"settings": {"dailyReminderTime": "07:30"}}));
        assert_eq!(doc["settings"]["dailyReminderTime"], "07:30");
    }

    #[test]
    fn missing_settings_become_defaults() {
        let doc = migrate_document(json!({}));
        let settings: AppSettings = serde_json::from_value(doc["settings"].clone()).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn non_object_documents_pass_through() {
        assert_eq!(migrate_document(json!([1, 2])), json!([1, 2]));
    }
}
