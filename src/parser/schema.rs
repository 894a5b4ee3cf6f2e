//! Input schema for Bazel JSON trace profiles.
//!
//! Only the fields the reports read are modelled. Everything else in the
//! Chrome trace event format (`ph`, `ts`, `pid`, `tid`, ...) is ignored.

use crate::utils::config::{CATEGORY_ACTION_PROCESSING, CATEGORY_CRITICAL_PATH};
use serde::Deserialize;

/// Top-level profile document
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// All recorded events, in file order
    #[serde(rename = "traceEvents")]
    pub trace_events: Vec<TraceEvent>,

    /// Build metadata (`build_id`, `output_base`, `date`, ...)
    #[serde(default, rename = "otherData")]
    pub other_data: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Profile {
    /// Look up a string entry in `otherData`
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.other_data
            .as_ref()
            .and_then(|data| data.get(key))
            .and_then(|value| value.as_str())
    }
}

/// A single trace record
#[derive(Debug, Clone, Deserialize)]
pub struct TraceEvent {
    /// Free-text event name, e.g. `action 'Compiling foo.cc'`
    pub name: String,

    /// Event category
    #[serde(default)]
    pub cat: Option<String>,

    /// Duration in microseconds
    #[serde(default)]
    pub dur: Option<u64>,

    /// Structured event arguments
    #[serde(default)]
    pub args: Option<EventArgs>,
}

/// Arguments attached to an event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventArgs {
    /// Action type label, e.g. `CppCompile`
    #[serde(default)]
    pub mnemonic: Option<String>,
}

/// Categories the reports distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    CriticalPathComponent,
    ActionProcessing,
    Other,
}

impl EventCategory {
    /// Classify a raw `cat` value; a missing category is `Other`
    pub fn from_cat(cat: Option<&str>) -> Self {
        match cat {
            Some(CATEGORY_CRITICAL_PATH) => Self::CriticalPathComponent,
            Some(CATEGORY_ACTION_PROCESSING) => Self::ActionProcessing,
            _ => Self::Other,
        }
    }
}

impl TraceEvent {
    pub fn category(&self) -> EventCategory {
        EventCategory::from_cat(self.cat.as_deref())
    }

    /// `args.mnemonic`, if present
    pub fn mnemonic(&self) -> Option<&str> {
        self.args.as_ref().and_then(|args| args.mnemonic.as_deref())
    }

    /// Duration with a missing `dur` treated as zero
    pub fn duration(&self) -> u64 {
        self.dur.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let event: TraceEvent = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();

        assert_eq!(event.category(), EventCategory::Other);
        assert_eq!(event.mnemonic(), None);
        assert_eq!(event.duration(), 0);
    }

    #[test]
    fn test_category_classification() {
        assert_eq!(
            EventCategory::from_cat(Some("critical path component")),
            EventCategory::CriticalPathComponent
        );
        assert_eq!(
            EventCategory::from_cat(Some("action processing")),
            EventCategory::ActionProcessing
        );
        assert_eq!(EventCategory::from_cat(Some("Critical Path Component")), EventCategory::Other);
        assert_eq!(EventCategory::from_cat(None), EventCategory::Other);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let event: TraceEvent = serde_json::from_str(
            r#"{"name": "Compiling a.cc", "cat": "action processing", "ph": "X",
                "ts": 12, "dur": 40, "pid": 1, "tid": 7,
                "args": {"mnemonic": "CppCompile", "target": "//a"}}"#,
        )
        .unwrap();

        assert_eq!(event.mnemonic(), Some("CppCompile"));
        assert_eq!(event.duration(), 40);
    }

    #[test]
    fn test_profile_metadata() {
        let profile: Profile = serde_json::from_str(
            r#"{"otherData": {"build_id": "abc", "date": 5}, "traceEvents": []}"#,
        )
        .unwrap();

        assert_eq!(profile.metadata("build_id"), Some("abc"));
        assert_eq!(profile.metadata("date"), None);
        assert_eq!(profile.metadata("output_base"), None);
    }
}
