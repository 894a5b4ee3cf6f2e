//! Critical path reconstruction with mnemonic labels.
//!
//! Bazel writes the critical path as `critical path component` events that
//! only carry a progress-message name. The mnemonic lives on the matching
//! `action processing` event, so we build a message -> mnemonic index from
//! those and resolve each critical path entry against it.

use super::mnemonic::{extract_message, special_case_prefix};
use crate::parser::schema::{EventCategory, Profile, TraceEvent};
use crate::utils::config::ACTION_NAME_PREFIX;
use log::{debug, warn};
use std::collections::HashMap;

/// Message key -> mnemonic
pub type MessageIndex = HashMap<String, String>;

/// A critical path event awaiting label resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPathEntry {
    /// Normalized message key ("" for non-action components)
    pub message: String,

    /// Original event name
    pub name: String,
}

/// How a label was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Direct index hit on the message key
    Indexed,
    /// Index hit after re-normalizing the key
    Normalized,
    /// Special-case prefix of the key used as the label
    SpecialCase,
    /// No label found; the raw message key is used
    Unresolved,
}

/// One line of the critical path report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPathLine {
    pub label: String,
    pub name: String,
    pub source: LabelSource,
}

impl CriticalPathLine {
    /// `<label>: <name>`
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.label, self.name)
    }
}

/// Build the message index from `action processing` events
///
/// Later events overwrite earlier ones with the same message.
pub fn build_message_index(events: &[TraceEvent]) -> MessageIndex {
    let mut index = MessageIndex::new();

    for event in events {
        if event.category() != EventCategory::ActionProcessing {
            continue;
        }
        if let Some(mnemonic) = event.mnemonic() {
            index.insert(extract_message(&event.name).to_string(), mnemonic.to_string());
        }
    }

    index
}

/// Collect critical path entries in source order
pub fn collect_critical_path(events: &[TraceEvent]) -> Vec<CriticalPathEntry> {
    events
        .iter()
        .filter(|event| event.category() == EventCategory::CriticalPathComponent)
        .map(|event| CriticalPathEntry {
            message: critical_path_message(&event.name).to_string(),
            name: event.name.clone(),
        })
        .collect()
}

/// Message key of a critical path event; only action entries have one
fn critical_path_message(name: &str) -> &str {
    if name.starts_with(ACTION_NAME_PREFIX) {
        extract_message(name)
    } else {
        ""
    }
}

/// Resolve a message key to a label
///
/// Tries, in order: the key itself, the key run through the resolver again,
/// and a special-case prefix strictly shorter than the key. Falls back to
/// the key with `LabelSource::Unresolved`.
pub fn resolve_label(message: &str, index: &MessageIndex) -> (String, LabelSource) {
    if let Some(label) = index.get(message) {
        return (label.clone(), LabelSource::Indexed);
    }

    let normalized = extract_message(message);
    if let Some(label) = index.get(normalized) {
        return (label.clone(), LabelSource::Normalized);
    }

    if let Some(prefix) = special_case_prefix(message) {
        if prefix.len() < message.len() {
            return (prefix.to_string(), LabelSource::SpecialCase);
        }
    }

    (message.to_string(), LabelSource::Unresolved)
}

/// Produce the labelled critical path for a profile
///
/// **Public** - main entry point for the critical path report
///
/// Unresolved entries are logged as warnings and kept with their raw
/// message as the label; they never abort the report.
pub fn report_critical_path(profile: &Profile) -> Vec<CriticalPathLine> {
    let index = build_message_index(&profile.trace_events);
    let entries = collect_critical_path(&profile.trace_events);

    debug!(
        "Indexed {} action messages, {} critical path components",
        index.len(),
        entries.len()
    );

    entries
        .into_iter()
        .map(|entry| {
            let (label, source) = resolve_label(&entry.message, &index);
            if source == LabelSource::Unresolved {
                warn!("No mnemonic found for critical path component: {}", entry.name);
            }
            CriticalPathLine {
                label,
                name: entry.name,
                source,
            }
        })
        .collect()
}
