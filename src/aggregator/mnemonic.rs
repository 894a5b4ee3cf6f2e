//! Progress-message normalization.
//!
//! Critical path entries only carry a free-text name such as
//! `action 'Compiling foo.cc'`, while the matching `action processing` event
//! carries the mnemonic. Both names are reduced to a common "message" key so
//! the two can be correlated.

use crate::utils::config::SPECIAL_CASE_MESSAGES;

/// Return the special-case message `name` starts with, if any
pub fn special_case_prefix(name: &str) -> Option<&'static str> {
    SPECIAL_CASE_MESSAGES
        .iter()
        .copied()
        .find(|prefix| name.starts_with(prefix))
}

/// Derive the message key for an event name
///
/// Special-case prefixes win outright. Otherwise the last space-delimited
/// token is dropped, and if what remains holds a quote, only the text between
/// the first quote and the next one (or the end) is kept.
///
/// # Examples
/// ```
/// use bazel_profile_tools::aggregator::extract_message;
///
/// assert_eq!(extract_message("action 'Compiling foo.cc' ACTION_EXECUTE"), "Compiling foo.cc");
/// assert_eq!(extract_message("Compiling foo.cc"), "Compiling");
/// assert_eq!(extract_message("KotlinCompile //app:lib"), "KotlinCompile");
/// ```
pub fn extract_message(name: &str) -> &str {
    if let Some(prefix) = special_case_prefix(name) {
        return prefix;
    }

    let head = drop_last_token(name);

    match head.split_once('\'') {
        Some((_, quoted)) => quoted.split('\'').next().unwrap_or(quoted),
        None => head,
    }
}

/// Everything before the last single space, or "" for a single token
fn drop_last_token(name: &str) -> &str {
    name.rsplit_once(' ').map(|(head, _)| head).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_action_name() {
        assert_eq!(
            extract_message("action 'Compiling foo.cc' ACTION_EXECUTE"),
            "Compiling foo.cc"
        );
        assert_eq!(
            extract_message("action 'Building deploy jar app.jar' x"),
            "Building deploy jar app.jar"
        );
    }

    #[test]
    fn test_quoted_name_without_trailing_word() {
        // The last token lives inside the quotes and is dropped with it
        assert_eq!(extract_message("action 'Compiling foo.cc'"), "Compiling");
    }

    #[test]
    fn test_plain_processing_name() {
        assert_eq!(extract_message("Compiling foo.cc"), "Compiling");
        assert_eq!(
            extract_message("Linking external/lib/libfoo.so"),
            "Linking"
        );
        assert_eq!(extract_message("Executing genrule //a:b"), "Executing genrule");
    }

    #[test]
    fn test_single_token_is_empty() {
        assert_eq!(extract_message("Compiling"), "");
        assert_eq!(extract_message(""), "");
    }

    #[test]
    fn test_special_case_prefixes() {
        assert_eq!(
            extract_message("Merging Kotlin output jar //foo:bar"),
            "Merging Kotlin output jar"
        );
        assert_eq!(
            extract_message("Extracting interface for jar bazel-out/lib.jar"),
            "Extracting interface for jar"
        );
        assert_eq!(
            extract_message("Symlinking virtual headers for //foo"),
            "Symlinking virtual headers"
        );
        assert_eq!(extract_message("ProtoCompile"), "ProtoCompile");
        assert_eq!(extract_message("KotlinCompile a b c"), "KotlinCompile");
    }

    #[test]
    fn test_merged_literal_is_a_single_prefix() {
        assert_eq!(
            extract_message("LinkingGenerating Descriptor Set proto/a.proto"),
            "LinkingGenerating Descriptor Set"
        );
        assert_eq!(special_case_prefix("Linking libfoo.so"), None);
        assert_eq!(special_case_prefix("Generating Descriptor Set a.proto"), None);
    }

    #[test]
    fn test_special_case_is_case_sensitive() {
        assert_eq!(special_case_prefix("protocompile foo"), None);
        assert_eq!(extract_message("protocompile foo"), "protocompile");
    }

    #[test]
    fn test_reapplication_keeps_shrinking() {
        let once = extract_message("Compiling some/dir foo.cc");
        assert_eq!(once, "Compiling some/dir");
        assert_eq!(extract_message(once), "Compiling");
        assert_eq!(extract_message(extract_message(once)), "");
    }

    #[test]
    fn test_double_space_splits_on_single_space() {
        assert_eq!(extract_message("a  b"), "a ");
    }
}
