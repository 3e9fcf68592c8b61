//! Request target construction
//!
//! Bark reads the message positionally from the path:
//! `{base}/{key}[/{title}[/{subtitle}]]/{body}` with the optional extras in the
//! query string. A subtitle is only placed when a title is placed as well.

use std::collections::BTreeMap;
use tracing::trace;
use url::form_urlencoded;

use crate::notification::Notification;

/// Percent-encode a single path segment (space as `%20`, `/` as `%2F`)
pub fn escape_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Path segments after the base URL, already escaped
pub fn path_segments(key: &str, notification: &Notification) -> Vec<String> {
    let title = notification.title.as_deref().unwrap_or_default();
    let subtitle = notification.subtitle.as_str();

    let mut segments = vec![key.to_string()];
    if !title.is_empty() {
        segments.push(escape_segment(title));
        if !subtitle.is_empty() {
            segments.push(escape_segment(subtitle));
        }
    } else if !subtitle.is_empty() {
        trace!("subtitle set without a title, leaving it out of the path");
    }
    segments.push(escape_segment(&notification.body));
    segments
}

/// `.` and `..` survive escaping but are collapsed by URL parsing, which would
/// shift every later segment.
pub fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Build the full request target for a notification
pub fn build_target(base_url: &str, key: &str, notification: &Notification) -> String {
    let path = path_segments(key, notification).join("/");
    let query = build_query(notification);

    let mut target = format!("{}/{path}", base_url.trim_end_matches('/'));
    if !query.is_empty() {
        target.push('?');
        target.push_str(&query);
    }
    target
}

/// Encode the optional parameters, sorted by name
fn build_query(notification: &Notification) -> String {
    let mut params: BTreeMap<&str, &str> = BTreeMap::new();

    if !notification.icon.is_empty() {
        params.insert("icon", &notification.icon);
    }
    if !notification.sound.is_empty() {
        params.insert("sound", &notification.sound);
    }
    if let Some(level) = notification.level {
        params.insert("level", level.as_str());
    }
    if notification.is_critical {
        params.insert("level", "critical");
    }

    if params.is_empty() {
        return String::new();
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
