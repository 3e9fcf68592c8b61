//! Notification model
//!
//! A [`Notification`] is built per send from a body plus a chain of `with_*`
//! calls. Calls apply in order, so a later call touching the same field wins.

use std::fmt;
use std::str::FromStr;

use crate::errors::BarkError;

/// Title shown by the device when the sender does not set one
pub const DEFAULT_TITLE: &str = "无名消息";

/// Interruption level of a notification on the receiving device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Default level, lights up the screen
    Active,
    /// Breaks through focus modes
    TimeSensitive,
    /// Added to the notification list without lighting up the screen
    Passive,
    /// Ignores silent and do-not-disturb settings
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Active => "active",
            Level::TimeSensitive => "timeSensitive",
            Level::Passive => "passive",
            Level::Critical => "critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = BarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Level::Active),
            "timesensitive" | "time-sensitive" | "time_sensitive" => Ok(Level::TimeSensitive),
            "passive" => Ok(Level::Passive),
            "critical" => Ok(Level::Critical),
            _ => Err(BarkError::InvalidConfigValue {
                key: "level".to_string(),
                value: s.to_string(),
                source: None,
            }),
        }
    }
}

/// A single push notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub(crate) title: Option<String>,
    pub(crate) subtitle: String,
    pub(crate) body: String,
    pub(crate) icon: String,
    pub(crate) sound: String,
    pub(crate) level: Option<Level>,
    pub(crate) is_critical: bool,
}

impl Notification {
    /// Create a notification carrying only a body
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle. Only sent when a non-empty title is present too.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the icon URL (iOS 15+)
    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon = icon_url.into();
        self
    }

    /// Set the sound identifier
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = sound.into();
        self
    }

    /// Set an explicit interruption level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Mark as time-sensitive
    pub fn time_sensitive(self) -> Self {
        self.with_level(Level::TimeSensitive)
    }

    /// Mark as a critical alert. The critical flag sticks even if a later
    /// call changes the level.
    pub fn critical(mut self) -> Self {
        self.level = Some(Level::Critical);
        self.is_critical = true;
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Title as displayed, falling back to [`DEFAULT_TITLE`] when unset
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }

    /// Level that will be sent, with the critical flag taking precedence
    pub fn effective_level(&self) -> Option<Level> {
        if self.is_critical {
            Some(Level::Critical)
        } else {
            self.level
        }
    }

    pub fn is_critical(&self) -> bool {
        self.is_critical
    }
}
