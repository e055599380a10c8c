//! Channel inference from free-text touch content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords checked for each channel, in priority order.
const LINKEDIN_KEYWORDS: [&str; 1] = ["linkedin"];
const EMAIL_KEYWORDS: [&str; 2] = ["email", "assunto:"];
const WHATSAPP_KEYWORDS: [&str; 1] = ["whatsapp"];

// `[14:32, 02/02/2024]` prefix of exported chat logs
static CHAT_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\d{2}:\d{2}, \d{2}/\d{2}/\d{4}\]").expect("Invalid regex: chat timestamp")
});

/// Outreach medium of a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    LinkedIn,
    Email,
    WhatsApp,
    Other,
}

impl Channel {
    /// All channels in reporting order.
    pub const ALL: [Channel; 4] = [
        Channel::LinkedIn,
        Channel::Email,
        Channel::WhatsApp,
        Channel::Other,
    ];

    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::LinkedIn => "linkedin",
            Channel::Email => "email",
            Channel::WhatsApp => "whatsapp",
            Channel::Other => "other",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify touch text. Case-insensitive; first matching rule wins.
///
/// 1. mentions LinkedIn
/// 2. mentions email, or carries an `Assunto:` subject line
/// 3. mentions WhatsApp, or starts like an exported chat line
/// 4. anything else (including empty text) is [`Channel::Other`]
pub fn classify_channel(text: &str) -> Channel {
    if text.trim().is_empty() {
        return Channel::Other;
    }
    let t = text.to_lowercase();

    if LINKEDIN_KEYWORDS.iter().any(|k| t.contains(k)) {
        Channel::LinkedIn
    } else if EMAIL_KEYWORDS.iter().any(|k| t.contains(k)) {
        Channel::Email
    } else if WHATSAPP_KEYWORDS.iter().any(|k| t.contains(k)) || CHAT_TIMESTAMP.is_match(&t) {
        Channel::WhatsApp
    } else {
        Channel::Other
    }
}
