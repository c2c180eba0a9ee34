//! Discord webhook payload types.

use serde::Serialize;

/// Embed color for resources whose status reports them available.
pub const COLOR_AVAILABLE: u32 = 0x00FF00;

/// Embed color for every other status (occupied, in use, ...).
pub const COLOR_UNAVAILABLE: u32 = 0xFF0000;

/// Body of a webhook execution request.
///
/// `embeds` is omitted entirely for plain-text messages.
#[derive(Debug, Serialize)]
pub struct WebhookMessage<'a> {
    pub content: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<&'a Embed>,
}

impl<'a> WebhookMessage<'a> {
    pub fn new(content: &'a str, embed: Option<&'a Embed>) -> Self {
        Self {
            content,
            embeds: embed.into_iter().collect(),
        }
    }
}

/// Rich-content block rendered by the chat client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// RGB color as a 24-bit integer.
    pub color: u32,
    /// Absent for resources without a dedicated image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

/// Name/value pair shown under the embed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    /// Lets the client lay short fields side by side.
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_embed(thumbnail: Option<&str>) -> Embed {
        Embed {
            title: "Resource Found".to_string(),
            description: "**Type:** Farm".to_string(),
            color: COLOR_AVAILABLE,
            thumbnail: thumbnail.map(|url| EmbedThumbnail {
                url: url.to_string(),
            }),
            fields: vec![EmbedField::inline("Code", "20100105")],
        }
    }

    #[test]
    fn plain_message_omits_embeds() {
        let message = WebhookMessage::new("hello", None);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, json!({ "content": "hello" }));
    }

    #[test]
    fn message_wraps_embed_in_array() {
        let embed = sample_embed(Some("https://cdn.example.com/mine.png"));
        let message = WebhookMessage::new("", Some(&embed));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            json!({
                "content": "",
                "embeds": [{
                    "title": "Resource Found",
                    "description": "**Type:** Farm",
                    "color": 65280,
                    "thumbnail": { "url": "https://cdn.example.com/mine.png" },
                    "fields": [{ "name": "Code", "value": "20100105", "inline": true }]
                }]
            })
        );
    }

    #[test]
    fn embed_without_thumbnail_omits_key() {
        let json = serde_json::to_string(&sample_embed(None)).unwrap();
        assert!(!json.contains("thumbnail"));
    }

    #[test]
    fn colors_match_discord_rgb_values() {
        assert_eq!(COLOR_AVAILABLE, 65280);
        assert_eq!(COLOR_UNAVAILABLE, 16711680);
    }
}
