//! Object reports and their embed presentation.
//!
//! Presentation is split in two steps: [`ResourceKind::classify`] maps the
//! object type to a kind, then the kind selects a title and, through a
//! [`ThumbnailSet`], an optional thumbnail.

use std::fmt::Display;

use super::payload::{COLOR_AVAILABLE, COLOR_UNAVAILABLE, Embed, EmbedField, EmbedThumbnail};
use crate::config::ThumbnailOverrides;

/// A map object found by the scanner, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectReport {
    pub object_type: String,
    pub code: String,
    pub level: String,
    pub location: String,
    pub status: String,
    /// Empty when the object is not occupied.
    pub occupied_info: String,
}

impl ObjectReport {
    pub fn new(
        object_type: impl Into<String>,
        code: impl Display,
        level: impl Display,
        location: impl Display,
        status: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            code: code.to_string(),
            level: level.to_string(),
            location: location.to_string(),
            status: status.into(),
            occupied_info: String::new(),
        }
    }

    pub fn with_occupied_info(mut self, occupied_info: impl Into<String>) -> Self {
        self.occupied_info = occupied_info.into();
        self
    }

    /// Green when the status mentions "Available" anywhere, red otherwise.
    pub fn color(&self) -> u32 {
        if self.status.contains("Available") {
            COLOR_AVAILABLE
        } else {
            COLOR_UNAVAILABLE
        }
    }

    /// The occupation details replace the type line when present.
    pub fn description(&self) -> String {
        if self.occupied_info.is_empty() {
            format!("**Type:** {}", self.object_type)
        } else {
            format!("**Occupied Information:**\n{}", self.occupied_info)
        }
    }

    /// Code, Level, Location, Status, in that order, all inline.
    pub fn fields(&self) -> Vec<EmbedField> {
        vec![
            EmbedField::inline("Code", self.code.as_str()),
            EmbedField::inline("Level", self.level.as_str()),
            EmbedField::inline("Location", self.location.as_str()),
            EmbedField::inline("Status", self.status.as_str()),
        ]
    }

    pub fn kind(&self) -> ResourceKind {
        ResourceKind::classify(&self.object_type)
    }

    /// Build the embed for this report using the given thumbnail set.
    pub fn to_embed(&self, thumbnails: &ThumbnailSet) -> Embed {
        let kind = self.kind();
        Embed {
            title: kind.title().to_string(),
            description: self.description(),
            color: self.color(),
            thumbnail: thumbnails.url(kind).map(|url| EmbedThumbnail {
                url: url.to_string(),
            }),
            fields: self.fields(),
        }
    }
}

/// Resource classification derived from the object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    CrystalMine,
    DragonSoulCavern,
    Generic,
}

impl ResourceKind {
    /// Substring match on the object type; the first match wins.
    pub fn classify(object_type: &str) -> Self {
        if object_type.contains("Crystal Mine") {
            ResourceKind::CrystalMine
        } else if object_type.contains("Dragon Soul Cavern") {
            ResourceKind::DragonSoulCavern
        } else {
            ResourceKind::Generic
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::CrystalMine => "**Crystal Mine Found!**",
            ResourceKind::DragonSoulCavern => "**Dragon Soul Cavern Found!**",
            ResourceKind::Generic => "Resource Found",
        }
    }
}

/// The two report destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportVariant {
    /// Filtered finds worth an alert.
    ObjectLog,
    /// Every resource, regardless of type or level.
    AllResources,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 2] = [ReportVariant::ObjectLog, ReportVariant::AllResources];

    pub fn name(self) -> &'static str {
        match self {
            ReportVariant::ObjectLog => "object_log",
            ReportVariant::AllResources => "all_resources",
        }
    }

    pub fn default_thumbnails(self) -> ThumbnailSet {
        match self {
            ReportVariant::ObjectLog => ThumbnailSet::object_log(),
            ReportVariant::AllResources => ThumbnailSet::all_resources(),
        }
    }
}

impl Display for ReportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Thumbnail URL per resource kind. [`ResourceKind::Generic`] never has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSet {
    pub crystal_mine: Option<String>,
    pub dragon_soul_cavern: Option<String>,
}

const OBJECT_LOG_CRYSTAL_MINE: &str =
    "https://media.discordapp.net/attachments/1351881630825840725/1352589455177027635/crystal_mine.png";
const OBJECT_LOG_DRAGON_SOUL: &str =
    "https://media.discordapp.net/attachments/1351881630825840725/1352589526786379776/dragon_soul.png";
const ALL_RESOURCES_CRYSTAL_MINE: &str =
    "https://media.discordapp.net/attachments/1349663748339531837/1350496588614602752/crystal_mine.png";
const ALL_RESOURCES_DRAGON_SOUL: &str =
    "https://media.discordapp.net/attachments/1349663748339531837/1350496589139148810/dragon_soul.png";

impl ThumbnailSet {
    pub fn object_log() -> Self {
        Self {
            crystal_mine: Some(OBJECT_LOG_CRYSTAL_MINE.to_string()),
            dragon_soul_cavern: Some(OBJECT_LOG_DRAGON_SOUL.to_string()),
        }
    }

    pub fn all_resources() -> Self {
        Self {
            crystal_mine: Some(ALL_RESOURCES_CRYSTAL_MINE.to_string()),
            dragon_soul_cavern: Some(ALL_RESOURCES_DRAGON_SOUL.to_string()),
        }
    }

    /// Replace the entries that the overrides set, keep the rest.
    pub fn with_overrides(mut self, overrides: &ThumbnailOverrides) -> Self {
        if let Some(url) = &overrides.crystal_mine {
            self.crystal_mine = Some(url.clone());
        }
        if let Some(url) = &overrides.dragon_soul_cavern {
            self.dragon_soul_cavern = Some(url.clone());
        }
        self
    }

    pub fn url(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::CrystalMine => self.crystal_mine.as_deref(),
            ResourceKind::DragonSoulCavern => self.dragon_soul_cavern.as_deref(),
            ResourceKind::Generic => None,
        }
    }
}
