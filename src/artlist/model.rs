use crate::error::{ArtlistError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Stable identifier of a stored artwork. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| ArtlistError::InvalidValue(format!("'{}' is not an artwork id", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Available,
    #[serde(rename = "On Hold")]
    OnHold,
    Sold,
    #[serde(rename = "NFS")]
    Nfs,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Available, Status::OnHold, Status::Sold, Status::Nfs];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::OnHold => "On Hold",
            Status::Sold => "Sold",
            Status::Nfs => "NFS",
        }
    }

    /// CSS class used by the printable summary ("On Hold" -> "on-hold").
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::OnHold => "on-hold",
            Status::Sold => "sold",
            Status::Nfs => "nfs",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "available" => Ok(Status::Available),
            "onhold" => Ok(Status::OnHold),
            "sold" => Ok(Status::Sold),
            "nfs" => Ok(Status::Nfs),
            _ => Err(ArtlistError::InvalidValue(format!(
                "unknown status '{}' (expected one of: Available, On Hold, Sold, NFS)",
                s
            ))),
        }
    }
}

/// An attached image, kept as raw bytes plus its media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Builds a photo from file contents, deciding the media type by extension.
    /// Anything that is not an image is rejected.
    pub fn from_file_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let mime = match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            "svg" => "image/svg+xml",
            _ => {
                return Err(ArtlistError::InvalidValue(format!(
                    "{} is not an image file",
                    path.display()
                )))
            }
        };
        Ok(Self::new(mime, bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// The editable text fields of an artwork, in export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Number,
    Artist,
    Title,
    Concept,
    Medium,
    Size,
    Price,
    Status,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Number,
        Field::Artist,
        Field::Title,
        Field::Concept,
        Field::Medium,
        Field::Size,
        Field::Price,
        Field::Status,
    ];

    /// Internal key, also accepted as a column header on import.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Number => "number",
            Field::Artist => "artist",
            Field::Title => "title",
            Field::Concept => "concept",
            Field::Medium => "medium",
            Field::Size => "size",
            Field::Price => "price",
            Field::Status => "status",
        }
    }

    /// Localized column header used for export and printing.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Number => "編號",
            Field::Artist => "藝術家",
            Field::Title => "作品名稱",
            Field::Concept => "創作理念",
            Field::Medium => "媒材",
            Field::Size => "尺寸",
            Field::Price => "標價",
            Field::Status => "狀態",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s) || f.label() == s)
            .ok_or_else(|| ArtlistError::InvalidValue(format!("unknown field '{}'", s)))
    }
}

/// The field set of an artwork without its identity. Also serves as the
/// working copy (draft) during an edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub photo: Option<Photo>,
    pub number: String,
    pub artist: String,
    pub title: String,
    pub concept: String,
    pub medium: String,
    pub size: String,
    pub price: String,
    pub status: Status,
}

impl Artwork {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Number => &self.number,
            Field::Artist => &self.artist,
            Field::Title => &self.title,
            Field::Concept => &self.concept,
            Field::Medium => &self.medium,
            Field::Size => &self.size,
            Field::Price => &self.price,
            Field::Status => self.status.label(),
        }
    }

    /// Replaces one field. Text fields take any value; status must parse.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            Field::Number => self.number = value,
            Field::Artist => self.artist = value,
            Field::Title => self.title = value,
            Field::Concept => self.concept = value,
            Field::Medium => self.medium = value,
            Field::Size => self.size = value,
            Field::Price => self.price = value,
            Field::Status => self.status = value.parse()?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub artwork: Artwork,
}

impl Record {
    pub fn new(id: RecordId, artwork: Artwork) -> Self {
        Self { id, artwork }
    }
}
