use crate::config::ArtlistConfig;
use crate::model::{Artwork, Record};
use crate::session::EditTarget;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod photo;
pub mod print;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Snapshot of the open draft, returned by commands that touch the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub target: EditTarget,
    pub artwork: Artwork,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub draft: Option<DraftView>,
    pub written_path: Option<PathBuf>,
    pub config: Option<ArtlistConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_draft(mut self, target: EditTarget, artwork: Artwork) -> Self {
        self.draft = Some(DraftView { target, artwork });
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ArtlistConfig) -> Self {
        self.config = Some(config);
        self
    }
}
