//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! owner of session state: the record store, the edit session, the current
//! search query and the configuration all live in [`ArtlistApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (reads photo and import files, picks table formats
//!   from extensions, builds default export names)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `ArtlistApi<S: DataStore>` is generic over the storage backend, so the
//! facade can be exercised against any store the caller provides.

use crate::commands;
use crate::config::ArtlistConfig;
use crate::error::{ArtlistError, Result};
use crate::filter::{filter_records, Query, SearchScope};
use crate::model::{Artwork, Field, Photo, Record, RecordId};
use crate::session::{EditSession, EditTarget};
use crate::store::DataStore;
use crate::table::TableFormat;
use chrono::{Local, NaiveDate};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DraftView, MessageLevel};

/// The main API facade for artlist operations.
///
/// All UI clients should interact through this API.
pub struct ArtlistApi<S: DataStore> {
    store: S,
    session: EditSession,
    query: Query,
    config: ArtlistConfig,
    config_dir: Option<PathBuf>,
}

impl<S: DataStore> ArtlistApi<S> {
    /// `config_dir` is where `config` changes are saved; `None` keeps them
    /// in memory only.
    pub fn new(store: S, config: ArtlistConfig, config_dir: Option<PathBuf>) -> Self {
        Self {
            store,
            session: EditSession::new(),
            query: Query::default(),
            config,
            config_dir,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn settings(&self) -> &ArtlistConfig {
        &self.config
    }

    /// Records passing the current query, in store order.
    pub fn visible(&self) -> Vec<&Record> {
        filter_records(self.store.list(), &self.query)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.store, &self.query)
    }

    /// Replaces the current query and lists what it lets through.
    pub fn search(&mut self, text: &str, scope: SearchScope) -> CmdResult {
        self.query = Query::new(text, scope);
        self.list()
    }

    pub fn clear_search(&mut self) -> CmdResult {
        self.query = Query::default();
        self.list()
    }

    pub fn show(&self, id: RecordId) -> Result<CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn create_artwork(&mut self, artwork: Artwork) -> CmdResult {
        commands::create::run(&mut self.store, artwork)
    }

    pub fn begin_edit(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::edit::begin_edit(&self.store, &mut self.session, id)
    }

    pub fn begin_add(&mut self) -> Result<CmdResult> {
        commands::edit::begin_add(&mut self.session)
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<CmdResult> {
        commands::edit::set_field(&mut self.session, field, value)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::edit::save(&mut self.store, &mut self.session)
    }

    pub fn add_save(&mut self) -> Result<CmdResult> {
        commands::edit::add_save(&mut self.store, &mut self.session)
    }

    /// Saves whichever draft is open.
    pub fn commit(&mut self) -> Result<CmdResult> {
        commands::edit::commit(&mut self.store, &mut self.session)
    }

    pub fn cancel(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn draft(&self) -> CmdResult {
        commands::edit::current_draft(&self.session)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &self.session, id)
    }

    pub fn set_photo(&mut self, target: EditTarget, photo: Option<Photo>) -> Result<CmdResult> {
        commands::photo::attach(&mut self.store, &mut self.session, target, photo)
    }

    /// Reads an image file and attaches it to `target`.
    pub fn attach_photo(&mut self, target: EditTarget, path: &Path) -> Result<CmdResult> {
        let photo = Photo::from_file_bytes(path, fs::read(path)?)?;
        self.set_photo(target, Some(photo))
    }

    pub fn clear_photo(&mut self, target: EditTarget) -> Result<CmdResult> {
        self.set_photo(target, None)
    }

    pub fn import_document(&mut self, format: TableFormat, bytes: &[u8]) -> Result<CmdResult> {
        commands::import::run(&mut self.store, format, bytes)
    }

    /// Imports a file, picking the format from its extension.
    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        let format = TableFormat::from_path(path).ok_or_else(|| {
            ArtlistError::Import(format!(
                "{}: unsupported file type (expected .csv or .xlsx)",
                path.display()
            ))
        })?;
        let bytes = fs::read(path)?;
        self.import_document(format, &bytes)
    }

    /// Writes every record, ignoring the current query.
    pub fn export_document<W: Write>(&self, format: TableFormat, writer: W) -> Result<CmdResult> {
        commands::export::run(self.store.list(), format, &self.config.sheet_name, writer)
    }

    /// Exports to `path`, or to `<basename>_<YYYYMMDD>.<ext>` in the working
    /// directory when no path is given.
    pub fn export_file(&self, path: Option<&Path>) -> Result<CmdResult> {
        let (path, format) = match path {
            Some(p) => {
                let format = TableFormat::from_path(p).unwrap_or(self.config.export_format);
                (p.to_path_buf(), format)
            }
            None => {
                let format = self.config.export_format;
                let name = dated_file_name(
                    &self.config.export_basename,
                    Local::now().date_naive(),
                    format.extension(),
                );
                (PathBuf::from(name), format)
            }
        };
        // The target is only touched once the whole document exists.
        let mut bytes = Vec::new();
        let result = self.export_document(format, &mut bytes)?;
        fs::write(&path, bytes)?;
        Ok(result.with_written_path(path))
    }

    /// Writes the printable summary of the visible records.
    pub fn print_summary<W: Write>(&self, date: NaiveDate, writer: W) -> Result<CmdResult> {
        commands::print::run(self.visible(), &self.config.print_title, date, writer)
    }

    pub fn print_file(&self, path: Option<&Path>) -> Result<CmdResult> {
        let today = Local::now().date_naive();
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(dated_file_name(&self.config.print_title, today, "html")),
        };
        let mut bytes = Vec::new();
        let result = self.print_summary(today, &mut bytes)?;
        fs::write(&path, bytes)?;
        Ok(result.with_written_path(path))
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, self.config_dir.as_deref(), action)
    }
}

fn dated_file_name(basename: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", basename, date.format("%Y%m%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemoryStore;

    fn api_with(store: MemoryStore) -> ArtlistApi<MemoryStore> {
        ArtlistApi::new(store, ArtlistConfig::default(), None)
    }

    #[test]
    fn search_sets_query_and_clear_resets_it() {
        let mut api = api_with(StoreFixture::new().with_sample().with_artworks(2).store);
        let result = api.search("晨", SearchScope::Title);
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(api.visible().len(), 1);

        let result = api.clear_search();
        assert_eq!(result.listed_records.len(), 3);
        assert!(api.query().is_empty());
    }

    #[test]
    fn create_artwork_appends_directly() {
        let mut api = api_with(StoreFixture::new().with_sample().store);
        let result = api.create_artwork(Artwork::new("夜曲"));
        assert_eq!(result.affected_records[0].id, RecordId(2));
        assert!(api.session().is_idle());
        assert_eq!(api.list().listed_records.len(), 2);
    }

    #[test]
    fn add_flow_through_commit() {
        let mut api = api_with(StoreFixture::new().with_artworks(1).store);
        api.begin_add().unwrap();
        api.set_field(Field::Title, "日落").unwrap();
        api.set_field(Field::Status, "on hold").unwrap();
        let result = api.commit().unwrap();

        let record = &result.affected_records[0];
        assert_eq!(record.id, RecordId(2));
        assert_eq!(record.artwork.status, Status::OnHold);
        assert!(api.session().is_idle());
    }

    #[test]
    fn edit_flow_through_commit() {
        let mut api = api_with(StoreFixture::new().with_sample().store);
        api.begin_edit(RecordId(1)).unwrap();
        api.set_field(Field::Price, "NT$ 30,000").unwrap();
        api.commit().unwrap();
        assert_eq!(api.store().list()[0].artwork.price, "NT$ 30,000");
    }

    #[test]
    fn export_ignores_query_but_print_follows_it() {
        let mut api = api_with(StoreFixture::new().with_sample().with_artworks(2).store);
        api.search("晨", SearchScope::Title);

        let mut csv = Vec::new();
        api.export_document(TableFormat::Csv, &mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        assert_eq!(csv.lines().count(), 4);

        let mut html = Vec::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        api.print_summary(date, &mut html).unwrap();
        let html = String::from_utf8(html).unwrap();
        assert!(html.contains("總計：1 件作品"));
    }

    #[test]
    fn import_file_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        fs::write(&path, "作品名稱,狀態\n夜曲,Sold\n").unwrap();

        let mut api = api_with(MemoryStore::new());
        api.import_file(&path).unwrap();
        assert_eq!(api.store().list()[0].artwork.title, "夜曲");
        assert_eq!(api.store().list()[0].artwork.status, Status::Sold);

        let txt = dir.path().join("list.txt");
        fs::write(&txt, "x").unwrap();
        assert!(matches!(api.import_file(&txt), Err(ArtlistError::Import(_))));
    }

    #[test]
    fn export_file_uses_path_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let api = api_with(StoreFixture::new().with_sample().store);
        let result = api.export_file(Some(&path)).unwrap();
        assert_eq!(result.written_path.as_deref(), Some(path.as_path()));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("王小明"));
    }

    #[test]
    fn failed_export_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        fs::write(&path, "previous export").unwrap();

        let mut art = Artwork::new("long");
        art.concept = "x".repeat(40_000);
        let api = api_with(StoreFixture::new().with_artwork(art).store);

        assert!(matches!(
            api.export_file(Some(&path)),
            Err(ArtlistError::Export(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous export");
    }

    #[test]
    fn attach_photo_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("notes.txt");
        fs::write(&doc, "hello").unwrap();
        let img = dir.path().join("cover.PNG");
        fs::write(&img, [0x89, b'P', b'N', b'G']).unwrap();

        let mut api = api_with(StoreFixture::new().with_sample().store);
        let target = EditTarget::Existing(RecordId(1));
        assert!(matches!(
            api.attach_photo(target, &doc),
            Err(ArtlistError::InvalidValue(_))
        ));
        api.attach_photo(target, &img).unwrap();
        let photo = api.store().list()[0].artwork.photo.clone().unwrap();
        assert_eq!(photo.mime, "image/png");

        api.clear_photo(target).unwrap();
        assert!(api.store().list()[0].artwork.photo.is_none());
    }

    #[test]
    fn config_changes_stay_in_memory_without_dir() {
        let mut api = api_with(MemoryStore::new());
        api.config(ConfigAction::Set("sheet-name".into(), "Works".into()))
            .unwrap();
        assert_eq!(api.settings().sheet_name, "Works");
    }

    #[test]
    fn dated_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            dated_file_name("藝術作品清單", date, "xlsx"),
            "藝術作品清單_20240305.xlsx"
        );
    }
}
