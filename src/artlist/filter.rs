//! Search filtering over the record list.
//!
//! Matching is a case-insensitive substring test. The filter is a pure view:
//! it never touches the store and keeps the relative order of the records it
//! lets through.

use crate::error::{ArtlistError, Result};
use crate::model::{Field, Record};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Artist,
    Title,
    Medium,
    Status,
}

impl SearchScope {
    /// Fields a query is matched against under this scope.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            SearchScope::All => &[
                Field::Artist,
                Field::Title,
                Field::Medium,
                Field::Concept,
                Field::Number,
            ],
            SearchScope::Artist => &[Field::Artist],
            SearchScope::Title => &[Field::Title],
            SearchScope::Medium => &[Field::Medium],
            SearchScope::Status => &[Field::Status],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Artist => "artist",
            SearchScope::Title => "title",
            SearchScope::Medium => "medium",
            SearchScope::Status => "status",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SearchScope::All),
            "artist" => Ok(SearchScope::Artist),
            "title" => Ok(SearchScope::Title),
            "medium" => Ok(SearchScope::Medium),
            "status" => Ok(SearchScope::Status),
            other => Err(ArtlistError::InvalidValue(format!(
                "unknown search scope '{}' (expected all, artist, title, medium or status)",
                other
            ))),
        }
    }
}

/// The current search: free text plus the field scope it applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub scope: SearchScope,
}

impl Query {
    pub fn new(text: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            text: text.into(),
            scope,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        self.scope
            .fields()
            .iter()
            .any(|f| record.artwork.get(*f).to_lowercase().contains(&needle))
    }
}

/// Returns the records passing `query`, in their original order.
pub fn filter_records<'a, I>(records: I, query: &Query) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| query.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artwork, RecordId, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn record(id: u64, f: impl FnOnce(&mut Artwork)) -> Record {
        let mut art = Artwork::default();
        f(&mut art);
        Record::new(RecordId(id), art)
    }

    #[test]
    fn empty_query_passes_everything_in_order() {
        let store = StoreFixture::new().with_artworks(5).store;
        let out = filter_records(store.list(), &Query::default());
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        let all: Vec<_> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn scoped_search_on_cjk_text() {
        let store = StoreFixture::new().with_sample().store;
        let hit = filter_records(store.list(), &Query::new("晨", SearchScope::Title));
        assert_eq!(hit.len(), 1);
        let miss = filter_records(store.list(), &Query::new("張", SearchScope::Artist));
        assert!(miss.is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let records = vec![record(1, |a| a.medium = "Oil on Canvas".into())];
        assert_eq!(
            filter_records(&records, &Query::new("CANVAS", SearchScope::Medium)).len(),
            1
        );
    }

    #[test]
    fn all_scope_covers_concept_and_number_but_not_price() {
        let records = vec![
            record(1, |a| a.concept = "morning light".into()),
            record(2, |a| a.number = "AW-LIGHT".into()),
            record(3, |a| a.price = "light price".into()),
            record(4, |a| a.size = "light size".into()),
        ];
        let ids: Vec<_> = filter_records(&records, &Query::new("light", SearchScope::All))
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn specific_scope_ignores_other_fields() {
        let records = vec![record(1, |a| {
            a.title = "Blue".into();
            a.artist = "Nobody".into();
        })];
        assert!(filter_records(&records, &Query::new("blue", SearchScope::Artist)).is_empty());
    }

    #[test]
    fn status_scope_matches_display_label() {
        let records = vec![
            record(1, |a| a.status = Status::OnHold),
            record(2, |a| a.status = Status::Sold),
        ];
        let hits = filter_records(&records, &Query::new("on h", SearchScope::Status));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, RecordId(1));
    }

    #[test]
    fn scope_parses_case_insensitively() {
        assert_eq!("Artist".parse::<SearchScope>().unwrap(), SearchScope::Artist);
        assert!("price".parse::<SearchScope>().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = (String, String, String, String)> {
            ("[a-cA-C ]{0,6}", "[a-cA-C ]{0,6}", "[a-cA-C ]{0,6}", "[a-cA-C ]{0,6}")
        }

        fn arb_scope() -> impl Strategy<Value = SearchScope> {
            prop_oneof![
                Just(SearchScope::All),
                Just(SearchScope::Artist),
                Just(SearchScope::Title),
                Just(SearchScope::Medium),
                Just(SearchScope::Status),
            ]
        }

        proptest! {
            #[test]
            fn filtering_is_idempotent(
                rows in proptest::collection::vec(arb_record(), 0..20),
                text in "[a-cA-C]{0,2}",
                scope in arb_scope(),
            ) {
                let records: Vec<Record> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (artist, title, medium, concept))| {
                        record(i as u64 + 1, |a| {
                            a.artist = artist;
                            a.title = title;
                            a.medium = medium;
                            a.concept = concept;
                        })
                    })
                    .collect();
                let query = Query::new(text, scope);
                let once = filter_records(&records, &query);
                let twice = filter_records(once.iter().copied(), &query);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
