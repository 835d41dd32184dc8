use crate::commands::{CmdMessage, CmdResult};
use crate::filter::{filter_records, Query};
use crate::store::DataStore;

/// Lists the records visible under `query`, in store order.
pub fn run<S: DataStore>(store: &S, query: &Query) -> CmdResult {
    let listed: Vec<_> = filter_records(store.list(), query)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if !query.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} matching artwork(s) for '{}' in {}",
            listed.len(),
            query.text,
            query.scope
        )));
    }
    result.with_listed_records(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchScope;
    use crate::model::Artwork;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_everything_without_a_query() {
        let store = StoreFixture::new().with_artworks(3).store;
        let result = run(&store, &Query::default());
        assert_eq!(result.listed_records.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_match_count() {
        let mut dusk = Artwork::new("日落");
        dusk.artist = "李四".into();
        let store = StoreFixture::new()
            .with_sample()
            .with_artwork(dusk)
            .store;
        let result = run(&store, &Query::new("日", SearchScope::Title));
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].artwork.title, "日落");
        assert!(result.messages[0].content.starts_with("1 matching"));
    }
}
