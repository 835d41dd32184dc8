use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: RecordId) -> Result<CmdResult> {
    let record = store.get(id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
