//! Record source backed by saved API responses.
//!
//! Each table lives in `<data_dir>/<slug>.json` and holds exactly what the
//! list endpoint returned: the `{ success, data, error, message }` envelope.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::dto::api::ApiResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{RecordReader, RecordRemover, Table, TableRecord};

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    data_dir: PathBuf,
}

impl JsonFileRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn table_path(&self, table: Table) -> PathBuf {
        self.data_dir.join(format!("{}.json", table.slug()))
    }

    fn read_envelope(&self, table: Table) -> RepositoryResult<ApiResponse<Vec<Value>>> {
        let path = self.table_path(table);
        let text = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                log::error!("Snapshot for {table} not found at {}", path.display());
                RepositoryError::NotFound
            } else {
                RepositoryError::from(err)
            }
        })?;
        let text = text.trim_start_matches('\u{feff}');
        Ok(serde_json::from_str(text)?)
    }

    fn write_envelope(
        &self,
        table: Table,
        envelope: &ApiResponse<Vec<Value>>,
    ) -> RepositoryResult<()> {
        let text = serde_json::to_string_pretty(envelope)?;
        fs::write(self.table_path(table), text)?;
        Ok(())
    }

    /// Rows of `table` as stored, failing when the saved response was an error.
    fn read_rows(&self, table: Table) -> RepositoryResult<Vec<Value>> {
        let envelope = self.read_envelope(table)?;
        envelope
            .into_data()
            .map(Option::unwrap_or_default)
            .map_err(RepositoryError::Api)
    }

    fn remove_rows(&self, table: Table, ids: &BTreeSet<i32>) -> RepositoryResult<usize> {
        let rows = self.read_rows(table)?;
        let before = rows.len();
        let kept: Vec<Value> = rows
            .into_iter()
            .filter(|row| !row_id(row).is_some_and(|id| ids.contains(&id)))
            .collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.write_envelope(table, &ApiResponse::ok(kept))?;
        }
        Ok(removed)
    }
}

fn row_id(row: &Value) -> Option<i32> {
    row.get("id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok())
}

/// A row the list cannot show is reported and left out instead of hiding
/// the whole table.
fn decode_row<T: TableRecord>(row: Value) -> RepositoryResult<T> {
    let row: T::Row = serde_json::from_value(row)?;
    Ok(T::from_row(row)?)
}

impl RecordReader for JsonFileRepository {
    fn list_records<T: TableRecord>(&self) -> RepositoryResult<Vec<T>> {
        let rows = self.read_rows(T::TABLE)?;
        let mut records: Vec<T> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.get("id").cloned().unwrap_or(Value::Null);
                decode_row::<T>(row)
                    .map_err(|err| log::warn!("Skipping {} row with id {id}: {err}", T::TABLE))
                    .ok()
            })
            .collect();
        T::arrange(&mut records);
        log::debug!("Loaded {} {} records", records.len(), T::TABLE);
        Ok(records)
    }
}

impl RecordRemover for JsonFileRepository {
    fn delete_record(&self, table: Table, id: i32) -> RepositoryResult<()> {
        match self.remove_rows(table, &BTreeSet::from([id]))? {
            0 => Err(RepositoryError::NotFound),
            _ => {
                log::info!("Deleted {table} record {id}");
                Ok(())
            }
        }
    }

    fn delete_records(&self, table: Table, ids: &[i32]) -> RepositoryResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let ids: BTreeSet<i32> = ids.iter().copied().collect();
        let removed = self.remove_rows(table, &ids)?;
        log::info!("Deleted {removed} {table} record(s)");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::Region;
    use serde_json::json;

    fn repository_with(table: Table, body: Value) -> (tempfile::TempDir, JsonFileRepository) {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = JsonFileRepository::new(dir.path());
        fs::write(repo.table_path(table), body.to_string()).expect("write snapshot");
        (dir, repo)
    }

    #[test]
    fn failed_envelope_surfaces_api_error() {
        let (_dir, repo) = repository_with(
            Table::Region,
            json!({"success": false, "error": "relation \"region\" does not exist"}),
        );
        let err = repo.list_records::<Region>().unwrap_err();
        assert!(matches!(err, RepositoryError::Api(ref msg) if msg.contains("does not exist")));
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = JsonFileRepository::new(dir.path());
        assert!(matches!(
            repo.list_records::<Region>(),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let (_dir, repo) = repository_with(
            Table::Region,
            json!({"success": true, "data": [
                {"id": 1, "region_name": "NCR"},
                {"id": 2, "region_name": null},
                {"region_name": "No id"},
                {"id": 3, "region_name": "CAR"}
            ]}),
        );
        let ids: Vec<i32> = repo
            .list_records::<Region>()
            .expect("regions")
            .iter()
            .map(|region| region.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn success_without_data_is_an_empty_list() {
        let (_dir, repo) = repository_with(Table::Region, json!({"success": true}));
        assert!(repo.list_records::<Region>().expect("empty list").is_empty());
    }

    #[test]
    fn delete_record_rewrites_the_snapshot() {
        let (_dir, repo) = repository_with(
            Table::Region,
            json!({"success": true, "data": [
                {"id": 1, "region_name": "NCR"},
                {"id": 2, "region_name": "CAR"}
            ]}),
        );
        repo.delete_record(Table::Region, 1).expect("deleted");
        let regions = repo.list_records::<Region>().expect("regions");
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].region_name.as_str(), "CAR");
        assert!(matches!(
            repo.delete_record(Table::Region, 1),
            Err(RepositoryError::NotFound)
        ));
    }
}
