//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::repository::errors::RepositoryResult;
use crate::repository::{RecordReader, RecordRemover, Table, TableRecord};

mock! {
    pub Repository {}

    impl RecordReader for Repository {
        fn list_records<T: TableRecord>(&self) -> RepositoryResult<Vec<T>>;
    }

    impl RecordRemover for Repository {
        fn delete_record(&self, table: Table, id: i32) -> RepositoryResult<()>;
        fn delete_records(&self, table: Table, ids: &[i32]) -> RepositoryResult<usize>;
    }
}
