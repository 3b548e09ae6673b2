//! The sink boundary.

use crate::error::ImportError;
use async_trait::async_trait;

/// External collaborator that durably stores one batch of rows.
///
/// The importer is agnostic to the wire protocol; it hands over the
/// table name, the ordered column list and pre-rendered `(v1,...,vn)`
/// row-tuple literals.
#[async_trait]
pub trait Sink: Send {
    async fn insert_batch(
        &mut self,
        table: &str,
        columns: &[String],
        rows: &[String],
    ) -> Result<(), ImportError>;
}
