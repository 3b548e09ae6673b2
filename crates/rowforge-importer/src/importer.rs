//! The import loop.

use crate::batch::build_batch;
use crate::error::ImportError;
use crate::sink::Sink;
use rowforge_generator::{ColumnSpec, Formatter, GeneratorRegistry, SpecError};
use std::collections::BTreeMap;

/// Build the ordered column list and one formatter slot per column.
///
/// The `BTreeMap` iterates alphabetically by column name, which fixes
/// both the insert header order and the value serialization order.
pub fn prepare_columns(
    registry: &GeneratorRegistry,
    columns: &BTreeMap<String, ColumnSpec>,
) -> Result<(Vec<String>, Vec<Formatter>), SpecError> {
    let mut names = Vec::with_capacity(columns.len());
    let mut slots = Vec::with_capacity(columns.len());
    for (name, spec) in columns {
        let gen = registry.resolve(name, spec)?;
        names.push(name.clone());
        slots.push(Formatter::new(gen, spec.format.clone()));
    }
    Ok((names, slots))
}

/// Drives the whole pipeline: builds batches and hands them to the
/// sink until the requested record count is reached.
///
/// Strictly sequential; generation for batch i+1 does not begin before
/// batch i's sink call returns. A sink error aborts immediately,
/// leaving already-persisted batches in place.
pub struct Importer<S: Sink> {
    sink: S,
    table: String,
    columns: Vec<String>,
    slots: Vec<Formatter>,
    total_records: u64,
    batch_size: u64,
}

impl<S: Sink> Importer<S> {
    pub fn new(
        sink: S,
        table: impl Into<String>,
        registry: &GeneratorRegistry,
        columns: &BTreeMap<String, ColumnSpec>,
        total_records: u64,
        batch_size: u64,
    ) -> Result<Self, ImportError> {
        if total_records == 0 {
            return Err(ImportError::Config("TotalRecords must be > 0".into()));
        }
        if batch_size == 0 {
            return Err(ImportError::Config("BatchSize must be > 0".into()));
        }
        let (columns, slots) = prepare_columns(registry, columns)?;
        Ok(Self {
            sink,
            table: table.into(),
            columns,
            slots,
            total_records,
            batch_size: batch_size.min(total_records),
        })
    }

    /// The ordered column list used for the insert header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Run the import to completion. Returns rows persisted.
    pub async fn run(&mut self) -> Result<u64, ImportError> {
        let mut remaining = self.total_records;
        while remaining > 0 {
            let size = remaining.min(self.batch_size);
            tracing::info!(size, remaining, table = %self.table, "loading batch");
            let rows = build_batch(size as usize, &mut self.slots);
            self.sink
                .insert_batch(&self.table, &self.columns, &rows)
                .await?;
            remaining -= size;
        }
        Ok(self.total_records)
    }

    /// Hand the sink back once the import is done with it.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Records the size of every batch it is handed.
    struct RecordingSink {
        batches: Vec<usize>,
        fail_on_call: Option<usize>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                batches: Vec::new(),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                batches: Vec::new(),
                fail_on_call: Some(call),
            }
        }
    }

    #[async_trait]
    impl Sink for RecordingSink {
        async fn insert_batch(
            &mut self,
            _table: &str,
            _columns: &[String],
            rows: &[String],
        ) -> Result<(), ImportError> {
            if self.fail_on_call == Some(self.batches.len()) {
                return Err(ImportError::Sink("connection reset".into()));
            }
            self.batches.push(rows.len());
            Ok(())
        }
    }

    fn column_specs() -> BTreeMap<String, ColumnSpec> {
        let mut columns = BTreeMap::new();
        columns.insert(
            "id".to_string(),
            ColumnSpec {
                first: Some("1".into()),
                ..ColumnSpec::of_type("incremental")
            },
        );
        columns.insert(
            "age".to_string(),
            ColumnSpec {
                min_val: Some("18".into()),
                max_val: Some("80".into()),
                ..ColumnSpec::of_type("int")
            },
        );
        columns
    }

    #[tokio::test]
    async fn test_batch_chunking_ten_records_batch_three() {
        let registry = GeneratorRegistry::default();
        let mut importer = Importer::new(
            RecordingSink::new(),
            "users",
            &registry,
            &column_specs(),
            10,
            3,
        )
        .unwrap();
        assert_eq!(importer.run().await.unwrap(), 10);
        assert_eq!(importer.into_sink().batches, vec![3, 3, 3, 1]);
    }

    #[tokio::test]
    async fn test_batch_size_clamped_to_total() {
        let registry = GeneratorRegistry::default();
        let mut importer = Importer::new(
            RecordingSink::new(),
            "users",
            &registry,
            &column_specs(),
            5,
            100,
        )
        .unwrap();
        importer.run().await.unwrap();
        assert_eq!(importer.into_sink().batches, vec![5]);
    }

    #[tokio::test]
    async fn test_sink_error_aborts_without_further_calls() {
        let registry = GeneratorRegistry::default();
        let mut importer = Importer::new(
            RecordingSink::failing_on(1),
            "users",
            &registry,
            &column_specs(),
            10,
            3,
        )
        .unwrap();
        let err = importer.run().await.unwrap_err();
        assert!(matches!(err, ImportError::Sink(_)));
        // The first batch stays persisted; nothing after the failure.
        assert_eq!(importer.into_sink().batches, vec![3]);
    }

    #[test]
    fn test_columns_are_alphabetical() {
        let registry = GeneratorRegistry::default();
        let (names, slots) = prepare_columns(&registry, &column_specs()).unwrap();
        assert_eq!(names, vec!["age".to_string(), "id".to_string()]);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_zero_totals_rejected() {
        let registry = GeneratorRegistry::default();
        let columns = column_specs();
        assert!(matches!(
            Importer::new(RecordingSink::new(), "users", &registry, &columns, 0, 3),
            Err(ImportError::Config(_))
        ));
        assert!(matches!(
            Importer::new(RecordingSink::new(), "users", &registry, &columns, 10, 0),
            Err(ImportError::Config(_))
        ));
    }

    #[test]
    fn test_bad_column_spec_fails_preparation() {
        let registry = GeneratorRegistry::default();
        let mut columns = column_specs();
        columns.insert("tag".to_string(), ColumnSpec::of_type("no-such-type"));
        assert!(matches!(
            Importer::new(RecordingSink::new(), "users", &registry, &columns, 10, 3),
            Err(ImportError::Spec(_))
        ));
    }
}
