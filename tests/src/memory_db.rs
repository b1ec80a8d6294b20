use rowkit::{Condition, Db, Model, Query, Reader, Result, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// One stored row, keyed by column name.
pub type Row = Vec<(&'static str, Value)>;

/// An in-memory table store that logs every query it executes.
#[derive(Debug, Default)]
pub struct MemoryDb {
    tables: HashMap<&'static str, Vec<Row>>,

    /// Log of all queries executed against this database
    query_log: Mutex<Vec<Query>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the current field values of `model` as a new row.
    pub fn insert<M: Model>(&mut self, model: &M) {
        let row = model.columns().into_iter().zip(model.values()).collect();
        self.tables.entry(model.table_name()).or_default().push(row);
    }

    pub fn query_log(&self) -> Vec<Query> {
        self.query_log
            .lock()
            .expect("Failed to acquire query log lock")
            .clone()
    }
}

impl Db for MemoryDb {
    type Reader<'a>
        = MemoryReader
    where
        Self: 'a;

    fn query(&self, query: Query) -> MemoryReader {
        let rows = self
            .tables
            .get(query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches(row, &query.conditions))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let table = query.table;

        self.query_log
            .lock()
            .expect("Failed to acquire query log lock")
            .push(query);

        MemoryReader { table, rows }
    }
}

/// Rows selected by one query.
#[derive(Debug)]
pub struct MemoryReader {
    table: &'static str,
    rows: Vec<Row>,
}

impl MemoryReader {
    pub fn new(table: &'static str, rows: Vec<Row>) -> Self {
        Self { table, rows }
    }
}

impl Reader for MemoryReader {
    fn read_one<M: Model>(self, model: &mut M) -> Result<()> {
        let Some(row) = self.rows.into_iter().next() else {
            anyhow::bail!("no rows in `{}`", self.table);
        };

        load(model, &row)
    }

    fn read_all<M, F>(self, mut new: F) -> Result<Vec<M>>
    where
        M: Model,
        F: FnMut() -> M,
    {
        self.rows
            .iter()
            .map(|row| {
                let mut model = new();
                load(&mut model, row)?;
                Ok(model)
            })
            .collect()
    }
}

fn load<M: Model>(model: &mut M, row: &Row) -> Result<()> {
    let values = model
        .columns()
        .into_iter()
        .map(|column| {
            row.iter()
                .find(|(name, _)| *name == column)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| anyhow::anyhow!("row has no `{column}` column"))
        })
        .collect::<Result<Vec<_>>>()?;

    model.set_values(values)
}

fn matches(row: &Row, conditions: &[Condition]) -> bool {
    conditions.iter().all(|condition| match condition {
        Condition::Eq { column, value } => row
            .iter()
            .any(|(name, stored)| name == column && stored == value),
    })
}
