use crate::Value;

/// A request for the rows of one table.
///
/// Only the shape generated loaders need is modelled here; executing it is
/// up to the [`Db`](crate::Db) implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: &'static str,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = value`
    Eq { column: &'static str, value: Value },
}

impl Query {
    pub fn new(table: &'static str) -> Query {
        Query {
            table,
            conditions: vec![],
        }
    }

    pub fn filter_eq(mut self, column: &'static str, value: impl Into<Value>) -> Query {
        self.conditions.push(Condition::Eq {
            column,
            value: value.into(),
        });
        self
    }
}
