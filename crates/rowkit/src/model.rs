use crate::{Column, Field, Result, Value};

/// A record type mapped to a table.
///
/// Implemented by generated code. `schema`, `values` and `pointers` list the
/// same fields in the same order, so index `i` of each refers to one column.
pub trait Model {
    fn table_name(&self) -> &'static str;

    fn schema(&self) -> Vec<Field>;

    fn values(&self) -> Vec<Value>;

    fn pointers(&mut self) -> Vec<&mut dyn Column>;

    /// Column names, in field order.
    fn columns(&self) -> Vec<&'static str> {
        self.schema().iter().map(|field| field.name).collect()
    }

    /// Writes one row, given in field order, into the record.
    fn set_values(&mut self, values: Vec<Value>) -> Result<()> {
        let table_name = self.table_name();
        let pointers = self.pointers();

        if pointers.len() != values.len() {
            anyhow::bail!(
                "expected {} values for `{table_name}`, got {}",
                pointers.len(),
                values.len()
            );
        }

        for (column, value) in pointers.into_iter().zip(values) {
            column.set_value(value)?;
        }

        Ok(())
    }
}
