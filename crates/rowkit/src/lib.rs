mod column;
pub use column::Column;

mod model;
pub use model::Model;

pub mod query;
pub use query::{Condition, Query};

mod reader;
pub use reader::{Db, Reader};

pub mod schema;
pub use schema::{Constraint, Field, FieldType};

mod value;
pub use value::Value;

pub use rowkit_macros::Model;

pub use anyhow::{Error, Result};
