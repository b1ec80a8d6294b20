mod constraint;
pub use constraint::Constraints;

mod declaration;
pub use declaration::Declaration;

mod field;
pub use field::{CollectionField, Field};

mod field_attr;
pub use field_attr::FieldAttr;

pub(crate) mod name;

mod relation;
pub use relation::Relation;
pub(crate) use relation::resolve_relations;

pub mod resolve;

mod table_name;

mod ty;
pub(crate) use ty::NativeType;
pub use ty::StorageType;
