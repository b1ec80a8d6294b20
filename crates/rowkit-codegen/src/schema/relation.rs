use super::{name, Declaration};
use crate::diagnostic::Log;

use indexmap::IndexMap;

/// A one-to-many link, stored on the child declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Record holding the foreign key
    pub child: String,

    /// Child field referencing the parent table
    pub fk_field: String,

    pub fk_column: String,

    /// Native type of the foreign key field
    pub fk_native: String,

    /// Name of the generated loader function
    pub loader: String,

    pub parent: String,
    pub parent_table: String,
}

/// Links every collection field to the foreign key of its element record.
///
/// Parents are visited in name order so the relations attached to a child
/// do not depend on discovery order.
pub(crate) fn resolve_relations(decls: &mut IndexMap<String, Declaration>, log: &mut Log) {
    let mut parents: Vec<&String> = decls.keys().collect();
    parents.sort();

    let mut found = vec![];

    for parent_name in parents {
        let parent = &decls[parent_name];

        for collection in &parent.collections {
            let Some(child) = decls.get(&collection.element) else {
                log.warn(
                    Some(&parent.source),
                    format!(
                        "no relation for `{}.{}`: `{}` is not a known model",
                        parent.name, collection.name, collection.element
                    ),
                );
                continue;
            };

            let Some(fk) = child
                .fields
                .iter()
                .find(|field| field.is_foreign_key_to(&parent.table_name))
            else {
                log.warn(
                    Some(&parent.source),
                    format!(
                        "no relation for `{}.{}`: no field of `{}` has `ref={}`",
                        parent.name, collection.name, child.name, parent.table_name
                    ),
                );
                continue;
            };

            found.push(Relation {
                child: child.name.clone(),
                fk_field: fk.name.clone(),
                fk_column: fk.column.clone(),
                fk_native: fk.native.clone(),
                loader: format!("read_all_{}_by_{}", name::snake_case(&child.name), fk.name),
                parent: parent.name.clone(),
                parent_table: parent.table_name.clone(),
            });
        }
    }

    for relation in found {
        let Some(child) = decls.get_mut(&relation.child) else {
            continue;
        };

        if child.relations.iter().any(|r| r.loader == relation.loader) {
            continue;
        }

        child.relations.push(relation);
    }
}
