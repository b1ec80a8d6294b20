use super::{name, Constraints, FieldAttr, StorageType};

/// Everything the resolver needs to know about one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    pub storage: StorageType,
    pub attr: &'a FieldAttr,

    /// Declared field name; a `column=` override does not affect the naming
    /// heuristic
    pub field: &'a str,

    /// Table name of the owning record
    pub table: &'a str,

    /// Whether an earlier field of the record already is the primary key
    pub primary_key_claimed: bool,
}

/// Resolved constraints of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub constraints: Constraints,
    pub primary_key: bool,
    pub references: Option<String>,
    pub ref_column: Option<String>,
}

/// `autoincrement` on a storage type that cannot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    pub storage: StorageType,
}

/// Resolves the constraint bitmask and reference target of one field.
///
/// The naming heuristic runs first, then the explicit tokens. Only the first
/// qualifying field of a record becomes the primary key, whichever way it
/// qualifies.
pub fn resolve_field(input: FieldInput<'_>) -> Result<Resolution, Contradiction> {
    let attr = input.attr;
    let mut constraints = Constraints::NONE;
    let mut primary_key = false;

    if !input.primary_key_claimed && is_identity(input.field, input.table) {
        primary_key = true;
    }

    if attr.primary_key && !input.primary_key_claimed {
        primary_key = true;
    }

    if primary_key {
        constraints |= Constraints::PRIMARY_KEY;
    }

    if attr.unique {
        constraints |= Constraints::UNIQUE;
    }

    if attr.not_null {
        constraints |= Constraints::NOT_NULL;
    }

    if attr.auto_increment {
        if !input.storage.is_numeric() {
            return Err(Contradiction {
                storage: input.storage,
            });
        }
        constraints |= Constraints::AUTO_INCREMENT;
    }

    Ok(Resolution {
        constraints,
        primary_key,
        references: attr.references.clone(),
        ref_column: attr.ref_column.clone(),
    })
}

/// Naming convention for identity fields: `id`, `<singular>_id` or
/// `id_<singular>`, compared without case or underscores.
pub fn is_identity(field: &str, table: &str) -> bool {
    let field = normalize(field);
    if field == "id" {
        return true;
    }

    let singular = normalize(&name::singular(table));
    if singular.is_empty() {
        return false;
    }

    field == format!("id{singular}") || field == format!("{singular}id")
}

fn normalize(src: &str) -> String {
    src.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(
        storage: StorageType,
        tokens: &str,
        field: &str,
        claimed: bool,
    ) -> Result<Resolution, Contradiction> {
        let mut attr = FieldAttr::default();
        attr.apply(tokens);
        resolve_field(FieldInput {
            storage,
            attr: &attr,
            field,
            table: "users",
            primary_key_claimed: claimed,
        })
    }

    #[test]
    fn identity_heuristic() {
        assert!(is_identity("id", "users"));
        assert!(is_identity("ID", "users"));
        assert!(is_identity("user_id", "users"));
        assert!(is_identity("id_user", "users"));
        assert!(is_identity("category_id", "categories"));
        assert!(!is_identity("user_id", "roles"));
        assert!(!is_identity("name", "users"));
    }

    #[test]
    fn heuristic_claims_primary_key() {
        let res = resolve(StorageType::Text, "", "id", false).unwrap();
        assert!(res.primary_key);
        assert_eq!(res.constraints, Constraints::PRIMARY_KEY);
    }

    #[test]
    fn explicit_pk_ignored_once_claimed() {
        let res = resolve(StorageType::Text, "pk,unique", "code", true).unwrap();
        assert!(!res.primary_key);
        assert_eq!(res.constraints, Constraints::UNIQUE);

        let res = resolve(StorageType::Text, "", "id", true).unwrap();
        assert!(!res.primary_key);
        assert_eq!(res.constraints, Constraints::NONE);
    }

    #[test]
    fn tokens_combine() {
        let res = resolve(StorageType::Int64, "pk,autoincrement,not_null", "seq", false).unwrap();
        assert!(res.primary_key);
        assert_eq!(
            res.constraints,
            Constraints::PRIMARY_KEY | Constraints::NOT_NULL | Constraints::AUTO_INCREMENT
        );
    }

    #[test]
    fn auto_increment_requires_numeric_storage() {
        for storage in [StorageType::Text, StorageType::Bool, StorageType::Blob] {
            assert_eq!(
                resolve(storage, "autoincrement", "seq", false),
                Err(Contradiction { storage })
            );
        }
        assert!(resolve(StorageType::Float64, "autoincrement", "seq", false).is_ok());
    }

    #[test]
    fn references_are_copied() {
        let res = resolve(StorageType::Text, "ref=parents", "parent_id", false).unwrap();
        assert_eq!(res.references.as_deref(), Some("parents"));
        assert_eq!(res.ref_column, None);
    }
}
