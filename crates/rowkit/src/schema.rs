use core::ops::{BitOr, BitOrAssign};

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Int64,
    Float64,
    Bool,
    Blob,
}

/// Column constraint flags, combined with `|`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint(u8);

impl Constraint {
    pub const NONE: Constraint = Constraint(0);
    pub const PRIMARY_KEY: Constraint = Constraint(1 << 0);
    pub const UNIQUE: Constraint = Constraint(1 << 1);
    pub const NOT_NULL: Constraint = Constraint(1 << 2);
    pub const AUTO_INCREMENT: Constraint = Constraint(1 << 3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Constraint) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Constraint {
    type Output = Constraint;

    fn bitor(self, rhs: Constraint) -> Constraint {
        Constraint(self.0 | rhs.0)
    }
}

impl BitOrAssign for Constraint {
    fn bitor_assign(&mut self, rhs: Constraint) {
        self.0 |= rhs.0;
    }
}

/// Storage description of one mapped field, as returned by
/// [`Model::schema`](crate::Model::schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Column name
    pub name: &'static str,

    pub ty: FieldType,

    pub constraints: Constraint,

    /// Referenced table, for foreign keys
    pub references: Option<&'static str>,

    /// Referenced column; `None` means the referenced table's primary key
    pub ref_column: Option<&'static str>,
}

impl Field {
    pub fn is_primary_key(&self) -> bool {
        self.constraints.contains(Constraint::PRIMARY_KEY)
    }
}
