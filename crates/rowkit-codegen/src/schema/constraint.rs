use core::ops::{BitOr, BitOrAssign};

/// Column constraint flags, combined with `|`.
///
/// `NONE` is the empty set and shares no bit with any flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints(u8);

impl Constraints {
    pub const NONE: Constraints = Constraints(0);
    pub const PRIMARY_KEY: Constraints = Constraints(1 << 0);
    pub const UNIQUE: Constraints = Constraints(1 << 1);
    pub const NOT_NULL: Constraints = Constraints(1 << 2);
    pub const AUTO_INCREMENT: Constraints = Constraints(1 << 3);

    /// Every flag, in the order the emitter writes them.
    pub const ALL: [(Constraints, &'static str); 4] = [
        (Constraints::PRIMARY_KEY, "PRIMARY_KEY"),
        (Constraints::UNIQUE, "UNIQUE"),
        (Constraints::NOT_NULL, "NOT_NULL"),
        (Constraints::AUTO_INCREMENT, "AUTO_INCREMENT"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Constraints) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the flags set, in [`Constraints::ALL`] order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for Constraints {
    type Output = Constraints;

    fn bitor(self, rhs: Constraints) -> Constraints {
        Constraints(self.0 | rhs.0)
    }
}

impl BitOrAssign for Constraints {
    fn bitor_assign(&mut self, rhs: Constraints) {
        self.0 |= rhs.0;
    }
}
