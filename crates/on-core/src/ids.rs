use core::fmt;
use core::num::NonZeroU32;

/// Compact handle into a component table.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
///
/// Handles are positional: compaction renumbers them, so an `Id` is only
/// meaningful against the table it was taken from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// Panics if `index` is `u32::MAX`, which has no index+1 encoding.
    pub fn from_index(index: u32) -> Self {
        match index.checked_add(1).and_then(NonZeroU32::new) {
            Some(raw) => Self(raw),
            None => panic!("component index {index} exceeds the Id range"),
        }
    }

    /// Create an Id from a table position.
    ///
    /// Panics if `index` does not fit the `u32` handle space.
    pub fn from_usize(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => Self::from_index(index),
            Err(_) => panic!("component index {index} exceeds the Id range"),
        }
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a table position.
    pub fn usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

/// Diagnostics number components from 1.
impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.get())
    }
}

/// Handle of a junction or resistor in a graph.
pub type CompId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let id = Id::from_usize(i);
            assert_eq!(id.usize(), i);
            assert_eq!(id.index() as usize, i);
        }
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn largest_encodable_index() {
        let id = Id::from_index(u32::MAX - 1);
        assert_eq!(id.index(), u32::MAX - 1);
    }

    #[test]
    #[should_panic(expected = "exceeds the Id range")]
    fn index_past_u32_range_panics() {
        Id::from_index(u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "exceeds the Id range")]
    fn wide_position_panics_instead_of_wrapping() {
        Id::from_usize(u32::MAX as usize + 1);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Id::from_index(0).to_string(), "#1");
        assert_eq!(format!("{:?}", Id::from_index(4)), "Id(4)");
    }
}
