use std::num::NonZero;

/// The length of a list which is known to have contents. Pairing this with the list's state enum
/// makes a contradictory "full but zero-length" list unrepresentable.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(val) => Some(Length(val)),
            None => None,
        }
    }

    /// Returns None when the subtraction reaches zero, which signals the transition back to the
    /// empty state rather than an error.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(val) => match NonZero::new(val) {
                Some(val) => Some(Length(val)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// The length of a list with exactly one element.
pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
