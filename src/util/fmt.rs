use std::fmt::{self, Debug, Formatter};

/// Adapts a closure into a [`Debug`] implementation, so that computed content can be handed to
/// [`Formatter::debug_struct`] as a field.
pub(crate) struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
