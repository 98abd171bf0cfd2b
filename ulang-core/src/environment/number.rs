use std::fmt::Display;

/// A number ready for printing. The only normalisation on top of the
/// shortest round-trip form is collapsing negative zero to `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0.0 {
            return write!(f, "0");
        }

        write!(f, "{}", self.0)
    }
}
