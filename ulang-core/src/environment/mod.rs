pub mod environment;
pub mod number;

pub mod prelude {
    pub use super::{
        environment::*,
        number::*
    };
}

#[cfg(test)]
mod tests;
