/*
    Top-level
*/

mod error;
mod number;

pub mod float;
pub mod integer;
pub mod posit;
pub mod word;

pub use error::*;
pub use number::*;
