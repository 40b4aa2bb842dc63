// Clinical input types for the cardio-metabolic calculator
pub mod domain;
pub mod traits;

pub use domain::*;
pub use traits::*;
