pub mod compare;
pub mod validation;

// Re-export main components
pub use compare::*;
pub use validation::*;
