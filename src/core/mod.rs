pub use error::DimensionalityError;

mod error;
