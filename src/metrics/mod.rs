pub use hypervolume::{estimate_reference_point, hyper_volume};
pub use hypervolume_2d::HyperVolume2D;
pub use hypervolume_lebmeasure::HyperVolumeLebMeasure;

pub mod hypervolume;
pub mod hypervolume_2d;
pub mod hypervolume_lebmeasure;
#[cfg(test)]
pub(crate) mod test_utils;
