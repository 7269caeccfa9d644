//! Default value functions for serde deserialization.

use crate::resample::AllocationStrategy;

pub fn generation_simplify_tolerance() -> f64 {
    5.0
}

pub fn allocation() -> AllocationStrategy {
    AllocationStrategy::ArcLength
}

pub fn adjustment_densify_interval() -> f64 {
    1e-3
}

pub fn query_buffer() -> f64 {
    1e-5
}

pub fn adjustment_simplify_tolerance() -> f64 {
    1e-4
}

pub fn attachment_densify_interval() -> f64 {
    1e-3
}

pub fn attachment_simplify_tolerance() -> f64 {
    1e-6
}
