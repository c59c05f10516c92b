//! Post-processing of finished mobility curves
//!
//! - **extrapolation**: per-size statistics and the linear fit in `1/L`

pub mod extrapolation;

pub use extrapolation::{
    Extrapolation,
    LinearFit,
    SizeSummary,
    extrapolate,
    fit_linear,
    summarize,
};
