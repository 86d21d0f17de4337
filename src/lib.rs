//! The `tailmc` crate provides tools for generating synthetic statistics of
//! flux rope detections along simulated spacecraft traversals of a planetary
//! magnetotail plasma sheet.
pub mod constants;
pub mod crossing;
pub mod error;
pub mod fluxrope;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod num;
pub mod properties;
pub mod run;
pub mod sampling;
