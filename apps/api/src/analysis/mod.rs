// Resume analysis: section detection, contact patterns, scoring, advice.
// The analyzer is pure; everything that touches uploads lives in `extraction`.

pub mod advice;
pub mod analyzer;
pub mod catalog;
pub mod handlers;
pub mod patterns;
pub mod scoring;
