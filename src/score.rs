//! The readability regression model.
//!
//! Coefficients are the empirical constants of the jReadability linear model
//! (Lee & Hasebe), estimated against learner-corpus difficulty ratings.
//! Higher scores indicate easier text.

use crate::features::Features;

const INTERCEPT: f64 = 11.724;
const WEIGHT_SENTENCE_LENGTH: f64 = 0.056;
const WEIGHT_KANGO: f64 = 0.126;
const WEIGHT_WAGO: f64 = 0.042;
const WEIGHT_VERBS: f64 = 0.145;
const WEIGHT_PARTICLES: f64 = 0.044;

/// Apply the regression model to a feature bundle.
///
/// Pure and deterministic; no clamping or rounding, so degenerate inputs can
/// produce values outside the calibrated range.
pub fn score(features: &Features) -> f64 {
    INTERCEPT
        - WEIGHT_SENTENCE_LENGTH * features.average_sentence_length
        - WEIGHT_KANGO * features.kango
        - WEIGHT_WAGO * features.wago
        - WEIGHT_VERBS * features.verbs
        - WEIGHT_PARTICLES * features.particles
}
