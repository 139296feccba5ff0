//! Input validation errors
//!
//! The estimators are total and never return these. They back the optional
//! strict mode of the command line front end.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("concentration must not be negative (got {0}%)")]
    NegativeConcentration(f64),
    #[error("volume must not be negative (got {0} mL)")]
    NegativeVolume(f64),
    #[error("waste mass must not be negative (got {0} kg)")]
    NegativeMass(f64),
    #[error("retention time must not be negative (got {0} days)")]
    NegativeRetention(f64),
}
