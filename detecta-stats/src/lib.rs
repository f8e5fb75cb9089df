//! Numerical building blocks for the detecta signal-detection workspace.
//!
//! - **Quantiles** — [`quantile::probit`], the standard-normal inverse CDF

pub mod quantile;

pub use quantile::probit;
