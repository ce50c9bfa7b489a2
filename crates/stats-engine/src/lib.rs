//! Summary Statistics Engine
//!
//! Computes min, max, mean and population standard deviation over a private
//! copy of the sample ring.

mod statistics;

pub use statistics::StatisticsSnapshot;
