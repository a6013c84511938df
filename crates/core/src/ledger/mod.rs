//! Ledger projection engine.
//!
//! Turns an unordered set of dated credit/debit records into a running
//! balance, a runway estimate, a schedule of funding shortfalls after the pool
//! runs dry, and a gap-filled daily balance series. Every function here is a
//! pure computation over an in-memory ledger: nothing is cached and nothing is
//! mutated, so projections for different channels can run side by side.
//!
//! Data flows one way:
//! normalizer -> accumulator -> {runway -> funding needs, daily series}.

mod accumulator;
mod daily_series;
mod funding;
mod normalizer;
mod projection;
mod projection_model;
mod projection_service;
mod projection_traits;
mod runway;
mod summary;


#[cfg(test)]
mod projection_service_tests;

pub use accumulator::{build_day_walk, DayWalk};
pub(crate) use accumulator::checked_sum;
pub use daily_series::build_daily_series;
pub use funding::project_funding_needs;
pub use normalizer::normalize;
pub use projection::{project, project_channels};
pub use projection_model::*;
pub use projection_service::ProjectionService;
pub use projection_traits::ProjectionServiceTrait;
pub use runway::calculate_runway;
pub use summary::summarize;
