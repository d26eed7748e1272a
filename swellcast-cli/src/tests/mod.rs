//! Shared test harness modules for the Swellcast CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

mod helpers;
mod spots_unit;
