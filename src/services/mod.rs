// SPDX-License-Identifier: MIT

//! Service modules (password hashing, external prediction gateway).

pub mod password;
pub mod prediction;

pub use prediction::PredictionClient;
