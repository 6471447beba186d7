// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod battery;
pub mod trip;
pub mod user;

pub use battery::BatteryStatus;
pub use trip::Trip;
pub use user::User;
