// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`error_display`] - Centered panel for failed loads and empty results,
//!   with an optional retry action and collapsible technical details

pub mod error_display;
