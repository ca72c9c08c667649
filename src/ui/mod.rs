// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports outcomes to the
//! application as effects.
//!
//! # Screens
//!
//! - [`gallery_list`] - Card grid with loading, error and empty states
//! - [`viewer`] - Gallery modal with lightbox, thumbnails and details
//! - [`delete_confirmation`] - Two-step confirmation for destructive actions
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`format`] - Date and text formatting for display
//! - [`navbar`] - Header with refresh and theme toggle
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod delete_confirmation;
pub mod design_tokens;
pub mod format;
pub mod gallery_list;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
