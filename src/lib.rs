// SPDX-License-Identifier: MPL-2.0
//! `gallery_admin` is a desktop admin client for a photo gallery backend,
//! built with the Iced GUI framework.
//!
//! It lists galleries as cards, opens them in a lightbox modal with
//! keyboard and swipe navigation, and deletes single images or whole
//! galleries after confirmation. Localization uses Fluent.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
