// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the admin UI.
//!
//! Bundles for `en-US` and `fr` are embedded from `assets/i18n/`. The
//! locale comes from `--lang`, then `[general] language`, then the
//! operating system; any key missing from the active bundle is looked up
//! in `en-US`.

pub mod fluent;

pub use fluent::I18n;
