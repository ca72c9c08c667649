// SPDX-License-Identifier: MPL-2.0
//! Backend REST client.
//!
//! | Operation      | Request                                   |
//! |----------------|-------------------------------------------|
//! | List galleries | `GET /api/v1/get-images`                  |
//! | Delete image   | `DELETE /api/v1/delete-image`             |
//! | Delete gallery | `DELETE /api/v1/delete-gallery/{id}`      |

pub mod client;
pub mod types;

pub use client::ApiClient;
