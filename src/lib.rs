// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification library for the Iced GUI framework.
//!
//! The [`notifications`] module owns all toast behavior: an ordered,
//! capacity-bounded collection of visible notifications with per-toast
//! auto-dismiss deadlines, oldest-first eviction, and an imperative
//! `add`/`remove`/`clear` API with severity shorthands. The [`ui`] module
//! renders the collection as stacked toast cards, and [`app`] ships a small
//! playground application demonstrating the pieces wired together.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.2.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod ui;
