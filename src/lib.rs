//! Browser UI helpers for the PakJobs aggregator front-end.
//!
//! This crate is compiled to WebAssembly and loaded by every server-rendered
//! page. It shows transient notifications, blocks the page with a loading
//! overlay while non-GET forms submit, formats numbers and dates, debounces
//! search input, confirms scraper runs, and wraps the clipboard API.
//!
//! All browser access goes through [`platform::Platform`], so everything but
//! the `web-sys` adapter is exercised natively against an in-memory fake.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ui`] | Component instance owning platform, config, and overlay state |
//! | [`bootstrap`] | Page-ready wiring of forms, export links, and scraper polling |
//! | [`notify`] | Transient notifications and [`notify::Severity`] |
//! | [`loading`] | Loading overlay handle |
//! | [`format`] | Thousands separators and `Mon D, YYYY` dates |
//! | [`debounce`] | Trailing-edge debounce |
//! | [`confirm`] | Scraper run confirmation prompt |
//! | [`clipboard`] | Clipboard write with settled outcome |
//! | [`platform`] | Browser capability trait and its implementations |
//! | [`config`] | Page-overridable configuration |
//! | [`error`] | Shared error type |

pub mod bootstrap;
pub mod clipboard;
pub mod config;
pub mod confirm;
pub mod debounce;
pub mod error;
pub mod format;
pub mod loading;
pub mod notify;
pub mod platform;
pub mod ui;

#[cfg(feature = "hydrate")]
mod exports;
