//! Bundlescope desktop front end
//!
//! Hosts the bundle list viewer from `bundlescope-core` either in an egui
//! window or, with `--headless`, as plain text tables on stdout.

pub mod app;
pub mod cli;
pub mod text;
pub mod ui;
