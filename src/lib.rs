//! Air quality analysis shell - desktop form for choosing a data file and time range
//!
//! # Features
//! - One fixed-size window, configured by a startup profile
//! - Data file chooser with the chosen file's name shown in place
//! - Optional start/end time range panel toggled by a radio choice
//! - "Process File" navigates to the progress page

pub mod config;
pub mod form;
pub mod gui;
pub mod view;

pub use config::{ConfigError, Profile, WindowConfig};
pub use form::{FormEffect, FormEvent, FormState, Visibility};
