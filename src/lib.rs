//! Templatist - A Terminal User Interface (TUI) for building report templates
//!
//! This library provides a complete terminal-based editor for report
//! templates: named groupings of sections, each holding an ordered list of
//! visualizations bound to a data source. The editing engine itself is
//! headless and embeddable; the interactive UI built with Ratatui is a thin
//! layer on top of it.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`builder`] - Headless template editing engine (store, drafts, reorder, catalogs)
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging utilities for debugging and error tracking
//! * [`ui`] - Terminal user interface components
//! * [`constants`] - Application constants and default values

/// Headless template editing engine
pub mod builder;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core model types for convenient access
pub use builder::{Section, Template, Visualization};
