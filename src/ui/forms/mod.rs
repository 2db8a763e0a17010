//! Form rendering module
//!
//! This module contains UI components for rendering the wizard steps:
//! - `field_renderer`: Field rendering utilities
//! - `step_form`: Scrolling field list for the data entry steps
//! - `review`: Summary and actions of the last step

mod field_renderer;
pub mod review;
pub mod step_form;
