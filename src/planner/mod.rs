//! The budget planner.
//!
//! This module contains:
//! - The planner form and its conversion into classifier input
//! - The planner page and the endpoints its form posts to for previewing
//!   and saving a plan
//! - The JSON endpoint for classifying a budget

mod classify_endpoint;
mod form;
mod page;
mod preview_endpoint;
mod submit_endpoint;
mod view;

pub use classify_endpoint::classify_endpoint;
pub use page::get_planner_page;
pub use preview_endpoint::preview_planner_endpoint;
pub use submit_endpoint::submit_planner_endpoint;
