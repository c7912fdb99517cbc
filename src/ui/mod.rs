//! Widgets for the search view

pub mod alert;
pub mod search_bar;
pub mod theme;
pub mod tree_view;
