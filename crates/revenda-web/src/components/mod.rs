//! UI components of the back office

pub mod car_grid;
pub mod confirm_dialog;
pub mod notification;
pub mod pagination;
pub mod waiting;
