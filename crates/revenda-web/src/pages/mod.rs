//! Pages of the back office

pub mod car_form;
pub mod car_list;
pub mod not_found;
