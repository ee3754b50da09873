pub mod page_handler;
pub mod submission_handler;

pub use page_handler::{show_form, submit_form};
pub use submission_handler::*;
