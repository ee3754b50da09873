pub mod page;
pub mod state;

pub use page::{render_form_page, FormValues};
pub use state::{FormEvent, FormView};
