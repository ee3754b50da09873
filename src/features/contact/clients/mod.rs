pub mod form_backend_client;

pub use form_backend_client::{FormBackend, FormBackendClient, FormBackendError};
