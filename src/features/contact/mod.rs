//! Contact form feature.
//!
//! Serves the contact page and relays validated submissions, untouched, to a
//! hosted form backend (Getform-style `POST /f/{form_id}`).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Contact page |
//! | POST | `/` | No | Form action, re-renders the page with the outcome |
//! | POST | `/api/contact` | No | Submit and get a JSON `SubmissionResult` |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;

pub use clients::FormBackendClient;
pub use services::SubmissionService;
