use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers, models};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Contact
        contact_handlers::submit_contact,
    ),
    components(
        schemas(
            ApiResponse,
            // Contact
            models::ContactType,
            contact_dtos::ContactSubmissionDto,
            contact_dtos::SubmissionResult,
        )
    ),
    tags(
        (name = "contact", description = "Contact form submissions relayed to the form backend (public)"),
    ),
    info(
        title = "Contact Relay API",
        version = "0.1.0",
        description = "API documentation for Contact Relay",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
