use std::env;

use crate::shared::validation::FORM_ID_REGEX;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub form_backend: FormBackendConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Remote form-collection backend (Getform-compatible `POST /f/{form_id}`)
#[derive(Debug, Clone)]
pub struct FormBackendConfig {
    /// Base URL of the backend, without trailing path
    pub base_url: String,
    /// Form identifier issued by the backend
    pub form_id: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            form_backend: FormBackendConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FormBackendConfig {
    const DEFAULT_BASE_URL: &'static str = "https://getform.io";

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("FORM_BACKEND_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        let form_id = env::var("FORM_BACKEND_FORM_ID")
            .map_err(|_| "FORM_BACKEND_FORM_ID environment variable is required".to_string())?;

        Self::new(base_url, form_id)
    }

    pub fn new(base_url: impl Into<String>, form_id: impl Into<String>) -> Result<Self, String> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let form_id = form_id.into();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "FORM_BACKEND_URL must be an http(s) URL, got '{}'",
                base_url
            ));
        }

        if !FORM_ID_REGEX.is_match(&form_id) {
            return Err(format!(
                "FORM_BACKEND_FORM_ID must contain only letters, digits, '-' or '_', got '{}'",
                form_id
            ));
        }

        Ok(Self { base_url, form_id })
    }

    /// Full submission endpoint: `{base_url}/f/{form_id}`
    pub fn endpoint(&self) -> String {
        format!("{}/f/{}", self.base_url, self.form_id)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Contact Relay API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Contact form relay to a hosted form backend".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

/// Parse a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
