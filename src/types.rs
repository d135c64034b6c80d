pub use crate::utils::database;
use async_trait::async_trait;
use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub root: PathBuf,
}

#[derive(Clone)]
pub struct MailContext {
    pub sender: String,
    pub transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub storage: StorageContext,
    pub mail: Option<MailContext>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub root: PathBuf,
}

#[derive(Clone)]
pub struct MailConfig {
    pub sender: String,
    pub uri: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub mail: MailConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "{} not set", var),
            Self::Invalid(var) => write!(f, "{} has an invalid value", var),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::Invalid("PORT"))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        let mail_sender = env::var("MAIL_SENDER")
            .unwrap_or_else(|_| "BuzzarFeed <no-reply@buzzarfeed.local>".to_string());
        let mail_uri = env::var("MAIL_URI").ok().filter(|uri| !uri.is_empty());

        Ok(Config {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            storage: StorageConfig {
                root: PathBuf::from(upload_dir),
            },
            mail: MailConfig {
                sender: mail_sender,
                uri: mail_uri,
            },
        })
    }
}

#[derive(Debug)]
pub enum ContextError {
    Database(sqlx::Error),
    Migration(sqlx::migrate::MigrateError),
    Storage(std::io::Error),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(err) => write!(f, "failed to connect to the database: {}", err),
            Self::Migration(err) => write!(f, "failed to run database migrations: {}", err),
            Self::Storage(err) => write!(f, "failed to prepare the upload directory: {}", err),
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

fn build_mail_context(config: MailConfig) -> Option<MailContext> {
    let uri = config.uri?;

    match AsyncSmtpTransport::<Tokio1Executor>::from_url(&uri) {
        Ok(builder) => Some(MailContext {
            sender: config.sender,
            transport: builder.build(),
        }),
        Err(err) => {
            tracing::error!("Invalid MAIL_URI, notifications are disabled: {}", err);
            None
        }
    }
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let db_conn = database::connect(&self.database.url, self.database.max_connections)
            .await
            .map_err(ContextError::Database)?;
        database::migrate(&db_conn)
            .await
            .map_err(ContextError::Migration)?;

        tokio::fs::create_dir_all(&self.storage.root)
            .await
            .map_err(ContextError::Storage)?;

        let mail = build_mail_context(self.mail);
        if mail.is_none() {
            tracing::info!("MAIL_URI not configured, email notifications are disabled");
        }

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            storage: StorageContext {
                root: self.storage.root,
            },
            mail,
        })
    }
}

/// A cron tick. Carries the time it fired.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Job(DateTime<Utc>);

impl apalis::prelude::Job for Job {
    const NAME: &'static str = "buzzarfeed::Job";
}

impl From<DateTime<Utc>> for Job {
    fn from(t: DateTime<Utc>) -> Self {
        Self(t)
    }
}

pub struct SchedulableJob {
    pub name: &'static str,
    pub schedule: apalis::cron::Schedule,
    pub job: Arc<
        dyn Fn() -> Pin<Box<dyn Future<Output = Result<(), apalis::prelude::Error>> + Send>>
            + Send
            + Sync,
    >,
}

/// The JSON envelope every endpoint answers with.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub success: bool,
    pub message: String,
    pub data: serde_json::Value,
    pub errors: Vec<String>,
}

impl ApiResponse {
    pub fn success(status: StatusCode, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            status,
            success: true,
            message: message.into(),
            data,
            errors: vec![],
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, message, serde_json::Value::Null)
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            success: false,
            errors: vec![message.clone()],
            message,
            data: serde_json::Value::Null,
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            success: false,
            message: String::from("Validation failed"),
            data: serde_json::Value::Null,
            errors,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(json!({
                "success": self.success,
                "message": self.message,
                "data": self.data,
                "errors": self.errors,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_repeats_message_in_errors() {
        let res = ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found");
        assert!(!res.success);
        assert_eq!(res.errors, vec!["Stall not found".to_string()]);
        assert_eq!(res.data, serde_json::Value::Null);
    }

    #[test]
    fn envelope_serializes_without_status() {
        let res = ApiResponse::success(StatusCode::CREATED, "Created", json!({ "id": "abc" }));
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "Created",
                "data": { "id": "abc" },
                "errors": [],
            })
        );
    }

    #[test]
    fn environment_defaults_to_development() {
        assert_eq!(AppEnvironment::from("staging".into()), AppEnvironment::Development);
        assert_eq!(AppEnvironment::from("production".into()), AppEnvironment::Production);
    }
}
