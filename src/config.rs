use std::env;

use anyhow::{Context, Result};

pub const API_KEY_VAR: &str = "VITAGO_FIREBASE_API_KEY";
pub const PROJECT_VAR: &str = "VITAGO_FIREBASE_PROJECT";

/// Firebase project the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Public Web API key of the Firebase project
    pub api_key: String,
    pub project_id: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
        }
    }

    /// Read the configuration from the environment, loading `.env` first if
    /// there is one.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = env::var(API_KEY_VAR).with_context(|| format!("{} not set", API_KEY_VAR))?;
        let project_id = env::var(PROJECT_VAR).with_context(|| format!("{} not set", PROJECT_VAR))?;
        Ok(Self::new(api_key, project_id))
    }
}

