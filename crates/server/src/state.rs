//! # Application State
//!
//! The `AppState` holds the resources shared by all request handlers: the
//! query generator with its Druid and AI provider clients, and the parsed
//! CORS origin. Everything is read-only after startup.

use crate::config::AppConfig;
use anyhow::Context;
use axum::http::HeaderValue;
use druidgen::{
    providers::{
        ai::{
            gemini::{gemini_api_url, GeminiProvider},
            local::LocalAiProvider,
            AiProvider,
        },
        druid::DruidProvider,
    },
    QueryGenerator, QueryGeneratorBuilder,
};
use std::{sync::Arc, time::Duration};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub generator: Arc<QueryGenerator>,
    pub allowed_origin: HeaderValue,
}

/// Builds the shared application state from the configuration.
///
/// Fails if the generation provider is unknown or lacks its credential, or if
/// the CORS origin is not a valid header value.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let generation = &config.generation;

    let ai_provider: Box<dyn AiProvider> = match generation.provider.as_str() {
        "gemini" => {
            let api_key = generation
                .api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("api_key is required for the gemini provider"))?;
            let api_url = generation
                .api_url
                .clone()
                .unwrap_or_else(|| gemini_api_url(&generation.model_name));
            Box::new(GeminiProvider::new(api_url, api_key, timeout)?)
        }
        "local" => {
            let api_url = generation
                .api_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("api_url is required for the local provider"))?;
            Box::new(LocalAiProvider::new(
                api_url,
                generation.api_key.clone(),
                Some(generation.model_name.clone()),
                timeout,
            )?)
        }
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider type '{other}'"));
        }
    };
    info!(
        provider = %generation.provider,
        model = %generation.model_name,
        "Generation provider configured"
    );

    let metadata_provider = Box::new(DruidProvider::new(config.druid_sql_url.clone(), timeout)?);

    let generator = QueryGeneratorBuilder::new()
        .metadata_provider(metadata_provider)
        .ai_provider(ai_provider)
        .prompt_template(generation.prompt_template.clone())
        .build()?;

    let allowed_origin = HeaderValue::from_str(&config.allowed_origin)
        .with_context(|| format!("Invalid allowed_origin '{}'", config.allowed_origin))?;

    Ok(AppState {
        generator: Arc::new(generator),
        allowed_origin,
    })
}
