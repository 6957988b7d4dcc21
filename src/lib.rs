pub mod config;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod models;
pub mod services;
pub mod session;
pub mod summary;

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

// Shared context для всех сервисов
#[derive(Clone)]
pub struct ApiContext {
    pub config: config::Config,
    pub endpoints: endpoints::ApiEndpoints,
    pub session: session::SessionStore,
    pub gateway: gateway::ApiGateway,
    /// Общий клиент для публичных чтений, которые идут мимо шлюза.
    pub http: reqwest::Client,
}

impl ApiContext {
    pub fn new(config: config::Config) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()?;

        let endpoints = endpoints::ApiEndpoints::new(config.api.base_url.clone());
        let session = session::SessionStore::new();

        // Реакция на истёкшую сессию по умолчанию - предупреждение в лог;
        // страница входа у библиотеки отсутствует
        let gateway = gateway::ApiGateway::new(http.clone(), session.clone())
            .with_unauthorized_hook(Arc::new(|| {
                warn!("Session expired - redirect to login");
            }));

        Ok(Arc::new(Self {
            config,
            endpoints,
            session,
            gateway,
            http,
        }))
    }
}
