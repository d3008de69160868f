//! Получение координат в терминальном окружении.
//!
//! Три режима: фиксированные координаты, определение по IP и отсутствие
//! возможности. Запрет пользователя (`allow = false`) проверяется до любого режима.

use crate::config::{GeolocationConfig, GeolocationMode};
use crate::http::{build_client, ensure_success, from_reqwest_error};
use async_trait::async_trait;
use common::{LocationError, OperationTimer};
use domain::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Возможность определения позиции отсутствует
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Пользователь запретил доступ к позиции
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Определение по IP через сервис формата ip-api.com
pub struct IpGeolocation {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpGeolocation {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, LocationError> {
        let client = build_client(timeout_secs)
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    async fn lookup(&self) -> Result<Coordinates, LocationError> {
        let url = format!("{}/json/?fields=status,message,lat,lon", self.base_url);
        debug!("Requesting IP geolocation: {}", url);

        let unavailable = |e: common::NetworkError| LocationError::Unavailable(e.to_string());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(from_reqwest_error(e, self.timeout_secs)))?;
        let response = ensure_success(response).await.map_err(unavailable)?;
        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        if body.status != "success" {
            return Err(LocationError::Unavailable(
                body.message.unwrap_or_else(|| body.status.clone()),
            ));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(LocationError::Unavailable(
                "Lookup response has no coordinates".to_string(),
            )),
        }
    }
}

#[async_trait]
impl LocationProvider for IpGeolocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let timer = OperationTimer::new("ip_geolocation");
        let result = self.lookup().await;
        timer.finish_with_result(&result);
        result
    }
}

/// Провайдер по настройкам
pub fn provider_from_config(config: &GeolocationConfig) -> Arc<dyn LocationProvider> {
    if !config.allow {
        return Arc::new(DeniedLocation);
    }

    match config.mode {
        GeolocationMode::None => Arc::new(NoLocation),
        GeolocationMode::Fixed => match config.fixed_coordinates() {
            Some(coords) => Arc::new(FixedLocation(coords)),
            None => {
                warn!("Fixed geolocation mode without coordinates");
                Arc::new(NoLocation)
            }
        },
        GeolocationMode::Ip => {
            match IpGeolocation::new(config.ip_lookup_url.clone(), config.timeout_secs) {
                Ok(provider) => Arc::new(provider),
                Err(e) => {
                    warn!("IP geolocation unavailable: {}", e);
                    Arc::new(NoLocation)
                }
            }
        }
    }
}
