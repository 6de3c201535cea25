//! Exchange rate service
//!
//! Fetches the current KRW-per-USD rate from an external provider
//! (open.er-api.com response shape) and caches it briefly so a bulk price
//! update hits the provider once, not once per whiskey.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ExchangeRateService {
    client: Client,
    base_url: String,
    cache: Arc<RwLock<RateCache>>,
    cache_ttl_secs: u64,
}

struct RateCache {
    krw_per_usd: Option<Decimal>,
    last_updated: SystemTime,
}

impl RateCache {
    fn new() -> Self {
        Self {
            krw_per_usd: None,
            last_updated: SystemTime::UNIX_EPOCH,
        }
    }

    fn is_expired(&self, ttl_secs: u64) -> bool {
        match self.last_updated.elapsed() {
            Ok(elapsed) => elapsed.as_secs() >= ttl_secs,
            Err(_) => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    rates: HashMap<String, f64>,
}

impl ExchangeRateService {
    pub fn new(base_url: String, cache_ttl_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            cache: Arc::new(RwLock::new(RateCache::new())),
            cache_ttl_secs,
        }
    }

    /// Current KRW-per-USD rate, cached for the TTL window.
    pub async fn get_krw_per_usd(
        &self,
    ) -> Result<Decimal, Box<dyn std::error::Error + Send + Sync>> {
        {
            let cache = self.cache.read().await;
            if !cache.is_expired(self.cache_ttl_secs) {
                if let Some(rate) = cache.krw_per_usd {
                    tracing::debug!(rate = %rate, "Exchange rate cache hit");
                    return Ok(rate);
                }
            }
        }

        let rate = self.fetch_krw_per_usd().await?;

        let mut cache = self.cache.write().await;
        cache.krw_per_usd = Some(rate);
        cache.last_updated = SystemTime::now();

        Ok(rate)
    }

    async fn fetch_krw_per_usd(
        &self,
    ) -> Result<Decimal, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/latest/USD", self.base_url);
        tracing::info!(url = %url, "Fetching exchange rate");

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Exchange rate API error {}: {}", status, error_text).into());
        }

        let data: RatesResponse = response.json().await?;

        if data.result != "success" {
            return Err(format!("Exchange rate API returned result '{}'", data.result).into());
        }

        let raw = data
            .rates
            .get("KRW")
            .copied()
            .ok_or("Exchange rate response missing KRW")?;

        let rate = Decimal::from_f64_retain(raw).ok_or("Invalid KRW rate value")?;
        if rate <= Decimal::ZERO {
            return Err(format!("Non-positive KRW rate from provider: {}", rate).into());
        }

        tracing::info!(rate = %rate, "Fetched KRW/USD exchange rate");
        Ok(rate)
    }
}
