use std::env;
use std::fs;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::activity::{
    ContributionRecord, EnergyActionRecord, EnergyProfileRecord, ImpactLogRecord, MissionRecord,
    ProductRecord,
};
use crate::services::data_source::{ActivityDataSource, DataSourceError};

pub const API_KEY_ENV: &str = "IMPACT_STORE_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestStoreConfig {
    pub base_url: String,
    pub missions_table: String,
    pub energy_profiles_table: String,
    pub energy_actions_table: String,
    pub products_table: String,
    pub foundation_contributions_table: String,
    pub foundation_impact_logs_table: String,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            missions_table: "missions".to_string(),
            energy_profiles_table: "profiles".to_string(),
            energy_actions_table: "goes_green_actions".to_string(),
            products_table: "products".to_string(),
            foundation_contributions_table: "foundation_contributions".to_string(),
            foundation_impact_logs_table: "foundation_impact_logs".to_string(),
        }
    }
}

impl RestStoreConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, DataSourceError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| DataSourceError::Other(format!("failed to read config: {err}")))?;
        let config: RestStoreConfig =
            serde_yaml::from_str(&contents).map_err(|_| DataSourceError::Parse)?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ApiKey {
    pub key: String,
}

impl ApiKey {
    pub fn from_env() -> Result<Self, DataSourceError> {
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Self { key }),
            _ => Err(DataSourceError::Unauthorized),
        }
    }
}

/// Activity store served over a PostgREST-style HTTP API, one table per
/// record category, filtered by `tenant_id`.
pub struct RestActivityStore {
    config: RestStoreConfig,
    api_key: ApiKey,
    client: Client,
}

impl RestActivityStore {
    pub fn new(config: RestStoreConfig, api_key: ApiKey) -> Result<Self, DataSourceError> {
        if config.base_url.is_empty() {
            return Err(DataSourceError::Other(
                "store config is missing base_url".to_string(),
            ));
        }

        Ok(Self {
            config,
            api_key,
            client: Client::new(),
        })
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response, DataSourceError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header("apikey", &self.api_key.key)
            .bearer_auth(&self.api_key.key)
            .send()
            .await
            .map_err(|_| DataSourceError::Connection)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DataSourceError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(DataSourceError::NotFound);
        }
        if !status.is_success() {
            return Err(DataSourceError::Connection);
        }
        Ok(response)
    }

    async fn fetch_table<T: DeserializeOwned>(
        &self,
        table: &str,
        tenant_id: &str,
    ) -> Result<Vec<T>, DataSourceError> {
        let url = format!("{}/{table}", self.config.base_url.trim_end_matches('/'));
        let query = [
            ("tenant_id", format!("eq.{tenant_id}")),
            ("select", "*".to_string()),
        ];
        self.get(&url, &query)
            .await?
            .json::<Vec<T>>()
            .await
            .map_err(|_| DataSourceError::Parse)
    }
}

impl ActivityDataSource for RestActivityStore {
    async fn check_connection(&self) -> Result<(), DataSourceError> {
        let url = format!("{}/", self.config.base_url.trim_end_matches('/'));
        self.get(&url, &[]).await.map(|_| ())
    }

    async fn fetch_missions(&self, tenant_id: &str) -> Result<Vec<MissionRecord>, DataSourceError> {
        self.fetch_table(&self.config.missions_table, tenant_id).await
    }

    async fn fetch_energy_profiles(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyProfileRecord>, DataSourceError> {
        self.fetch_table(&self.config.energy_profiles_table, tenant_id)
            .await
    }

    async fn fetch_energy_actions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyActionRecord>, DataSourceError> {
        self.fetch_table(&self.config.energy_actions_table, tenant_id)
            .await
    }

    async fn fetch_products(&self, tenant_id: &str) -> Result<Vec<ProductRecord>, DataSourceError> {
        self.fetch_table(&self.config.products_table, tenant_id).await
    }

    async fn fetch_foundation_contributions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ContributionRecord>, DataSourceError> {
        self.fetch_table(&self.config.foundation_contributions_table, tenant_id)
            .await
    }

    async fn fetch_foundation_impact_logs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ImpactLogRecord>, DataSourceError> {
        self.fetch_table(&self.config.foundation_impact_logs_table, tenant_id)
            .await
    }
}
