use clap::Args;

use crate::domain::activity::{
    ContributionRecord, EnergyActionRecord, EnergyProfileRecord, ImpactLogRecord, MissionRecord,
    ProductRecord,
};
use crate::domain::impact_factors::ImpactFactors;
use crate::services::activity_yaml::YamlActivityStore;
use crate::services::config_yaml::{ConfigYamlError, load_impact_factors_from_yaml_file};
use crate::services::data_source::{ActivityDataSource, DataSourceError};
use crate::services::rest_store::{ApiKey, RestActivityStore, RestStoreConfig};

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct StoreArgs {
    /// Directory holding per-tenant activity YAML files
    #[arg(short, long)]
    pub data_dir: Option<String>,
    /// REST store config YAML (API key read from IMPACT_STORE_API_KEY)
    #[arg(short = 'c', long = "store-config")]
    pub store_config: Option<String>,
}

/// The activity store selected on the command line.
pub enum ActivityStore {
    Yaml(YamlActivityStore),
    Rest(RestActivityStore),
}

impl StoreArgs {
    pub fn open(&self) -> Result<ActivityStore, DataSourceError> {
        if let Some(config_path) = &self.store_config {
            let config = RestStoreConfig::from_yaml_file(config_path)?;
            let api_key = ApiKey::from_env()?;
            return Ok(ActivityStore::Rest(RestActivityStore::new(config, api_key)?));
        }
        match &self.data_dir {
            Some(dir) => Ok(ActivityStore::Yaml(YamlActivityStore::new(dir))),
            None => Err(DataSourceError::Other(
                "either --data-dir or --store-config is required".to_string(),
            )),
        }
    }
}

pub fn load_factors(path: Option<&str>) -> Result<ImpactFactors, ConfigYamlError> {
    match path {
        Some(path) => load_impact_factors_from_yaml_file(path),
        None => Ok(ImpactFactors::default()),
    }
}

impl ActivityDataSource for ActivityStore {
    async fn check_connection(&self) -> Result<(), DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.check_connection().await,
            ActivityStore::Rest(store) => store.check_connection().await,
        }
    }

    async fn fetch_missions(&self, tenant_id: &str) -> Result<Vec<MissionRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_missions(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_missions(tenant_id).await,
        }
    }

    async fn fetch_energy_profiles(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyProfileRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_energy_profiles(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_energy_profiles(tenant_id).await,
        }
    }

    async fn fetch_energy_actions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyActionRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_energy_actions(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_energy_actions(tenant_id).await,
        }
    }

    async fn fetch_products(&self, tenant_id: &str) -> Result<Vec<ProductRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_products(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_products(tenant_id).await,
        }
    }

    async fn fetch_foundation_contributions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ContributionRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_foundation_contributions(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_foundation_contributions(tenant_id).await,
        }
    }

    async fn fetch_foundation_impact_logs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ImpactLogRecord>, DataSourceError> {
        match self {
            ActivityStore::Yaml(store) => store.fetch_foundation_impact_logs(tenant_id).await,
            ActivityStore::Rest(store) => store.fetch_foundation_impact_logs(tenant_id).await,
        }
    }
}
