use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::activity::{
    ContributionRecord, EnergyActionRecord, EnergyProfileRecord, ImpactLogRecord, MissionRecord,
    ProductRecord,
};
use crate::services::data_source::{ActivityDataSource, DataSourceError};

pub const MISSIONS_FILE: &str = "missions.yaml";
pub const ENERGY_PROFILES_FILE: &str = "energy_profiles.yaml";
pub const ENERGY_ACTIONS_FILE: &str = "energy_actions.yaml";
pub const PRODUCTS_FILE: &str = "products.yaml";
pub const FOUNDATION_CONTRIBUTIONS_FILE: &str = "foundation_contributions.yaml";
pub const FOUNDATION_IMPACT_LOGS_FILE: &str = "foundation_impact_logs.yaml";

/// Activity store laid out on disk as `<root>/<tenant_id>/<category>.yaml`,
/// each file holding a YAML list of records.
///
/// A missing category file means the tenant has no records of that kind.
pub struct YamlActivityStore {
    root: PathBuf,
}

impl YamlActivityStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn category_path(&self, tenant_id: &str, file_name: &str) -> Result<PathBuf, DataSourceError> {
        let tenant_id = tenant_id.trim();
        if tenant_id.is_empty()
            || tenant_id.contains(['/', '\\'])
            || tenant_id == "."
            || tenant_id == ".."
        {
            return Err(DataSourceError::Other(format!(
                "invalid tenant id: {tenant_id:?}"
            )));
        }
        Ok(self.root.join(tenant_id).join(file_name))
    }

    async fn read_category<T: DeserializeOwned>(
        &self,
        tenant_id: &str,
        file_name: &str,
    ) -> Result<Vec<T>, DataSourceError> {
        let path = self.category_path(tenant_id, file_name)?;
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(DataSourceError::Other(format!(
                    "failed to read {}: {err}",
                    path.display()
                )));
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_yaml::from_str(&contents).map_err(|_| DataSourceError::Parse)
    }
}

impl ActivityDataSource for YamlActivityStore {
    async fn check_connection(&self) -> Result<(), DataSourceError> {
        match tokio::fs::metadata(&self.root).await {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            _ => Err(DataSourceError::Connection),
        }
    }

    async fn fetch_missions(&self, tenant_id: &str) -> Result<Vec<MissionRecord>, DataSourceError> {
        self.read_category(tenant_id, MISSIONS_FILE).await
    }

    async fn fetch_energy_profiles(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyProfileRecord>, DataSourceError> {
        self.read_category(tenant_id, ENERGY_PROFILES_FILE).await
    }

    async fn fetch_energy_actions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyActionRecord>, DataSourceError> {
        self.read_category(tenant_id, ENERGY_ACTIONS_FILE).await
    }

    async fn fetch_products(&self, tenant_id: &str) -> Result<Vec<ProductRecord>, DataSourceError> {
        self.read_category(tenant_id, PRODUCTS_FILE).await
    }

    async fn fetch_foundation_contributions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ContributionRecord>, DataSourceError> {
        self.read_category(tenant_id, FOUNDATION_CONTRIBUTIONS_FILE)
            .await
    }

    async fn fetch_foundation_impact_logs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ImpactLogRecord>, DataSourceError> {
        self.read_category(tenant_id, FOUNDATION_IMPACT_LOGS_FILE)
            .await
    }
}
