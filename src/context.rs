//! Explicit startup step: load the model and lookup artifacts once and
//! hand back a ready-to-use classifier. Any missing or corrupt artifact is
//! fatal; there is no partial service.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::classify::centroid_store::CentroidStore;
use crate::classify::lookups::{parse_activity_code_map, parse_cluster_label_map};
use crate::classify::PrakritiClassifier;

pub const CENTROIDS_FILE: &str = "centroids.json";
pub const CLUSTER_MAP_FILE: &str = "cluster_map.json";
pub const ACTIVITY_MAP_FILE: &str = "activity_map.json";

#[derive(Debug)]
pub struct AppContext {
    pub classifier: PrakritiClassifier<CentroidStore>,
}

impl AppContext {
    /// Reads `centroids.json`, `cluster_map.json` and `activity_map.json`
    /// from `data_dir`. All three artifacts are read-only after this point.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let centroids_path = data_dir.join(CENTROIDS_FILE);
        let contents = fs::read_to_string(&centroids_path)
            .await
            .with_context(|| format!("Failed to read centroid model artifact at {:?}", centroids_path))?;
        let model = CentroidStore::from_json(&contents)
            .with_context(|| format!("Invalid centroid model artifact at {:?}", centroids_path))?;

        let cluster_map_path = data_dir.join(CLUSTER_MAP_FILE);
        let contents = fs::read_to_string(&cluster_map_path)
            .await
            .with_context(|| format!("Failed to read cluster label map at {:?}", cluster_map_path))?;
        let cluster_labels = parse_cluster_label_map(&contents)
            .with_context(|| format!("Invalid cluster label map at {:?}", cluster_map_path))?;

        let activity_map_path = data_dir.join(ACTIVITY_MAP_FILE);
        let contents = fs::read_to_string(&activity_map_path)
            .await
            .with_context(|| format!("Failed to read activity code map at {:?}", activity_map_path))?;
        let activity_codes = parse_activity_code_map(&contents)
            .with_context(|| format!("Invalid activity code map at {:?}", activity_map_path))?;

        Ok(Self {
            classifier: PrakritiClassifier::new(model, cluster_labels, activity_codes),
        })
    }
}
