//! Constitution classification: feature assembly, the injected cluster
//! model, and the cluster-id to label lookup.

pub mod centroid_store;
pub mod lookups;

use anyhow::{anyhow, Result};
use std::collections::HashMap;

use crate::profile::{HealthConditions, PersonProfile};

/// Number of inputs the clustering model was trained on:
/// [BMI, weight_kg, height_cm, activity_code, condition_count].
pub const FEATURE_DIM: usize = 5;

pub type FeatureVector = [f32; FEATURE_DIM];

/// Numeric code used when the activity name is missing from the lookup table.
const DEFAULT_ACTIVITY_CODE: i64 = 3;

/// The single operation the trained model artifact must provide.
///
/// Kept behind a trait so tests can substitute a stub for the real
/// centroid store.
pub trait ClusterModel {
    /// Assigns one feature vector to a cluster, returning its id.
    fn predict(&self, features: &FeatureVector) -> Result<u32>;
}

/// Turns raw per-request inputs into a `ConstitutionLabel` string using an
/// injected model and the two externally supplied lookup tables.
#[derive(Debug)]
pub struct PrakritiClassifier<M: ClusterModel> {
    model: M,
    cluster_labels: HashMap<u32, String>,
    activity_codes: HashMap<String, i64>,
}

impl<M: ClusterModel> PrakritiClassifier<M> {
    pub fn new(
        model: M,
        cluster_labels: HashMap<u32, String>,
        activity_codes: HashMap<String, i64>,
    ) -> Self {
        Self {
            model,
            cluster_labels,
            activity_codes,
        }
    }

    /// Builds the fixed 5-dimensional feature vector the model expects.
    /// Activity names missing from the lookup table get code 3.
    pub fn assemble_features(
        &self,
        profile: &PersonProfile,
        activity_name: &str,
        conditions: &HealthConditions,
    ) -> FeatureVector {
        let activity_code = self
            .activity_codes
            .get(activity_name)
            .copied()
            .unwrap_or(DEFAULT_ACTIVITY_CODE);
        [
            profile.bmi(),
            profile.weight_kg,
            profile.height_cm,
            activity_code as f32,
            conditions.len() as f32,
        ]
    }

    /// Predicts the constitution label for one person.
    ///
    /// A cluster id missing from the label table means the artifacts are
    /// inconsistent with each other, which is an error rather than a
    /// silent default.
    pub fn classify(
        &self,
        profile: &PersonProfile,
        activity_name: &str,
        conditions: &HealthConditions,
    ) -> Result<String> {
        let features = self.assemble_features(profile, activity_name, conditions);
        let cluster_id = self.model.predict(&features)?;
        self.cluster_labels
            .get(&cluster_id)
            .cloned()
            .ok_or_else(|| anyhow!("Cluster id {} has no entry in the cluster label map", cluster_id))
    }
}
