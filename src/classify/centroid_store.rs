//! The trained clustering model artifact.
//!
//! Stored as JSON with the centroid matrix base64-encoded as little-endian
//! f32 bytes, one row per cluster id in row-major order. Prediction is
//! nearest-centroid assignment under squared Euclidean distance, matching
//! how a k-means model assigns new points.
#![forbid(unsafe_code)]

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use super::{ClusterModel, FeatureVector, FEATURE_DIM};

type Float = f32;

#[derive(Debug, Serialize, Deserialize)]
pub struct CentroidStore {
    embedding_dim: usize,
    cluster_ids: Vec<u32>,
    #[serde(with = "base64_bytes")]
    matrix: Vec<Float>,
}

mod base64_bytes {
    use super::*;
    use bytemuck::cast_slice;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(vec: &[Float], serializer: S) -> Result<S::Ok, S::Error> {
        let bytes = cast_slice(vec);
        let b64 = general_purpose::STANDARD.encode(bytes);
        serializer.serialize_str(&b64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Float>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = general_purpose::STANDARD
            .decode(s)
            .map_err(serde::de::Error::custom)?;
        if bytes.len() % 4 != 0 {
            return Err(serde::de::Error::custom(
                "matrix byte length is not a multiple of 4",
            ));
        }
        Ok(bytes
            .chunks_exact(4)
            .map(|chunk| Float::from_le_bytes(chunk.try_into().unwrap()))
            .collect())
    }
}

impl CentroidStore {
    /// Builds a store from explicit centroids, validating shape. The matrix
    /// is row-major with one `FEATURE_DIM`-wide row per cluster id.
    pub fn new(cluster_ids: Vec<u32>, matrix: Vec<Float>) -> Result<Self> {
        let store = Self {
            embedding_dim: FEATURE_DIM,
            cluster_ids,
            matrix,
        };
        store.validate()?;
        Ok(store)
    }

    /// Parses a serialized artifact. Dimension or shape mismatches mean
    /// the artifact is corrupt or was trained for a different feature
    /// layout, which is fatal.
    pub fn from_json(contents: &str) -> Result<Self> {
        let store: CentroidStore = serde_json::from_str(contents)?;
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<()> {
        if self.embedding_dim != FEATURE_DIM {
            anyhow::bail!(
                "Embedding dimension mismatch: artifact has {}, expected {}",
                self.embedding_dim,
                FEATURE_DIM
            );
        }
        if self.cluster_ids.is_empty() {
            anyhow::bail!("Centroid artifact contains no clusters");
        }
        let expected_len = self.cluster_ids.len() * self.embedding_dim;
        if self.matrix.len() != expected_len {
            anyhow::bail!(
                "Matrix size mismatch: expected {}, got {}",
                expected_len,
                self.matrix.len()
            );
        }
        Ok(())
    }

    /// Number of clusters in the artifact.
    pub fn len(&self) -> usize {
        self.cluster_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cluster_ids.is_empty()
    }
}

fn squared_distance(a: &[Float], b: &[Float]) -> Float {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

impl ClusterModel for CentroidStore {
    fn predict(&self, features: &FeatureVector) -> Result<u32> {
        let mut best: Option<(Float, u32)> = None;
        for (row, &id) in self
            .matrix
            .chunks_exact(self.embedding_dim)
            .zip(self.cluster_ids.iter())
        {
            let dist = squared_distance(row, features);
            // Strict less-than keeps the first centroid on ties, and skips
            // NaN distances (NaN < x is false).
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, id));
            }
        }
        best.map(|(_, id)| id)
            .ok_or_else(|| anyhow!("Centroid store has no centroids to predict against"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster_store() -> CentroidStore {
        // Cluster 0: lean/active profile, cluster 1: heavier/sedentary.
        CentroidStore::new(
            vec![0, 1],
            vec![
                22.0, 60.0, 172.0, 4.0, 0.0, // cluster 0
                34.0, 110.0, 160.0, 1.0, 3.0, // cluster 1
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_predict_picks_nearest_centroid() {
        let store = two_cluster_store();
        assert_eq!(store.predict(&[22.5, 65.0, 170.0, 3.0, 0.0]).unwrap(), 0);
        assert_eq!(store.predict(&[33.0, 105.0, 158.0, 1.0, 2.0]).unwrap(), 1);
    }

    #[test]
    fn test_predict_tie_keeps_first_cluster() {
        let store = CentroidStore::new(
            vec![3, 4],
            vec![
                1.0, 0.0, 0.0, 0.0, 0.0, // cluster 3
                -1.0, 0.0, 0.0, 0.0, 0.0, // cluster 4, equidistant from origin
            ],
        )
        .unwrap();
        assert_eq!(store.predict(&[0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(), 3);
    }

    #[test]
    fn test_from_json_accepts_serialized_store() {
        let json = serde_json::to_string(&two_cluster_store()).unwrap();
        let store = CentroidStore::from_json(&json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.predict(&[22.0, 60.0, 172.0, 4.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let json = r#"{"embedding_dim": 3, "cluster_ids": [0], "matrix": ""}"#;
        let err = CentroidStore::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Embedding dimension mismatch"));
    }

    #[test]
    fn test_matrix_size_mismatch_is_rejected() {
        let err = CentroidStore::new(vec![0, 1], vec![1.0; FEATURE_DIM]).unwrap_err();
        assert!(err.to_string().contains("Matrix size mismatch"));
    }

    #[test]
    fn test_empty_store_is_rejected() {
        let err = CentroidStore::new(vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("no clusters"));
    }
}
