//! Parsers for the two externally supplied lookup tables.
//!
//! Both are plain JSON objects produced alongside the trained model:
//! `cluster_map.json` maps cluster ids to constitution labels
//! (e.g. `{"0": "Vata", "1": "Pitta-Kapha"}`), `activity_map.json` maps
//! activity names to the numeric codes used during training
//! (e.g. `{"sedentary": 1, ..., "extra": 5}`).

use anyhow::{Context, Result};
use std::collections::HashMap;

pub type ClusterLabelMap = HashMap<u32, String>;
pub type ActivityCodeMap = HashMap<String, i64>;

pub fn parse_cluster_label_map(contents: &str) -> Result<ClusterLabelMap> {
    let map: ClusterLabelMap =
        serde_json::from_str(contents).context("Failed to parse cluster label map JSON")?;
    if map.is_empty() {
        anyhow::bail!("Cluster label map is empty");
    }
    Ok(map)
}

pub fn parse_activity_code_map(contents: &str) -> Result<ActivityCodeMap> {
    let map: ActivityCodeMap =
        serde_json::from_str(contents).context("Failed to parse activity code map JSON")?;
    if map.is_empty() {
        anyhow::bail!("Activity code map is empty");
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cluster_label_map() {
        let map = parse_cluster_label_map(r#"{"0": "Vata", "1": "Pitta-Kapha"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&0).map(String::as_str), Some("Vata"));
        assert_eq!(map.get(&1).map(String::as_str), Some("Pitta-Kapha"));
    }

    #[test]
    fn test_parse_activity_code_map() {
        let map = parse_activity_code_map(
            r#"{"sedentary": 1, "light": 2, "moderate": 3, "very": 4, "extra": 5}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get("moderate"), Some(&3));
    }

    #[test]
    fn test_empty_maps_are_rejected() {
        assert!(parse_cluster_label_map("{}").is_err());
        assert!(parse_activity_code_map("{}").is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_cluster_label_map("not json").unwrap_err();
        assert!(err.to_string().contains("cluster label map"));
        let err = parse_activity_code_map(r#"{"sedentary": "one"}"#).unwrap_err();
        assert!(err.to_string().contains("activity code map"));
    }
}
