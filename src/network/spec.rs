use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::topology::Topology;

fn default_name() -> String {
    "network".to_string()
}

/// A serializable description of a network architecture.
///
/// Only the layout and the initialization seed are described here; trained
/// weights are never written out.
///
/// ```json
/// { "name": "xor", "layer_dims": [2, 4, 1], "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used in log output.
    #[serde(default = "default_name")]
    pub name: String,
    /// Layer dimensions, input first. Validated on deserialization.
    pub layer_dims: Topology,
    /// Seed for weight initialization. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, layer_dims: Topology, seed: Option<u64>) -> NetworkSpec {
        NetworkSpec { name: name.into(), layer_dims, seed }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_defaults() {
        let spec: NetworkSpec = serde_json::from_str(r#"{ "layer_dims": [2, 4, 1] }"#).unwrap();
        assert_eq!(spec.name, "network");
        assert_eq!(spec.layer_dims.dims(), &[2, 4, 1]);
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn rejects_invalid_layout() {
        let res = serde_json::from_str::<NetworkSpec>(r#"{ "layer_dims": [3] }"#);
        assert!(res.is_err());
    }

    #[test]
    fn json_file_round_trip() {
        let spec = NetworkSpec::new("xor", Topology::from_dims(&[2, 4, 1]).unwrap(), Some(7));
        let path = std::env::temp_dir().join(format!("backprop_nn_spec_{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, spec);
    }
}
