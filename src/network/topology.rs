use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Validated layer layout of a network.
///
/// `dims[0]` is the input feature count and `dims[L]` the output count, where
/// `L` is the number of layers (weight matrices). Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    dims: Vec<usize>,
}

impl Topology {
    pub fn new(number_of_layers: usize, dims: &[usize]) -> Result<Topology> {
        if number_of_layers == 0 {
            return Err(NetworkError::InvalidLayerCount);
        }
        if dims.len() != number_of_layers + 1 {
            return Err(NetworkError::DimensionCountMismatch {
                expected: number_of_layers + 1,
                got: dims.len(),
            });
        }
        if let Some(index) = dims.iter().position(|&d| d == 0) {
            return Err(NetworkError::NonPositiveDimension { index });
        }
        Ok(Topology { dims: dims.to_vec() })
    }

    /// Builds a topology whose layer count is implied by `dims.len() - 1`.
    pub fn from_dims(dims: &[usize]) -> Result<Topology> {
        Topology::new(dims.len().saturating_sub(1), dims)
    }

    pub fn number_of_layers(&self) -> usize {
        self.dims.len() - 1
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn input_size(&self) -> usize {
        self.dims[0]
    }

    pub fn output_size(&self) -> usize {
        self.dims[self.dims.len() - 1]
    }

    /// Shape `(dims[l+1], dims[l])` of the weight matrix of layer `l`.
    pub fn layer_shape(&self, layer: usize) -> (usize, usize) {
        (self.dims[layer + 1], self.dims[layer])
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetworkError;

    fn try_from(dims: Vec<usize>) -> Result<Topology> {
        Topology::from_dims(&dims)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_layout() {
        let t = Topology::new(3, &[2, 3, 3, 1]).unwrap();
        assert_eq!(t.number_of_layers(), 3);
        assert_eq!(t.input_size(), 2);
        assert_eq!(t.output_size(), 1);
        assert_eq!(t.layer_shape(0), (3, 2));
        assert_eq!(t.layer_shape(2), (1, 3));
    }

    #[test]
    fn rejects_zero_layers() {
        assert!(matches!(Topology::new(0, &[2]), Err(NetworkError::InvalidLayerCount)));
        assert!(matches!(Topology::from_dims(&[]), Err(NetworkError::InvalidLayerCount)));
    }

    #[test]
    fn rejects_dimension_count_mismatch() {
        assert!(matches!(
            Topology::new(2, &[2, 4, 4, 1]),
            Err(NetworkError::DimensionCountMismatch { expected: 3, got: 4 })
        ));
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(matches!(
            Topology::new(2, &[2, 0, 1]),
            Err(NetworkError::NonPositiveDimension { index: 1 })
        ));
    }

    #[test]
    fn deserialization_validates() {
        let t: Topology = serde_json::from_str("[2, 4, 1]").unwrap();
        assert_eq!(t.dims(), &[2, 4, 1]);
        assert!(serde_json::from_str::<Topology>("[2, 0, 1]").is_err());
        assert_eq!(serde_json::to_string(&t).unwrap(), "[2,4,1]");
    }
}
