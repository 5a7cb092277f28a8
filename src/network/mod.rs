pub mod network;
pub mod spec;
pub mod topology;

pub use network::NeuralNetwork;
pub use spec::NetworkSpec;
pub use topology::Topology;
