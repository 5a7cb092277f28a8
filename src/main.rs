// Thin driver around the library. With no arguments it trains the built-in
// height/weight demo; otherwise it reads a run file (see `RunFile`):
//   cargo run -- run.json
use backprop_nn::{demo_dataset, train_network, NetworkSpec, NeuralNetwork, Result, Run, RunFile, Topology, TrainConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn demo_run() -> Result<Run> {
    let (inputs, labels) = demo_dataset()?;
    Ok(Run {
        network: NetworkSpec::new("demo", Topology::new(3, &[2, 3, 3, 1])?, None),
        train: TrainConfig::default(),
        inputs,
        labels,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let run = match std::env::args().nth(1) {
        Some(path) => RunFile::load_json(&path)?.into_run()?,
        None => demo_run()?,
    };

    info!(name = %run.network.name, dims = ?run.network.layer_dims.dims(), "building network");
    let mut network = NeuralNetwork::from_spec(&run.network);

    let report = train_network(&mut network, &run.inputs, &run.labels, &run.train)?;

    info!(initial = ?report.initial_cost(), last = ?report.final_cost(), "training finished");
    for (i, row) in report.final_predictions.data.iter().enumerate() {
        println!("output {i}: {:.4?}", row);
    }
    Ok(())
}
