use backprop_nn::{calculate_cost, train_network, Matrix, NeuralNetwork, TrainConfig};

fn xor_data() -> (Matrix, Matrix) {
    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0, 1.0],
    ]);
    let labels = Matrix::from_data(vec![vec![0.0, 1.0, 1.0, 0.0]]);
    (inputs, labels)
}

#[test]
fn learns_xor() {
    let (inputs, labels) = xor_data();
    let mut network = NeuralNetwork::with_seed(2, &[2, 4, 1], 42).unwrap();

    let mut costs = Vec::with_capacity(10_000);
    for _ in 0..10_000 {
        let output = network.feed_forward(&inputs).unwrap();
        costs.push(calculate_cost(&output, &labels).unwrap());
        network.back_propagate(&labels, 1.0).unwrap();
    }

    assert!(costs[costs.len() - 1] < costs[0]);
    let predictions = network.predict(&inputs).unwrap();
    for j in 0..4 {
        let error = (predictions.get(0, j) - labels.get(0, j)).abs();
        assert!(error < 0.3, "sample {j}: prediction {} for label {}", predictions.get(0, j), labels.get(0, j));
    }
}

#[test]
fn train_network_learns_xor() {
    let (inputs, labels) = xor_data();
    let mut network = NeuralNetwork::with_seed(2, &[2, 4, 1], 7).unwrap();

    let config = TrainConfig::new(10_000, 1.0).with_log_every(0);
    let report = train_network(&mut network, &inputs, &labels, &config).unwrap();

    assert_eq!(report.costs.len(), 10_000);
    assert!(report.final_cost().unwrap() < report.initial_cost().unwrap());
    for j in 0..4 {
        assert!((report.final_predictions.get(0, j) - labels.get(0, j)).abs() < 0.3);
    }
}

#[test]
fn same_seed_gives_identical_trajectories() {
    let (inputs, labels) = xor_data();
    let mut a = NeuralNetwork::with_seed(2, &[2, 4, 1], 2024).unwrap();
    let mut b = NeuralNetwork::with_seed(2, &[2, 4, 1], 2024).unwrap();

    for _ in 0..200 {
        let out_a = a.feed_forward(&inputs).unwrap();
        let out_b = b.feed_forward(&inputs).unwrap();
        assert_eq!(out_a, out_b);
        a.back_propagate(&labels, 1.0).unwrap();
        b.back_propagate(&labels, 1.0).unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.biases(), b.biases());
    }
}

#[test]
fn different_seeds_start_differently() {
    let a = NeuralNetwork::with_seed(2, &[2, 4, 1], 1).unwrap();
    let b = NeuralNetwork::with_seed(2, &[2, 4, 1], 2).unwrap();
    assert_ne!(a.weights(), b.weights());
}
