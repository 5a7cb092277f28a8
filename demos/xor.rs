use backprop_nn::{calculate_cost, Matrix, NeuralNetwork};

fn main() -> backprop_nn::Result<()> {
    let mut network = NeuralNetwork::with_seed(2, &[2, 4, 1], 42)?;

    // one sample per column
    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0, 1.0],
    ]);
    let expected_outputs = Matrix::from_data(vec![vec![0.0, 1.0, 1.0, 0.0]]);

    let learning_rate = 1.0;
    let epochs = 10000;

    for epoch in 0..epochs {
        let output = network.feed_forward(&inputs)?;
        let cost = calculate_cost(&output, &expected_outputs)?;
        network.back_propagate(&expected_outputs, learning_rate)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: cost = {cost:.6}");
        }
    }

    let output = network.predict(&inputs)?;
    for j in 0..inputs.cols {
        println!(
            "Input: [{}, {}] -> Output: {:.4}",
            inputs.get(0, j),
            inputs.get(1, j),
            output.get(0, j)
        );
    }
    Ok(())
}
