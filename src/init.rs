use rand::Rng;

/// Random initial value for a hidden-layer weight, drawn uniformly from
/// `[-b, b]` with `b = sqrt(6) / sqrt(n_prev + n_next)`.
///
/// The network calls this with `(num_input_nodes + 1, 1)` for both the
/// input weights and the hidden biases, folding the bias node into the
/// fan-in.
pub fn random_hidden_weight<R: Rng>(rng: &mut R, n_prev: usize, n_next: usize) -> f32 {
    let bound = 6.0f32.sqrt() / ((n_prev + n_next) as f32).sqrt();
    rng.gen_range(-bound..=bound)
}

/// Random initial value for a final-layer weight, drawn uniformly from
/// `[-b, b]` with `b = 1 / sqrt(n)` where `n` is the previous layer size.
pub fn random_final_weight<R: Rng>(rng: &mut R, n: usize) -> f32 {
    let bound = 1.0 / (n as f32).sqrt();
    rng.gen_range(-bound..=bound)
}
