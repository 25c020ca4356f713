// Small demo of the library; all the maths lives in src/lib.rs and its modules.
// Usage:
//   cargo run -- [config.json]
// where the optional config is e.g. {"variant": "naive", "reg": 0.00005}.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linear_softmax::check::gradient::{grad_check_sparse, max_relative_error};
use linear_softmax::{evaluate, EvalConfig, LossVariant, Matrix};

fn main() -> linear_softmax::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EvalConfig::from_json_file(path)?,
        None => EvalConfig::default(),
    };
    info!(variant = ?config.variant, reg = config.reg, "loaded config");

    // W = I, one example [1, 0] of class 0.
    let w = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    let x = Matrix::from_data(vec![vec![1.0, 0.0]]);
    let identity = evaluate(&w, &x, &[0], &EvalConfig::new(config.variant, 0.0))?;
    println!("identity example: loss = {:.4}, dW = {:?}", identity.loss, identity.grad.data);

    // Near-zero weights: the loss should sit close to ln(10).
    let mut rng = StdRng::seed_from_u64(231);
    let (num_train, dim, num_classes) = (64, 32, 10);
    let w = Matrix::scaled_random(dim, num_classes, 1e-4, &mut rng);
    let x = Matrix::random_with(num_train, dim, &mut rng);
    let y: Vec<usize> = (0..num_train).map(|_| rng.gen_range(0..num_classes)).collect();

    let eval = evaluate(&w, &x, &y, &config)?;
    println!(
        "random batch: loss = {:.6} (sanity check: -ln(0.1) = {:.6})",
        eval.loss,
        -(0.1f64).ln()
    );

    let other = match config.variant {
        LossVariant::Naive => LossVariant::Vectorized,
        LossVariant::Vectorized => LossVariant::Naive,
    };
    let cross = evaluate(&w, &x, &y, &EvalConfig::new(other, config.reg))?;
    println!(
        "{:?} vs {:?}: loss difference = {:e}, max gradient relative error = {:e}",
        config.variant,
        other,
        (eval.loss - cross.loss).abs(),
        max_relative_error(&eval.grad, &cross.grad)
    );

    let samples = grad_check_sparse(
        |m| config.variant.evaluate(m, &x, &y, config.reg).0,
        &w,
        &eval.grad,
        10,
        1e-5,
        &mut rng,
    );
    for s in samples {
        println!(
            "numerical: {:+.6e} analytic: {:+.6e}, relative error: {:.3e}",
            s.numerical, s.analytic, s.relative_error
        );
    }

    Ok(())
}
