use rand::rngs::StdRng;
use rand::SeedableRng;
use wengert_core::nn::{mean_squared_error, Linear, Module, ParamStore};
use wengert_core::{Tape, Tensor, WengertError};
use wengert_optim::{Gd, Momentum, Optimizer};

/// Samples of `y = 2x + 1`.
fn dataset() -> Vec<(f64, f64)> {
    [-1.0, 0.0, 1.0, 2.0].iter().map(|&x| (x, 2.0 * x + 1.0)).collect()
}

/// One pass of per-sample updates; returns the summed loss seen during the pass.
fn train_epoch<O: Optimizer>(
    layer: &Linear,
    store: &mut ParamStore,
    optim: &mut O,
) -> Result<f64, WengertError> {
    let mut total = 0.0;
    for (x, y) in dataset() {
        let tape = Tape::new();
        let bindings = store.bind(&tape);
        let input = tape.var(Tensor::new(vec![x], vec![1, 1])?);
        let target = tape.var(Tensor::new(vec![y], vec![1, 1])?);
        let loss = mean_squared_error(&layer.forward(&bindings, &input)?, &target)?;
        total += loss.data().item()?;

        optim.zero_grad(store);
        loss.backward_scalar()?;
        store.collect_grads(&bindings)?;
        optim.step(store)?;
    }
    Ok(total)
}

fn fit<O: Optimizer>(optim: &mut O, epochs: usize) -> Result<(f64, f64, ParamStore, Linear), WengertError> {
    let mut rng = StdRng::seed_from_u64(11);
    let mut store = ParamStore::new();
    let layer = Linear::new(&mut store, "fc", 1, 1, &mut rng)?;
    let first = train_epoch(&layer, &mut store, optim)?;
    let mut last = first;
    for _ in 1..epochs {
        last = train_epoch(&layer, &mut store, optim)?;
    }
    Ok((first, last, store, layer))
}

#[test]
fn gradient_descent_fits_a_line() -> Result<(), WengertError> {
    let mut optim = Gd::new(0.05)?;
    let (first, last, store, layer) = fit(&mut optim, 500)?;
    assert!(last < first, "loss should decrease: {} -> {}", first, last);
    assert!(last < 1e-3, "final loss too high: {}", last);
    let weight = store.get(layer.weight())?.value.item()?;
    let bias = store.get(layer.bias())?.value.item()?;
    assert!((weight - 2.0).abs() < 1e-2, "weight = {}", weight);
    assert!((bias - 1.0).abs() < 1e-2, "bias = {}", bias);
    Ok(())
}

#[test]
fn momentum_fits_a_line() -> Result<(), WengertError> {
    let mut optim = Momentum::new(0.01, 0.5)?;
    let (first, last, _, _) = fit(&mut optim, 500)?;
    assert!(last < first, "loss should decrease: {} -> {}", first, last);
    assert!(last < 1e-2, "final loss too high: {}", last);
    Ok(())
}
