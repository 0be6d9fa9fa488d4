//! Pairing self-check
//!
//! Runs bilinearity checks on BLS12-381 and BLS24-315 and a group-order check
//! on the BLS24-315 twisted Edwards curve, logging timings.
//!
//! Run with: cargo run --release -- [iterations]
//! Log level follows RUST_LOG (default: info).

use ecpair::curves::{bls12_381, bls24_315};
use ecpair::field::{Field, PrimeField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_ITERATIONS: usize = 2;

fn check_bls12_381<R: rand::Rng>(rng: &mut R) -> ecpair::Result<bool> {
    use bls12_381::{pairing, Fr, G1Affine, G2Affine};

    let a = Fr::random(rng);
    let b = Fr::random(rng);
    let p = (G1Affine::generator() * a).into_affine();
    let q = (G2Affine::generator() * b).into_affine();

    let start = Instant::now();
    let lhs = pairing(&[p], &[q])?;
    info!(elapsed = ?start.elapsed(), "BLS12-381 pairing");

    let rhs = pairing(&[G1Affine::generator()], &[G2Affine::generator()])?
        .pow((a * b).into_bigint());
    Ok(lhs == rhs && !lhs.is_one())
}

fn check_bls24_315<R: rand::Rng>(rng: &mut R) -> ecpair::Result<bool> {
    use bls24_315::{pairing, Fr, G1Affine, G2Affine};

    let a = Fr::random(rng);
    let b = Fr::random(rng);
    let p = (G1Affine::generator() * a).into_affine();
    let q = (G2Affine::generator() * b).into_affine();

    let start = Instant::now();
    let lhs = pairing(&[p], &[q])?;
    info!(elapsed = ?start.elapsed(), "BLS24-315 pairing");

    let rhs = pairing(&[G1Affine::generator()], &[G2Affine::generator()])?
        .pow((a * b).into_bigint());
    Ok(lhs == rhs && !lhs.is_one())
}

fn check_edwards() -> bool {
    use bls24_315::twisted_edwards::{curve_params, EdwardsAffine};

    let params = curve_params();
    let base = params.base;
    let start = Instant::now();
    let killed = base.mul_bigint(&params.order).is_zero();
    info!(elapsed = ?start.elapsed(), "Edwards scalar multiplication");
    killed && base.is_on_curve() && base != EdwardsAffine::identity()
}

fn main() -> ecpair::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let iterations = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    info!(iterations, "starting pairing self-check");
    let mut rng = StdRng::from_entropy();
    let mut failures = 0;

    for i in 0..iterations {
        if !check_bls12_381(&mut rng)? {
            error!(iteration = i, "BLS12-381 bilinearity check failed");
            failures += 1;
        }
        if !check_bls24_315(&mut rng)? {
            error!(iteration = i, "BLS24-315 bilinearity check failed");
            failures += 1;
        }
    }

    if !check_edwards() {
        error!("Edwards base point does not have the advertised order");
        failures += 1;
    }

    if failures == 0 {
        info!("all checks passed");
    } else {
        error!(failures, "self-check failed");
        std::process::exit(1);
    }
    Ok(())
}
