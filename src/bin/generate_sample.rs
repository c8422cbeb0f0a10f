use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

const N_VALUES: usize = 500;
const SEED: u64 = 42;
const NOISE_STD_DEV: f64 = 0.4;
const DEFAULT_OUTPUT: &str = "sample_values.txt";

/// Damped sine: `amplitude * e^(-t / decay) * sin(2π t / period)`.
fn damped_sine(t: f64, amplitude: f64, period: f64, decay: f64) -> f64 {
    amplitude * (-t / decay).exp() * (2.0 * std::f64::consts::PI * t / period).sin()
}

/// Signal plus Gaussian noise drawn from a generator seeded with `seed`.
fn generate_values(n: usize, seed: u64) -> Result<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, NOISE_STD_DEV).context("building noise distribution")?;

    Ok((0..n)
        .map(|i| damped_sine(i as f64, 10.0, 60.0, 200.0) + noise.sample(&mut rng))
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let values = generate_values(N_VALUES, SEED)?;
    log::debug!("Generated {} values with seed {SEED}", values.len());

    // One value per line, single trailing newline: the format `plotvals` reads.
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    for v in &values {
        writeln!(writer, "{v}").context("writing value")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} values to {}", values.len(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_series() {
        let a = generate_values(50, 7).unwrap();
        let b = generate_values(50, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate_values(50, 1).unwrap(), generate_values(50, 2).unwrap());
    }

    #[test]
    fn values_survive_text_round_trip() {
        let values = generate_values(20, SEED).unwrap();
        assert_eq!(values.len(), 20);
        for v in values {
            assert!(v.is_finite());
            assert_eq!(format!("{v}").parse::<f64>().unwrap(), v);
        }
    }

    #[test]
    fn damped_sine_starts_at_zero_and_decays() {
        assert_eq!(damped_sine(0.0, 10.0, 60.0, 200.0), 0.0);
        let early = damped_sine(15.0, 10.0, 60.0, 200.0);
        let late = damped_sine(315.0, 10.0, 60.0, 200.0);
        assert!(early > late);
    }
}
