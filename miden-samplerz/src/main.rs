use clap::{CommandFactory, Parser, error::ErrorKind};
use miden_samplerz::{SIGMA_MAX, Sampler, rand::Shake256Rng};

/// Draws discrete Gaussian samples from a SHAKE256 stream seeded on the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Hex-encoded seed for the SHAKE256 random stream
    // fully qualified so clap reads one hex value instead of a list of bytes
    #[arg(long, value_parser = parse_seed)]
    seed: ::std::vec::Vec<u8>,

    /// Center of the distribution
    #[arg(long, allow_hyphen_values = true)]
    mu: f64,

    /// Standard deviation of the distribution
    #[arg(long)]
    sigma: f64,

    /// Smoothing parameter used to scale the acceptance probability
    #[arg(long)]
    sigmin: f64,

    /// Number of samples to draw
    #[arg(long, default_value_t = 16)]
    count: usize,
}

/// Largest center magnitude accepted on the command line.
const MU_LIMIT: f64 = 4_611_686_018_427_387_904.0; // 2^62

fn parse_seed(value: &str) -> Result<Vec<u8>, String> {
    hex::decode(value).map_err(|err| format!("invalid hex seed: {err}"))
}

/// Checks the sampling parameters against the range the sampler is defined on.
fn check_parameters(mu: f64, sigma: f64, sigmin: f64) -> Result<(), String> {
    if !(mu.is_finite() && mu.abs() < MU_LIMIT) {
        return Err(format!("expected a finite mu with |mu| < 2^62, got mu = {mu}"));
    }
    if !(1.0 < sigmin && sigmin < sigma && sigma < SIGMA_MAX) {
        return Err(format!(
            "expected 1 < sigmin < sigma < {SIGMA_MAX}, got sigmin = {sigmin}, sigma = {sigma}"
        ));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(message) = check_parameters(cli.mu, cli.sigma, cli.sigmin) {
        Cli::command().error(ErrorKind::ValueValidation, message).exit();
    }

    let mut rng = Shake256Rng::new(&cli.seed);
    let mut sampler = Sampler::new(&mut rng);
    let samples: Vec<String> = (0..cli.count)
        .map(|_| sampler.samplerz(cli.mu, cli.sigma, cli.sigmin).to_string())
        .collect();
    println!("{}", samples.join(" "));
}
