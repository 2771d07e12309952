use super::{fetch, Campus, Client, Overrides, Transport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::Write;
use tracing::info;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[clap(long, default_value_t = 20)]
    limit: usize,

    /// Seed for picking the campus and year; random when omitted.
    #[clap(long)]
    seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            limit: 20,
            seed: None,
        }
    }
}

pub fn execute<T: Transport, W: Write>(
    client: &Client<T>,
    args: &Args,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (campus, year) = Campus::random(&mut rng);
    info!(%campus, year, "picked");

    let mut salaries = client.salaries(campus.name(), year, false, &Overrides::default())?;
    fetch::print_rows(out, &mut salaries, args.limit)
}
