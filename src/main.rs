use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use ucwage::{client, count, fetch, list_campuses, random, Client, Data, Endpoint};

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[clap(long, default_value_t = String::from("data"))]
    data_dir: String,

    #[clap(long, default_value_t = String::from(client::URL))]
    url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Random(random::Args),
    Fetch(fetch::Args),
    Count(count::Args),
    ListCampuses(list_campuses::Args),
}

impl Command {
    fn execute<W: Write>(&self, client: &Client, out: &mut W) -> Result<(), Box<dyn Error>> {
        match self {
            Command::Random(args) => random::execute(client, args, out),
            Command::Fetch(args) => fetch::execute(client, args, out),
            Command::Count(args) => count::execute(client, args, out),
            Command::ListCampuses(args) => list_campuses::execute(args, out),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let endpoint = Endpoint {
        url: args.url,
        ..Endpoint::default()
    };
    let client = Client::new(&endpoint, Data::from(&args.data_dir))?;
    let command = args
        .command
        .unwrap_or_else(|| Command::Random(random::Args::default()));
    command.execute(&client, &mut std::io::stdout().lock())?;
    Ok(())
}
