use super::{Campus, Client, Transport};
use std::error::Error;
use std::io::Write;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[clap(long)]
    campus: Campus,

    #[clap(long)]
    year: i32,
}

pub fn execute<T: Transport, W: Write>(
    client: &Client<T>,
    args: &Args,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", client.total_records(args.campus.name(), args.year)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::client;
    use tempfile::TempDir;

    #[test]
    fn prints_the_record_count() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &["{'records': '31'}"]);
        let args = Args {
            campus: Campus::SantaCruz,
            year: 2014,
        };
        let mut out = Vec::new();
        execute(&c, &args, &mut out).expect("count");

        assert_eq!(out, b"31\n");
        let sent = c.transport().sent.borrow();
        assert_eq!(sent[0].get("location"), Some("Santa Cruz"));
        assert_eq!(sent[0].get("year"), Some("2014"));
    }
}
