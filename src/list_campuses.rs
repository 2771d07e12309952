use super::Campus;
use std::error::Error;
use std::io::Write;

#[derive(clap::Args, Debug)]
pub struct Args {}

pub fn execute<W: Write>(_args: &Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    for campus in Campus::ALL {
        let years = campus.years();
        writeln!(out, "{}\t{}-{}", campus, years.start(), years.end())?;
    }
    Ok(())
}
