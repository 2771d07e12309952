use super::{Campus, Client, Overrides, Salaries, SortOrder, Transport};
use std::error::Error;
use std::io::Write;
use tracing::warn;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[clap(long)]
    campus: Campus,

    #[clap(long)]
    year: i32,

    /// Write the rows to <data-dir>/<campus>_<year>.csv instead of printing them.
    #[clap(long)]
    output: bool,

    #[clap(long)]
    rows: Option<u64>,

    #[clap(long)]
    page: Option<u32>,

    #[clap(long)]
    sort: Option<SortOrder>,

    #[clap(long)]
    first_name: Option<String>,

    #[clap(long)]
    last_name: Option<String>,

    #[clap(long, default_value_t = 20)]
    limit: usize,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            page: self.page,
            sord: self.sort,
            firstname: self.first_name.clone(),
            lastname: self.last_name.clone(),
        }
    }
}

pub fn execute<T: Transport, W: Write>(
    client: &Client<T>,
    args: &Args,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    if !args.campus.years().contains(&args.year) {
        warn!(campus = %args.campus, year = args.year, "campus has no data for this year");
    }

    let mut salaries = client.salaries(
        args.campus.name(),
        args.year,
        args.output,
        &args.overrides(),
    )?;
    if args.output {
        match salaries.written() {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => warn!(campus = %args.campus, year = args.year, "no rows, nothing written"),
        }
        return Ok(());
    }
    print_rows(out, &mut salaries, args.limit)
}

/// Prints up to `limit` records, one JSON array per line. Rows past the
/// limit are left in `salaries`.
pub fn print_rows<W: Write>(
    out: &mut W,
    salaries: &mut Salaries,
    limit: usize,
) -> Result<(), Box<dyn Error>> {
    for record in salaries.take(limit) {
        writeln!(out, "{}", serde_json::to_string(&record?)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client, TWO_ROWS};
    use tempfile::TempDir;

    fn args(campus: Campus, year: i32) -> Args {
        Args {
            campus,
            year,
            output: false,
            rows: None,
            page: None,
            sort: None,
            first_name: None,
            last_name: None,
            limit: 20,
        }
    }

    #[test]
    fn overrides_map_cli_names_to_form_fields() {
        let args = Args {
            rows: Some(10),
            page: Some(2),
            sort: Some(SortOrder::Asc),
            first_name: Some("ADA".into()),
            last_name: Some("LOVELACE".into()),
            ..args(Campus::Merced, 2018)
        };
        assert_eq!(
            args.overrides(),
            Overrides {
                rows: Some(10),
                page: Some(2),
                sord: Some(SortOrder::Asc),
                firstname: Some("ADA".into()),
                lastname: Some("LOVELACE".into()),
            }
        );
    }

    #[test]
    fn overrides_reach_the_search_payload() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &[TWO_ROWS]);
        let args = Args {
            rows: Some(2),
            sort: Some(SortOrder::Desc),
            first_name: Some("ALAN".into()),
            ..args(Campus::Merced, 2018)
        };
        let mut out = Vec::new();
        execute(&c, &args, &mut out).expect("fetch");

        let sent = c.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].get("sord"), Some("desc"));
        assert_eq!(sent[0].get("firstname"), Some("ALAN"));
        assert_eq!(sent[0].get("lastname"), None);
    }

    #[test]
    fn prints_rows_up_to_the_limit() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &["{'records': '2'}", TWO_ROWS]);
        let args = Args {
            limit: 1,
            ..args(Campus::Merced, 2018)
        };
        let mut out = Vec::new();
        execute(&c, &args, &mut out).expect("fetch");

        let out = String::from_utf8(out).expect("utf8");
        assert_eq!(
            out,
            "[\"1\",\"2018\",\"Merced\",\"ADA\",\"LOVELACE\",\"PROF, ENGINEERING\",\
             \"100.00\",\"90.00\",\"0.00\",\"10.00\"]\n"
        );
        assert!(!tmp.path().join("data").exists());
    }

    #[test]
    fn print_rows_only_consumes_limit_rows() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &["{'records': '2'}", TWO_ROWS]);
        let mut salaries = c
            .salaries("Merced", 2018, false, &Overrides::default())
            .expect("salaries");
        let mut out = Vec::new();
        print_rows(&mut out, &mut salaries, 1).expect("print");

        assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 1);
        assert_eq!(salaries.size_hint(), (1, Some(1)));
    }

    #[test]
    fn output_prints_the_written_path() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &["{'records': '2'}", TWO_ROWS]);
        let args = Args {
            output: true,
            ..args(Campus::Merced, 2018)
        };
        let mut out = Vec::new();
        execute(&c, &args, &mut out).expect("fetch");

        let path = tmp.path().join("data").join("Merced_2018.csv");
        assert!(path.is_file());
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            format!("{}\n", path.display())
        );
    }

    #[test]
    fn output_without_rows_prints_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let c = client(&tmp, &["{'records': '0'}"]);
        let args = Args {
            output: true,
            ..args(Campus::Danr, 2019)
        };
        let mut out = Vec::new();
        execute(&c, &args, &mut out).expect("fetch");

        assert!(out.is_empty());
        assert!(!tmp.path().join("data").join("DANR_2019.csv").exists());
    }
}
