use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use crate::query::{Overrides, Payload};
use crate::record::{parse_loose, parse_quoted, Salaries, HEADER};
use crate::{Data, Error, Result};

pub const URL: &str = "https://ucannualwage.ucop.edu/wage/search.action";
pub const AGENT: &str = "github.com/upretip/ucwage";

/// Where search requests are sent and how the client identifies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub user_agent: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: URL.to_owned(),
            user_agent: AGENT.to_owned(),
        }
    }
}

/// Posts a search form and hands back the raw response body.
pub trait Transport {
    fn post(&self, payload: &Payload) -> Result<String>;
}

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &Endpoint) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&endpoint.user_agent)?);
        headers.insert("DNT", HeaderValue::from_static("1"));
        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            url: endpoint.url.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn post(&self, payload: &Payload) -> Result<String> {
        debug!(url = %self.url, fields = ?payload.fields(), "POST");
        Ok(self
            .client
            .post(&self.url)
            .form(payload.fields())
            .send()?
            .error_for_status()?
            .text()?)
    }
}

/// Client for the UC annual wage search.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    transport: T,
    data: Data,
}

impl Client<HttpTransport> {
    pub fn new(endpoint: &Endpoint, data: Data) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(endpoint)?, data))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, data: Data) -> Self {
        Self { transport, data }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Total number of records the site reports for `location` in `year`,
    /// as the literal text of the response's `records` field.
    pub fn total_records(&self, location: &str, year: i32) -> Result<String> {
        let body = self.transport.post(&Payload::count(location, year))?;
        let response = parse_quoted(&body)?;
        match response.get("records") {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(v) => Ok(v.to_string()),
            None => Err(Error::MissingField("records")),
        }
    }

    /// Fetches every record for `location` in `year`.
    ///
    /// Unless `overrides.rows` is set, the row count is discovered first with
    /// [`Client::total_records`]. When it is not positive no search is made
    /// and the sequence is empty. With `output` set, the header and all rows
    /// are written to `<data>/<location>_<year>.csv`, which drains the
    /// returned sequence; [`Salaries::written`] then names the file.
    pub fn salaries(
        &self,
        location: &str,
        year: i32,
        output: bool,
        overrides: &Overrides,
    ) -> Result<Salaries> {
        let rows = match overrides.rows {
            Some(rows) => rows.to_string(),
            None => self.total_records(location, year)?,
        };
        let count = rows
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::RowCount(rows.clone()))?;
        info!(location, year, rows = count, "salary search");
        if count <= 0 {
            return Ok(Salaries::empty());
        }

        let payload = Payload::salaries(location, year, &rows, overrides);
        let body = self.transport.post(&payload)?;
        let mut salaries = Salaries::from_response(parse_loose(&body)?)?;

        if output {
            let name = format!("{}_{}.csv", location, year);
            let mut w = csv::WriterBuilder::new()
                .flexible(true)
                .terminator(csv::Terminator::CRLF)
                .from_writer(self.data.create(&name)?);
            w.write_record(HEADER)?;
            let mut written = 0;
            for record in &mut salaries {
                w.write_record(record?.cells())?;
                written += 1;
            }
            w.flush()?;
            let path = self.data.dir().join(&name);
            info!(path = %path.display(), rows = written, "wrote csv");
            salaries.mark_written(path);
        }

        Ok(salaries)
    }
}
