//! Canned-response transport shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use tempfile::TempDir;

use crate::{Client, Data, Payload, Result, Transport};

pub(crate) const TWO_ROWS: &str = r#"{'page': '1', 'records': '2', 'rows': [
    {'id': '1', 'cell': ['1', '2018', 'Merced', 'ADA', 'LOVELACE', 'PROF, ENGINEERING', '100.00', '90.00', '0.00', '10.00']},
    {'id': '2', 'cell': ['2', '2018', 'Merced', 'ALAN', 'TURING', 'LECTURER', '50.00', '50.00', '0.00', '0.00']}
]}"#;

/// Replays `responses` in order and records every payload it was sent.
#[derive(Debug, Default)]
pub(crate) struct Stub {
    responses: RefCell<VecDeque<String>>,
    pub(crate) sent: RefCell<Vec<Payload>>,
}

impl Stub {
    pub(crate) fn replying(responses: &[&str]) -> Self {
        Self {
            responses: RefCell::new(responses.iter().map(|s| s.to_string()).collect()),
            sent: RefCell::default(),
        }
    }
}

impl Transport for Stub {
    fn post(&self, payload: &Payload) -> Result<String> {
        self.sent.borrow_mut().push(payload.clone());
        self.responses.borrow_mut().pop_front().ok_or_else(|| {
            crate::Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no stub response left",
            ))
        })
    }
}

/// A client over [`Stub`] writing into `<tmp>/data`.
pub(crate) fn client(tmp: &TempDir, responses: &[&str]) -> Client<Stub> {
    Client::with_transport(
        Stub::replying(responses),
        Data::from(tmp.path().join("data")),
    )
}
