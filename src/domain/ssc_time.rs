use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The compact timestamp format the SSC web service uses in its paths, `YYYYMMDDTHHMMSSZ`.
pub const SSC_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SscTime(NaiveDateTime);

impl FromStr for SscTime {
    type Err = SscTimeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // chrono accepts single digit fields, so the layout is checked byte by byte first
        let bytes = value.as_bytes();
        if bytes.len() != 16 {
            return Err(SscTimeError::InvalidLayout(value.to_owned()));
        }

        let layout_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'Z',
            _ => b.is_ascii_digit(),
        });
        if !layout_ok {
            return Err(SscTimeError::InvalidLayout(value.to_owned()));
        }

        NaiveDateTime::parse_from_str(value, SSC_TIME_FORMAT)
            .map(SscTime)
            .map_err(|source| SscTimeError::OutOfRange { value: value.to_owned(), source })
    }
}

impl fmt::Display for SscTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SSC_TIME_FORMAT))
    }
}

#[derive(Error, Debug)]
pub enum SscTimeError {
    #[error("'{0}' is not a time in YYYYMMDDTHHMMSSZ format")]
    InvalidLayout(String),
    #[error("'{value}' is not a valid time: {source}")]
    OutOfRange { value: String, source: chrono::ParseError },
}
