use crate::domain::CoordinateSystem::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reference frames supported by the SSC locations endpoint.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum CoordinateSystem {
    #[default]
    Gse,
    Geo,
    Gsm,
    Sm,
    Mag,
    Lgm,
    Rtn,
    Rtp,
    Gseq,
}

impl CoordinateSystem {
    pub fn all() -> [CoordinateSystem; 9] {
        [Gse, Geo, Gsm, Sm, Mag, Lgm, Rtn, Rtp, Gseq]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gse => "GSE",
            Geo => "GEO",
            Gsm => "GSM",
            Sm => "SM",
            Mag => "MAG",
            Lgm => "LGM",
            Rtn => "RTN",
            Rtp => "RTP",
            Gseq => "GSEQ",
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = UnknownCoordinateSystem;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.to_uppercase();
        CoordinateSystem::all()
            .into_iter()
            .find(|system| system.as_str() == upper)
            .ok_or(UnknownCoordinateSystem(value.to_owned()))
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown coordinate system '{0}'")]
pub struct UnknownCoordinateSystem(pub String);
