use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GlanceError;

/// Chess titles accepted by the `/titled/{title}` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Title {
    GM,
    WGM,
    IM,
    WIM,
    FM,
    WFM,
    NM,
    WNM,
    CM,
    WCM,
}

impl Title {
    pub const COUNT: usize = 10;

    pub const ALL: [Title; Title::COUNT] = [
        Title::GM,
        Title::WGM,
        Title::IM,
        Title::WIM,
        Title::FM,
        Title::WFM,
        Title::NM,
        Title::WNM,
        Title::CM,
        Title::WCM,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Title::GM => "GM",
            Title::WGM => "WGM",
            Title::IM => "IM",
            Title::WIM => "WIM",
            Title::FM => "FM",
            Title::WFM => "WFM",
            Title::NM => "NM",
            Title::WNM => "WNM",
            Title::CM => "CM",
            Title::WCM => "WCM",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Title::GM => "Grandmaster",
            Title::WGM => "Woman Grandmaster",
            Title::IM => "International Master",
            Title::WIM => "Woman International Master",
            Title::FM => "FIDE Master",
            Title::WFM => "Woman FIDE Master",
            Title::NM => "National Master",
            Title::WNM => "Woman National Master",
            Title::CM => "Candidate Master",
            Title::WCM => "Woman Candidate Master",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Title {
    type Err = GlanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Title::ALL
            .into_iter()
            .find(|title| title.abbreviation().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GlanceError::InvalidTitle(s.to_string()))
    }
}
