use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::Error;

/// Years for which the wage tool publishes data.
pub const YEARS: RangeInclusive<i32> = 2010..=2019;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Campus {
    Hastings,
    Ucop,
    Asucla,
    Merced,
    LosAngeles,
    Danr,
    SantaBarbara,
    SantaCruz,
    SanDiego,
    Davis,
    Riverside,
    SanFrancisco,
    Irvine,
    Berkeley,
}

impl Campus {
    pub const ALL: [Campus; 14] = [
        Campus::Hastings,
        Campus::Ucop,
        Campus::Asucla,
        Campus::Merced,
        Campus::LosAngeles,
        Campus::Danr,
        Campus::SantaBarbara,
        Campus::SantaCruz,
        Campus::SanDiego,
        Campus::Davis,
        Campus::Riverside,
        Campus::SanFrancisco,
        Campus::Irvine,
        Campus::Berkeley,
    ];

    /// The location name as typed on the wage site.
    pub fn name(&self) -> &'static str {
        match self {
            Campus::Hastings => "Hastings",
            Campus::Ucop => "UCOP",
            Campus::Asucla => "ASUCLA",
            Campus::Merced => "Merced",
            Campus::LosAngeles => "Los Angeles",
            Campus::Danr => "DANR",
            Campus::SantaBarbara => "Santa Barbara",
            Campus::SantaCruz => "Santa Cruz",
            Campus::SanDiego => "San Diego",
            Campus::Davis => "Davis",
            Campus::Riverside => "Riverside",
            Campus::SanFrancisco => "San Francisco",
            Campus::Irvine => "Irvine",
            Campus::Berkeley => "Berkeley",
        }
    }

    /// Years this campus actually reports. DANR was folded away after 2012,
    /// Hastings and ASUCLA only appear from 2018.
    pub fn years(&self) -> RangeInclusive<i32> {
        match self {
            Campus::Danr => 2010..=2012,
            Campus::Hastings | Campus::Asucla => 2018..=2019,
            _ => YEARS,
        }
    }

    pub fn is_known(location: &str) -> bool {
        location.parse::<Campus>().is_ok()
    }

    pub fn random<R: Rng>(rng: &mut R) -> (Campus, i32) {
        let campus = *Self::ALL.choose(rng).unwrap_or(&Campus::Ucop);
        let year = rng.gen_range(campus.years());
        (campus, year)
    }
}

pub fn is_valid_year(year: i32) -> bool {
    YEARS.contains(&year)
}

impl std::fmt::Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Campus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownCampus(s.to_owned()))
    }
}
