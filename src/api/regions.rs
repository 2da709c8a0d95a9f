//! Falcon cloud regions and their API base URLs

use crate::error::AuthError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us1,
    Us2,
    Eu1,
    UsGov1,
    UsGov2,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Us1,
        Region::Us2,
        Region::Eu1,
        Region::UsGov1,
        Region::UsGov2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us1 => "us-1",
            Region::Us2 => "us-2",
            Region::Eu1 => "eu-1",
            Region::UsGov1 => "us-gov-1",
            Region::UsGov2 => "us-gov-2",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Us1 => "https://api.crowdstrike.com",
            Region::Us2 => "https://api.us-2.crowdstrike.com",
            Region::Eu1 => "https://api.eu-1.crowdstrike.com",
            Region::UsGov1 => "https://api.laggar.gcw.crowdstrike.com",
            Region::UsGov2 => "https://api.falcon.us-gov-2.crowdstrike.mil",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| AuthError::UnknownRegion {
                region: s.to_string(),
            })
    }
}

/// Resolve a configured region identifier to its API base URL
pub fn base_url_for(region: &str) -> Result<&'static str, AuthError> {
    Ok(region.parse::<Region>()?.base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions_resolve() {
        assert_eq!(base_url_for("us-1").unwrap(), "https://api.crowdstrike.com");
        assert_eq!(
            base_url_for("us-2").unwrap(),
            "https://api.us-2.crowdstrike.com"
        );
        assert_eq!(
            base_url_for("eu-1").unwrap(),
            "https://api.eu-1.crowdstrike.com"
        );
        assert_eq!(
            base_url_for("us-gov-1").unwrap(),
            "https://api.laggar.gcw.crowdstrike.com"
        );
        assert_eq!(
            base_url_for("us-gov-2").unwrap(),
            "https://api.falcon.us-gov-2.crowdstrike.mil"
        );
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        for region in ["", "US-1", "eu-2", "us1"] {
            match base_url_for(region) {
                Err(AuthError::UnknownRegion { region: r }) => assert_eq!(r, region),
                other => panic!("Expected UnknownRegion for {:?}, got {:?}", region, other),
            }
        }
    }

    #[test]
    fn test_region_display_round_trips_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }
}
