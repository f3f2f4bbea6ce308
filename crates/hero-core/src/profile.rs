use crate::error::{HeroError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A personality/design line pair, e.g. `3/5`. Only the twelve canonical
/// pairs exist; arbitrary line combinations are rejected everywhere a
/// profile enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    personality_line: u8,
    design_line: u8,
}

/// Canonical pairs in pool order. The order matters: identity synthesis
/// picks from this pool by modular index.
static CANONICAL: [(u8, u8, &str); 12] = [
    (1, 3, "Investigator/Martyr"),
    (1, 4, "Investigator/Opportunist"),
    (2, 4, "Hermit/Opportunist"),
    (2, 5, "Hermit/Heretic"),
    (3, 5, "Martyr/Heretic"),
    (3, 6, "Martyr/Role Model"),
    (4, 6, "Opportunist/Role Model"),
    (4, 1, "Opportunist/Investigator"),
    (5, 1, "Heretic/Investigator"),
    (5, 2, "Heretic/Hermit"),
    (6, 2, "Role Model/Hermit"),
    (6, 3, "Role Model/Martyr"),
];

impl Profile {
    pub fn new(personality_line: u8, design_line: u8) -> Result<Profile> {
        if CANONICAL
            .iter()
            .any(|&(p, d, _)| p == personality_line && d == design_line)
        {
            Ok(Profile {
                personality_line,
                design_line,
            })
        } else {
            Err(HeroError::InvalidProfile(format!(
                "{personality_line}/{design_line}"
            )))
        }
    }

    /// All twelve profiles in pool order.
    pub fn all() -> [Profile; 12] {
        CANONICAL.map(|(p, d, _)| Profile {
            personality_line: p,
            design_line: d,
        })
    }

    pub fn personality_line(self) -> u8 {
        self.personality_line
    }

    pub fn design_line(self) -> u8 {
        self.design_line
    }

    pub fn as_str(self) -> &'static str {
        match (self.personality_line, self.design_line) {
            (1, 3) => "1/3",
            (1, 4) => "1/4",
            (2, 4) => "2/4",
            (2, 5) => "2/5",
            (3, 5) => "3/5",
            (3, 6) => "3/6",
            (4, 6) => "4/6",
            (4, 1) => "4/1",
            (5, 1) => "5/1",
            (5, 2) => "5/2",
            (6, 2) => "6/2",
            (6, 3) => "6/3",
            // Unreachable: construction is restricted to the canonical set.
            _ => "?/?",
        }
    }

    pub fn name(self) -> &'static str {
        for &(p, d, name) in CANONICAL.iter() {
            if p == self.personality_line && d == self.design_line {
                return name;
            }
        }
        "?"
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Profile> {
        let invalid = || HeroError::InvalidProfile(s.to_string());
        let (p, d) = s.split_once('/').ok_or_else(invalid)?;
        let p: u8 = p.trim().parse().map_err(|_| invalid())?;
        let d: u8 = d.trim().parse().map_err(|_| invalid())?;
        Profile::new(p, d).map_err(|_| invalid())
    }
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Profile, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_profiles_parse() {
        for s in ["3/5", "4/1", "1/3", "6/3"] {
            let p: Profile = s.parse().unwrap();
            assert_eq!(p.as_str(), s);
        }
    }

    #[test]
    fn non_canonical_profiles_rejected() {
        for s in ["1/1", "7/2", "2/3", "0/4", "3-5", "3/", "/5", "", "35"] {
            assert!(s.parse::<Profile>().is_err(), "expected invalid: {s}");
        }
    }

    #[test]
    fn pool_holds_twelve() {
        let all = Profile::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].as_str(), "1/3");
        assert_eq!(all[9].as_str(), "5/2");
        assert_eq!(all[11].as_str(), "6/3");
    }

    #[test]
    fn names_spot_check() {
        let p: Profile = "3/5".parse().unwrap();
        assert_eq!(p.name(), "Martyr/Heretic");
        let q: Profile = "4/1".parse().unwrap();
        assert_eq!(q.name(), "Opportunist/Investigator");
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let p: Profile = "2/5".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"2/5\"");
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Profile>("\"1/1\"").is_err());
    }

    #[test]
    fn lines_accessible() {
        let p: Profile = "5/1".parse().unwrap();
        assert_eq!(p.personality_line(), 5);
        assert_eq!(p.design_line(), 1);
    }
}
