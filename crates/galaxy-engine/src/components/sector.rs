use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::renderer::color::Color;

/// The seven content sectors. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectorId {
    Bio,
    Projects,
    MiniProjects,
    Certifications,
    Extra,
    Misc,
    Contact,
}

/// Static placement and look of a sector pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorDescriptor {
    /// Offset from the viewport center at zoom 1.
    pub offset: Vec2,
    /// Glow / fallback dot color.
    pub color: Color,
    /// Default icon asset path.
    pub icon: &'static str,
}

impl SectorId {
    pub const COUNT: usize = 7;

    /// Declaration order; pins are spawned in this order.
    pub const ALL: [SectorId; Self::COUNT] = [
        SectorId::Bio,
        SectorId::Projects,
        SectorId::MiniProjects,
        SectorId::Certifications,
        SectorId::Extra,
        SectorId::Misc,
        SectorId::Contact,
    ];

    /// Section element id used by the page for this sector.
    pub fn as_str(self) -> &'static str {
        match self {
            SectorId::Bio => "bio",
            SectorId::Projects => "projects",
            SectorId::MiniProjects => "mini-projects",
            SectorId::Certifications => "certifications",
            SectorId::Extra => "extra",
            SectorId::Misc => "misc",
            SectorId::Contact => "contact",
        }
    }

    pub fn descriptor(self) -> SectorDescriptor {
        let (x, y, hex, icon) = match self {
            SectorId::Bio => (450.0, -180.0, "#FFD700", "assets/icons/tech/python.png"),
            SectorId::Projects => (-450.0, 0.0, "#00FF41", "assets/icons/tech/react.png"),
            SectorId::MiniProjects => (450.0, 150.0, "#FF00FF", "assets/icons/tech/javascript.png"),
            SectorId::Certifications => (-450.0, -150.0, "#00BFFF", "assets/icons/tech/json.png"),
            SectorId::Extra => (450.0, 0.0, "#FF69B4", "assets/icons/tech/gitextensions.png"),
            SectorId::Misc => (-450.0, 200.0, "#00FFFF", "assets/icons/tech/linux.png"),
            SectorId::Contact => (0.0, 280.0, "#FF4500", "assets/icons/tech/java.png"),
        };
        SectorDescriptor {
            offset: Vec2::new(x, y),
            color: Color::from_hex(hex).unwrap_or(Color::WHITE),
            icon,
        }
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section id that names no sector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a sector")]
pub struct UnknownSector(pub String);

impl FromStr for SectorId {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectorId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSector(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for id in SectorId::ALL {
            assert_eq!(id.as_str().parse::<SectorId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(
            "experience".parse::<SectorId>(),
            Err(UnknownSector("experience".to_owned()))
        );
    }

    #[test]
    fn descriptors_are_distinct_positions() {
        let mut offsets: Vec<_> = SectorId::ALL.iter().map(|s| s.descriptor().offset).collect();
        offsets.dedup();
        assert_eq!(offsets.len(), SectorId::COUNT);
        assert_eq!(SectorId::Bio.descriptor().offset, Vec2::new(450.0, -180.0));
        assert_eq!(SectorId::Bio.descriptor().color, Color::GOLD);
    }
}
