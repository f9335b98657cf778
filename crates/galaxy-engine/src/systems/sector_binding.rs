use crate::components::sector::SectorId;

/// Share of the viewport a section must cover to count as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Holds the current sector, fed by section visibility reports and
/// explicit focus requests. Last write wins; there is no debouncing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorTracker {
    current: Option<SectorId>,
}

impl SectorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<SectorId> {
        self.current
    }

    /// A section reported `ratio` of itself visible. Reports under the
    /// threshold are ignored. Returns whether the report was applied.
    pub fn on_visibility(&mut self, section_id: &str, ratio: f32) -> bool {
        if ratio.is_nan() || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.set_focus(section_id);
        true
    }

    /// Make `section_id` current. An id that names no sector clears the
    /// current sector so every pin goes dormant.
    pub fn set_focus(&mut self, section_id: &str) {
        let next = match section_id.parse::<SectorId>() {
            Ok(sector) => Some(sector),
            Err(err) => {
                log::debug!("{err}; no pin is highlighted");
                None
            }
        };
        if next != self.current {
            log::debug!("current sector: {:?} -> {:?}", self.current, next);
        }
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_sector() {
        assert_eq!(SectorTracker::new().current(), None);
    }

    #[test]
    fn half_visible_section_becomes_current() {
        let mut t = SectorTracker::new();
        assert!(!t.on_visibility("bio", 0.49));
        assert_eq!(t.current(), None);
        assert!(t.on_visibility("bio", 0.5));
        assert_eq!(t.current(), Some(SectorId::Bio));
    }

    #[test]
    fn last_report_wins() {
        let mut t = SectorTracker::new();
        t.on_visibility("projects", 0.9);
        t.on_visibility("contact", 0.6);
        t.on_visibility("contact", 0.7);
        assert_eq!(t.current(), Some(SectorId::Contact));
    }

    #[test]
    fn focus_overrides_visibility() {
        let mut t = SectorTracker::new();
        t.on_visibility("misc", 1.0);
        t.set_focus("mini-projects");
        assert_eq!(t.current(), Some(SectorId::MiniProjects));
    }

    #[test]
    fn unknown_section_clears() {
        let mut t = SectorTracker::new();
        t.set_focus("bio");
        t.on_visibility("intro", 1.0);
        assert_eq!(t.current(), None);
    }

    #[test]
    fn nan_ratio_is_ignored() {
        let mut t = SectorTracker::new();
        t.set_focus("extra");
        assert!(!t.on_visibility("bio", f32::NAN));
        assert_eq!(t.current(), Some(SectorId::Extra));
    }
}
