/// Section navigation for the single-page layout
///
/// Every section has a fixed height, so a section's scroll offset is the
/// sum of the heights above it. Navigation looks a section up by its id,
/// starts a smooth scroll towards it and records it as active.

use std::time::{Duration, Instant};

/// Duration of the eased scroll between sections
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Portfolio,
    Services,
    Rules,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Services,
        Section::Rules,
        Section::Contact,
    ];

    /// Stable identifier used for navigation targets
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::Rules => "rules",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::About => "Обо мне",
            Section::Portfolio => "Портфолио",
            Section::Services => "Услуги",
            Section::Rules => "Правила",
            Section::Contact => "Контакты",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Height of the section on the page, in logical pixels
    pub fn height(self) -> f32 {
        match self {
            Section::Home => 640.0,
            Section::About => 560.0,
            Section::Portfolio => 780.0,
            Section::Services => 760.0,
            Section::Rules => 720.0,
            Section::Contact => 680.0,
        }
    }
}

/// Ordered sections that make up the page
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    sections: Vec<Section>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::new(Section::ALL.to_vec())
    }
}

impl SectionLayout {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Vertical offset of the section's top edge, or None if it is not on the page
    pub fn offset_of(&self, target: Section) -> Option<f32> {
        let position = self.sections.iter().position(|&s| s == target)?;
        Some(self.sections[..position].iter().map(|s| s.height()).sum())
    }
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self { from, to, started }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now` and whether the scroll has reached its target
    pub fn offset_at(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SCROLL_DURATION {
            return (self.to, true);
        }

        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        // ease-in-out cubic
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };

        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Active section plus any scroll in flight
#[derive(Debug, Clone, PartialEq)]
pub struct PageNavigation {
    layout: SectionLayout,
    active: Section,
    scroll: Option<SmoothScroll>,
}

impl Default for PageNavigation {
    fn default() -> Self {
        Self::new(SectionLayout::default())
    }
}

impl PageNavigation {
    pub fn new(layout: SectionLayout) -> Self {
        Self {
            layout,
            active: Section::Home,
            scroll: None,
        }
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn scroll(&self) -> Option<&SmoothScroll> {
        self.scroll.as_ref()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Start scrolling to the section named `id` and mark it active.
    ///
    /// Unknown ids and sections missing from the layout are ignored and
    /// leave the state untouched. Returns the target offset otherwise.
    pub fn scroll_to_section(&mut self, id: &str, current_offset: f32, now: Instant) -> Option<f32> {
        let section = Section::from_id(id)?;
        let target = self.layout.offset_of(section)?;

        self.active = section;
        self.scroll = Some(SmoothScroll::new(current_offset, target, now));
        Some(target)
    }

    /// Advance the scroll in flight, returning the offset to apply
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.scroll?;
        let (offset, finished) = scroll.offset_at(now);
        if finished {
            self.scroll = None;
        }
        Some(offset)
    }

    pub fn cancel_scroll(&mut self) {
        self.scroll = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("gallery"), None);
    }

    #[test]
    fn test_offsets_accumulate_heights() {
        let layout = SectionLayout::default();
        assert_eq!(layout.offset_of(Section::Home), Some(0.0));
        assert_eq!(
            layout.offset_of(Section::Portfolio),
            Some(Section::Home.height() + Section::About.height())
        );
    }

    #[test]
    fn test_scroll_to_portfolio_sets_active() {
        let mut nav = PageNavigation::default();
        let now = Instant::now();

        let target = nav.scroll_to_section("portfolio", 0.0, now);

        assert_eq!(target, SectionLayout::default().offset_of(Section::Portfolio));
        assert_eq!(nav.active(), Section::Portfolio);
        assert!(nav.is_scrolling());
    }

    #[test]
    fn test_unknown_id_leaves_state_unchanged() {
        let mut nav = PageNavigation::default();
        let before = nav.clone();

        assert_eq!(nav.scroll_to_section("pricing", 0.0, Instant::now()), None);
        assert_eq!(nav, before);
    }

    #[test]
    fn test_section_missing_from_layout_is_ignored() {
        let mut nav = PageNavigation::new(SectionLayout::new(vec![Section::Home, Section::Contact]));
        let before = nav.clone();

        assert_eq!(nav.scroll_to_section("portfolio", 0.0, Instant::now()), None);
        assert_eq!(nav, before);
        assert_eq!(nav.scroll_to_section("contact", 0.0, Instant::now()), Some(Section::Home.height()));
    }

    #[test]
    fn test_smooth_scroll_eases_and_lands_on_target() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(100.0, 1100.0, start);

        let (first, done) = scroll.offset_at(start);
        assert_eq!(first, 100.0);
        assert!(!done);

        let (middle, done) = scroll.offset_at(start + SCROLL_DURATION / 2);
        assert!((middle - 600.0).abs() < 1.0);
        assert!(!done);

        let (last, done) = scroll.offset_at(start + SCROLL_DURATION);
        assert_eq!(last, 1100.0);
        assert!(done);
    }

    #[test]
    fn test_tick_clears_finished_scroll() {
        let mut nav = PageNavigation::default();
        let start = Instant::now();
        let target = nav.scroll_to_section("rules", 0.0, start).unwrap();

        assert!(nav.tick(start + Duration::from_millis(100)).is_some());
        assert_eq!(nav.tick(start + SCROLL_DURATION), Some(target));
        assert!(!nav.is_scrolling());
        assert_eq!(nav.tick(start + SCROLL_DURATION * 2), None);
    }
}
