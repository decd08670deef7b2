use crate::config;

/// Page regions that animate in when scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Partners,
    Projects,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Partners,
        Section::Projects,
        Section::Team,
        Section::Contact,
    ];

    /// Element id of the section in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Partners => "partners",
            Section::Projects => "projects",
            Section::Team => "team",
            Section::Contact => "contact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

/// Reports where sections currently sit relative to the viewport.
pub trait Geometry {
    fn viewport_height(&self) -> f64;
    fn section_rect(&self, section: Section) -> Option<Rect>;
    fn scroll_y(&self) -> f64;
}

/// True when some part of `rect` lies inside the upper band of the viewport.
pub fn in_view(rect: Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height * config::VIEWPORT_BAND && rect.bottom > 0.0
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityState {
    flags: [bool; 6],
    scroll_y: f64,
}

impl VisibilityState {
    pub fn is_visible(&self, section: Section) -> bool {
        self.flags[section.index()]
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn reveal(&mut self, section: Section) {
        self.flags[section.index()] = true;
    }

    /// Recomputes every flag from scratch. Sections without an element keep their flag.
    pub fn refresh(&mut self, geometry: &impl Geometry) {
        let height = geometry.viewport_height();
        for section in Section::ALL {
            if let Some(rect) = geometry.section_rect(section) {
                self.flags[section.index()] = in_view(rect, height);
            }
        }
        self.scroll_y = geometry.scroll_y();
    }
}

/// Scale and corner radius applied to the hero as the page scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub scale: f64,
    pub border_radius: f64,
}

impl HeroTransform {
    pub fn from_scroll(scroll_y: f64) -> Self {
        let progress = (scroll_y / config::HERO_SCROLL_RANGE).clamp(0.0, 1.0);
        Self {
            scale: 1.0 - progress * 0.1,
            border_radius: progress * 24.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: scale({}); border-radius: {}px; transform-origin: center top;",
            self.scale, self.border_radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedGeometry {
        height: f64,
        scroll: f64,
        rects: HashMap<&'static str, Rect>,
    }

    impl FixedGeometry {
        /// Sections stacked one viewport tall each, scrolled down by `scroll`.
        fn stacked(height: f64, scroll: f64) -> Self {
            let rects = Section::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let top = i as f64 * height - scroll;
                    (s.id(), Rect { top, bottom: top + height })
                })
                .collect();
            Self { height, scroll, rects }
        }
    }

    impl Geometry for FixedGeometry {
        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn section_rect(&self, section: Section) -> Option<Rect> {
            self.rects.get(section.id()).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll
        }
    }

    fn visible(state: &VisibilityState) -> Vec<Section> {
        Section::ALL.into_iter().filter(|s| state.is_visible(*s)).collect()
    }

    #[test]
    fn band_edges() {
        // top must be strictly above 70% of 1000px
        assert!(in_view(Rect { top: 699.0, bottom: 1200.0 }, 1000.0));
        assert!(!in_view(Rect { top: 700.0, bottom: 1200.0 }, 1000.0));
        // bottom must be strictly below the viewport top
        assert!(in_view(Rect { top: -500.0, bottom: 1.0 }, 1000.0));
        assert!(!in_view(Rect { top: -500.0, bottom: 0.0 }, 1000.0));
    }

    #[test]
    fn flags_match_the_band_at_every_scroll_position() {
        let height = 800.0;
        for step in 0..60 {
            let scroll = step as f64 * 100.0;
            let geometry = FixedGeometry::stacked(height, scroll);
            let mut state = VisibilityState::default();
            state.refresh(&geometry);
            for section in Section::ALL {
                let rect = geometry.section_rect(section).unwrap();
                let expected = rect.top < height * 0.7 && rect.bottom > 0.0;
                assert_eq!(state.is_visible(section), expected, "{:?} at {}", section, scroll);
            }
            assert_eq!(state.scroll_y(), scroll);
        }
    }

    #[test]
    fn refresh_is_deterministic() {
        let geometry = FixedGeometry::stacked(900.0, 1234.0);
        let mut first = VisibilityState::default();
        first.refresh(&geometry);
        let mut second = first.clone();
        second.refresh(&geometry);
        assert_eq!(first, second);
    }

    #[test]
    fn scrolling_back_hides_sections_again() {
        let mut state = VisibilityState::default();
        state.refresh(&FixedGeometry::stacked(1000.0, 1500.0));
        assert_eq!(visible(&state), vec![Section::About, Section::Partners]);

        state.refresh(&FixedGeometry::stacked(1000.0, 0.0));
        assert_eq!(visible(&state), vec![Section::Hero]);
    }

    #[test]
    fn missing_elements_keep_their_flag() {
        let mut geometry = FixedGeometry::stacked(1000.0, 0.0);
        let mut state = VisibilityState::default();
        state.reveal(Section::Team);
        geometry.rects.remove("team");
        state.refresh(&geometry);
        assert!(state.is_visible(Section::Team));
        assert!(state.is_visible(Section::Hero));
        assert!(!state.is_visible(Section::Contact));
    }

    #[test]
    fn hero_transform_follows_scroll() {
        assert_eq!(
            HeroTransform::from_scroll(0.0),
            HeroTransform { scale: 1.0, border_radius: 0.0 }
        );
        let half = HeroTransform::from_scroll(200.0);
        assert!((half.scale - 0.95).abs() < 1e-9);
        assert!((half.border_radius - 12.0).abs() < 1e-9);
        let past = HeroTransform::from_scroll(5_000.0);
        assert!((past.scale - 0.9).abs() < 1e-9);
        assert_eq!(past.border_radius, 24.0);
    }

    #[test]
    fn negative_scroll_is_clamped() {
        // elastic overscroll on some browsers reports negative offsets
        assert_eq!(HeroTransform::from_scroll(-40.0).scale, 1.0);
    }
}
