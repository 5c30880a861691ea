//! Which navigation link is highlighted for the current scroll position.
//!
//! The tracker is a pure function of a [`ScrollSnapshot`]: the page measures
//! the hero and every `<section>` on scroll, and [`ActiveNav::next`] decides
//! which link gets the `active` class.

/// `href` of the home link.
pub const HOME_HREF: &str = "#";

/// Sections count as "in view" this many pixels before their top reaches the
/// top of the viewport.
pub const LOOKAHEAD_PX: f64 = 200.0;

/// Below this fraction of the hero height the home link always wins.
pub const HERO_FRACTION: f64 = 0.5;

/// Quiet period for the scroll debounce.
pub const SCROLL_DEBOUNCE_MS: u32 = 20;

/// Fallback for browsers that never emit `scrollend` after a nav click.
pub const CLICK_SETTLE_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: Option<&str>, top: f64, height: f64) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()).map(str::to_string),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top - LOOKAHEAD_PX && scroll_y < self.top + self.height - LOOKAHEAD_PX
    }
}

/// Everything the tracker needs to know about the page at one instant.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub hero_height: f64,
    /// In document order.
    pub sections: Vec<SectionBounds>,
}

/// The section whose range contains the scroll offset. Later sections win
/// when ranges overlap; a matching section without an id yields `None`.
pub fn section_in_view(snapshot: &ScrollSnapshot) -> Option<&str> {
    snapshot
        .sections
        .iter()
        .filter(|section| section.contains(snapshot.scroll_y))
        .last()
        .and_then(|section| section.id.as_deref())
}

pub fn href_for_section(id: &str) -> String {
    format!("#{}", id)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ActiveNav {
    active_href: Option<String>,
}

impl ActiveNav {
    pub fn next(snapshot: &ScrollSnapshot) -> Self {
        if snapshot.scroll_y < snapshot.hero_height * HERO_FRACTION {
            return Self {
                active_href: Some(HOME_HREF.to_string()),
            };
        }
        Self {
            active_href: section_in_view(snapshot).map(href_for_section),
        }
    }

    pub fn active_href(&self) -> Option<&str> {
        self.active_href.as_deref()
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active_href.as_deref() == Some(href)
    }
}
