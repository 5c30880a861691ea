//! Expand/collapse state for the FAQ, practice-area and blog panel groups.

use std::collections::BTreeSet;

pub type PanelId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exclusivity {
    /// Opening a panel closes its siblings.
    Exclusive,
    /// Every panel toggles on its own.
    Independent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLabels {
    pub collapsed: &'static str,
    pub expanded: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupRules {
    pub name: &'static str,
    pub exclusivity: Exclusivity,
    pub labels: Option<PanelLabels>,
    /// Scroll a freshly expanded panel into view when its bottom edge lands
    /// closer than this to the bottom of the viewport.
    pub reveal_margin_px: Option<f64>,
}

impl GroupRules {
    /// Whether a panel whose bottom edge sits at `panel_bottom` (viewport
    /// coordinates) needs scrolling after it expands.
    pub fn needs_reveal(&self, panel_bottom: f64, viewport_height: f64) -> bool {
        match self.reveal_margin_px {
            Some(margin) => panel_bottom > viewport_height - margin,
            None => false,
        }
    }
}

pub const FAQ: GroupRules = GroupRules {
    name: "faq",
    exclusivity: Exclusivity::Independent,
    labels: None,
    reveal_margin_px: None,
};

pub const PRACTICE: GroupRules = GroupRules {
    name: "practice",
    exclusivity: Exclusivity::Exclusive,
    labels: Some(PanelLabels {
        collapsed: "Learn More",
        expanded: "Show Less",
    }),
    reveal_margin_px: Some(100.0),
};

pub const BLOG: GroupRules = GroupRules {
    name: "blog",
    exclusivity: Exclusivity::Exclusive,
    labels: Some(PanelLabels {
        collapsed: "Read More",
        expanded: "Read Less",
    }),
    reveal_margin_px: Some(50.0),
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    Expanded { id: PanelId, collapsed: Vec<PanelId> },
    Collapsed(PanelId),
    /// The id does not belong to the group.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelGroup {
    rules: GroupRules,
    len: usize,
    expanded: BTreeSet<PanelId>,
}

impl PanelGroup {
    pub fn new(rules: GroupRules, len: usize) -> Self {
        Self {
            rules,
            len,
            expanded: BTreeSet::new(),
        }
    }

    pub fn is_expanded(&self, id: PanelId) -> bool {
        self.expanded.contains(&id)
    }

    /// Trigger text for a panel, `None` for groups without a label swap.
    pub fn label(&self, id: PanelId) -> Option<&'static str> {
        self.rules.labels.map(|labels| {
            if self.is_expanded(id) {
                labels.expanded
            } else {
                labels.collapsed
            }
        })
    }

    pub fn toggle(&mut self, id: PanelId) -> Toggle {
        if id >= self.len {
            return Toggle::Ignored;
        }
        if self.expanded.remove(&id) {
            return Toggle::Collapsed(id);
        }

        let collapsed = match self.rules.exclusivity {
            Exclusivity::Exclusive => std::mem::take(&mut self.expanded).into_iter().collect(),
            Exclusivity::Independent => Vec::new(),
        };
        self.expanded.insert(id);
        Toggle::Expanded { id, collapsed }
    }

    /// Returns a copy with `id` toggled, for use as the next hook state.
    pub fn toggled(&self, id: PanelId) -> (Self, Toggle) {
        let mut next = self.clone();
        let toggle = next.toggle(id);
        (next, toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_group_keeps_at_most_one_open() {
        let mut group = PanelGroup::new(PRACTICE, 4);
        for id in [0, 2, 2, 3, 1, 1, 0, 3, 3, 2] {
            group.toggle(id);
            assert!((0..4).filter(|id| group.is_expanded(*id)).count() <= 1);
        }
    }

    #[test]
    fn opening_closes_siblings_and_resets_their_labels() {
        let mut group = PanelGroup::new(BLOG, 3);
        group.toggle(0);
        assert_eq!(group.label(0), Some("Read Less"));

        let toggle = group.toggle(2);
        assert_eq!(
            toggle,
            Toggle::Expanded {
                id: 2,
                collapsed: vec![0]
            }
        );
        assert_eq!(group.label(0), Some("Read More"));
        assert_eq!(group.label(2), Some("Read Less"));
    }

    #[test]
    fn toggling_open_panel_restores_default_label() {
        let mut group = PanelGroup::new(PRACTICE, 2);
        assert_eq!(group.label(1), Some("Learn More"));
        group.toggle(1);
        assert_eq!(group.label(1), Some("Show Less"));
        assert_eq!(group.toggle(1), Toggle::Collapsed(1));
        assert_eq!(group.label(1), Some("Learn More"));
        assert!(!group.is_expanded(1));
    }

    #[test]
    fn faq_items_toggle_independently_without_labels() {
        let mut group = PanelGroup::new(FAQ, 3);
        group.toggle(0);
        group.toggle(1);
        assert!(group.is_expanded(0));
        assert!(group.is_expanded(1));
        assert_eq!(group.label(0), None);

        group.toggle(0);
        assert!(!group.is_expanded(0));
        assert!(group.is_expanded(1));
    }

    #[test]
    fn out_of_range_and_empty_groups_are_no_ops() {
        let mut empty = PanelGroup::new(BLOG, 0);
        assert_eq!(empty.toggle(0), Toggle::Ignored);

        let mut group = PanelGroup::new(PRACTICE, 2);
        group.toggle(0);
        assert_eq!(group.toggle(7), Toggle::Ignored);
        assert!(group.is_expanded(0));
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let group = PanelGroup::new(PRACTICE, 2);
        let (next, toggle) = group.toggled(1);
        assert!(matches!(toggle, Toggle::Expanded { id: 1, .. }));
        assert!(next.is_expanded(1));
        assert!(!group.is_expanded(1));
    }

    #[test]
    fn reveal_margins_differ_per_group() {
        // viewport 900: practice reveals below 800, blog below 850
        assert!(PRACTICE.needs_reveal(820.0, 900.0));
        assert!(!BLOG.needs_reveal(820.0, 900.0));
        assert!(BLOG.needs_reveal(851.0, 900.0));
        assert!(!FAQ.needs_reveal(5000.0, 900.0));
    }
}
