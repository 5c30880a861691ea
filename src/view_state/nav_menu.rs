/// Header switches to its compact style past this scroll offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Font Awesome class for the hamburger button.
    pub fn icon_class(self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
    }

    #[test]
    fn icon_follows_menu_state() {
        let menu = MobileMenu::default();
        assert_eq!(menu.icon_class(), "fas fa-bars");
        let open = menu.toggled();
        assert!(open.is_open());
        assert_eq!(open.icon_class(), "fas fa-times");
        assert_eq!(open.closed(), MobileMenu::default());
        assert_eq!(open.toggled().icon_class(), "fas fa-bars");
    }
}
