pub const TICK_MS: u32 = 16;
pub const DURATION_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    Plus,
    Percent,
}

impl Suffix {
    fn as_str(self) -> &'static str {
        match self {
            Suffix::Plus => "+",
            Suffix::Percent => "%",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub id: &'static str,
    pub label: &'static str,
    pub end: u32,
    pub suffix: Suffix,
}

impl Stat {
    pub fn display(&self, value: u32) -> String {
        format!("{}{}", value, self.suffix.as_str())
    }

    pub fn ramp(&self) -> CounterRamp {
        CounterRamp::new(self.end, DURATION_MS)
    }
}

pub const COUNTERS: [Stat; 3] = [
    Stat {
        id: "yearsCounter",
        label: "Years of Experience",
        end: 25,
        suffix: Suffix::Plus,
    },
    Stat {
        id: "casesCounter",
        label: "Cases Won",
        end: 2500,
        suffix: Suffix::Plus,
    },
    Stat {
        id: "successCounter",
        label: "Success Rate",
        end: 98,
        suffix: Suffix::Percent,
    },
];

/// Tick-by-tick values of a 0 → `end` ramp. Each item is the value to show
/// after one timer tick; the last item is exactly `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    end: u32,
    increment: f64,
    accumulated: f64,
    finished: bool,
}

impl CounterRamp {
    pub fn new(end: u32, duration_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(TICK_MS);
        Self {
            end,
            increment: f64::from(end) / ticks,
            accumulated: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterRamp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        self.accumulated += self.increment;
        if self.accumulated >= f64::from(self.end) {
            self.finished = true;
            Some(self.end)
        } else {
            Some(self.accumulated.floor() as u32)
        }
    }
}

/// Whether an element whose top edge sits at `element_top` (viewport
/// coordinates) has reached the bottom of the viewport.
pub fn entered_viewport(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height
}

/// One-shot "scrolled into view" trigger. Once fired it never re-arms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceTrigger {
    fired: bool,
}

impl OnceTrigger {
    pub fn fired(self) -> bool {
        self.fired
    }

    /// A scroll listener is only worth keeping while the trigger is armed.
    pub fn needs_listener(self) -> bool {
        !self.fired
    }

    pub fn observe(self, element_top: f64, viewport_height: f64) -> Self {
        Self {
            fired: self.fired || entered_viewport(element_top, viewport_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_for(id: &str) -> Stat {
        *COUNTERS.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn cases_counter_lands_exactly_on_target() {
        let cases = stat_for("casesCounter");
        let values: Vec<u32> = cases.ramp().collect();
        assert_eq!(values.len(), 125);
        assert!(values.iter().all(|v| *v <= 2500));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cases.display(*values.last().unwrap()), "2500+");
    }

    #[test]
    fn success_counter_uses_percent() {
        let success = stat_for("successCounter");
        let last = success.ramp().last().unwrap();
        assert_eq!(success.display(last), "98%");
        assert_eq!(success.display(0), "0%");
    }

    #[test]
    fn small_targets_never_overshoot() {
        let years = stat_for("yearsCounter");
        let mut ramp = years.ramp();
        let mut last = 0;
        for value in ramp.by_ref() {
            assert!(value <= 25);
            last = value;
        }
        assert!(ramp.is_finished());
        assert_eq!(years.display(last), "25+");
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut ramp = CounterRamp::new(0, DURATION_MS);
        assert_eq!(ramp.next(), Some(0));
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn trigger_fires_once_and_releases_its_listener() {
        let trigger = OnceTrigger::default();
        assert!(trigger.needs_listener());

        let below = trigger.observe(1200.0, 900.0);
        assert!(!below.fired());
        assert!(below.needs_listener());

        let seen = below.observe(600.0, 900.0);
        assert!(seen.fired());
        assert!(!seen.needs_listener());

        // scrolling back out does not re-arm it
        let left = seen.observe(5000.0, 900.0);
        assert_eq!(left, seen);
        assert!(!left.needs_listener());
    }

    #[test]
    fn viewport_entry_uses_bottom_edge() {
        assert!(entered_viewport(899.0, 900.0));
        assert!(!entered_viewport(900.0, 900.0));
        assert!(entered_viewport(-40.0, 900.0));
    }
}
