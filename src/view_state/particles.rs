pub const PARTICLE_COUNT: usize = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    /// Draws one particle from `random`, which must yield values in `[0, 1)`.
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            size_px: random() * 20.0 + 5.0,
            left_pct: random() * 100.0,
            // starts below the hero and floats up through it
            top_pct: random() * 100.0 + 100.0,
            duration_s: random() * 20.0 + 10.0,
            delay_s: random() * 5.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}s;",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

pub fn generate(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::sample(&mut random)).collect()
}
