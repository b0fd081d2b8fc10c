// web_app/splash.rs - The /loading splash screen
//
// A progress counter driven by a fixed interval timer, plus the decorative
// star field behind it. Both are plain values; the page owns the timers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Delay between reaching 100% and navigating home
pub const NAVIGATE_DELAY_MS: u32 = 500;

/// Stars in the background field
pub const PARTICLE_COUNT: usize = 50;

/// Server and browser must scatter the same stars or hydration diverges
pub const PARTICLE_SEED: u64 = 0x4C55_4D41;

/// The three highlights under the progress bar: (title, subtitle)
pub const FEATURE_HIGHLIGHTS: [(&str, &str); 3] = [
    ("高品質", "Premium Quality"),
    ("デザイン", "Modern Design"),
    ("体験", "Unique Experience"),
];

/// Large outlined rings drifting over the star field
pub const FLOATING_RINGS: usize = 3;

/// Rings step diagonally across the screen, each slower than the last
pub fn floating_ring_style(index: usize) -> String {
    format!(
        "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s",
        20 + index * 30,
        20 + index * 20,
        index * 2,
        6 + index * 2
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashState {
    Loading(u8),
    Complete,
}

/// Percent counter that climbs by a fixed step per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashProgress {
    percent: u8,
    step: u8,
    complete: bool,
}

impl Default for SplashProgress {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SplashProgress {
    /// A zero step would never finish, so it is raised to 1
    pub fn new(step: u8) -> Self {
        Self {
            percent: 0,
            step: step.clamp(1, 100),
            complete: false,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance one tick
    ///
    /// The tick that finds the counter already at 100 reports `Complete`;
    /// every tick after that keeps reporting it.
    pub fn tick(&mut self) -> SplashState {
        if self.percent >= 100 {
            self.complete = true;
            return SplashState::Complete;
        }
        self.percent = self.percent.saturating_add(self.step).min(100);
        SplashState::Loading(self.percent)
    }

    pub fn label(&self) -> String {
        format!("Loading your experience... {}%", self.percent)
    }

    /// Inline width for the progress bar fill
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}

/// One twinkling star, positioned in percent of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashParticle {
    pub left: f64,
    pub top: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl SplashParticle {
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<SplashParticle> {
        (0..count)
            .map(|_| SplashParticle {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay_secs: rng.gen_range(0.0..5.0),
                duration_secs: rng.gen_range(2.0..5.0),
            })
            .collect()
    }

    /// The fixed star field drawn behind the splash and home hero
    pub fn star_field() -> Vec<SplashParticle> {
        let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
        Self::scatter(PARTICLE_COUNT, &mut rng)
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left, self.top, self.delay_secs, self.duration_secs
        )
    }
}
