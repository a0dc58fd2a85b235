//! Hero copy consumed by the page wrapper around the animation.

use crate::constants::{TAGLINE_DELAY_BASE_SEC, TAGLINE_DELAY_STEP_SEC};
use smallvec::SmallVec;

/// The three content strings the landing page feeds the hero section.
#[derive(Clone, Debug)]
pub struct HeroContent {
    pub company_name: String,
    pub tagline: String,
    pub description: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            company_name: "TechFlow".into(),
            tagline: "Build. Scale. Innovate.".into(),
            description: "Empowering startups with AI-driven development tools and \
                          intelligent automation to transform ideas into scalable \
                          products 10x faster."
                .into(),
        }
    }
}

impl HeroContent {
    /// Tagline split into sentence fragments, one per entrance step.
    pub fn tagline_phrases(&self) -> SmallVec<[&str; 3]> {
        self.tagline
            .split('.')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Entrance delay in seconds for the fragment at `index`.
    pub fn entrance_delay_sec(index: usize) -> f32 {
        TAGLINE_DELAY_BASE_SEC + index as f32 * TAGLINE_DELAY_STEP_SEC
    }
}
