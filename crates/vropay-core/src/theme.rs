//! Theme table: colours, copy and tuning for one design revision.
//!
//! Revisions of the page differ only in palette, wording and a few animation
//! choices, so each one is a [`Theme`] value rather than its own code path.

use crate::constants::*;
use crate::error::ConfigError;
use crate::navigation::NavigationDispatcher;
use crate::progress::{PhaseScheme, SectionId, SectionRange, SectionTable};
use crate::scene::{build_scene, SceneSpec};

/// `0xRRGGBB` to sRGB floats.
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Per-section colours. Scenes pick slots by role (see `scene.rs`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: [f32; 3],
    pub accent: [f32; 3],
    pub highlight: [f32; 3],
    pub glow: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub icon: Option<&'static str>,
    pub title: &'static str,
    pub text: Option<&'static str>,
}

const fn card(icon: &'static str, title: &'static str, text: &'static str) -> Card {
    Card {
        icon: Some(icon),
        title,
        text: Some(text),
    }
}

const fn tag(title: &'static str) -> Card {
    Card {
        icon: None,
        title,
        text: None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Callout {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionCopy {
    pub title: &'static str,
    /// Rendered after `title` in the accent colour.
    pub accent: &'static str,
    pub body: Option<&'static str>,
    pub cards: &'static [Card],
    pub callout: Option<Callout>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub sections: SectionTable,
    pub nav_targets: [f32; 4],
    /// Global-progress window each scene animates over.
    pub windows: [SectionRange; 4],
    pub phases: PhaseScheme,
    /// Per-tick exponential smoothing of element positions; `None` sets them
    /// directly.
    pub smoothing: Option<f32>,
    pub background: [f32; 3],
    pub palettes: [Palette; 4],
    pub copy: [SectionCopy; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self::daylight()
    }
}

impl Theme {
    pub const NAMES: [&'static str; 2] = ["daylight", "midnight"];

    pub fn by_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "daylight" => Some(Self::daylight()),
            "midnight" => Some(Self::midnight()),
            _ => None,
        }
    }

    /// Deep blue on white: per-scene animation windows, three-way module
    /// reveal, positions set directly.
    pub fn daylight() -> Theme {
        Theme {
            name: "daylight",
            sections: SectionTable::default(),
            nav_targets: NAV_TARGETS,
            windows: [
                SectionRange::new(SectionId::Hero, HERO_WINDOW[0], HERO_WINDOW[1]),
                SectionRange::new(SectionId::Problem, PROBLEM_WINDOW[0], PROBLEM_WINDOW[1]),
                SectionRange::new(SectionId::Ecosystem, ECOSYSTEM_WINDOW[0], ECOSYSTEM_WINDOW[1]),
                SectionRange::new(
                    SectionId::Financials,
                    FINANCIALS_WINDOW[0],
                    FINANCIALS_WINDOW[1],
                ),
            ],
            phases: PhaseScheme::THIRDS,
            smoothing: None,
            background: rgb(0xf4f7fb),
            palettes: [
                Palette {
                    base: rgb(0x0a2540),
                    accent: rgb(0x1877f2),
                    highlight: rgb(0xffffff),
                    glow: rgb(0x1877f2),
                },
                Palette {
                    base: rgb(0x1a1a2e),
                    accent: rgb(0xffd400),
                    highlight: rgb(0xffffff),
                    glow: rgb(0x00fff0),
                },
                Palette {
                    base: rgb(0x0a2540),
                    accent: rgb(0x1877f2),
                    highlight: rgb(0xffffff),
                    glow: rgb(0x1877f2),
                },
                Palette {
                    base: rgb(0xffd400),
                    accent: rgb(0xff00d6),
                    highlight: rgb(0x00fff0),
                    glow: rgb(0x00fff0),
                },
            ],
            copy: DAYLIGHT_COPY,
        }
    }

    /// Neon on near-black, scenes follow the section table, modules reveal
    /// in the staggered quarter bands, positions eased toward their targets.
    pub fn midnight() -> Theme {
        let sections = SectionTable::default();
        Theme {
            name: "midnight",
            windows: *sections.ranges(),
            sections,
            nav_targets: NAV_TARGETS,
            phases: PhaseScheme::STAGGERED,
            smoothing: Some(DEFAULT_SMOOTHING),
            background: rgb(0x07080f),
            palettes: [
                Palette {
                    base: rgb(0x9333ea),
                    accent: rgb(0xec4899),
                    highlight: rgb(0x3b82f6),
                    glow: rgb(0x00fff0),
                },
                Palette {
                    base: rgb(0x1a1a2e),
                    accent: rgb(0xfacc15),
                    highlight: rgb(0xfb923c),
                    glow: rgb(0x00fff0),
                },
                Palette {
                    base: rgb(0x9333ea),
                    accent: rgb(0xec4899),
                    highlight: rgb(0x3b82f6),
                    glow: rgb(0x34d399),
                },
                Palette {
                    base: rgb(0xffd400),
                    accent: rgb(0xff00d6),
                    highlight: rgb(0x00fff0),
                    glow: rgb(0x00fff0),
                },
            ],
            copy: MIDNIGHT_COPY,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sections.validate()?;
        self.phases.validate()?;
        for w in &self.windows {
            if !(w.upper > w.lower) {
                return Err(ConfigError::EmptyRange {
                    lower: w.lower,
                    upper: w.upper,
                });
            }
        }
        if let Some(f) = self.smoothing {
            if !(f > 0.0 && f <= 1.0) {
                return Err(ConfigError::Smoothing(f));
            }
        }
        for section in SectionId::ALL {
            let count = self.scene(section).elements.len();
            if count > MAX_SCENE_ELEMENTS {
                return Err(ConfigError::TooManyElements {
                    scene: section.label(),
                    count,
                    limit: MAX_SCENE_ELEMENTS,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn navigation(&self) -> NavigationDispatcher {
        NavigationDispatcher::new(self.nav_targets)
    }

    #[inline]
    pub fn scene(&self, section: SectionId) -> SceneSpec {
        build_scene(self, section)
    }

    #[inline]
    pub fn copy(&self, section: SectionId) -> &SectionCopy {
        &self.copy[section.index()]
    }
}

const DAYLIGHT_COPY: [SectionCopy; 4] = [
    SectionCopy {
        title: "VroPay Finance",
        accent: "EcoSystem",
        body: None,
        cards: &[tag("Education"), tag("Entrepreneurship"), tag("Finance")],
        callout: Some(Callout {
            title: "VroPay: Dream, Build, Launch",
            text: "",
        }),
    },
    SectionCopy {
        title: "We Understand Your",
        accent: "Struggle",
        body: Some(
            "Launching a startup is tough, especially in Tier 2/3 cities. \
             We bring you everything you need in one place.",
        ),
        cards: &[
            card(
                "💔",
                "Fragmented Knowledge",
                "We bring everything you need. No more scattered platforms.",
            ),
            card(
                "⚠️",
                "Scams & Uncertainty",
                "We connect you with verified mentors and trusted resources.",
            ),
            card(
                "❌",
                "No Real-Time Help",
                "Our platform gives you instant support exactly when you need it.",
            ),
        ],
        callout: Some(Callout {
            title: "VroPay Bridge solves it all: one platform, real-time support.",
            text: "One platform. All solutions. Real-time support.",
        }),
    },
    SectionCopy {
        title: "A Single Engine.",
        accent: "3 Growth Levers.",
        body: None,
        cards: &[
            card("📚", "Education", "Get curated playbooks and expert sessions."),
            card(
                "🚀",
                "Entrepreneurship",
                "Access AI tools, community, and incubation.",
            ),
            card("💳", "Finance", "Manage funds, raise capital, and get credit."),
        ],
        callout: Some(Callout {
            title: "₹200/month",
            text: "Less than a meal. Full access to launch and grow your startup.",
        }),
    },
    SectionCopy {
        title: "Strong Foundations.",
        accent: "Scalable Opportunities.",
        body: None,
        cards: &[
            tag("Proven growth potential"),
            tag("Metrics that matter"),
            tag("Real-Time Mentorship"),
            tag("Incubation & Resources"),
            tag("Affordable Access"),
            tag("Trusted & Verified"),
        ],
        callout: Some(Callout {
            title: "Make in India. Made for the World.",
            text: "Scaling globally. Starting locally. Building for Gen-Z everywhere.",
        }),
    },
];

const MIDNIGHT_COPY: [SectionCopy; 4] = [
    SectionCopy {
        title: "VroPay",
        accent: "Launch Faster",
        body: Some("Education, entrepreneurship and finance wired into one engine."),
        cards: &[tag("Learn"), tag("Build"), tag("Fund")],
        callout: Some(Callout {
            title: "Dream it. Build it. Launch it.",
            text: "",
        }),
    },
    SectionCopy {
        title: "Founders Are",
        accent: "Stuck in the Gap",
        body: Some("Scattered advice, unverified mentors and no one to ask when it matters."),
        cards: &[
            card("🧩", "Scattered Knowledge", "Ten tabs, five forums, zero answers."),
            card("🕳️", "Trust Gap", "Every mentor claims results. Few can prove them."),
            card("⏳", "Slow Support", "Help arrives after the deadline has passed."),
        ],
        callout: Some(Callout {
            title: "VroPay Bridge closes the gap.",
            text: "Verified people, real-time answers, one login.",
        }),
    },
    SectionCopy {
        title: "One Engine.",
        accent: "Three Levers.",
        body: None,
        cards: &[
            card("🎓", "Education", "Playbooks and live sessions from operators."),
            card("🛠️", "Entrepreneurship", "AI tooling, community and incubation."),
            card("💠", "Finance", "Credit, capital and cash management."),
        ],
        callout: Some(Callout {
            title: "₹200/month",
            text: "Everything a first-time founder needs, for the price of a meal.",
        }),
    },
    SectionCopy {
        title: "Built to",
        accent: "Scale.",
        body: None,
        cards: &[
            card("📈", "Growth", "Compounding founder network."),
            card("📊", "Metrics", "Numbers that investors ask for."),
            card("🤝", "Mentorship", "Real-time and verified."),
        ],
        callout: Some(Callout {
            title: "Make in India. Made for the World.",
            text: "Starting locally. Scaling globally.",
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_validate() {
        for name in Theme::NAMES {
            let theme = Theme::by_name(name).expect("builtin theme");
            assert_eq!(theme.name, name);
            assert_eq!(theme.validate(), Ok(()));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(Theme::by_name(" Midnight ").is_some());
        assert!(Theme::by_name("sepia").is_none());
    }

    #[test]
    fn bad_smoothing_is_rejected() {
        let mut theme = Theme::midnight();
        theme.smoothing = Some(0.0);
        assert_eq!(theme.validate(), Err(ConfigError::Smoothing(0.0)));
    }

    #[test]
    fn rgb_unpacks_channels() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);
    }
}
