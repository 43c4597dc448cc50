//! Style lookup tables — maps the form's template/tone/length tags to prompt text.
//!
//! Tags form closed sets. Anything unrecognized resolves to the default variant
//! instead of being rejected, so a newer form can post tags this service has
//! not learned yet.

use serde::{Deserialize, Serialize};

/// Letter framing chosen on the template step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Template {
    #[default]
    Standard,
    EntryLevel,
    CareerSwitch,
    Executive,
}

/// Voice of the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Tone {
    #[default]
    Professional,
    Confident,
    Concise,
}

/// Target size of the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum LetterLength {
    Brief,
    #[default]
    Standard,
    Verbose,
}

/// Everything the prompt needs to say about a length tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LengthGuide {
    pub words: &'static str,
    pub description: &'static str,
    pub structure: &'static str,
    #[serde(skip)]
    pub sentences_per_paragraph: &'static str,
    #[serde(skip)]
    pub example_count: &'static str,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Standard,
        Template::EntryLevel,
        Template::CareerSwitch,
        Template::Executive,
    ];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "entry-level" => Template::EntryLevel,
            "career-switch" => Template::CareerSwitch,
            "executive" => Template::Executive,
            _ => Template::Standard,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Template::Standard => "standard",
            Template::EntryLevel => "entry-level",
            Template::CareerSwitch => "career-switch",
            Template::Executive => "executive",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Template::Standard => "Standard Professional",
            Template::EntryLevel => "Entry Level",
            Template::CareerSwitch => "Career Switch",
            Template::Executive => "Executive",
        }
    }

    /// One-line summary shown on the template picker.
    pub fn summary(self) -> &'static str {
        match self {
            Template::Standard => "Classic and timeless approach suitable for most industries",
            Template::EntryLevel => {
                "Perfect for recent graduates or career starters with limited experience"
            }
            Template::CareerSwitch => "Designed for professionals changing industries or careers",
            Template::Executive => "For senior-level positions and leadership roles",
        }
    }

    /// Framing description embedded in the prompt as LETTER TYPE.
    pub fn context(self) -> &'static str {
        match self {
            Template::Standard => {
                "A professional cover letter from an experienced candidate highlighting skills \
                 and achievements that match the role"
            }
            Template::EntryLevel => {
                "An enthusiastic cover letter from a recent graduate or early-career professional, \
                 emphasizing learning potential and eagerness to grow"
            }
            Template::CareerSwitch => {
                "A strategic cover letter that bridges experience from a different field, showing \
                 how transferable skills apply to this new role"
            }
            Template::Executive => {
                "A strategic leadership cover letter highlighting vision, team leadership, and \
                 business impact at an executive level"
            }
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Confident, Tone::Concise];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "confident" => Tone::Confident,
            "concise" => Tone::Concise,
            _ => Tone::Professional,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Confident => "confident",
            Tone::Concise => "concise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Confident => "Confident",
            Tone::Concise => "Concise",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Tone::Professional => "Formal and polished approach suitable for most industries",
            Tone::Confident => "Assertive tone that highlights your strengths and achievements",
            Tone::Concise => "Brief and direct, getting straight to the point",
        }
    }

    /// Adjective phrase slotted into "Write in a ... tone."
    pub fn guide(self) -> &'static str {
        match self {
            Tone::Professional => "formal, polished, and corporate",
            Tone::Confident => "assertive, bold, and achievement-focused",
            Tone::Concise => "direct, clear, and to-the-point",
        }
    }
}

impl LetterLength {
    pub const ALL: [LetterLength; 3] = [
        LetterLength::Brief,
        LetterLength::Standard,
        LetterLength::Verbose,
    ];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "brief" => LetterLength::Brief,
            "verbose" => LetterLength::Verbose,
            _ => LetterLength::Standard,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LetterLength::Brief => "brief",
            LetterLength::Standard => "standard",
            LetterLength::Verbose => "verbose",
        }
    }

    pub fn guide(self) -> LengthGuide {
        match self {
            LetterLength::Brief => LengthGuide {
                words: "150-200 words",
                description: "concise and impactful, hitting only the most important points",
                structure: "Short opening, 1-2 brief body points, quick closing",
                sentences_per_paragraph: "3-4",
                example_count: "1-2",
            },
            LetterLength::Standard => LengthGuide {
                words: "250-350 words",
                description: "well-balanced with good detail and flow",
                structure: "Strong opening, 2-3 body paragraphs, compelling closing",
                sentences_per_paragraph: "4-5",
                example_count: "2-3",
            },
            LetterLength::Verbose => LengthGuide {
                words: "400-500 words",
                description:
                    "detailed and comprehensive, with multiple examples and deep insights",
                structure:
                    "Compelling opening, 3-4 detailed body paragraphs with examples, strong closing",
                sentences_per_paragraph: "5-7",
                example_count: "3-4",
            },
        }
    }
}

impl From<Option<String>> for Template {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Template::from_tag).unwrap_or_default()
    }
}

impl From<Option<String>> for Tone {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Tone::from_tag).unwrap_or_default()
    }
}

impl From<Option<String>> for LetterLength {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(LetterLength::from_tag).unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Options catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TemplateOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToneOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LengthOption {
    pub id: &'static str,
    #[serde(flatten)]
    pub guide: LengthGuide,
}

/// Every selectable style, in picker order. Served by GET /api/cover-letter/options.
#[derive(Debug, Serialize)]
pub struct StyleCatalog {
    pub templates: Vec<TemplateOption>,
    pub tones: Vec<ToneOption>,
    pub lengths: Vec<LengthOption>,
}

pub fn style_catalog() -> StyleCatalog {
    StyleCatalog {
        templates: Template::ALL
            .iter()
            .map(|t| TemplateOption {
                id: t.tag(),
                name: t.display_name(),
                description: t.summary(),
            })
            .collect(),
        tones: Tone::ALL
            .iter()
            .map(|t| ToneOption {
                id: t.tag(),
                label: t.label(),
                description: t.summary(),
            })
            .collect(),
        lengths: LetterLength::ALL
            .iter()
            .map(|l| LengthOption {
                id: l.tag(),
                guide: l.guide(),
            })
            .collect(),
    }
}
