//! Typography data structures (font descriptors, weights, run styles)

/// Font style (normal, italic, oblique)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    pub const BLACK: FontWeight = FontWeight(900);
}

/// A concrete font request: what a node asks the text service to measure with.
///
/// `family` of `None` means the platform's default face. The descriptor carries
/// no metrics of its own; the text-measurement service interprets it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub family: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontDescriptor {
    /// The platform-default face at the given point size.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// Style overrides carried by an attributed-text run (data only, no rendering)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
}

impl TextStyle {
    /// Resolves these overrides against a base font.
    pub fn resolve(&self, base: &FontDescriptor) -> FontDescriptor {
        FontDescriptor {
            family: self.font_family.clone().or_else(|| base.family.clone()),
            size: self.font_size.unwrap_or(base.size),
            weight: self.font_weight.unwrap_or(base.weight),
            style: self.font_style.unwrap_or(base.style),
        }
    }
}
