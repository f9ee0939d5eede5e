//! Typography system for Bloom
//!
//! The Nunito Sans type ramp used across the screens, exposed as
//! [`TextStyle`] definitions with a variant lookup.

use serde::{Deserialize, Serialize};

/// Font family used by every text style
pub const FONT_FAMILY: &str = "Nunito Sans";

// =============================================================================
// Text Style
// =============================================================================

/// Text case transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// No transformation
    #[default]
    None,
    /// Render in uppercase
    Uppercase,
}

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (300, 600, 700)
    pub font_weight: u16,
    /// Letter spacing in pixels
    pub letter_spacing: f32,
    /// Case transformation
    pub text_transform: TextTransform,
}

impl TextStyle {
    fn new(font_size: f32, font_weight: u16, letter_spacing: f32) -> Self {
        Self {
            font_size,
            font_weight,
            letter_spacing,
            text_transform: TextTransform::None,
        }
    }

    fn uppercase(mut self) -> Self {
        self.text_transform = TextTransform::Uppercase;
        self
    }
}

// =============================================================================
// Variants
// =============================================================================

/// Semantic typography variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    /// Section headings ("Browse themes")
    H1,
    /// Item captions and card labels
    H2,
    /// Welcome subtitle
    Subtitle1,
    /// Body text and input values
    Body1,
    /// Fine print (terms text)
    Body2,
    /// Button labels
    Button,
    /// Captions
    Caption,
}

/// Typography lookup table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typography;

impl Typography {
    /// Get the text style for a variant
    pub fn get(&self, variant: TypographyVariant) -> TextStyle {
        match variant {
            TypographyVariant::H1 => TextStyle::new(18.0, 700, 0.0),
            TypographyVariant::H2 => TextStyle::new(14.0, 700, 0.15),
            TypographyVariant::Subtitle1 => TextStyle::new(16.0, 300, 0.0),
            TypographyVariant::Body1 => TextStyle::new(14.0, 300, 0.0),
            TypographyVariant::Body2 => TextStyle::new(12.0, 300, 0.0),
            TypographyVariant::Button => TextStyle::new(14.0, 600, 1.0).uppercase(),
            TypographyVariant::Caption => TextStyle::new(12.0, 600, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles() {
        let typo = Typography;
        let h1 = typo.get(TypographyVariant::H1);
        assert_eq!(h1.font_size, 18.0);
        assert_eq!(h1.font_weight, 700);

        let h2 = typo.get(TypographyVariant::H2);
        assert_eq!(h2.letter_spacing, 0.15);
    }

    #[test]
    fn test_button_is_uppercase() {
        let style = Typography.get(TypographyVariant::Button);
        assert_eq!(style.text_transform, TextTransform::Uppercase);
        assert_eq!(style.letter_spacing, 1.0);
    }

    #[test]
    fn test_body_weights_are_light() {
        for variant in [
            TypographyVariant::Subtitle1,
            TypographyVariant::Body1,
            TypographyVariant::Body2,
        ] {
            assert_eq!(Typography.get(variant).font_weight, 300);
        }
    }
}
