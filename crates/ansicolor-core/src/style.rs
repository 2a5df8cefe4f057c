//! Attribute codes, style declarations and the fixed attribute table.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Process-wide attribute table, built once and never mutated.
    pub static ref ATTRIBUTE_TABLE: AttributeTable = AttributeTable::standard();
}

/// Numeric SGR attribute code (the `31` in `ESC[31m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCode(pub u8);

impl AttributeCode {
    /// Reset code. Clears every active style.
    pub const RESET: AttributeCode = AttributeCode(0);
    /// Bold
    pub const BOLD: AttributeCode = AttributeCode(1);
    /// Underline
    pub const UNDERLINE: AttributeCode = AttributeCode(4);
    /// First foreground color code (black)
    pub const FOREGROUND_BASE: u8 = 30;
    /// First background color code (black)
    pub const BACKGROUND_BASE: u8 = 40;

    /// Numeric value of the code.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Convert a parsed sequence parameter into a code, if it fits.
    pub fn from_param(param: i64) -> Option<Self> {
        u8::try_from(param).ok().map(AttributeCode)
    }

    /// Check whether this is the reset code.
    pub fn is_reset(self) -> bool {
        self == Self::RESET
    }
}

impl fmt::Display for AttributeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight standard ANSI colors, in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// ANSI Black
    Black,
    /// ANSI Red
    Red,
    /// ANSI Green
    Green,
    /// ANSI Yellow
    Yellow,
    /// ANSI Blue
    Blue,
    /// ANSI Magenta
    Magenta,
    /// ANSI Cyan
    Cyan,
    /// ANSI White
    White,
}

impl Color {
    /// All colors, indexed by their SGR offset (0-7).
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Color name as written into markup.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

/// Visual style property a declaration sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    /// `font-weight`
    FontWeight,
    /// `text-decoration`
    TextDecoration,
    /// `color`
    Color,
    /// `background_color`
    BackgroundColor,
}

impl StyleProperty {
    /// Property name as written into markup.
    ///
    /// Background colors are emitted as `background_color`, underscore
    /// included.
    pub fn name(self) -> &'static str {
        match self {
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background_color",
        }
    }
}

/// A single `property: value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    /// Property being set
    pub property: StyleProperty,
    /// Fixed value string
    pub value: &'static str,
}

impl StyleDeclaration {
    /// Create a new declaration.
    pub const fn new(property: StyleProperty, value: &'static str) -> Self {
        Self { property, value }
    }

    /// Foreground color declaration.
    pub fn foreground(color: Color) -> Self {
        Self::new(StyleProperty::Color, color.name())
    }

    /// Background color declaration.
    pub fn background(color: Color) -> Self {
        Self::new(StyleProperty::BackgroundColor, color.name())
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property.name(), self.value)
    }
}

/// Fixed mapping from attribute code to style declaration.
///
/// Iteration is in ascending code order. That order is also the order in
/// which combined declarations are rendered, regardless of how the codes
/// were ordered in the escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
    entries: BTreeMap<AttributeCode, StyleDeclaration>,
}

impl AttributeTable {
    /// Build the standard table: bold, underline, 8 foreground and 8
    /// background colors.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            AttributeCode::BOLD,
            StyleDeclaration::new(StyleProperty::FontWeight, "bold"),
        );
        entries.insert(
            AttributeCode::UNDERLINE,
            StyleDeclaration::new(StyleProperty::TextDecoration, "underline"),
        );

        for (offset, color) in (0u8..).zip(Color::ALL) {
            entries.insert(
                AttributeCode(AttributeCode::FOREGROUND_BASE + offset),
                StyleDeclaration::foreground(color),
            );
            entries.insert(
                AttributeCode(AttributeCode::BACKGROUND_BASE + offset),
                StyleDeclaration::background(color),
            );
        }

        Self { entries }
    }

    /// Look up the declaration for a code.
    pub fn get(&self, code: AttributeCode) -> Option<&StyleDeclaration> {
        self.entries.get(&code)
    }

    /// Look up the declaration for a raw sequence parameter.
    pub fn lookup(&self, param: i64) -> Option<&StyleDeclaration> {
        AttributeCode::from_param(param).and_then(|code| self.get(code))
    }

    /// Check whether a code is present.
    pub fn contains(&self, code: AttributeCode) -> bool {
        self.entries.contains_key(&code)
    }

    /// Iterate entries in canonical (ascending code) order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeCode, &StyleDeclaration)> + '_ {
        self.entries.iter().map(|(code, decl)| (*code, decl))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AttributeTable {
    fn default() -> Self {
        Self::standard()
    }
}
