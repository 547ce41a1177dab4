// SPDX-License-Identifier: MPL-2.0
//! Anchor positions, exit styles and the other enumerations a banner is
//! configured with.
//!
//! Every enum parses from and prints as a kebab-case name so it can be used
//! in configuration files and on the command line.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing one of the banner enumerations fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

/// Implements `Display`/`FromStr` from a single name table.
macro_rules! named_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the kebab-case name of this value.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ParseError { kind: $kind, input: s.to_string() }),
                }
            }
        }
    };
}

// =============================================================================
// Position
// =============================================================================

/// One of the six screen anchor points banners stack at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    TopCenter,
    BottomCenter,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

named_enum!(Position, "position", {
    TopCenter => "top-center",
    BottomCenter => "bottom-center",
    TopLeft => "top-left",
    TopRight => "top-right",
    BottomLeft => "bottom-left",
    BottomRight => "bottom-right",
});

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopCenter,
        Position::BottomCenter,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Returns true for positions anchored to the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopCenter | Position::TopLeft | Position::TopRight
        )
    }

    /// Returns true for positions anchored to the bottom edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        !self.is_top()
    }

    /// Returns the exclusion group this position animates in.
    #[must_use]
    pub fn group(self) -> StackGroup {
        if self.is_top() {
            StackGroup::Top
        } else {
            StackGroup::Bottom
        }
    }

    /// Returns the horizontal alignment of this anchor.
    #[must_use]
    pub fn horizontal(self) -> HorizontalAnchor {
        match self {
            Position::TopLeft | Position::BottomLeft => HorizontalAnchor::Left,
            Position::TopCenter | Position::BottomCenter => HorizontalAnchor::Center,
            Position::TopRight | Position::BottomRight => HorizontalAnchor::Right,
        }
    }
}

/// Horizontal alignment derived from a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

// =============================================================================
// StackGroup
// =============================================================================

/// Top-anchored and bottom-anchored banners animate independently; each
/// group has its own exclusion token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackGroup {
    Top,
    Bottom,
}

named_enum!(StackGroup, "stack group", {
    Top => "top",
    Bottom => "bottom",
});

// =============================================================================
// ExitType
// =============================================================================

/// How a banner leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExitType {
    /// Slides back out past the edge it entered from.
    #[default]
    Dequeue,
    /// Collapses in place toward its centre.
    Pop,
    /// Slides out sideways toward the nearest screen side.
    Slide,
}

named_enum!(ExitType, "exit type", {
    Dequeue => "dequeue",
    Pop => "pop",
    Slide => "slide",
});

// =============================================================================
// Category
// =============================================================================

/// Optional banner category, used by renderers to pick an accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

named_enum!(Category, "category", {
    Info => "info",
    Success => "success",
    Warning => "warning",
    Error => "error",
});

// =============================================================================
// Idiom
// =============================================================================

/// Device class; tablets get larger default banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Idiom {
    #[default]
    Phone,
    Tablet,
}

named_enum!(Idiom, "idiom", {
    Phone => "phone",
    Tablet => "tablet",
});
