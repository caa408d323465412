//! Two-state visibility of a form element.
//!
//! Visibility is read from the element's *inline* `display` value only. A
//! form hidden or shown purely by a stylesheet has no inline value and is
//! read as [`Visibility::Hidden`], so its first toggle always shows it.

/// Inline display value written for a hidden form.
pub const DISPLAY_NONE: &str = "none";

/// Inline display value written for a visible form.
pub const DISPLAY_BLOCK: &str = "block";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Interpret an inline `display` value.
    ///
    /// `none` and the unset (empty) value are `Hidden`; anything else is `Visible`.
    pub fn from_inline_display(display: &str) -> Self {
        match display {
            "" | DISPLAY_NONE => Self::Hidden,
            _ => Self::Visible,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    pub fn as_display(self) -> &'static str {
        match self {
            Self::Hidden => DISPLAY_NONE,
            Self::Visible => DISPLAY_BLOCK,
        }
    }
}
