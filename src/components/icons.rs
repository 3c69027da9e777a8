//! Phosphor icon rendering

use maud::{Markup, html};

/// Icons used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tag,
    Calendar,
    Clock,
    Eye,
    MapPin,
    BookOpen,
    ArrowLeft,
    ArrowRight,
    Chat,
    Brain,
}

impl Icon {
    /// Phosphor class list for the icon.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Tag => "ph ph-tag",
            Self::Calendar => "ph ph-calendar-blank",
            Self::Clock => "ph ph-clock",
            Self::Eye => "ph ph-eye",
            Self::MapPin => "ph ph-map-pin",
            Self::BookOpen => "ph ph-book-open",
            Self::ArrowLeft => "ph ph-arrow-left",
            Self::ArrowRight => "ph ph-arrow-right",
            Self::Chat => "ph ph-chat-circle",
            Self::Brain => "ph-fill ph-brain",
        }
    }
}

/// Renders an inline icon.
pub fn icon(icon: Icon) -> Markup {
    html! {
        i class=(icon.class()) aria-hidden="true" {}
    }
}
