//! Commenter avatars
//!
//! Round badges showing the commenter's initials on a pastel background
//! picked from a hash of the name, so the same name always gets the same
//! colour.

use maud::{Markup, PreEscaped, html};

use crate::markdown::escape_html;

const COLORS: &[&str] = &[
    "#dd7878", "#ea76cb", "#f5c2e7", "#eba0ac", "#ca9ee6", "#cba6f7", "#b4befe", "#c4a7e7",
    "#8caaee", "#85c1dc", "#89dceb", "#74c7ec", "#81c8be", "#94e2d5", "#a6d189", "#c6d57e",
    "#e5c890", "#ef9f76", "#fab387", "#f9e2af",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .to_lowercase()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two initials from a display name, `?` when the name is blank.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Background colour assigned to a name.
pub fn color(name: &str) -> &'static str {
    COLORS[(hash(name) % COLORS.len() as u64) as usize]
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let bg = color(name);
    let text = escape_html(&initials(name));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100" role="img" aria-hidden="true"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.35em" text-anchor="middle" font-family="sans-serif" font-size="40" font-weight="600" fill="#ffffff">{text}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(name, size))) } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(generate_svg("Ana Lima", 40), generate_svg("Ana Lima", 40));
        assert_eq!(color("Ana"), color("  ana "));
    }

    #[test]
    fn initials_from_words() {
        assert_eq!(initials("ana lima"), "AL");
        assert_eq!(initials("Ben"), "B");
        assert_eq!(initials("Cy de la Cruz"), "CD");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials("\"Quoted\" name"), "QN");
    }

    #[test]
    fn svg_valid() {
        for name in ["Ana", "Ben Okafor", "<script>", ""] {
            let svg = generate_svg(name, 40);
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
            assert!(!svg.contains("<script>"));
        }
    }
}
