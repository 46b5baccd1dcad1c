//! Status glyphs.
//!
//! One glyph per [`ProbeStatus`], used by every report line.

use super::theme::Theme;
use crate::probe::ProbeStatus;

/// Unicode glyph for a status.
pub fn icon(status: ProbeStatus) -> &'static str {
    match status {
        ProbeStatus::Pass => "✓",
        ProbeStatus::Fail => "✗",
        ProbeStatus::Skipped => "○",
    }
}

/// Glyph styled with the theme.
pub fn styled(status: ProbeStatus, theme: &Theme) -> String {
    let glyph = icon(status);
    match status {
        ProbeStatus::Pass => theme.success.apply_to(glyph).to_string(),
        ProbeStatus::Fail => theme.error.apply_to(glyph).to_string(),
        ProbeStatus::Skipped => theme.dim.apply_to(glyph).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_distinct() {
        assert_eq!(icon(ProbeStatus::Pass), "✓");
        assert_eq!(icon(ProbeStatus::Fail), "✗");
        assert_eq!(icon(ProbeStatus::Skipped), "○");
    }

    #[test]
    fn plain_styling_is_bare_glyph() {
        assert_eq!(styled(ProbeStatus::Fail, &Theme::plain()), "✗");
    }
}
