use regex::Regex;
use std::sync::LazyLock;

use crate::facets::QualityTier;

/// Lowest scan-line count that earns the HD badge.
pub const HD_MIN_LINES: u32 = 720;

// ── Regex patterns (compiled once) ──────────────────────────────

static RE_SCAN_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{3,4})p").unwrap());

static RE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"💾\s*(\d+(?:\.\d+)?\s*(?:GB|MB))").unwrap());

/// First progressive scan-line count in the title (e.g., "1080p" → 1080).
pub fn scan_lines(title: &str) -> Option<u32> {
    let caps = RE_SCAN_LINES.captures(title)?;
    caps[1].parse().ok()
}

/// Resolution tier from the first `<digits>p` token.
pub fn quality_tier(title: &str) -> Option<QualityTier> {
    scan_lines(title)
        .filter(|&lines| lines >= HD_MIN_LINES)
        .map(|_| QualityTier::Hd)
}

/// Case-insensitive "hdr" anywhere in the title.
pub fn is_hdr(title: &str) -> bool {
    title.to_lowercase().contains("hdr")
}

/// "dolby" in any case, or the uppercase "DV" marker.
///
/// The marker is a plain substring test, so "DVDRip" also counts.
pub fn is_dolby_vision(title: &str) -> bool {
    title.to_lowercase().contains("dolby") || title.contains("DV")
}

/// Size text following the 💾 marker, kept verbatim (e.g., "4.2 GB").
pub fn size_label(title: &str) -> Option<String> {
    let caps = RE_SIZE.captures(title)?;
    Some(caps[1].to_string())
}
