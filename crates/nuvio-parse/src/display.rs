use crate::descriptor::StreamDescriptor;

/// Shown when a stream carries neither a name nor a title.
pub const UNNAMED_STREAM: &str = "Unnamed Stream";

/// The human-visible title: name, then title, then the placeholder.
pub fn display_title(stream: &StreamDescriptor) -> &str {
    [stream.name_text(), stream.title_text()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(UNNAMED_STREAM)
}

/// Source line under the display title, omitted when it would repeat it.
pub fn secondary_line(stream: &StreamDescriptor) -> Option<&str> {
    let title = stream.title_text();
    if title.is_empty() || title == display_title(stream) {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(name: Option<&str>, title: Option<&str>) -> StreamDescriptor {
        StreamDescriptor {
            name: name.map(Into::into),
            title: title.map(Into::into),
            cached: false,
        }
    }

    #[test]
    fn test_empty_name_falls_back_to_title() {
        let s = stream(Some(""), Some("X"));
        assert_eq!(display_title(&s), "X");
        assert_eq!(secondary_line(&s), None);
    }

    #[test]
    fn test_equal_name_and_title() {
        let s = stream(Some("A"), Some("A"));
        assert_eq!(display_title(&s), "A");
        assert_eq!(secondary_line(&s), None);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(display_title(&stream(Some(""), Some(""))), UNNAMED_STREAM);
        assert_eq!(display_title(&stream(None, None)), UNNAMED_STREAM);
        assert_eq!(secondary_line(&stream(None, None)), None);
    }

    #[test]
    fn test_distinct_title_is_secondary() {
        let s = stream(Some("Torrentio\n4k"), Some("Movie.2023.2160p.HDR"));
        assert_eq!(display_title(&s), "Torrentio\n4k");
        assert_eq!(secondary_line(&s), Some("Movie.2023.2160p.HDR"));
    }
}
