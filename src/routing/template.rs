//! Route template matching.
//!
//! # Responsibilities
//! - Split a route template and an actual path into segment sequences
//! - Extract the single `{id}` path parameter
//! - Expose 1-indexed access to the actual path's segments
//!
//! # Design Decisions
//! - Only one REST convention is supported: a collection followed by `{id}`.
//!   The placeholder must be the literal `{id}` and must sit at position 2.
//! - Segments are compared positionally, never by name or glob.
//! - Malformed input never fails; it just yields no parameter.

use std::collections::HashMap;

/// The only placeholder segment the matcher recognizes.
pub const ID_PLACEHOLDER: &str = "{id}";

/// 1-indexed position of the placeholder segment.
pub const PARAM_POSITION: usize = 2;

/// Result of comparing a route template with an actual request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMatch {
    segments: Vec<String>,
    has_path_param: bool,
    path_parameters: Option<HashMap<String, String>>,
}

impl TemplateMatch {
    /// Compare `template` against `actual_path`.
    ///
    /// When the template's second segment is exactly `{id}`, the actual
    /// path's second segment becomes the `id` parameter. If the actual path
    /// is too short to have that segment, the template still reports a
    /// parameter slot but no mapping is produced.
    pub fn parse(template: &str, actual_path: &str) -> Self {
        let template_segments = split_segments(template);
        let segments = split_segments(actual_path);

        let placeholder = nth_segment(&template_segments, PARAM_POSITION)
            .filter(|segment| *segment == ID_PLACEHOLDER);
        let has_path_param = placeholder.is_some();

        let path_parameters = placeholder.and_then(|placeholder| {
            let name = placeholder.trim_start_matches('{').trim_end_matches('}');
            nth_segment(&segments, PARAM_POSITION)
                .map(|value| HashMap::from([(name.to_string(), value.to_string())]))
        });

        Self {
            segments,
            has_path_param,
            path_parameters,
        }
    }

    /// True if the template declares `{id}` at position 2.
    pub fn has_path_param(&self) -> bool {
        self.has_path_param
    }

    /// The extracted parameter, if any.
    pub fn path_parameters(&self) -> Option<&HashMap<String, String>> {
        self.path_parameters.as_ref()
    }

    /// Consume the match, keeping only the extracted parameters.
    pub fn into_path_parameters(self) -> Option<HashMap<String, String>> {
        self.path_parameters
    }

    /// Segment of the actual path at a 1-indexed position.
    pub fn segment(&self, position: usize) -> Option<&str> {
        nth_segment(&self.segments, position)
    }
}

/// Strip every leading and trailing slash, then split on `/`.
///
/// Interior empty segments (`a//b`) are kept.
fn split_segments(path: &str) -> Vec<String> {
    path.trim_matches('/').split('/').map(str::to_string).collect()
}

fn nth_segment(segments: &[String], position: usize) -> Option<&str> {
    position
        .checked_sub(1)
        .and_then(|index| segments.get(index))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_at_second_position() {
        let m = TemplateMatch::parse("widgets/{id}", "widgets/42");
        assert!(m.has_path_param());
        assert_eq!(
            m.path_parameters(),
            Some(&HashMap::from([("id".to_string(), "42".to_string())]))
        );
    }

    #[test]
    fn test_trailing_segments_ignored() {
        let m = TemplateMatch::parse("/widgets/{id}/parts", "/widgets/42/parts/");
        assert!(m.has_path_param());
        assert_eq!(m.path_parameters().unwrap()["id"], "42");
        assert_eq!(m.segment(3), Some("parts"));
    }

    #[test]
    fn test_no_placeholder() {
        let m = TemplateMatch::parse("/widgets", "/widgets");
        assert!(!m.has_path_param());
        assert!(m.path_parameters().is_none());

        let m = TemplateMatch::parse("/widgets/all", "/widgets/all");
        assert!(!m.has_path_param());
        assert!(m.path_parameters().is_none());
    }

    #[test]
    fn test_placeholder_elsewhere_is_ignored() {
        let m = TemplateMatch::parse("/{id}", "/42");
        assert!(!m.has_path_param());

        let m = TemplateMatch::parse("/widgets/parts/{id}", "/widgets/parts/42");
        assert!(!m.has_path_param());
        assert!(m.path_parameters().is_none());
    }

    #[test]
    fn test_only_literal_id_is_recognized() {
        let m = TemplateMatch::parse("/widgets/{widgetId}", "/widgets/42");
        assert!(!m.has_path_param());
        assert!(m.path_parameters().is_none());
    }

    #[test]
    fn test_short_actual_path() {
        let m = TemplateMatch::parse("/widgets/{id}", "/widgets");
        assert!(m.has_path_param());
        assert!(m.path_parameters().is_none());
        assert_eq!(m.segment(2), None);
    }

    #[test]
    fn test_segment_accessor() {
        let m = TemplateMatch::parse("", "");
        assert!(!m.has_path_param());
        assert_eq!(m.segment(0), None);
        assert_eq!(m.segment(1), Some(""));
        assert_eq!(m.segment(2), None);

        let m = TemplateMatch::parse("/a/{id}", "//a//b//");
        assert_eq!(m.segment(1), Some("a"));
        assert_eq!(m.segment(2), Some(""));
        assert_eq!(m.segment(3), Some("b"));
        assert_eq!(m.segment(4), None);
    }
}
