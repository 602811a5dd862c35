//! Joined document text with a map back to the originating fragments.

use namecheck_model::TextPair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Byte offset of the first character in the joined text.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub location: String,
    pub text: String,
}

/// Trimmed, non-empty fragments joined with `\n`.
#[derive(Debug, Clone, Default)]
pub struct FragmentMap {
    text: String,
    starts: Vec<usize>,
    fragments: Vec<Fragment>,
}

impl FragmentMap {
    pub fn build(pairs: &[TextPair]) -> Self {
        let mut map = Self::default();
        for pair in pairs {
            let text = pair.text.trim();
            if text.is_empty() {
                continue;
            }
            if !map.fragments.is_empty() {
                map.text.push('\n');
            }
            let start = map.text.len();
            map.text.push_str(text);
            map.starts.push(start);
            map.fragments.push(Fragment {
                start,
                end: map.text.len(),
                location: pair.location.clone(),
                text: text.to_string(),
            });
        }
        map
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Index of the fragment containing byte `position`. Separators belong
    /// to no fragment.
    pub fn locate(&self, position: usize) -> Option<usize> {
        let idx = self.starts.partition_point(|&start| start <= position).checked_sub(1)?;
        let fragment = &self.fragments[idx];
        (fragment.start <= position && position < fragment.end).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> FragmentMap {
        FragmentMap::build(&[
            TextPair::new("A1", " 공사명 "),
            TextPair::new("A2", "   "),
            TextPair::new("A3", "(LH)오산세교"),
        ])
    }

    #[test]
    fn joins_trimmed_fragments() {
        let map = map();
        assert_eq!(map.text(), "공사명\n(LH)오산세교");
        assert_eq!(map.fragments().len(), 2);
        assert_eq!(map.fragments()[1].location, "A3");
    }

    #[test]
    fn locates_byte_offsets() {
        let map = map();
        let second = map.fragments()[1].start;
        assert_eq!(map.locate(0), Some(0));
        assert_eq!(map.locate(second - 1), None);
        assert_eq!(map.locate(second), Some(1));
        assert_eq!(map.locate(map.text().len()), None);
    }

    #[test]
    fn empty_input_has_no_fragments() {
        let map = FragmentMap::build(&[]);
        assert!(map.is_empty());
        assert_eq!(map.locate(0), None);
    }
}
