//! Section classifier for sketch documents.
//!
//! A sketch document interleaves up to three tagged sections (sketch,
//! connections, names), each introduced by a bilingual tag line such as
//! `sketch:` or `skizze:`. [`Sections::from_lines`] runs a small state
//! machine over the raw lines and buckets them into per-section
//! accumulators; everything before the first tag is discarded.

/// The three input sections of a sketch document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Sketch,
    Connections,
    Names,
}

impl SectionKind {
    /// Normalizes a section key to its kind using the bilingual key
    /// mapping, case-insensitively.
    ///
    /// Structured front ends that already hold the three buffers use this
    /// to map their keys (`sketch`/`skizze`, `connections`/`verbindungen`,
    /// `names`/`namen`) onto the canonical sections.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("sketch") || key.eq_ignore_ascii_case("skizze") {
            Some(SectionKind::Sketch)
        } else if key.eq_ignore_ascii_case("connections")
            || key.eq_ignore_ascii_case("verbindungen")
        {
            Some(SectionKind::Connections)
        } else if key.eq_ignore_ascii_case("names") || key.eq_ignore_ascii_case("namen") {
            Some(SectionKind::Names)
        } else {
            None
        }
    }

    /// Recognizes a tag line: the trimmed line must be exactly a section
    /// key followed by a colon.
    fn from_tag(line: &str) -> Option<Self> {
        Self::from_key(line.trim().strip_suffix(':')?)
    }
}

/// The classified buffers of one sketch document.
///
/// Lines keep their original indentation (with hard tabs expanded to four
/// spaces); the sketch buffer in particular is a literal character canvas
/// where column positions carry meaning.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    sketch: Vec<String>,
    connections: Vec<String>,
    names: Vec<String>,
}

impl Sections {
    /// Creates empty sections, for structured front ends that fill the
    /// buffers directly via [`Sections::append`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies raw document lines into sections.
    ///
    /// A line whose trimmed form matches a section tag switches the active
    /// section and is consumed; any other line is appended untrimmed to the
    /// active section's buffer, or discarded while no section is active. A
    /// recurring tag appends to the section's earlier content rather than
    /// resetting it.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections = Self::new();
        let mut active: Option<SectionKind> = None;

        for line in lines {
            let line = line.as_ref().replace('\t', "    ");
            if let Some(kind) = SectionKind::from_tag(&line) {
                active = Some(kind);
            } else if let Some(kind) = active {
                sections.append(kind, line);
            }
        }

        sections
    }

    /// Appends one line to a section's buffer.
    pub fn append(&mut self, kind: SectionKind, line: impl Into<String>) {
        self.buffer_mut(kind).push(line.into());
    }

    pub fn sketch(&self) -> &[String] {
        &self.sketch
    }

    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn buffer_mut(&mut self, kind: SectionKind) -> &mut Vec<String> {
        match kind {
            SectionKind::Sketch => &mut self.sketch,
            SectionKind::Connections => &mut self.connections,
            SectionKind::Names => &mut self.names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_bilingual() {
        assert_eq!(SectionKind::from_key("sketch"), Some(SectionKind::Sketch));
        assert_eq!(SectionKind::from_key("SKIZZE"), Some(SectionKind::Sketch));
        assert_eq!(
            SectionKind::from_key("Verbindungen"),
            Some(SectionKind::Connections)
        );
        assert_eq!(SectionKind::from_key("namen"), Some(SectionKind::Names));
        assert_eq!(SectionKind::from_key("blocks"), None);
    }

    #[test]
    fn test_classify_basic_document() {
        let sections = Sections::from_lines([
            "ignored preamble",
            "Sketch:",
            "  P1 I1",
            "connections:",
            "P1 - I1",
            "names:",
            "P1: gain",
        ]);
        assert_eq!(sections.sketch(), ["  P1 I1"]);
        assert_eq!(sections.connections(), ["P1 - I1"]);
        assert_eq!(sections.names(), ["P1: gain"]);
    }

    #[test]
    fn test_tag_must_be_whole_line() {
        // Content around a tag word keeps the line in the active section.
        let sections = Sections::from_lines(["sketch:", "names: of things", "my sketch:"]);
        assert_eq!(sections.sketch(), ["names: of things", "my sketch:"]);
        assert!(sections.names().is_empty());
    }

    #[test]
    fn test_tag_trimmed_and_case_insensitive() {
        let sections = Sections::from_lines(["   SKIZZE:   ", "P1"]);
        assert_eq!(sections.sketch(), ["P1"]);
    }

    #[test]
    fn test_recurring_tag_appends() {
        let sections = Sections::from_lines([
            "sketch:",
            "P1",
            "connections:",
            "P1 - P1",
            "skizze:",
            "I1",
        ]);
        assert_eq!(sections.sketch(), ["P1", "I1"]);
        assert_eq!(sections.connections(), ["P1 - P1"]);
    }

    #[test]
    fn test_tabs_expand_to_four_spaces() {
        let sections = Sections::from_lines(["sketch:", "\tP1"]);
        assert_eq!(sections.sketch(), ["    P1"]);
    }

    #[test]
    fn test_idle_discards_lines() {
        let sections = Sections::from_lines(["P1 I1", "D1"]);
        assert!(sections.sketch().is_empty());
        assert!(sections.connections().is_empty());
        assert!(sections.names().is_empty());
    }
}
