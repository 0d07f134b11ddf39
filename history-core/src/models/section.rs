use std::fmt;

use super::{TrustedHtml, VersionId};

/// Externally linkable heading identifier.
///
/// Published anchors are linked from other documents, so the scheme is
/// fixed: `go<version>` for a release and `go<version>.minor` for its
/// revisions subsection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn release(version: &VersionId) -> Self {
        Self(format!("go{}", version))
    }

    pub fn minor_revisions(version: &VersionId) -> Self {
        Self(format!("go{}.minor", version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

/// Content of a [`Section`], in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(TrustedHtml),
    Section(Section),
}

/// One heading plus its nested content.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub level: HeadingLevel,
    pub anchor: AnchorId,
    /// Plain text, escaped on output.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(level: HeadingLevel, anchor: AnchorId, title: impl Into<String>) -> Self {
        Self {
            level,
            anchor,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(&mut self, body: TrustedHtml) {
        self.blocks.push(Block::Paragraph(body));
    }

    pub fn subsection(&mut self, section: Section) {
        self.blocks.push(Block::Section(section));
    }

    /// Nested sections, in document order.
    pub fn subsections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            Block::Paragraph(_) => None,
        })
    }

    /// Every anchor in this section and below, depth first.
    pub fn anchors(&self) -> Vec<&AnchorId> {
        let mut out = vec![&self.anchor];
        for section in self.subsections() {
            out.extend(section.anchors());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_scheme_is_stable() {
        let v = VersionId::parse("1.14").unwrap();
        assert_eq!(AnchorId::release(&v).as_str(), "go1.14");
        assert_eq!(AnchorId::minor_revisions(&v).as_str(), "go1.14.minor");

        let go1 = VersionId::parse("1").unwrap();
        assert_eq!(AnchorId::minor_revisions(&go1).as_str(), "go1.minor");
    }

    #[test]
    fn anchors_are_collected_depth_first() {
        let v = VersionId::parse("1.13").unwrap();
        let mut top = Section::new(HeadingLevel::H2, AnchorId::release(&v), "go1.13");
        top.paragraph(TrustedHtml::text("intro"));
        top.subsection(Section::new(
            HeadingLevel::H3,
            AnchorId::minor_revisions(&v),
            "Minor revisions",
        ));

        let anchors: Vec<&str> = top.anchors().into_iter().map(AnchorId::as_str).collect();
        assert_eq!(anchors, vec!["go1.13", "go1.13.minor"]);
    }
}
