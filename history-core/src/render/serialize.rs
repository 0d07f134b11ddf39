use crate::models::{escape_html, Block, Section};

/// Serialize a section tree to an HTML fragment.
///
/// Traversal is depth first in tree order. Headings and anchors are
/// escaped; paragraph bodies are [`TrustedHtml`](crate::models::TrustedHtml)
/// and written as is.
///
/// Example output:
/// ```text
/// <h2 id="go1.14">go1.14 (released 2020-02-25)</h2>
///
/// <p>
/// Go 1.14 is a major release of Go.
/// ...
/// </p>
///
/// <h3 id="go1.14.minor">Minor revisions</h3>
/// ```
pub fn serialize(sections: &[Section]) -> String {
    let mut output = String::new();
    for section in sections {
        write_section(&mut output, section);
    }
    output
}

fn write_section(output: &mut String, section: &Section) {
    let tag = section.level.tag();
    output.push('<');
    output.push_str(tag);
    output.push_str(" id=\"");
    output.push_str(&escape_html(section.anchor.as_str()));
    output.push_str("\">");
    output.push_str(&escape_html(&section.title));
    output.push_str("</");
    output.push_str(tag);
    output.push_str(">\n\n");

    for block in &section.blocks {
        match block {
            Block::Paragraph(body) => {
                output.push_str("<p>\n");
                output.push_str(body.as_str());
                output.push_str("\n</p>\n\n");
            }
            Block::Section(child) => write_section(output, child),
        }
    }
}
