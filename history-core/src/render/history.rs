use crate::models::{
    escape_html, AnchorId, HeadingLevel, ReleaseVersion, Revision, Section, TrustedHtml,
    VersionId,
};
use crate::store::ReleaseStore;

pub const MINOR_REVISIONS_TITLE: &str = "Minor revisions";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the section tree for every release in the store.
pub fn render_history(store: &ReleaseStore) -> Vec<Section> {
    render_releases(store.releases())
}

/// Build one top-level section per release, newest release first.
///
/// Inside each release the revisions run oldest first. Both sorts are
/// stable, so entries sharing a date keep their authored order.
pub fn render_releases(releases: &[ReleaseVersion]) -> Vec<Section> {
    let mut ordered: Vec<&ReleaseVersion> = releases.iter().collect();
    ordered.sort_by(|a, b| b.released.cmp(&a.released));
    ordered.into_iter().map(render_release).collect()
}

fn render_release(release: &ReleaseVersion) -> Section {
    let mut section = Section::new(
        HeadingLevel::H2,
        AnchorId::release(&release.version),
        format!(
            "go{} (released {})",
            release.version,
            release.released.format(DATE_FORMAT)
        ),
    );

    let intro = release
        .intro
        .clone()
        .unwrap_or_else(|| major_release_intro(&release.version));
    section.paragraph(intro);
    for note in &release.notes {
        section.paragraph(note.clone());
    }

    if release.revisions.is_empty() {
        for paragraph in &release.footer {
            section.paragraph(paragraph.clone());
        }
        return section;
    }

    let mut minor = Section::new(
        HeadingLevel::H3,
        AnchorId::minor_revisions(&release.version),
        MINOR_REVISIONS_TITLE,
    );
    let mut revisions: Vec<&Revision> = release.revisions.iter().collect();
    revisions.sort_by_key(|r| r.released);
    for revision in revisions {
        minor.paragraph(revision_paragraph(revision));
    }
    for paragraph in &release.footer {
        minor.paragraph(paragraph.clone());
    }
    section.subsection(minor);

    section
}

/// The standard opening paragraph linking to the release notes.
pub fn major_release_intro(version: &VersionId) -> TrustedHtml {
    let mut html = TrustedHtml::text(&format!(
        "Go {} is a major release of Go.\nRead the ",
        version
    ));
    html.push_html(&TrustedHtml::from_trusted(format!(
        "<a href=\"{}\">",
        escape_html(&format!("/doc/go{}", version))
    )))
    .push_text(&format!("Go {} Release Notes", version))
    .push_html(&TrustedHtml::from_trusted("</a>"))
    .push_text(" for more information.");
    html
}

/// "goX.Y.Z (released DATE) " followed by the description as authored.
/// Withdrawn revisions were never properly released, so they carry no date.
pub fn revision_paragraph(revision: &Revision) -> TrustedHtml {
    let prefix = if revision.withdrawn {
        format!("go{} ", revision.version)
    } else {
        format!(
            "go{} (released {}) ",
            revision.version,
            revision.released.format(DATE_FORMAT)
        )
    };
    let mut html = TrustedHtml::text(&prefix);
    html.push_html(&revision.description);
    html
}
