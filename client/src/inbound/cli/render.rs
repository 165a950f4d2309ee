//! Plain-text rendering of API records for the terminal.
//!
//! Lists print one tab-separated row per record; single records print
//! `key=value` lines.

use std::io::{self, Write};

use pagination::Page;

use crate::domain::{Artwork, DeleteOutcome, Tag, TagId, Video, tag_text};

pub(crate) fn tags<W: Write>(out: &mut W, tags: &[Tag]) -> io::Result<()> {
    for tag in tags {
        match tag.usage {
            Some(usage) => writeln!(
                out,
                "{}\t{}\t{}\tvideos={}\tartworks={}",
                tag.id, tag.name, tag.slug, usage.videos, usage.artworks
            )?,
            None => writeln!(out, "{}\t{}\t{}", tag.id, tag.name, tag.slug)?,
        }
    }
    Ok(())
}

pub(crate) fn tag<W: Write>(out: &mut W, tag: &Tag) -> io::Result<()> {
    writeln!(out, "id={}", tag.id)?;
    writeln!(out, "name={}", tag.name)?;
    writeln!(out, "slug={}", tag.slug)
}

pub(crate) fn tag_ids<W: Write>(out: &mut W, ids: &[TagId]) -> io::Result<()> {
    for id in ids {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

pub(crate) fn video_page<W: Write>(out: &mut W, page: &Page<Video>) -> io::Result<()> {
    for video in &page.data {
        writeln!(out, "{}\t{}\t{}", video.id, video.title, tag_text(&video.tags))?;
    }
    page_footer(out, page)
}

pub(crate) fn video<W: Write>(out: &mut W, video: &Video) -> io::Result<()> {
    writeln!(out, "id={}", video.id)?;
    writeln!(out, "title={}", video.title)?;
    writeln!(out, "slug={}", video.slug)?;
    writeln!(out, "youtube_url={}", video.youtube_url)?;
    writeln!(out, "youtube_id={}", video.youtube_id)?;
    writeln!(out, "description={}", video.description.as_deref().unwrap_or_default())?;
    writeln!(out, "thumbnail={}", video.thumbnail.as_deref().unwrap_or_default())?;
    writeln!(out, "featured={}", video.is_featured)?;
    writeln!(out, "recommended={}", video.is_recommended)?;
    writeln!(out, "tags={}", tag_text(&video.tags))?;
    writeln!(out, "updated_at={}", video.updated_at.to_rfc3339())
}

pub(crate) fn artwork_page<W: Write>(out: &mut W, page: &Page<Artwork>) -> io::Result<()> {
    for artwork in &page.data {
        writeln!(
            out,
            "{}\t{}\t{}",
            artwork.id,
            artwork.title,
            tag_text(&artwork.tags)
        )?;
    }
    page_footer(out, page)
}

pub(crate) fn artwork<W: Write>(out: &mut W, artwork: &Artwork) -> io::Result<()> {
    writeln!(out, "id={}", artwork.id)?;
    writeln!(out, "title={}", artwork.title)?;
    writeln!(out, "slug={}", artwork.slug)?;
    writeln!(out, "content={}", artwork.content.as_deref().unwrap_or_default())?;
    writeln!(out, "image_url={}", artwork.image_url)?;
    writeln!(out, "featured={}", artwork.is_featured)?;
    writeln!(out, "published={}", artwork.is_published)?;
    writeln!(out, "tags={}", tag_text(&artwork.tags))?;
    writeln!(out, "updated_at={}", artwork.updated_at.to_rfc3339())
}

pub(crate) fn deleted<W: Write>(out: &mut W, outcome: DeleteOutcome) -> io::Result<()> {
    writeln!(out, "deleted={}", outcome.success)
}

fn page_footer<W: Write, T>(out: &mut W, page: &Page<T>) -> io::Result<()> {
    writeln!(
        out,
        "page={}/{} total={}",
        page.page,
        page.total_pages(),
        page.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagUsage;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("render succeeds");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn tag_rows_include_usage_when_present() {
        let listed = vec![
            Tag {
                id: TagId::new("t1"),
                name: "Nature".to_owned(),
                slug: "nature".to_owned(),
                usage: Some(TagUsage {
                    videos: 3,
                    artworks: 1,
                }),
            },
            Tag {
                id: TagId::new("t2"),
                name: "Art".to_owned(),
                slug: "art".to_owned(),
                usage: None,
            },
        ];
        assert_eq!(
            render(|out| tags(out, &listed)),
            "t1\tNature\tnature\tvideos=3\tartworks=1\nt2\tArt\tart\n"
        );
    }

    #[test]
    fn empty_page_still_reports_one_page() {
        let page: Page<Video> = Page::new(Vec::new(), 0, 1, 20);
        assert_eq!(render(|out| video_page(out, &page)), "page=1/1 total=0\n");
    }
}
