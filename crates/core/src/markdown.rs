//! Markdown rendering and file output.
//!
//! This module renders an [`Article`] into the fixed Markdown template
//! (title, metadata block, tag line, body, watermark footer) and writes it
//! to disk, deriving the file name from the sanitized title when none is
//! supplied.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use regex::Regex;

use crate::extract::TIME_FORMAT;
use crate::{Article, Result};

/// Label used for the source link in the metadata block.
pub const SITE_LABEL: &str = "CSDN";

const PROJECT_URL: &str = "https://github.com/mdgrab/mdgrab";

/// Renders the full Markdown document for an article.
///
/// Field order and framing are fixed for output compatibility: title
/// heading, quoted metadata block, tag line (empty when no tags), a rule,
/// the body, a rule, the watermark footer.
pub fn render_markdown(article: &Article) -> String {
    let tag_line = article
        .tags
        .iter()
        .map(|tag| format!("`{}`", tag))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "# {title}\n\
         \n\
         > Author: {author}\n\
         > Published: {published}\n\
         > Source: [{site}]({url})\n\
         \n\
         {tags}\n\
         \n\
         ---\n\
         \n\
         {content}\n\
         \n\
         ---\n\
         \n\
         {watermark}\n",
        title = article.title,
        author = article.author,
        published = article.publish_time,
        site = SITE_LABEL,
        url = article.source_url,
        tags = tag_line,
        content = article.content,
        watermark = render_watermark(article),
    )
}

/// Attribution footer appended to every saved article.
fn render_watermark(article: &Article) -> String {
    let captured_at = Local::now().format(TIME_FORMAT);
    format!(
        "> Captured from {site} by mdgrab\n\
         > Original author: {author}\n\
         > Original link: {url}\n\
         > Project: {project}\n\
         > Captured at: {captured_at}",
        site = SITE_LABEL,
        author = article.author,
        url = article.source_url,
        project = PROJECT_URL,
        captured_at = captured_at,
    )
}

/// Derives a file name from a title by stripping characters illegal in
/// file paths and appending the Markdown extension. The remaining
/// characters keep their order.
pub fn filename_from_title(title: &str) -> String {
    let re = Regex::new(r#"[\\/:*?"<>|]"#).unwrap();
    format!("{}.md", re.replace_all(title, ""))
}

/// Renders an article and writes it to disk as UTF-8.
///
/// When no path is given the name is derived from the sanitized title in
/// the current directory. The file is created or overwritten; a crash
/// mid-write leaves a truncated file. Returns the resolved path.
pub fn save_markdown(article: &Article, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(filename_from_title(&article.title)),
    };

    let markdown = render_markdown(article);
    fs::write(&path, markdown)?;

    Ok(path)
}
