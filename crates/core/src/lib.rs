pub mod article;
pub mod convert;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod markdown;
pub mod parse;

pub use article::Article;
pub use convert::render_content;
pub use error::{GrabError, Result};
pub use extract::{ANONYMOUS_AUTHOR, TIME_FORMAT, extract};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{FetchConfig, Page, fetch_file, fetch_stdin};
pub use markdown::{SITE_LABEL, filename_from_title, render_markdown, save_markdown};
pub use parse::{Document, Element};
