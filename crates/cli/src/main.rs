mod echo;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mdgrab_core::{FetchConfig, Page, extract, fetch_file, fetch_stdin, fetch_url, save_markdown};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grab a CSDN article and save it as Markdown
#[derive(Parser, Debug)]
#[command(name = "mdgrab")]
#[command(author = "mdgrab contributors")]
#[command(version = VERSION)]
#[command(about = "Grab a CSDN article and save it as Markdown", long_about = None)]
struct Args {
    /// Article URL, local HTML file, or "-" for stdin; prompts when omitted
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (default: derived from the article title)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Show step-by-step progress
    #[arg(short, long)]
    verbose: bool,
}

/// Prompt for a URL on stdin when no input argument was given.
fn prompt_for_url() -> anyhow::Result<String> {
    eprint!("{}", "Article URL: ".bright_cyan());
    io::stderr().flush().context("Failed to flush stderr")?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).context("Failed to read URL from stdin")?;

    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let input = match args.input {
        Some(input) => input,
        None => {
            echo::print_banner();
            prompt_for_url()?
        }
    };

    if args.verbose {
        echo::print_step(1, 3, &format!("Fetching {}", input.bright_white()));
    }

    let page = if input == "-" {
        fetch_stdin().map(Page::from_html)
    } else if input.starts_with("http://") || input.starts_with("https://") {
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        };
        fetch_url(&input, &config).await
    } else {
        fetch_file(&input).map(Page::from_html)
    };

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            echo::print_error(&format!("Grab failed: {}", e));
            return Ok(());
        }
    };

    if args.verbose {
        echo::print_step(2, 3, "Extracting article");
    }

    let article = match extract(&page.body, page.status, &input) {
        Ok(article) => article,
        Err(e) => {
            echo::print_error(&format!("Grab failed: {}", e));
            return Ok(());
        }
    };

    if args.verbose {
        echo::print_info(&format!("Title: {}", article.title));
        if !article.tags.is_empty() {
            echo::print_info(&format!("Tags: {}", article.tags.join(", ")));
        }
        echo::print_step(3, 3, "Writing Markdown");
    }

    match save_markdown(&article, args.output.as_deref()) {
        Ok(path) => {
            echo::print_success(&format!(
                "Saved \"{}\" to {}",
                article.title,
                path.display().bright_white()
            ));
        }
        Err(e) => {
            echo::print_error(&format!("Grab failed: {}", e));
        }
    }

    Ok(())
}
