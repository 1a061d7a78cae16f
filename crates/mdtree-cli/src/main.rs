//! mdtree CLI - Render Markdown documents and pages to HTML
//!
//! Usage:
//!   mdtree [OPTIONS] <COMMAND> <FILE>
//!
//! Commands:
//!   render    Render a document to an HTML fragment
//!   title     Print the document's `# ` title
//!   blocks    List classified blocks
//!   page      Fill an HTML template with a rendered document

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use log::{debug, info};
use mdtree_core::{extract_title, Block, BlockType, Options, Parser};
use serde::Serialize;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(ClapParser, Debug)]
#[command(name = "mdtree", version)]
#[command(about = "Render Markdown to HTML through a node tree")]
struct Cli {
    /// Log each block as it is processed
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keep blank lines inside ``` fences in one code block
    #[arg(long, global = true)]
    fence_aware: bool,

    /// Apply inline formatting to heading text
    #[arg(long, global = true)]
    inline_headings: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document to an HTML fragment
    Render {
        /// Input Markdown file
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the document's title
    Title {
        /// Input Markdown file
        file: PathBuf,
    },

    /// List classified blocks with their source spans
    Blocks {
        /// Input Markdown file
        file: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Fill an HTML template with a document's title and content
    Page {
        /// Input Markdown file
        file: PathBuf,

        /// Template containing {{ Title }} and {{ Content }}
        #[arg(short, long)]
        template: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prefix substituted for root-relative href and src attributes
        #[arg(long, default_value = "/")]
        base_path: String,
    },
}

impl Cli {
    fn options(&self) -> Options {
        Options::new()
            .with_fence_aware_blocks(self.fence_aware)
            .with_inline_headings(self.inline_headings)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let parser = Parser::new(cli.options());
    debug!("options: {:?}", parser.options());

    match &cli.command {
        Command::Render { file, output } => cmd_render(&parser, file, output.as_deref()),
        Command::Title { file } => cmd_title(file),
        Command::Blocks { file, json } => cmd_blocks(&parser, file, *json),
        Command::Page {
            file,
            template,
            output,
            base_path,
        } => cmd_page(&parser, file, template, output.as_deref(), base_path),
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!("wrote {} bytes to {}", contents.len(), path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(parser: &Parser, file: &Path, output: Option<&Path>) -> Result<()> {
    let input = read_input(file)?;
    let html = parser
        .render(&input)
        .with_context(|| format!("failed to render '{}'", file.display()))?;
    write_output(output, &html)
}

// =============================================================================
// Title Command
// =============================================================================

fn cmd_title(file: &Path) -> Result<()> {
    let input = read_input(file)?;
    let title = extract_title(&input).with_context(|| format!("in '{}'", file.display()))?;
    println!("{}", title);
    Ok(())
}

// =============================================================================
// Blocks Command
// =============================================================================

fn cmd_blocks(parser: &Parser, file: &Path, json: bool) -> Result<()> {
    let input = read_input(file)?;
    let blocks = parser.blocks(&input);

    if json {
        let json_blocks: Vec<JsonBlock> = blocks.iter().enumerate().map(convert_block).collect();
        println!("{}", serde_json::to_string_pretty(&json_blocks)?);
    } else {
        print_block_summary(&blocks);
    }

    Ok(())
}

// =============================================================================
// Page Command
// =============================================================================

fn cmd_page(
    parser: &Parser,
    file: &Path,
    template: &Path,
    output: Option<&Path>,
    base_path: &str,
) -> Result<()> {
    let input = read_input(file)?;
    let template = read_input(template)?;

    let title = extract_title(&input).with_context(|| format!("in '{}'", file.display()))?;
    let content = parser
        .render(&input)
        .with_context(|| format!("failed to render '{}'", file.display()))?;

    let page = generate_page(&template, &title, &content, base_path);
    write_output(output, &page)
}

/// Substitute the title and content placeholders, then point root-relative
/// `href` and `src` attributes at `base_path`.
fn generate_page(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize, Debug, PartialEq)]
struct JsonBlock<'a> {
    index: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u8>,
    span: JsonSpan,
    text: &'a str,
}

#[derive(Serialize, Debug, PartialEq)]
struct JsonSpan {
    start: usize,
    end: usize,
}

fn convert_block<'a>((index, block): (usize, &Block<'a>)) -> JsonBlock<'a> {
    JsonBlock {
        index,
        kind: block.kind.name(),
        level: match block.kind {
            BlockType::Heading(level) => Some(level),
            _ => None,
        },
        span: JsonSpan {
            start: block.span.start,
            end: block.span.end,
        },
        text: block.text,
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_block_summary(blocks: &[Block]) {
    println!("Blocks: {}", blocks.len());
    println!();
    for (index, block) in blocks.iter().enumerate() {
        println!("{}", describe_block(index, block));
    }
}

fn describe_block(index: usize, block: &Block) -> String {
    let first_line = block.text.lines().next().unwrap_or("");
    let more = if block.text.contains('\n') { " ..." } else { "" };
    format!(
        "{:>3}  {:<15} {:>5}..{:<5} {}{}",
        index,
        block.kind.tag(),
        block.span.start,
        block.span.end,
        first_line,
        more
    )
}
