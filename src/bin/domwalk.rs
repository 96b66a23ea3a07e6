//! domwalk CLI: structural queries over an HTML file from the shell.
//!
//! Every command runs below the document's content root (`<body>`).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use domwalk::encoding::decode_markup;
use domwalk::{
    DeepestMatch, Document, Dom, HtmlDocument, Locate, Matcher, MatcherConfig, Parsed,
    DEFAULT_MAX_CLIMB,
};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// domwalk -- depth, ancestry and attribute queries over HTML.
#[derive(Parser, Debug)]
#[command(name = "domwalk", version, about, long_about = None)]
struct Cli {
    /// Markup file to read (use `-` for stdin).
    file: String,

    /// Print debug events to stderr (`RUST_LOG` takes precedence).
    #[arg(long, global = true)]
    verbose: bool,

    /// Document backend.
    #[arg(long, value_enum, default_value_t = Engine::Html, global = true)]
    engine: Engine,

    /// How a matched node is located inside the content root.
    #[arg(long, value_enum, default_value_t = LocateArg::Auto, global = true)]
    locate: LocateArg,

    /// Upper bound on parent hops for a single ancestor walk.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CLIMB, global = true)]
    max_climb: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the depth of every element matching SELECTOR.
    Depth {
        selector: String,
    },

    /// Print the deepest element matched by any SELECTOR, with its depth.
    Deepest {
        #[arg(required = true)]
        selectors: Vec<String>,
    },

    /// For every element matching SELECTOR, count ancestors named TAG.
    CountAncestors {
        selector: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print the attributes of every element matching SELECTOR.
    Attrs {
        selector: String,
        /// Attribute to leave out (repeatable).
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,
    },

    /// Print every element matching SELECTOR renamed to TAG.
    Rename {
        selector: String,
        tag: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Engine {
    /// html5ever tree building with CSS selectors.
    Html,
    /// In-memory tree; tag-name selectors only.
    Tree,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocateArg {
    Auto,
    Identity,
    Markup,
}

impl From<LocateArg> for Locate {
    fn from(arg: LocateArg) -> Self {
        match arg {
            LocateArg::Auto => Locate::Auto,
            LocateArg::Identity => Locate::Identity,
            LocateArg::Markup => Locate::Markup,
        }
    }
}

// ---------------------------------------------------------------------------
// Exit codes (usage errors exit 2 through clap)
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.engine {
        Engine::Html => run::<HtmlDocument>(&cli),
        Engine::Tree => run::<Document>(&cli),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("domwalk: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

/// Loads the input and runs the selected command. Returns the exit code.
fn run<D: Dom>(cli: &Cli) -> domwalk::Result<u8> {
    let parsed = load::<D>(&cli.file)?;
    let matcher = Matcher::new(
        MatcherConfig::default()
            .locate(cli.locate.into())
            .max_climb(cli.max_climb),
    );
    let root = parsed.content_root();
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Depth { selector } => {
            for node in root.find(selector)?.iter() {
                writeln!(out, "{}", matcher.depth(&root, &node)?)?;
            }
        }

        Command::Deepest { selectors } => {
            let selectors: Vec<&str> = selectors.iter().map(String::as_str).collect();
            match matcher.deepest_match(&root, &selectors) {
                DeepestMatch::Found { selection, depth } => {
                    writeln!(out, "{depth}\t{}", selection.html()?)?;
                }
                DeepestMatch::NoCandidates => {
                    eprintln!("domwalk: no element matched");
                    return Ok(EXIT_FAILURE);
                }
                DeepestMatch::Failed(e) => return Err(e),
            }
        }

        Command::CountAncestors { selector, tags } => {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            for node in root.find(selector)?.iter() {
                let count = matcher.count_matching_ancestor_tags(&root, &node, &tags)?;
                writeln!(out, "{count}")?;
            }
        }

        Command::Attrs { selector, exclude } => {
            let exclude: Vec<&str> = exclude.iter().map(String::as_str).collect();
            for node in root.find(selector)?.iter() {
                writeln!(out, "{}", node.attribute_string(&exclude))?;
            }
        }

        Command::Rename { selector, tag } => {
            for node in root.find(selector)?.iter() {
                let renamed = node.rename_tag(tag)?;
                writeln!(out, "{}", renamed.top_level().html()?)?;
            }
        }
    }

    Ok(EXIT_SUCCESS)
}

// ---------------------------------------------------------------------------
// Input reading
// ---------------------------------------------------------------------------

/// Reads and parses a file, or stdin when `file` is `-`.
fn load<D: Dom>(file: &str) -> domwalk::Result<Parsed<D>> {
    if file == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Parsed::parse(&decode_markup(&bytes)?)
    } else {
        Parsed::from_path(file)
    }
}
