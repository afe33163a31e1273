//! selkit CLI
//!
//! Builds a CSS selector from typed fragments and prints it.

mod build;
mod parts;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::json::{to_json, to_json_pretty};

use build::assemble;
use parts::Part;

/// selkit: build CSS selectors with ordering checks
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    selkit element=div id=main class=container class=draggable

    # Combinators: >, +, ~, descendant, or combinator=TOKEN
    selkit element=table id=data '~' element=tr

    # Attribute values are taken verbatim
    selkit element=a 'attr=href$=".png"' pseudo-class=focus

    # JSON output
    selkit --json --pretty element=ul '>' element=li
"#)]
struct Cli {
    /// Fragments as `kind=value` (element, id, class, attr, pseudo-class,
    /// pseudo-element) and combinators between them
    #[arg(value_name = "PART", required = true)]
    parts: Vec<String>,

    /// Print the selector and its compounds as JSON
    #[arg(long)]
    json: bool,

    /// Indent JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let parts = cli
        .parts
        .iter()
        .map(|arg| Part::parse(arg))
        .collect::<Result<Vec<_>>>()?;

    let assembly = assemble(&parts)?;

    if cli.json {
        let json = if cli.pretty {
            to_json_pretty(&assembly)?
        } else {
            to_json(&assembly)?
        };
        println!("{json}");
    } else {
        println!("{}", assembly.selector);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
