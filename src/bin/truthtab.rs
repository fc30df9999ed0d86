//! Truth table generator - command line interface
//!
//! A thin presentation layer over the library: submits one formula,
//! renders the derived results as text, CSV or JSON.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;
use truth_tables::{Analysis, KMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned text tables
    Text,
    /// Comma-separated values (truth table only)
    Csv,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "truthtab")]
#[command(about = "Truth tables, tautology checking and normal forms for propositional formulas", long_about = None)]
#[command(after_help = "\
Connectives, loosest to tightest: IFF (<->), IMPLIES (->), OR (|), AND (&), NOT (!).
Word forms are case-insensitive; use parentheses to group subexpressions.")]
struct Args {
    /// The formula to analyze, e.g. "A AND (B OR NOT C)"
    #[arg(value_name = "FORMULA")]
    formula: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Print only the truth table
    #[arg(long)]
    table: bool,

    /// Print only the classification
    #[arg(long)]
    classify: bool,

    /// Print only the disjunctive normal form
    #[arg(long)]
    dnf: bool,

    /// Print only the conjunctive normal form
    #[arg(long)]
    cnf: bool,

    /// Include the 2-variable Karnaugh map
    #[arg(long)]
    kmap: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

/// JSON document shape for `--format json`
#[derive(Serialize)]
struct Report<'a> {
    formula: &'a str,
    variables: Vec<String>,
    classification: truth_tables::Classification,
    table: &'a truth_tables::TruthTable,
    dnf: String,
    cnf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kmap: Option<&'a KMap>,
}

fn main() {
    let args = Args::parse();

    let analysis = match Analysis::run(&args.formula) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // The map is only defined for two variables, so it is opt-in
    let kmap = if args.kmap {
        match analysis.kmap() {
            Ok(kmap) => Some(kmap),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        None
    };

    let output = match args.format {
        Format::Csv => analysis.table().to_csv(),
        Format::Json => render_json(&analysis, kmap.as_ref()),
        Format::Text => render_text(&args, &analysis, kmap.as_ref()),
    };

    if let Some(ref path) = args.output_file {
        if let Err(e) = std::fs::write(path, &output) {
            eprintln!("Error writing '{}': {}", path.display(), e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}

fn render_json(analysis: &Analysis, kmap: Option<&KMap>) -> String {
    let report = Report {
        formula: analysis.formula(),
        variables: analysis.variables().iter().map(|v| v.to_string()).collect(),
        classification: analysis.classification(),
        table: analysis.table(),
        dnf: analysis.dnf().to_string(),
        cnf: analysis.cnf().to_string(),
        kmap,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }
}

fn render_text(args: &Args, analysis: &Analysis, kmap: Option<&KMap>) -> String {
    // Selection flags narrow the output; with none set, print everything
    let all = !(args.table || args.classify || args.dnf || args.cnf || args.kmap);
    let mut out = String::new();

    if all || args.table {
        let _ = write!(out, "{}", analysis.table());
    }
    if all || args.classify {
        let _ = writeln!(out, "Classification: {}", analysis.classification());
    }
    if all || args.dnf {
        let _ = writeln!(out, "DNF: {}", analysis.dnf());
    }
    if all || args.cnf {
        let _ = writeln!(out, "CNF: {}", analysis.cnf());
    }
    if let Some(kmap) = kmap {
        let _ = write!(out, "{}", kmap);
        let _ = writeln!(out, "Groups: {:?}", kmap.groups());
    }
    out
}
