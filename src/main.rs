//! chung compiler - CLI

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use chung::frontend::{lexer, Compiler};
use chung::util::span::SourceFile;
use chung::util::{diagnostic, logger};
use chung::{NAME, VERSION};

/// Compiler front end for the chung programming language
#[derive(Parser, Debug)]
#[command(name = "chung")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex and parse a source file, then dump tokens, AST, and diagnostics
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit diagnostics as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },

    /// Lex a source file and dump the token list
    Tokens {
        /// Source file to lex
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init(args.verbose);

    match args.command {
        Commands::Parse { file, json } => run_parse(&file, json),
        Commands::Tokens { file } => run_tokens(&file),
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read: {}", file.display()))
}

fn banner(title: &str) {
    println!("{}", "==============================================".cyan());
    println!("{}", format!("{:^46}", title).bold());
    println!("{}", "==============================================".cyan());
}

fn run_parse(file: &Path, json: bool) -> Result<ExitCode> {
    let text = read_source(file)?;
    let compiler = Compiler::new();
    let output = compiler.parse_source(&file.display().to_string(), &text);

    if json {
        println!("{}", serde_json::to_string_pretty(&output.diagnostics)?);
        return Ok(exit_for(&output.diagnostics));
    }

    println!("{}", format!("Running {} {}", NAME, VERSION).bold());
    println!("Parsing {}", file.display());

    banner("Program Tokens");
    for token in &output.tokens {
        print!("|{}| ", token.bold());
    }
    println!("\n");

    banner("Program AST");
    for statement in &output.statements {
        println!("{}", statement.stringify(0));
    }
    println!();

    if output.is_clean() {
        println!("{}", "Successfully parsed with no errors!".green());
    } else {
        eprintln!("{}", diagnostic::render_all(&output.diagnostics).red());
        eprintln!(
            "{}",
            format!("{} error(s) found", output.diagnostics.len())
                .red()
                .bold()
        );
    }
    Ok(exit_for(&output.diagnostics))
}

fn run_tokens(file: &Path) -> Result<ExitCode> {
    let text = read_source(file)?;
    let source = SourceFile::new(file.display().to_string(), text);
    let (tokens, diagnostics) = lexer::lex(&source);

    banner("Program Tokens");
    for token in &tokens {
        print!("|{}| ", token.bold());
    }
    println!();

    if diagnostics.is_empty() {
        println!("{}", "Successfully lexed with no errors!".green());
    } else {
        eprintln!("{}", diagnostic::render_all(&diagnostics).red());
    }
    Ok(exit_for(&diagnostics))
}

fn exit_for(diagnostics: &[diagnostic::Diagnostic]) -> ExitCode {
    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
