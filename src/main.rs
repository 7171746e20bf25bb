//! Command-line interface for plc
//!
//! Usage:
//!   plc `<path>` [--output `<path>`] [--format java|tokens|ast]

use std::fs;
use std::process::exit;

use clap::{Arg, Command};
use log::info;

use plc::parser::ast::Source;
use plc::parser::Token;
use plc::{generate, lex, parse, CompileError};

fn main() {
    env_logger::init();

    let matches = Command::new("plc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile a PLC program to Java")
        .arg(
            Arg::new("path")
                .help("Path to the PLC source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("What to print: generated Java, the token stream, or the AST")
                .value_parser(["java", "tokens", "ast"])
                .default_value("java"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", path, e);
            exit(1);
        }
    };

    info!("compiling {} as {}", path, format);
    let output = match render(&source, format) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    match matches.get_one::<String>("output") {
        Some(out_path) => {
            if let Err(e) = fs::write(out_path, output) {
                eprintln!("Error: could not write '{}': {}", out_path, e);
                exit(1);
            }
        }
        None => print!("{}", output),
    }
}

fn render(source: &str, format: &str) -> Result<String, CompileError> {
    let tokens = lex(source)?;
    if format == "tokens" {
        return Ok(format_tokens(&tokens));
    }

    let ast = parse(&tokens)?;
    if format == "ast" {
        return Ok(format_ast(&ast));
    }

    Ok(generate(&ast))
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}\t{}\t{}\n", t.start, t.kind, t.literal))
        .collect()
}

fn format_ast(ast: &Source) -> String {
    format!("{:#?}\n", ast)
}
