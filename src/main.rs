use std::fs;

use clap::Parser;
use plotatom::{atom::Atom, read_atoms};

/// plotatom reads source text and prints the atoms it contains, one per line,
/// with their kind.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plotatom to look at a file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Also print the property list of every atom.
    #[arg(short, long)]
    properties: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match read_atoms(&source) {
        Ok(atoms) => {
            for atom in &atoms {
                print_atom(atom, args.properties);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn print_atom(atom: &Atom, with_properties: bool) {
    println!("{}\t{atom}", atom.kind());

    if with_properties {
        for (key, value) in atom.properties() {
            println!("\t{key} = {value}");
        }
    }
}
