//! Verse CLI
//!
//! Generates `equals`, `hashCode` and `toString` for Java class skeletons.

use versec::commands::{parse_gen_options, run_gen};

fn main() {
    versec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: verse gen <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --hash=<strategy>   Hash strategy: compatible (default), array-aware");
                eprintln!("  --indent=<n>        Spaces per indentation level (default: 2)");
                eprintln!("  --methods=<list>    Comma list of equals, hashCode, toString");
                eprintln!("  --class             Print whole classes instead of methods");
                eprintln!("  -o <path>           Output file");
                std::process::exit(1);
            }

            let result = parse_gen_options(&args[2..]).and_then(|options| run_gen(&options));
            if let Err(e) = result {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Verse {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Verse (equals/hashCode/toString synthesis for Java)");
    println!();
    println!("Usage: verse <command> [options]");
    println!();
    println!("Commands:");
    println!("  gen <file>           Generate methods for the class skeletons in <file>");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Gen options:");
    println!("  --hash=<strategy>   Hash strategy: compatible (default), array-aware");
    println!("  --indent=<n>        Spaces per indentation level (default: 2)");
    println!("  --methods=<list>    Comma list of equals, hashCode, toString");
    println!("  --class             Print whole classes instead of methods");
    println!("  -o <path>           Output file path");
    println!();
    println!("Input format:");
    println!("  class Foo {{");
    println!("      private final long foo;");
    println!("      String[] names;");
    println!("  }}");
    println!();
    println!("Examples:");
    println!("  verse gen Foo.txt");
    println!("  verse gen Foo.txt --class -o Foo.java");
    println!("  verse gen Foo.txt --methods=equals,hashCode --hash=array-aware");
    println!("  RUST_LOG=verse_codegen=trace verse gen Foo.txt");
}
