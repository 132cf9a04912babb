// sigtree: parse a D-Bus type signature and print its tree

use sigtree::{parse_signature, pretty_print};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("sigtree");
        eprintln!("Error: No signature provided");
        eprintln!();
        eprintln!("Usage: {} <signature>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} 'a{{sv}}'       # array of string-to-variant entries",
            program_name
        );
        eprintln!(
            "  {} 'a(iis)'      # array of (int32, int32, string) structs",
            program_name
        );
        std::process::exit(1);
    }

    let signature = &args[1];

    match parse_signature(signature) {
        Ok(tree) => print!("{}", pretty_print(&tree)),
        Err(e) => {
            eprintln!("Signature error: {}", e);
            std::process::exit(1);
        }
    }
}
