//! Classify media types
//!
//! This example parses every media type given on the command line, prints
//! its canonical form and lists which of the other arguments (and of the
//! well-known generic types) it specializes.
//!
//! Run with `RUST_LOG=debug` to see why rejected inputs were rejected.

use std::env;

use mimekit::{MediaType, APPLICATION_XML, OCTET_STREAM, TEXT_PLAIN};

fn classify() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // args[0] = path to executable
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err("expected at least 1 argument (media type)".into());
    }

    let mut parsed = Vec::new();
    for raw in &args {
        match raw.parse::<MediaType>() {
            Ok(media) => parsed.push(media),
            Err(e) => println!("{:?}: not a media type ({})", raw, e),
        }
    }

    let generic = [&OCTET_STREAM, &TEXT_PLAIN, &APPLICATION_XML];
    for media in &parsed {
        println!("{}", media);
        if media.has_parameters() {
            println!("  base type: {}", media.base_type());
        }

        let candidates = generic.iter().copied().chain(parsed.iter());
        for that in candidates {
            if !std::ptr::eq(that, media) && media.is_specialization_of(that) {
                println!("  specializes {}", that);
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = classify() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
