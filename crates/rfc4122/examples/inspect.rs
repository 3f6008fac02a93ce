//! Simple inspector for UUID strings.
//!
//! ```text
//! cargo run --example inspect -- 6ba7b810-9dad-11d1-80b4-00c04fd430c8 '{...}'
//! ```

use rfc4122::codec::parse_text_form;
use rfc4122::{Uuid, Variant};

fn describe_variant(variant: Variant) -> &'static str {
    match variant {
        Variant::Ncs => "reserved, NCS backward compatibility",
        Variant::Rfc4122 => "RFC 4122",
        Variant::Microsoft => "reserved, Microsoft backward compatibility",
        Variant::Future => "reserved for future definition",
    }
}

fn main() {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec![Uuid::NAMESPACE_DNS.to_string()]
    } else {
        inputs
    };

    let mut failures = 0;
    for input in &inputs {
        println!("\n=== {} ===", input);

        let (bytes, form) = match parse_text_form(input.as_bytes()) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("  error: {}", err);
                failures += 1;
                continue;
            }
        };
        let id = Uuid::from_array(bytes);

        println!("  form:       {}", form.name());
        println!("  canonical:  {}", id);
        println!("  simple:     {}", id.simple());
        println!("  braced:     {}", id.braced());
        println!("  urn:        {}", id.urn());
        println!("  bytes:      {:02x?}", id.as_bytes());
        println!("  version:    {}", id.version());
        println!("  variant:    {} ({})", id.variant(), describe_variant(id.variant()));
        if id.is_nil() {
            println!("  (nil UUID)");
        }
    }

    println!("\nParsed {} of {} inputs", inputs.len() - failures, inputs.len());
    if failures > 0 {
        std::process::exit(1);
    }
}
