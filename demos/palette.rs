//! Print every harmony for a seed color, then export the triadic palette.
//!
//! ```sh
//! cargo run --example palette -- "#3A7BD5"
//! ```

use chromatone::{export, generate, simulate_palette, Deficiency, ExportFormat, Harmony};

fn main() -> chromatone::Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "debug");
    env_logger::init_from_env(env);

    let seed = std::env::args().nth(1).unwrap_or_else(|| "#3A7BD5".to_owned());

    for harmony in Harmony::ALL {
        let palette = generate(&seed, harmony)?;
        println!("{:<20} {}", harmony.tag(), palette.to_hex_strings().join(" "));
    }

    let triadic = generate(&seed, Harmony::Triadic)?;
    println!();
    println!("{}", export(&triadic, ExportFormat::Css)?);

    for deficiency in Deficiency::ALL {
        let simulated = simulate_palette(&triadic, deficiency);
        println!("{:<20} {}", deficiency, simulated.to_hex_strings().join(" "));
    }

    Ok(())
}
