//! Check a foreground color against a background and suggest a fix.
//!
//! ```sh
//! cargo run --example contrast -- "#FFFFFF" "#AAAAAA"
//! ```

use chromatone::{check_contrast, contrasting_text_color, hex_to_rgb, suggest_accessible_color};

fn main() -> chromatone::Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "trace");
    env_logger::init_from_env(env);

    let mut args = std::env::args().skip(1);
    let background = hex_to_rgb(&args.next().unwrap_or_else(|| "#FFFFFF".to_owned()))?;
    let foreground = hex_to_rgb(&args.next().unwrap_or_else(|| "#AAAAAA".to_owned()))?;

    let result = check_contrast(background, foreground);
    println!("{foreground} on {background}: {:.2} {:?}", result.ratio, result.conformance);
    println!("plain text color for {background}: {}", contrasting_text_color(background));

    if !result.passes_aa {
        let suggestion = suggest_accessible_color(background, foreground);
        let fixed = check_contrast(background, suggestion);
        println!("suggested {suggestion}: {:.2} {:?}", fixed.ratio, fixed.conformance);
    }

    Ok(())
}
