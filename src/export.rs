//! Format palettes as text for other tools to consume.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    rgb::Rgb,
};

/// Side length of one swatch in the SVG output.
pub const SWATCH_SIZE: usize = 100;

/// A text format a palette can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSS custom properties on `:root`.
    Css,
    /// A JSON object with a `colors` array.
    Json,
    /// One HEX color per line.
    Text,
    /// A row of square swatches.
    Svg,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Css, Self::Json, Self::Text, Self::Svg];

    /// The usual file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Text => "txt",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            "txt" | "text" => Ok(Self::Text),
            "svg" => Ok(Self::Svg),
            _ => Err(Error::UnsupportedExportFormat(s.to_owned())),
        }
    }
}

#[derive(Serialize)]
struct JsonPalette<'a> {
    colors: &'a [Rgb],
}

/// Format the colors in the given format.
pub fn export(colors: &[Rgb], format: ExportFormat) -> Result<String> {
    log::debug!("exporting {} colors as {format}", colors.len());

    let out = match format {
        ExportFormat::Css => to_css(colors),
        ExportFormat::Json => serde_json::to_string_pretty(&JsonPalette { colors })?,
        ExportFormat::Text => to_text(colors),
        ExportFormat::Svg => to_svg(colors),
    };

    Ok(out)
}

fn to_css(colors: &[Rgb]) -> String {
    let mut out = String::from(":root {\n");
    for (i, color) in colors.iter().enumerate() {
        out.push_str(&format!("  --color-{}: {color};\n", i + 1));
    }
    out.push('}');
    out
}

fn to_text(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(Rgb::to_hex)
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_svg(colors: &[Rgb]) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{SWATCH_SIZE}">"#,
        colors.len() * SWATCH_SIZE
    );
    out.push('\n');
    for (i, color) in colors.iter().enumerate() {
        out.push_str(&format!(
            r#"  <rect width="{SWATCH_SIZE}" height="{SWATCH_SIZE}" x="{}" y="0" fill="{color}" />"#,
            i * SWATCH_SIZE
        ));
        out.push('\n');
    }
    out.push_str("</svg>");
    out
}
