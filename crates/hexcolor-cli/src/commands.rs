//! Command handlers. Each returns the text to print on success.

use hexcolor::{HexColor, HexColorError};
use serde::Serialize;

use crate::cli::Command;

#[derive(Debug, Serialize)]
struct ColorReport<'a> {
    value: &'a HexColor,
    int: u32,
    rgb: (u8, u8, u8),
    rgba: (u8, u8, u8, u8),
}

pub fn run(command: &Command, json: bool) -> Result<String, HexColorError> {
    match command {
        Command::Show { color } => {
            let color = HexColor::new(color)?;
            Ok(show(&color, json))
        }
        Command::Add { left, right } => {
            let sum = &HexColor::new(left)? + &HexColor::new(right)?;
            Ok(render(&sum, json))
        }
        Command::Sub { left, right } => {
            let diff = &HexColor::new(left)? - &HexColor::new(right)?;
            Ok(render(&diff, json))
        }
        Command::Edit {
            color,
            red,
            green,
            blue,
            alpha,
        } => {
            let mut color = HexColor::new(color)?;
            if let Some(hex) = red {
                color.edit_red(hex)?;
            }
            if let Some(hex) = green {
                color.edit_green(hex)?;
            }
            if let Some(hex) = blue {
                color.edit_blue(hex)?;
            }
            if let Some(hex) = alpha {
                color.edit_alpha(hex)?;
            }
            Ok(render(&color, json))
        }
    }
}

fn render(color: &HexColor, json: bool) -> String {
    if json {
        serde_json::to_string(color).unwrap_or_else(|_| color.to_string())
    } else {
        color.to_string()
    }
}

fn show(color: &HexColor, json: bool) -> String {
    let report = ColorReport {
        value: color,
        int: color.to_u32(),
        rgb: color.rgb(),
        rgba: color.rgba(),
    };
    if json {
        return serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize color: {e}\"}}"));
    }
    let (r, g, b, a) = report.rgba;
    format!(
        "value: {}\nint:   {}\nrgb:   ({r}, {g}, {b})\nrgba:  ({r}, {g}, {b}, {a})",
        report.value, report.int
    )
}
