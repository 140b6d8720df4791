use clap::ValueEnum;
use colored::Colorize;

use crate::{error::RenderError, mapper::ViewMember};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const HEADERS: [&str; 3] = ["Picture", "Id", "Name"];

pub fn render(members: &[ViewMember], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(render_table(members)),
        OutputFormat::Csv => render_csv(members),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(members)?),
    }
}

fn cells(member: &ViewMember) -> [String; 3] {
    [
        member.avatar_url.clone().unwrap_or_default(),
        member.id.map(|id| id.to_string()).unwrap_or_default(),
        member.name.clone().unwrap_or_default(),
    ]
}

/// Plain text table, one row per member. Absent fields are left blank.
pub fn render_table(members: &[ViewMember]) -> String {
    let rows: Vec<[String; 3]> = members.iter().map(cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}").bold().to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = vec![header, separator];
    for row in rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push(line.trim_end().to_string());
    }
    out.join("\n")
}

pub fn render_csv(members: &[ViewMember]) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["picture", "id", "name"])?;
    for member in members {
        writer.write_record(cells(member))?;
    }
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
