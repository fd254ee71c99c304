//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use boxing_domain::{fighting_skill, Boxer, BoxerRecord, Bout};
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single boxer with their record.
    pub fn format_boxer(&self, record: &BoxerRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record))?),
            OutputFormat::Table => Ok(self.records_table(std::slice::from_ref(record), false)),
        }
    }

    /// Format the leaderboard.
    pub fn format_leaderboard(&self, records: &[BoxerRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No boxers have fought yet.", "yellow"));
                }
                Ok(self.records_table(records, true))
            }
        }
    }

    /// Format the boxers currently in the ring.
    pub fn format_ring(&self, boxers: &[Boxer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = boxers
                    .iter()
                    .map(|b| {
                        json!({
                            "id": b.id().value(),
                            "name": b.name(),
                            "weight_class": b.weight_class().as_str(),
                            "skill": fighting_skill(b),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if boxers.is_empty() {
                    return Ok(self.colorize("Ring is empty.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Slot", "ID", "Name", "Class", "Skill"]);
                for (slot, boxer) in boxers.iter().enumerate() {
                    builder.push_record([
                        (slot + 1).to_string(),
                        boxer.id().to_string(),
                        boxer.name().to_string(),
                        boxer.weight_class().to_string(),
                        format!("{:.1}", fighting_skill(boxer)),
                    ]);
                }
                Ok(self.finish(builder))
            }
        }
    }

    /// Format the result of a bout.
    pub fn format_bout(&self, bout: &Bout) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "winner": bout.winner.name(),
                "loser": bout.loser.name(),
                "probability": bout.probability,
                "draw": bout.draw,
            }))?),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.success(&format!("{} defeats {}", bout.winner.name(), bout.loser.name())),
                self.info(&format!(
                    "First-slot win probability {:.4}, draw {:.2}",
                    bout.probability, bout.draw
                )),
            )),
        }
    }

    /// Format the outcome of a write: a message for tables, `payload` for JSON.
    pub fn status(&self, message: &str, payload: Value) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&payload)?),
            OutputFormat::Table => Ok(self.success(message)),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn records_table(&self, records: &[BoxerRecord], ranked: bool) -> String {
        let mut builder = Builder::default();
        let mut header = vec!["ID", "Name", "Weight", "Height", "Reach", "Age", "Class", "Fights", "Wins", "Win %"];
        if ranked {
            header.insert(0, "#");
        }
        builder.push_record(header);

        for (rank, record) in records.iter().enumerate() {
            let boxer = &record.boxer;
            let mut row = vec![
                boxer.id().to_string(),
                boxer.name().to_string(),
                boxer.weight().to_string(),
                boxer.height().to_string(),
                boxer.reach().to_string(),
                boxer.age().to_string(),
                boxer.weight_class().to_string(),
                record.fights.to_string(),
                record.wins.to_string(),
                format!("{:.1}", record.win_pct()),
            ];
            if ranked {
                row.insert(0, (rank + 1).to_string());
            }
            builder.push_record(row);
        }

        self.finish(builder)
    }

    fn finish(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_json(record: &BoxerRecord) -> Value {
    let boxer = &record.boxer;
    json!({
        "id": boxer.id().value(),
        "name": boxer.name(),
        "weight": boxer.weight(),
        "height": boxer.height(),
        "reach": boxer.reach(),
        "age": boxer.age(),
        "weight_class": boxer.weight_class().as_str(),
        "fights": record.fights,
        "wins": record.wins,
        "win_pct": record.win_pct(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxing_domain::BoxerId;

    fn record(id: i64, name: &str, fights: u32, wins: u32) -> BoxerRecord {
        let boxer = Boxer::from_parts(BoxerId::from_value(id), name, 210, 75, 78.0, 30).unwrap();
        BoxerRecord { boxer, fights, wins }
    }

    #[test]
    fn test_json_boxer() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_boxer(&record(1, "Ali", 3, 2)).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "Ali");
        assert_eq!(value["weight_class"], "HEAVYWEIGHT");
        assert_eq!(value["win_pct"], 66.7);
    }

    #[test]
    fn test_table_leaderboard() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_leaderboard(&[record(1, "Ali", 3, 2), record(2, "Frazier", 2, 1)])
            .unwrap();

        assert!(output.contains("Win %"));
        assert!(output.contains("Frazier"));
        assert!(output.contains("66.7"));
    }

    #[test]
    fn test_empty_leaderboard() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_leaderboard(&[]).unwrap();
        assert!(output.contains("No boxers have fought yet"));

        let json = Formatter::new(OutputFormat::Json, false);
        assert_eq!(json.format_leaderboard(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_empty_ring() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_ring(&[]).unwrap(), "Ring is empty.");
    }

    #[test]
    fn test_status() {
        let table = Formatter::new(OutputFormat::Table, false);
        assert_eq!(table.status("Boxer deleted", json!({"deleted": 4})).unwrap(), "✓ Boxer deleted");

        let json = Formatter::new(OutputFormat::Json, false);
        assert!(json.status("Boxer deleted", json!({"deleted": 4})).unwrap().contains("\"deleted\": 4"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
