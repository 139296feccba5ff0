//! Line-oriented command interpreter for the interactive session

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::biogas::estimate_biogas;
use crate::coating::estimate_coating;
use crate::models::{
    ApplicationMethod, BiogasRecord, BiogasRequest, CoatingKind, CoatingRequest, ObjectKind,
    WasteType,
};
use crate::numeric::coerce_number;
use crate::session::Session;

pub struct Console {
    session: Session,
    export_path: PathBuf,
    strict: bool,
}

impl Console {
    pub fn new(export_path: PathBuf, strict: bool) -> Self {
        Console {
            session: Session::new(),
            export_path,
            strict,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute one input line.
    /// Returns Ok(true) to keep reading, Ok(false) on quit.
    pub fn execute(&mut self, input: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        match cmd.as_deref() {
            Some("coat") => {
                if parts.len() < 6 {
                    writeln!(
                        out,
                        "Usage: coat <object> <coating> <method> <concentration%> <volume_ml>"
                    )?;
                } else {
                    let request = CoatingRequest {
                        object: parts[1].into(),
                        coating: parts[2].into(),
                        method: parts[3].into(),
                        concentration_percent: coerce_number(parts[4]),
                        volume_ml: coerce_number(parts[5]),
                    };
                    if self.strict {
                        request.validate()?;
                    }
                    let result = estimate_coating(&request);
                    writeln!(out, "{}", result)?;
                    self.session.record_coating(result);
                }
            }
            Some("biogas") => {
                if parts.len() < 3 {
                    writeln!(out, "Usage: biogas <waste> <mass_kg> [retention_days]")?;
                } else {
                    let request = BiogasRequest {
                        waste_type: parts[1].into(),
                        mass_kg: coerce_number(parts[2]),
                        retention_days: parts.get(3).map(|s| coerce_number(s)),
                    };
                    if self.strict {
                        request.validate()?;
                    }
                    let result = estimate_biogas(&request.waste_type, request.mass_kg);
                    writeln!(out, "{}", result)?;
                    self.session.record_biogas(BiogasRecord {
                        result,
                        retention_days: request.retention_days,
                    });
                }
            }
            Some("show") => {
                if self.session.is_empty() {
                    writeln!(out, "No results yet.")?;
                } else {
                    writeln!(out, "{}", self.session.export_json()?)?;
                }
            }
            Some("export") => {
                let path = parts
                    .get(1)
                    .map(|p| PathBuf::from(*p))
                    .unwrap_or_else(|| self.export_path.clone());
                self.session.export_to(&path)?;
                writeln!(out, "Exported to {}", path.display())?;
            }
            Some("clear") => {
                self.session.clear();
                writeln!(out, "Results cleared.")?;
            }
            Some("factors") => {
                write!(out, "{}", factor_tables())?;
            }
            Some("help") | Some("?") => {
                write!(out, "{}", help_text())?;
            }
            Some("quit") | Some("exit") | Some("q") => {
                return Ok(false);
            }
            Some(unknown) => {
                writeln!(
                    out,
                    "Unknown command '{}'. Type '{}' for available commands.",
                    unknown.red(),
                    "help".bright_yellow()
                )?;
            }
            None => {}
        }

        Ok(true)
    }
}

pub fn help_text() -> String {
    let mut text = String::new();
    text.push_str("Commands:\n");
    text.push_str("  coat <object> <coating> <method> <concentration%> <volume_ml>\n");
    text.push_str("  biogas <waste> <mass_kg> [retention_days]\n");
    text.push_str("  show                 Print the last results as JSON\n");
    text.push_str("  export [path]        Write the last results to a JSON file\n");
    text.push_str("  clear                Forget the last results\n");
    text.push_str("  factors              List lookup tables\n");
    text.push_str("  quit                 Leave the session\n");
    text
}

/// Every lookup table with its fallback, formatted as a table
pub fn factor_tables() -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<12} {:>12}\n", "Object", "Shelf (days)"));
    for object in ObjectKind::KNOWN {
        output.push_str(&format!("{:<12} {:>12}\n", object, object.base_shelf_days()));
    }
    output.push_str(&format!("{:<12} {:>12}\n\n", "(other)", ObjectKind::DEFAULT_SHELF_DAYS));

    output.push_str(&format!("{:<12} {:>12}\n", "Coating", "Factor"));
    for coating in CoatingKind::KNOWN {
        output.push_str(&format!("{:<12} {:>12}\n", coating, coating.efficacy_factor()));
    }
    output.push_str(&format!("{:<12} {:>12}\n\n", "(other)", CoatingKind::DEFAULT_FACTOR));

    output.push_str(&format!("{:<12} {:>12}\n", "Method", "Factor"));
    for method in ApplicationMethod::KNOWN {
        output.push_str(&format!("{:<12} {:>12}\n", method, method.efficacy_factor()));
    }
    output.push_str(&format!("{:<12} {:>12}\n\n", "(other)", ApplicationMethod::DEFAULT_FACTOR));

    output.push_str(&format!("{:<12} {:>12} {:>12}\n", "Waste", "CH4 m³/kg", "VS fraction"));
    for waste in WasteType::KNOWN {
        output.push_str(&format!(
            "{:<12} {:>12} {:>12}\n",
            waste,
            waste.methane_yield_per_kg(),
            waste.volatile_solids_fraction()
        ));
    }
    output.push_str(&format!(
        "{:<12} {:>12} {:>12}\n",
        "(other)",
        WasteType::DEFAULT_YIELD,
        WasteType::DEFAULT_VS_FRACTION
    ));

    output
}
