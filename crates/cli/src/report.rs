//! Batch report types and recording.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use u_stacking_core::{Material, Pallet, StackPlan};

/// Outcome of planning one catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackReport {
    /// Material identifier
    pub id: String,
    /// Material display name
    pub name: String,
    /// Box length in input units
    pub length: f64,
    /// Box width in input units
    pub width: f64,
    /// Box height in input units
    pub height: f64,
    /// Boxes in one layer
    pub boxes_per_layer: usize,
    /// Layers in the stack
    pub total_layers: usize,
    /// Boxes in the whole stack
    pub total_boxes: usize,
    /// Stack height in input units
    pub stack_height: f64,
    /// Volumetric utilization (0.0 - 1.0)
    pub utilization: f64,
    /// Pattern used on odd layers
    pub pattern: String,
    /// Whether even layers alternate
    pub interlocked: bool,
    /// Quality notes raised by the planner
    pub advisories: Vec<String>,
    /// Planning time in milliseconds
    pub time_ms: u64,
    /// Rejection message for rows the planner refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StackReport {
    /// Builds a report row from a computed plan.
    pub fn from_plan(plan: &StackPlan, time_ms: u64) -> Self {
        Self {
            id: plan.material.id().clone(),
            name: plan.material.name().to_string(),
            length: plan.material.length(),
            width: plan.material.width(),
            height: plan.material.height(),
            boxes_per_layer: plan.boxes_per_layer(),
            total_layers: plan.total_layers,
            total_boxes: plan.total_boxes,
            stack_height: plan.stack_height,
            utilization: plan.utilization,
            pattern: plan.odd_layer.pattern.to_string(),
            interlocked: plan.is_interlocked(),
            advisories: plan.advisories.iter().map(|a| a.to_string()).collect(),
            time_ms,
            error: None,
        }
    }

    /// Builds a report row for a material the planner rejected.
    pub fn rejected(material: &Material, error: String, time_ms: u64) -> Self {
        Self {
            id: material.id().clone(),
            name: material.name().to_string(),
            length: material.length(),
            width: material.width(),
            height: material.height(),
            boxes_per_layer: 0,
            total_layers: 0,
            total_boxes: 0,
            stack_height: 0.0,
            utilization: 0.0,
            pattern: String::new(),
            interlocked: false,
            advisories: Vec::new(),
            time_ms,
            error: Some(error),
        }
    }

    /// Returns true when the row was planned successfully.
    pub fn is_planned(&self) -> bool {
        self.error.is_none()
    }
}

/// Collection of report rows for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Individual row outcomes, in catalog order
    pub rows: Vec<StackReport>,
    /// Pallet footprint length the batch was planned against
    pub pallet_length: f64,
    /// Pallet footprint width the batch was planned against
    pub pallet_width: f64,
    /// Pallet base height, in the same units as the footprint
    pub pallet_base_height: f64,
    /// Whether the base height counted toward the limit
    pub include_base_in_height: bool,
    /// Height limit applied to every row
    pub max_stack_height: f64,
}

impl BatchReport {
    /// Creates an empty report for the given configuration.
    pub fn new(pallet: &Pallet, max_stack_height: f64) -> Self {
        Self {
            rows: Vec::new(),
            pallet_length: pallet.length(),
            pallet_width: pallet.width(),
            pallet_base_height: pallet.base_height(),
            include_base_in_height: pallet.includes_base_in_height(),
            max_stack_height,
        }
    }

    /// Adds a row outcome.
    pub fn add_row(&mut self, row: StackReport) {
        self.rows.push(row);
    }

    /// Returns the number of successfully planned rows.
    pub fn planned(&self) -> usize {
        self.rows.iter().filter(|r| r.is_planned()).count()
    }

    /// Returns the number of rejected rows.
    pub fn rejected(&self) -> usize {
        self.rows.len() - self.planned()
    }

    /// Saves the report to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves the report to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        self.write_csv(&mut file)
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "id,name,length,width,height,boxes_per_layer,total_layers,total_boxes,stack_height,utilization,pattern,interlocked,advisories,time_ms,error"
        )?;

        for row in &self.rows {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{:.1},{:.4},{},{},{},{},{}",
                csv_field(&row.id),
                csv_field(&row.name),
                row.length,
                row.width,
                row.height,
                row.boxes_per_layer,
                row.total_layers,
                row.total_boxes,
                row.stack_height,
                row.utilization,
                row.pattern,
                row.interlocked,
                csv_field(&row.advisories.join("; ")),
                row.time_ms,
                csv_field(row.error.as_deref().unwrap_or("")),
            )?;
        }

        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        let base_note = if self.include_base_in_height {
            " counted toward the limit"
        } else {
            ""
        };

        println!("\n{:=<100}", "");
        println!(
            "BATCH RESULTS  (pallet {}x{}, base {} mm{}, limit {} mm)",
            self.pallet_length,
            self.pallet_width,
            self.pallet_base_height,
            base_note,
            self.max_stack_height
        );
        println!("{:=<100}", "");
        println!(
            "{:<10} {:<16} {:>14} {:>7} {:>7} {:>7} {:>9} {:>7} {:>5} {:>8}",
            "ID", "Name", "Box(mm)", "Boxes/L", "Layers", "Total", "Height", "Util%", "Lock", "Time(ms)"
        );
        println!("{:-<100}", "");

        for row in &self.rows {
            if let Some(error) = &row.error {
                println!("{:<10} {:<16} REJECTED: {}", row.id, row.name, error);
                continue;
            }

            println!(
                "{:<10} {:<16} {:>14} {:>7} {:>7} {:>7} {:>9.0} {:>7.1} {:>5} {:>8}",
                row.id,
                row.name,
                format!("{}x{}x{}", row.length, row.width, row.height),
                row.boxes_per_layer,
                row.total_layers,
                row.total_boxes,
                row.stack_height,
                row.utilization * 100.0,
                if row.interlocked { "yes" } else { "no" },
                row.time_ms,
            );
        }

        println!("{:-<100}", "");
        println!("{} planned, {} rejected", self.planned(), self.rejected());

        let flagged: Vec<&StackReport> =
            self.rows.iter().filter(|r| !r.advisories.is_empty()).collect();
        if !flagged.is_empty() {
            println!("\nAdvisories:");
            for row in flagged {
                for advisory in &row.advisories {
                    println!("  {}: {}", row.id, advisory);
                }
            }
        }

        println!("{:=<100}\n", "");
    }
}

/// Quotes a CSV field per RFC 4180 when it contains a comma, quote or line
/// break, doubling any inner quotes.
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_stacking_core::StackPlanner;

    /// Counts fields in one CSV line, honoring quoted sections.
    fn count_csv_fields(line: &str) -> usize {
        let mut fields = 1;
        let mut in_quotes = false;
        for c in line.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields += 1,
                _ => {}
            }
        }
        fields
    }

    #[test]
    fn test_report_from_plan() {
        let material = Material::new("M1", 400.0, 300.0, 200.0).with_name("Carton A");
        let plan = StackPlanner::default_config()
            .plan(&material, 1350.0)
            .unwrap();

        let row = StackReport::from_plan(&plan, 3);

        assert_eq!(row.id, "M1");
        assert_eq!(row.name, "Carton A");
        assert_eq!(row.boxes_per_layer, 6);
        assert_eq!(row.total_boxes, 36);
        assert_eq!(row.pattern, "Standard Grid");
        assert!(row.interlocked);
        assert!(row.advisories.is_empty());
        assert_eq!(row.time_ms, 3);
        assert!(row.is_planned());
    }

    #[test]
    fn test_rejected_row() {
        let material = Material::new("M2", -400.0, 300.0, 200.0);
        let row = StackReport::rejected(&material, "Invalid dimension".to_string(), 0);

        assert!(!row.is_planned());
        assert_eq!(row.total_boxes, 0);
        assert_eq!(row.error.as_deref(), Some("Invalid dimension"));
    }

    #[test]
    fn test_batch_counts() {
        let pallet = Pallet::default();
        let mut report = BatchReport::new(&pallet, 1350.0);

        let material = Material::new("M1", 400.0, 300.0, 200.0);
        let plan = StackPlanner::default_config()
            .plan(&material, 1350.0)
            .unwrap();
        report.add_row(StackReport::from_plan(&plan, 1));

        let bad = Material::new("M2", 0.0, 300.0, 200.0);
        report.add_row(StackReport::rejected(&bad, "Invalid dimension".to_string(), 0));

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.planned(), 1);
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.pallet_length, 1180.0);
    }

    #[test]
    fn test_advisories_carried() {
        let material = Material::new("M1", 390.0, 290.0, 200.0);
        let plan = StackPlanner::default_config()
            .plan(&material, 1350.0)
            .unwrap();

        let row = StackReport::from_plan(&plan, 1);
        assert_eq!(row.advisories.len(), 1);
        assert!(row.advisories[0].contains("8 boxes vs 9"));
        assert!(!row.interlocked);
    }

    #[test]
    fn test_json_round_trip() {
        let material = Material::new("M1", 400.0, 300.0, 200.0);
        let plan = StackPlanner::default_config()
            .plan(&material, 1350.0)
            .unwrap();

        let mut report = BatchReport::new(&Pallet::default(), 1350.0);
        report.add_row(StackReport::from_plan(&plan, 2));

        let json = serde_json::to_string(&report).unwrap();
        let back: BatchReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.rows.len(), 1);
        assert_eq!(back.rows[0].total_boxes, 36);
        assert!(back.rows[0].error.is_none());
        assert_eq!(back.pallet_base_height, 140.0);
        assert!(!back.include_base_in_height);
    }

    #[test]
    fn test_header_records_base_settings() {
        let pallet = Pallet::new(1200.0, 800.0)
            .with_base_height(150.0)
            .with_base_in_height(true);
        let report = BatchReport::new(&pallet, 1350.0);

        assert_eq!(report.pallet_base_height, 150.0);
        assert!(report.include_base_in_height);
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Carton A"), "Carton A");
        assert_eq!(csv_field("got 100, expected 4"), "\"got 100, expected 4\"");
        assert_eq!(csv_field("size \"EU\""), "\"size \"\"EU\"\"\"");
    }

    #[test]
    fn test_csv_rejected_row_keeps_column_count() {
        let bad = Material::new("row-1", 100.0, -1.0, 200.0);
        let error = StackPlanner::default_config()
            .plan(&bad, 1350.0)
            .unwrap_err();

        let mut report = BatchReport::new(&Pallet::default(), 1350.0);
        report.add_row(StackReport::rejected(&bad, error.to_string(), 0));

        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();

        // The rejection message contains a comma; quoting keeps it one field
        assert!(row.contains("must be positive"));
        assert_eq!(count_csv_fields(header), 15);
        assert_eq!(count_csv_fields(row), count_csv_fields(header));
    }
}
