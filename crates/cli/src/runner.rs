//! Batch planning over material catalogs.

use instant::Instant;

use u_stacking_core::{Material, Pallet, StackPlanner};

use crate::report::{BatchReport, StackReport};

/// Height limit for air freight and standard racking, in millimeters.
pub const STANDARD_HEIGHT_LIMIT: f64 = 1350.0;

/// Height limit for loose cargo and height-restricted storage.
pub const LOW_HEIGHT_LIMIT: f64 = 700.0;

/// Configuration for a batch planning run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Pallet configuration shared by every row.
    pub pallet: Pallet,
    /// Height limit applied to every row.
    pub max_stack_height: f64,
    /// Whether to print per-row progress.
    pub show_progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pallet: Pallet::default(),
            max_stack_height: STANDARD_HEIGHT_LIMIT,
            show_progress: true,
        }
    }
}

impl BatchConfig {
    /// Creates a new batch configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pallet configuration.
    pub fn with_pallet(mut self, pallet: Pallet) -> Self {
        self.pallet = pallet;
        self
    }

    /// Sets the height limit.
    pub fn with_max_stack_height(mut self, height: f64) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Enables or disables per-row progress output.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Plans every row of a catalog without aborting on rejections.
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    /// Creates a new batch runner.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Plans a stack for every material, collecting per-row outcomes.
    ///
    /// Rows the planner rejects become error rows in the report; the batch
    /// always runs to the end.
    pub fn run(&self, materials: &[Material]) -> BatchReport {
        let planner = StackPlanner::new(self.config.pallet.clone());
        let mut report = BatchReport::new(planner.pallet(), self.config.max_stack_height);

        if self.config.show_progress {
            println!(
                "\nPlanning {} materials (pallet {}x{}, limit {} mm)",
                materials.len(),
                planner.pallet().length(),
                planner.pallet().width(),
                self.config.max_stack_height,
            );
        }

        for material in materials {
            let start = Instant::now();
            let outcome = planner.plan(material, self.config.max_stack_height);
            let time_ms = start.elapsed().as_millis() as u64;

            match outcome {
                Ok(plan) => {
                    if self.config.show_progress {
                        println!(
                            "  {} ... OK ({} boxes in {} layers)",
                            material.id(),
                            plan.total_boxes,
                            plan.total_layers,
                        );
                    }
                    report.add_row(StackReport::from_plan(&plan, time_ms));
                }
                Err(e) => {
                    if self.config.show_progress {
                        println!("  {} ... REJECTED: {}", material.id(), e);
                    }
                    report.add_row(StackReport::rejected(material, e.to_string(), time_ms));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> BatchConfig {
        BatchConfig::new().with_progress(false)
    }

    #[test]
    fn test_batch_run() {
        let materials = vec![
            Material::new("row-1", 400.0, 300.0, 200.0).with_name("Carton A"),
            Material::new("row-2", 350.0, 270.0, 180.0).with_name("Carton B"),
        ];

        let runner = BatchRunner::new(quiet_config());
        let report = runner.run(&materials);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.planned(), 2);
        assert_eq!(report.rows[0].total_boxes, 36);
        assert_eq!(report.rows[0].id, "row-1");
    }

    #[test]
    fn test_bad_rows_do_not_abort() {
        let materials = vec![
            Material::new("row-1", 400.0, 300.0, 200.0),
            Material::new("row-2", -5.0, 270.0, 180.0),
            Material::new("row-3", 350.0, 270.0, 180.0),
        ];

        let runner = BatchRunner::new(quiet_config());
        let report = runner.run(&materials);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.planned(), 2);
        assert_eq!(report.rejected(), 1);
        assert!(report.rows[1].error.is_some());
        assert_eq!(report.rows[2].id, "row-3");
    }

    #[test]
    fn test_custom_pallet_and_limit() {
        let materials = vec![Material::new("row-1", 400.0, 300.0, 200.0)];

        let config = quiet_config()
            .with_pallet(Pallet::new(1200.0, 800.0).with_base_height(120.0))
            .with_max_stack_height(LOW_HEIGHT_LIMIT);
        let report = BatchRunner::new(config).run(&materials);

        assert_eq!(report.pallet_length, 1200.0);
        assert_eq!(report.max_stack_height, 700.0);
        assert_eq!(report.pallet_base_height, 120.0);
        assert!(!report.include_base_in_height);
        // 8 per layer, 3 layers under the low limit
        assert_eq!(report.rows[0].boxes_per_layer, 8);
        assert_eq!(report.rows[0].total_layers, 3);
    }

    #[test]
    fn test_degenerate_rows_are_planned_not_rejected() {
        let materials = vec![Material::new("row-1", 2000.0, 1500.0, 200.0)];

        let report = BatchRunner::new(quiet_config()).run(&materials);

        assert_eq!(report.planned(), 1);
        assert_eq!(report.rows[0].total_boxes, 0);
        assert_eq!(report.rows[0].advisories.len(), 1);
    }
}
