//! U-Stacking CLI

use clap::{Parser, Subcommand, ValueEnum};
use instant::Instant;
use std::path::PathBuf;
use u_stacking_cli::{
    BatchConfig, BatchRunner, CatalogLoader, StackReport, LOW_HEIGHT_LIMIT, STANDARD_HEIGHT_LIMIT,
};
use u_stacking_core::{Material, Pallet, StackPlan, StackPlanner};
use u_stacking_render::{render_isometric, render_layout, RenderConfig};

#[derive(Parser)]
#[command(name = "u-stacking")]
#[command(about = "Pallet stacking planner for rectangular cartons")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a stack for a single carton size
    Plan {
        /// Carton length in mm
        #[arg(short, long)]
        length: f64,

        /// Carton width in mm
        #[arg(short, long)]
        width: f64,

        /// Carton height in mm
        #[arg(long)]
        height: f64,

        /// Display name for the carton
        #[arg(short, long)]
        name: Option<String>,

        /// Height limit preset
        #[arg(short, long, value_enum, default_value = "standard")]
        preset: PresetArg,

        /// Height limit in mm (overrides the preset)
        #[arg(short, long)]
        max_height: Option<f64>,

        /// Pallet length in mm
        #[arg(long, default_value = "1180")]
        pallet_length: f64,

        /// Pallet width in mm
        #[arg(long, default_value = "980")]
        pallet_width: f64,

        /// Pallet base height in mm
        #[arg(long, default_value = "140")]
        base_height: f64,

        /// Count the pallet base toward the height limit
        #[arg(long)]
        include_base: bool,

        /// Output file for the plan (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output directory for SVG views of the plan
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },

    /// Plan stacks for every row of a catalog file (CSV, TSV or JSON)
    Batch {
        /// Path to the catalog file
        file: PathBuf,

        /// Height limit preset
        #[arg(short, long, value_enum, default_value = "standard")]
        preset: PresetArg,

        /// Height limit in mm (overrides the preset)
        #[arg(short, long)]
        max_height: Option<f64>,

        /// Pallet length in mm
        #[arg(long, default_value = "1180")]
        pallet_length: f64,

        /// Pallet width in mm
        #[arg(long, default_value = "980")]
        pallet_width: f64,

        /// Pallet base height in mm
        #[arg(long, default_value = "140")]
        base_height: f64,

        /// Count the pallet base toward the height limit
        #[arg(long)]
        include_base: bool,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the height limit presets
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Air freight / standard racking (1350 mm)
    Standard,
    /// Loose cargo / height-restricted storage (700 mm)
    Low,
}

impl PresetArg {
    fn limit(self) -> f64 {
        match self {
            PresetArg::Standard => STANDARD_HEIGHT_LIMIT,
            PresetArg::Low => LOW_HEIGHT_LIMIT,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            length,
            width,
            height,
            name,
            preset,
            max_height,
            pallet_length,
            pallet_width,
            base_height,
            include_base,
            output,
            svg_dir,
        } => {
            let pallet = Pallet::new(pallet_length, pallet_width)
                .with_base_height(base_height)
                .with_base_in_height(include_base);
            let limit = max_height.unwrap_or_else(|| preset.limit());

            let mut material = Material::new("item-1", length, width, height);
            if let Some(name) = name {
                material = material.with_name(name);
            }

            let planner = StackPlanner::new(pallet.clone());

            let start = Instant::now();
            let plan = planner.plan(&material, limit)?;
            let time_ms = start.elapsed().as_millis() as u64;

            print_plan(&plan, &pallet, limit);

            if let Some(path) = output {
                let report = StackReport::from_plan(&plan, time_ms);
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                println!("Plan saved to: {}", path.display());
            }

            if let Some(dir) = svg_dir {
                std::fs::create_dir_all(&dir)?;
                let config = RenderConfig::new();

                let odd = render_layout(&plan.odd_layer, &pallet, &config)?;
                std::fs::write(dir.join("layer-odd.svg"), odd)?;

                if let Some(even) = &plan.even_layer {
                    let svg = render_layout(even, &pallet, &config)?;
                    std::fs::write(dir.join("layer-even.svg"), svg)?;
                }

                let iso = render_isometric(&plan, &pallet, &config)?;
                std::fs::write(dir.join("stack.svg"), iso)?;

                println!("SVG views saved to: {}", dir.display());
            }
        }

        Commands::Batch {
            file,
            preset,
            max_height,
            pallet_length,
            pallet_width,
            base_height,
            include_base,
            output,
            csv,
        } => {
            let materials = CatalogLoader::new().load_file(&file)?;
            println!(
                "Loaded {} materials from {}",
                materials.len(),
                file.display()
            );

            let pallet = Pallet::new(pallet_length, pallet_width)
                .with_base_height(base_height)
                .with_base_in_height(include_base);
            let limit = max_height.unwrap_or_else(|| preset.limit());

            let config = BatchConfig::new()
                .with_pallet(pallet)
                .with_max_stack_height(limit);
            let report = BatchRunner::new(config).run(&materials);

            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }

            if let Some(path) = csv {
                report.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Presets => {
            println!("Height limit presets:");
            println!(
                "  standard  {} mm  (air freight, standard racking)",
                STANDARD_HEIGHT_LIMIT
            );
            println!(
                "  low       {} mm  (loose cargo, height-restricted storage)",
                LOW_HEIGHT_LIMIT
            );
            println!("\nUse 'u-stacking plan -p <PRESET>' or override with -m <MM>");
        }
    }

    Ok(())
}

fn print_plan(plan: &StackPlan, pallet: &Pallet, limit: f64) {
    println!("\n{:=<100}", "");
    println!("STACK PLAN  {}", plan.material.name());
    println!("{:=<100}", "");
    println!(
        "Box:           {} x {} x {} mm",
        plan.material.length(),
        plan.material.width(),
        plan.material.height()
    );
    print!(
        "Pallet:        {} x {} mm, base {} mm",
        pallet.length(),
        pallet.width(),
        pallet.base_height()
    );
    if pallet.includes_base_in_height() {
        println!(" (counted toward the limit)");
    } else {
        println!();
    }
    println!(
        "Pattern:       {} ({} boxes per layer)",
        plan.odd_layer.pattern,
        plan.boxes_per_layer()
    );
    if let Some(even) = &plan.even_layer {
        println!("Even layers:   {} (interlocked)", even.pattern);
    }
    println!(
        "Layers:        {} x {} mm = {} mm (limit {} mm)",
        plan.total_layers, plan.layer_height, plan.stack_height, limit
    );
    println!("Total boxes:   {}", plan.total_boxes);
    println!("Utilization:   {}", plan.utilization_percent());

    if !plan.advisories.is_empty() {
        println!("{:-<100}", "");
        for advisory in &plan.advisories {
            println!("Warning: {}", advisory);
        }
    }
    println!("{:=<100}", "");
}
