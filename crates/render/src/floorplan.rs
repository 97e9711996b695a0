//! Single-layer floor plans as SVG documents.
//!
//! The floor plan shows one layer from above: the footprint rectangle, one
//! rect per placed box and optional 1-based box numbers. The SVG is built
//! with plain string formatting, no drawing dependency.

use std::fmt::Write;

use u_stacking_core::{Error, LayerLayout, Pallet, Result, StackPlan};

use crate::config::RenderConfig;

/// Boxes narrower than this in either axis are left unnumbered; the label
/// would not fit inside the rect.
const LABEL_MIN_LENGTH: f64 = 100.0;
const LABEL_MIN_WIDTH: f64 = 60.0;

const FOOTPRINT_FILL: &str = "#e5e7eb";
const FOOTPRINT_STROKE: &str = "#9ca3af";
const BOX_FILL: &str = "#60a5fa";
const BOX_STROKE: &str = "#1e40af";
const CAPTION_FILL: &str = "#6b7280";

/// Renders the floor plan of one layer of a stack plan.
///
/// `layer` is 1-based from the deck; even layers show the alternate pattern
/// when the plan interlocks. Requesting a layer outside `1..=total_layers`
/// fails with a configuration error.
pub fn render_floor_plan(
    plan: &StackPlan,
    pallet: &Pallet,
    layer: usize,
    config: &RenderConfig,
) -> Result<String> {
    if layer == 0 || layer > plan.total_layers {
        return Err(Error::ConfigError(format!(
            "Layer {} is out of range; the plan has {} layers",
            layer, plan.total_layers
        )));
    }

    render_layout(plan.layout_for_layer(layer), pallet, config)
}

/// Renders one layer layout as a standalone floor plan.
pub fn render_layout(
    layout: &LayerLayout,
    pallet: &Pallet,
    config: &RenderConfig,
) -> Result<String> {
    config.validate()?;

    log::debug!(
        "Rendering {} floor plan: {} boxes on {}x{}",
        layout.pattern,
        layout.total_boxes,
        pallet.length(),
        pallet.width(),
    );

    let mut svg = String::new();
    write_layout(&mut svg, layout, pallet, config)
        .map_err(|_| Error::Internal("SVG formatting failed".to_string()))?;
    Ok(svg)
}

fn write_layout(
    svg: &mut String,
    layout: &LayerLayout,
    pallet: &Pallet,
    config: &RenderConfig,
) -> std::fmt::Result {
    let length = pallet.length();
    let width = pallet.width();
    let margin = config.margin;

    writeln!(
        svg,
        r#"<svg width="{}" height="{}" viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        (length + 2.0 * margin) * config.scale,
        (width + 2.0 * margin) * config.scale,
        -margin,
        -margin,
        length + 2.0 * margin,
        width + 2.0 * margin,
    )?;

    // Footprint with dimension captions on the outside edges
    writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        length, width, FOOTPRINT_FILL, FOOTPRINT_STROKE,
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="-5" text-anchor="middle" font-size="24" fill="{}">{}mm</text>"#,
        length / 2.0,
        CAPTION_FILL,
        length,
    )?;
    writeln!(
        svg,
        r#"<text x="-5" y="{}" text-anchor="middle" font-size="24" fill="{}" transform="rotate(-90, -5, {})">{}mm</text>"#,
        width / 2.0,
        CAPTION_FILL,
        width / 2.0,
        width,
    )?;

    let class = if layout.pattern.is_rotated() {
        "box rotated"
    } else {
        "box"
    };
    for (idx, placement) in layout.placements.iter().enumerate() {
        writeln!(
            svg,
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2" opacity="0.9"/>"#,
            class,
            placement.position.x,
            placement.position.y,
            placement.length,
            placement.width,
            BOX_FILL,
            BOX_STROKE,
        )?;

        if config.show_labels
            && placement.length > LABEL_MIN_LENGTH
            && placement.width > LABEL_MIN_WIDTH
        {
            let center = placement.center();
            writeln!(
                svg,
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="20" fill="white">{}</text>"#,
                center.x,
                center.y,
                idx + 1,
            )?;
        }
    }

    writeln!(svg, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_stacking_core::{evaluate_layer, Material, StackPlanner};

    fn reference_plan() -> (StackPlan, Pallet) {
        let material = Material::new("M1", 400.0, 300.0, 200.0);
        let planner = StackPlanner::default_config();
        let plan = planner.plan(&material, 1350.0).unwrap();
        (plan, planner.pallet().clone())
    }

    #[test]
    fn test_floor_plan_structure() {
        let (plan, pallet) = reference_plan();
        let svg = render_floor_plan(&plan, &pallet, 1, &RenderConfig::default()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Footprint plus one rect per box
        assert_eq!(svg.matches("<rect").count(), 1 + 6);
        assert!(svg.contains(r#"viewBox="-20 -20 1220 1020""#));
        assert!(svg.contains("1180mm"));
        assert!(svg.contains("980mm"));
    }

    #[test]
    fn test_even_layer_shows_rotated_pattern() {
        let (plan, pallet) = reference_plan();
        let config = RenderConfig::default();

        let odd = render_floor_plan(&plan, &pallet, 1, &config).unwrap();
        let even = render_floor_plan(&plan, &pallet, 2, &config).unwrap();

        // Odd layers place 400x300, even layers 300x400
        assert!(odd.contains(r#"width="400" height="300""#));
        assert!(!odd.contains("rotated"));
        assert!(even.contains(r#"width="300" height="400""#));
        assert!(even.contains(r#"class="box rotated""#));
    }

    #[test]
    fn test_labels_numbered_from_one() {
        let (plan, pallet) = reference_plan();
        let svg = render_floor_plan(&plan, &pallet, 1, &RenderConfig::default()).unwrap();

        assert!(svg.contains(">1</text>"));
        assert!(svg.contains(">6</text>"));
        assert!(!svg.contains(">7</text>"));
    }

    #[test]
    fn test_small_boxes_unlabeled() {
        let layout = evaluate_layer(90.0, 55.0, 1180.0, 980.0, false);
        let pallet = Pallet::default();
        let svg = render_layout(&layout, &pallet, &RenderConfig::default()).unwrap();

        assert!(svg.matches("<rect").count() > 1);
        assert!(!svg.contains(">1</text>"));
    }

    #[test]
    fn test_labels_disabled() {
        let (plan, pallet) = reference_plan();
        let config = RenderConfig::default().with_labels(false);
        let svg = render_floor_plan(&plan, &pallet, 1, &config).unwrap();

        assert!(!svg.contains(">1</text>"));
    }

    #[test]
    fn test_layer_out_of_range() {
        let (plan, pallet) = reference_plan();
        let config = RenderConfig::default();

        assert!(render_floor_plan(&plan, &pallet, 0, &config).is_err());
        assert!(render_floor_plan(&plan, &pallet, 7, &config).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (plan, pallet) = reference_plan();
        let config = RenderConfig::default().with_scale(0.0);

        assert!(render_floor_plan(&plan, &pallet, 1, &config).is_err());
    }

    #[test]
    fn test_empty_layout_renders_footprint_only() {
        let layout = evaluate_layer(2000.0, 1500.0, 1180.0, 980.0, false);
        let pallet = Pallet::default();
        let svg = render_layout(&layout, &pallet, &RenderConfig::default()).unwrap();

        assert_eq!(svg.matches("<rect").count(), 1);
    }
}
