//! Isometric stack views as SVG documents.
//!
//! Draws the whole stack in a fixed isometric projection: the pallet plinth,
//! then every layer bottom-up with boxes sorted back-to-front (painter's
//! algorithm). Even layers use the alternate pattern when the plan
//! interlocks, so the interlocking is visible in the output.

use std::f64::consts::FRAC_PI_6;
use std::fmt::Write;

use u_stacking_core::{Error, Pallet, Placement, Result, StackPlan};

use crate::config::RenderConfig;

const BOX_TOP: &str = "#60a5fa";
const BOX_RIGHT: &str = "#3b82f6";
const BOX_LEFT: &str = "#93c5fd";
const BOX_STROKE: &str = "#1e40af";
const PALLET_TOP: &str = "#e5e7eb";
const PALLET_RIGHT: &str = "#9ca3af";
const PALLET_LEFT: &str = "#d1d5db";
const PALLET_STROKE: &str = "#6b7280";

/// Fixed isometric camera: x runs down-right, y down-left, z up.
///
/// `iso_x = (x - y) * cos(30deg) * scale + origin_x`
/// `iso_y = ((x + y) * sin(30deg) - z) * scale + origin_y`
struct Projection {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Projection {
    /// Fits the projected extents of the scene into the canvas with a 10%
    /// border. The scene spans `[-width, length]` horizontally before the
    /// cosine, and from the stack top down to the plinth bottom vertically.
    fn fit(pallet: &Pallet, stack_height: f64, config: &RenderConfig) -> Self {
        let span = pallet.length() + pallet.width();
        let h_span = span * FRAC_PI_6.cos();
        let v_span = span * 0.5 + stack_height + pallet.base_height();

        let scale =
            (config.canvas_width / h_span).min(config.canvas_height / v_span) * 0.9;

        // Center of the projected ranges, mapped to the canvas center
        let h_mid = (pallet.length() - pallet.width()) * FRAC_PI_6.cos() / 2.0;
        let v_mid = (span * 0.5 + pallet.base_height() - stack_height) / 2.0;

        Self {
            scale,
            origin_x: config.canvas_width / 2.0 - h_mid * scale,
            origin_y: config.canvas_height / 2.0 - v_mid * scale,
        }
    }

    fn point(&self, x: f64, y: f64, z: f64) -> (f64, f64) {
        let iso_x = (x - y) * FRAC_PI_6.cos() * self.scale + self.origin_x;
        let iso_y = ((x + y) * FRAC_PI_6.sin() - z) * self.scale + self.origin_y;
        (iso_x, iso_y)
    }
}

/// Renders the full stack as an isometric SVG document.
///
/// The pallet should be the configuration the plan was computed with; its
/// footprint and base height give the plinth, the plan gives the layers.
pub fn render_isometric(
    plan: &StackPlan,
    pallet: &Pallet,
    config: &RenderConfig,
) -> Result<String> {
    config.validate()?;
    pallet.validate()?;

    log::debug!(
        "Rendering isometric stack: {} layers of {} boxes",
        plan.total_layers,
        plan.boxes_per_layer(),
    );

    let mut svg = String::new();
    write_isometric(&mut svg, plan, pallet, config)
        .map_err(|_| Error::Internal("SVG formatting failed".to_string()))?;
    Ok(svg)
}

fn write_isometric(
    svg: &mut String,
    plan: &StackPlan,
    pallet: &Pallet,
    config: &RenderConfig,
) -> std::fmt::Result {
    let proj = Projection::fit(pallet, plan.stack_height, config);

    writeln!(
        svg,
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        config.canvas_width, config.canvas_height, config.canvas_width, config.canvas_height,
    )?;

    write_plinth(svg, &proj, pallet)?;

    // Layers bottom-up; within a layer back-to-front, so nearer boxes paint
    // over farther ones
    for layer in 1..=plan.total_layers {
        let layout = plan.layout_for_layer(layer);
        let z = (layer - 1) as f64 * plan.layer_height;

        let mut order: Vec<&Placement> = layout.placements.iter().collect();
        order.sort_by(|a, b| {
            (a.position.x + a.position.y)
                .partial_cmp(&(b.position.x + b.position.y))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for placement in order {
            write_box(svg, &proj, placement, z, plan.layer_height)?;
        }
    }

    writeln!(svg, "</svg>")?;
    Ok(())
}

/// Draws the pallet base from the deck at z = 0 down to the floor.
fn write_plinth(svg: &mut String, proj: &Projection, pallet: &Pallet) -> std::fmt::Result {
    let l = pallet.length();
    let w = pallet.width();
    let floor = -pallet.base_height();

    write_face(
        svg,
        proj,
        [(0.0, 0.0, 0.0), (l, 0.0, 0.0), (l, w, 0.0), (0.0, w, 0.0)],
        PALLET_TOP,
        PALLET_STROKE,
    )?;

    if pallet.base_height() > 0.0 {
        write_face(
            svg,
            proj,
            [(l, 0.0, 0.0), (l, w, 0.0), (l, w, floor), (l, 0.0, floor)],
            PALLET_RIGHT,
            PALLET_STROKE,
        )?;
        write_face(
            svg,
            proj,
            [(0.0, w, 0.0), (l, w, 0.0), (l, w, floor), (0.0, w, floor)],
            PALLET_LEFT,
            PALLET_STROKE,
        )?;
    }

    Ok(())
}

/// Draws one box as its three visible faces: top, then the two sides facing
/// the camera (the planes at max x and max y).
fn write_box(
    svg: &mut String,
    proj: &Projection,
    placement: &Placement,
    z_bottom: f64,
    height: f64,
) -> std::fmt::Result {
    let x = placement.position.x;
    let y = placement.position.y;
    let l = placement.length;
    let w = placement.width;
    let z_top = z_bottom + height;

    write_face(
        svg,
        proj,
        [(x, y, z_top), (x + l, y, z_top), (x + l, y + w, z_top), (x, y + w, z_top)],
        BOX_TOP,
        BOX_STROKE,
    )?;
    write_face(
        svg,
        proj,
        [
            (x + l, y, z_top),
            (x + l, y + w, z_top),
            (x + l, y + w, z_bottom),
            (x + l, y, z_bottom),
        ],
        BOX_RIGHT,
        BOX_STROKE,
    )?;
    write_face(
        svg,
        proj,
        [
            (x, y + w, z_top),
            (x + l, y + w, z_top),
            (x + l, y + w, z_bottom),
            (x, y + w, z_bottom),
        ],
        BOX_LEFT,
        BOX_STROKE,
    )?;

    Ok(())
}

fn write_face(
    svg: &mut String,
    proj: &Projection,
    corners: [(f64, f64, f64); 4],
    fill: &str,
    stroke: &str,
) -> std::fmt::Result {
    let mut points = String::new();
    for (i, &(x, y, z)) in corners.iter().enumerate() {
        let (px, py) = proj.point(x, y, z);
        if i > 0 {
            points.push(' ');
        }
        write!(points, "{:.2},{:.2}", px, py)?;
    }

    writeln!(
        svg,
        r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="0.5" stroke-linejoin="round"/>"#,
        points, fill, stroke,
    )
}
