//! SVG renderings of the district chart shapes.
//!
//! Layout functions are pure and return geometry; the components only draw it.

use std::f64::consts::TAU;
use std::fmt::Write;

use dioxus::prelude::*;

use crate::core::format::{format_percent, format_si, format_tonnes};
use crate::data::{ChartData, ChartSpec, Slice, SunburstNode};
use crate::t;

const PALETTE: [&str; 11] = [
    "#2E7D32", "#66BB6A", "#A5D6A7", "#1B5E20", "#8BC34A", "#CDDC39", "#FBC02D", "#F57C00",
    "#6D4C41", "#26A69A", "#9E9E9E",
];

pub const PIE_HOLE: f64 = 0.4;
pub const BAR_FILL: &str = "#2E7D32";
const TICK_COUNT: usize = 5;

const PIE_SIZE: f64 = 420.0;
const BAR_WIDTH: f64 = 720.0;
const BAR_HEIGHT: f64 = 420.0;
const BAR_MARGIN_LEFT: f64 = 60.0;
const BAR_MARGIN_BOTTOM: f64 = 120.0;
const BAR_MARGIN_TOP: f64 = 20.0;

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Point on a circle; angle in radians, clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Annular sector between `inner` and `outer` radii. `inner == 0` gives a wedge.
pub fn arc_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    // A full turn would start and end on the same point and draw nothing.
    let end = start + (end - start).clamp(0.0, TAU - 1e-6);
    let large = if end - start > TAU / 2.0 { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);

    let mut d = String::new();
    let _ = write!(d, "M{x0:.2},{y0:.2}A{outer:.2},{outer:.2} 0 {large} 1 {x1:.2},{y1:.2}");
    if inner > 0.0 {
        let (x2, y2) = polar(cx, cy, inner, end);
        let (x3, y3) = polar(cx, cy, inner, start);
        let _ = write!(
            d,
            "L{x2:.2},{y2:.2}A{inner:.2},{inner:.2} 0 {large} 0 {x3:.2},{y3:.2}"
        );
    } else {
        let _ = write!(d, "L{cx:.2},{cy:.2}");
    }
    d.push('Z');
    d
}

/// Evenly spaced axis ticks from zero covering `max`, on a 1/2/5 × 10ⁿ step.
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    if !(max.is_finite() && max > 0.0) || count == 0 {
        return vec![0.0];
    }
    let raw = max / count as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude);
    let steps = (max / step).ceil() as usize;
    (0..=steps).map(|i| i as f64 * step).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub path: String,
    pub color: &'static str,
}

pub fn pie_layout(slices: &[Slice], size: f64) -> Vec<PieSegment> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let center = size / 2.0;
    let outer = size / 2.0 - 4.0;
    let inner = outer * PIE_HOLE;
    let mut angle = 0.0;
    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let fraction = slice.value / total;
            let start = angle;
            angle += fraction * TAU;
            PieSegment {
                label: slice.label.clone(),
                value: slice.value,
                fraction,
                path: arc_path(center, center, inner, outer, start, angle),
                color: color(i),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub bars: Vec<BarRect>,
    /// `(y, label)` for each horizontal grid line.
    pub ticks: Vec<(f64, String)>,
    pub baseline: f64,
}

pub fn bar_layout(slices: &[Slice], width: f64, height: f64) -> BarLayout {
    let plot_width = width - BAR_MARGIN_LEFT;
    let plot_height = height - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let baseline = BAR_MARGIN_TOP + plot_height;

    let max = slices.iter().map(|s| s.value).fold(0.0, f64::max);
    let ticks = nice_ticks(max, TICK_COUNT);
    let top = ticks.last().copied().filter(|t| *t > 0.0).unwrap_or(1.0);
    let scale = |value: f64| plot_height * value / top;

    let band = plot_width / slices.len().max(1) as f64;
    let bars = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let h = scale(slice.value.max(0.0));
            BarRect {
                label: slice.label.clone(),
                value: slice.value,
                x: BAR_MARGIN_LEFT + i as f64 * band + band * 0.1,
                y: baseline - h,
                width: band * 0.8,
                height: h,
            }
        })
        .collect();
    let ticks = ticks
        .into_iter()
        .map(|t| (baseline - scale(t), format_si(t)))
        .collect();

    BarLayout {
        bars,
        ticks,
        baseline,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunburstArc {
    pub label: String,
    pub value: f64,
    pub path: String,
    pub color: &'static str,
}

/// Centre disc for the root, a full ring for the state, then the district ring.
pub fn sunburst_layout(nodes: &[SunburstNode], size: f64) -> Vec<SunburstArc> {
    let Some(root) = nodes.first() else {
        return Vec::new();
    };
    let center = size / 2.0;
    let radius = size / 2.0 - 4.0;
    let band = radius / 3.0;
    let mut arcs = vec![SunburstArc {
        label: root.label.clone(),
        value: root.value,
        path: arc_path(center, center, 0.0, band, 0.0, TAU),
        color: "#F1F8E9",
    }];
    if root.value <= 0.0 {
        return arcs;
    }

    for branch in nodes.iter().filter(|n| n.parent == root.label) {
        arcs.push(SunburstArc {
            label: branch.label.clone(),
            value: branch.value,
            path: arc_path(center, center, band, 2.0 * band, 0.0, TAU),
            color: color(0),
        });
        let mut angle = 0.0;
        for (i, leaf) in nodes.iter().filter(|n| n.parent == branch.label).enumerate() {
            let start = angle;
            angle += leaf.value / root.value * TAU;
            arcs.push(SunburstArc {
                label: leaf.label.clone(),
                value: leaf.value,
                path: arc_path(center, center, 2.0 * band, radius, start, angle),
                color: color(i + 1),
            });
        }
    }
    arcs
}

#[component]
pub fn ChartView(spec: ChartSpec) -> Element {
    let ChartSpec { title, data, .. } = spec;
    let body = match data {
        ChartData::Pie(slices) => rsx! { PieChart { slices } },
        ChartData::Bar(slices) => rsx! { BarChart { slices } },
        ChartData::Sunburst(nodes) => rsx! { SunburstChart { nodes } },
    };
    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{title}" }
            {body}
        }
    }
}

#[component]
fn PieChart(slices: Vec<Slice>) -> Element {
    let segments = pie_layout(&slices, PIE_SIZE);
    if segments.is_empty() {
        return rsx! { p { class: "chart__empty", {t!("crop-data-no-production")} } };
    }
    rsx! {
        div { class: "chart__pie",
            svg {
                view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                role: "img",
                for segment in segments.iter() {
                    path {
                        key: "{segment.label}",
                        d: "{segment.path}",
                        fill: segment.color,
                        stroke: "#fff",
                        title { "{segment.label}: {format_tonnes(segment.value)}" }
                    }
                }
            }
            ul { class: "chart__legend",
                for segment in segments.iter() {
                    li { key: "{segment.label}",
                        span { class: "chart__swatch", style: "background:{segment.color}" }
                        "{segment.label} ({format_percent(segment.fraction)})"
                    }
                }
            }
        }
    }
}

#[component]
fn BarChart(slices: Vec<Slice>) -> Element {
    let layout = bar_layout(&slices, BAR_WIDTH, BAR_HEIGHT);
    rsx! {
        svg {
            class: "chart__bar",
            view_box: "0 0 {BAR_WIDTH} {BAR_HEIGHT}",
            role: "img",
            for (y, label) in layout.ticks.iter() {
                g { key: "{label}",
                    line {
                        x1: "{BAR_MARGIN_LEFT}",
                        x2: "{BAR_WIDTH}",
                        y1: "{y}",
                        y2: "{y}",
                        class: "chart__grid",
                    }
                    text {
                        x: "{BAR_MARGIN_LEFT - 6.0}",
                        y: "{y}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        class: "chart__tick",
                        "{label}"
                    }
                }
            }
            for bar in layout.bars.iter() {
                g { key: "{bar.label}",
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: BAR_FILL,
                        title { "{bar.label}: {format_tonnes(bar.value)}" }
                    }
                    text {
                        class: "chart__axis-label",
                        text_anchor: "end",
                        transform: "translate({bar.x + bar.width / 2.0},{layout.baseline + 8.0}) rotate(-45)",
                        "{bar.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn SunburstChart(nodes: Vec<SunburstNode>) -> Element {
    let arcs = sunburst_layout(&nodes, PIE_SIZE);
    rsx! {
        svg {
            class: "chart__sunburst",
            view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
            role: "img",
            for arc in arcs.iter() {
                path {
                    key: "{arc.label}",
                    d: "{arc.path}",
                    fill: arc.color,
                    stroke: "#fff",
                    title { "{arc.label}: {format_tonnes(arc.value)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(values: &[f64]) -> Vec<Slice> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Slice {
                label: format!("D{i}"),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(nice_ticks(95.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(0.0, 5), vec![0.0]);
        let big = nice_ticks(1_234_567.0, 5);
        assert!(big.last().copied().unwrap() >= 1_234_567.0);
        assert_eq!(big[1], 500_000.0);
    }

    #[test]
    fn wedge_and_ring_paths() {
        let wedge = arc_path(10.0, 10.0, 0.0, 10.0, 0.0, TAU / 4.0);
        assert_eq!(wedge, "M10.00,0.00A10.00,10.00 0 0 1 20.00,10.00L10.00,10.00Z");
        let ring = arc_path(10.0, 10.0, 4.0, 10.0, 0.0, TAU);
        assert!(ring.contains(" 0 1 1 "));
        assert_eq!(ring.matches('A').count(), 2);
    }

    #[test]
    fn pie_fractions_sum_to_one_with_hole() {
        let segments = pie_layout(&slices(&[3.0, 1.0]), 200.0);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].fraction - 0.75).abs() < 1e-12);
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(pie_layout(&slices(&[0.0]), 200.0).is_empty());
    }

    #[test]
    fn bars_scale_against_top_tick() {
        let layout = bar_layout(&slices(&[100.0, 50.0]), BAR_WIDTH, BAR_HEIGHT);
        assert_eq!(layout.bars.len(), 2);
        let tall = &layout.bars[0];
        let short = &layout.bars[1];
        assert!((tall.height - 2.0 * short.height).abs() < 1e-9);
        assert!((tall.y + tall.height - layout.baseline).abs() < 1e-9);
        assert_eq!(layout.ticks.last().unwrap().1, "100");
    }

    #[test]
    fn sunburst_has_one_arc_per_node() {
        let nodes = crate::data::sunburst_nodes(
            &[
                crate::data::DistrictTotal {
                    district: "Patna".into(),
                    production: 3.0,
                },
                crate::data::DistrictTotal {
                    district: "Gaya".into(),
                    production: 1.0,
                },
            ],
            "Bihar",
        );
        let arcs = sunburst_layout(&nodes, 300.0);
        assert_eq!(arcs.len(), nodes.len());
        assert_eq!(arcs[0].label, "Total");
        assert_eq!(arcs[2].label, "Patna");
    }
}
