//! Minimal read-only SVG rendering of a stored petri-net model: circles
//! for places, squares for transitions, lines for arcs. The interactive
//! editor does its own richer rendering client-side; this exists so
//! `/img/{cid}.svg` serves a real image.

use serde_json::Value;
use std::fmt::Write as _;

const PLACE_RADIUS: f64 = 16.0;
const TRANSITION_SIZE: f64 = 30.0;
const MARGIN: f64 = 60.0;

/// Render model JSON to an SVG document. `None` when the bytes are not a
/// petri-net model document.
#[must_use]
pub fn render_model(json: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(json).ok()?;
    let places = value.get("places")?.as_object()?;
    let transitions = value.get("transitions")?.as_object()?;
    let empty = Vec::new();
    let arcs = value
        .get("arcs")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    let mut position = |node: &Value| -> Option<(f64, f64)> {
        let x = node.get("x")?.as_f64()?;
        let y = node.get("y")?.as_f64()?;
        max_x = max_x.max(x);
        max_y = max_y.max(y);
        Some((x, y))
    };

    let mut place_pos = Vec::new();
    for (label, node) in places {
        let (x, y) = position(node)?;
        let initial = node.get("initial").and_then(Value::as_i64).unwrap_or(0);
        place_pos.push((label.clone(), x, y, initial));
    }
    let mut transition_pos = Vec::new();
    for (label, node) in transitions {
        let (x, y) = position(node)?;
        transition_pos.push((label.clone(), x, y));
    }

    let lookup = |label: &str| -> Option<(f64, f64)> {
        place_pos
            .iter()
            .find(|(name, ..)| name.as_str() == label)
            .map(|&(_, x, y, _)| (x, y))
            .or_else(|| {
                transition_pos
                    .iter()
                    .find(|(name, ..)| name.as_str() == label)
                    .map(|&(_, x, y)| (x, y))
            })
    };

    let width = max_x + MARGIN;
    let height = max_y + MARGIN;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );

    // Arcs below nodes; an arc naming an unknown node is skipped, not fatal.
    for arc in arcs {
        let Some(source) = arc.get("source").and_then(Value::as_str) else {
            continue;
        };
        let Some(target) = arc.get("target").and_then(Value::as_str) else {
            continue;
        };
        let (Some((x1, y1)), Some((x2, y2))) = (lookup(source), lookup(target)) else {
            continue;
        };
        let inhibit = arc.get("inhibit").and_then(Value::as_bool).unwrap_or(false);
        let dash = if inhibit { " stroke-dasharray=\"4\"" } else { "" };
        let _ = writeln!(
            svg,
            "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"#555\"{dash}/>"
        );
    }

    for (label, x, y, initial) in &place_pos {
        let _ = writeln!(
            svg,
            "  <circle cx=\"{x}\" cy=\"{y}\" r=\"{PLACE_RADIUS}\" fill=\"#fff\" stroke=\"#000\"/>"
        );
        if *initial > 0 {
            let _ = writeln!(svg, "  <circle cx=\"{x}\" cy=\"{y}\" r=\"4\" fill=\"#000\"/>");
        }
        let ty = y + PLACE_RADIUS + 14.0;
        let _ = writeln!(
            svg,
            "  <text x=\"{x}\" y=\"{ty}\" font-size=\"11\" text-anchor=\"middle\">{label}</text>"
        );
    }

    for (label, x, y) in &transition_pos {
        let half = TRANSITION_SIZE / 2.0;
        let left = x - half;
        let top = y - half;
        let _ = writeln!(
            svg,
            "  <rect x=\"{left}\" y=\"{top}\" width=\"{TRANSITION_SIZE}\" height=\"{TRANSITION_SIZE}\" \
             fill=\"#fff\" stroke=\"#000\"/>"
        );
        let ty = y + half + 14.0;
        let _ = writeln!(
            svg,
            "  <text x=\"{x}\" y=\"{ty}\" font-size=\"11\" text-anchor=\"middle\">{label}</text>"
        );
    }

    svg.push_str("</svg>\n");
    Some(svg)
}
