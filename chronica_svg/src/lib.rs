// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface for Chronica scenes.
//!
//! Walks a scene's draw commands and emits an SVG document. Geometry comes
//! straight from the shared placement pass, so the exported document is
//! pixel-identical to the live view at scale 1 — that is the whole point
//! of routing export through the same pipeline.
//!
//! This is inspection-grade output: positions and sizes are exact, while
//! styling (colors, fonts, arrowheads) is a plain default hosts are
//! expected to restyle via the emitted class names.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use chronica_scene::{DrawCmd, Scene};

/// Renders a scene as a standalone SVG document.
///
/// The scene's own pixel dimensions become the SVG `width`/`height` and
/// `viewBox`. Use [`chronica_scene::export_layout`] to produce a scene at
/// an export resolution independent of the live view.
#[must_use]
pub fn scene_to_svg(scene: &Scene) -> String {
    let width = scene.view.pixel_width;
    let height = scene.view.pixel_height;

    let mut out = String::new();
    // Writing to a String cannot fail; errors are ignored wholesale.
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );

    for cmd in scene.draw_commands() {
        let _ = match cmd {
            DrawCmd::GridLine { line, major } => {
                let class = if major { "grid major" } else { "grid" };
                writeln!(
                    out,
                    "  <line class=\"{class}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
                     stroke=\"#ccc\"/>",
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                )
            }
            DrawCmd::TickLabel { at, year } => writeln!(
                out,
                "  <text class=\"tick\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{year}</text>",
                at.x, at.y
            ),
            DrawCmd::LaneRule { line } => writeln!(
                out,
                "  <line class=\"lane-rule\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
                 stroke=\"#888\"/>",
                line.p0.x, line.p0.y, line.p1.x, line.p1.y
            ),
            DrawCmd::LaneLabel { at, text } => writeln!(
                out,
                "  <text class=\"lane-label\" x=\"{}\" y=\"{}\">{}</text>",
                at.x,
                at.y + 14.0,
                escape(&text)
            ),
            DrawCmd::Relation { from, to, label } => {
                let _ = writeln!(
                    out,
                    "  <line class=\"relation\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
                     stroke=\"#555\"/>",
                    from.x, from.y, to.x, to.y
                );
                if let Some(text) = label {
                    let mid = from.midpoint(to);
                    writeln!(
                        out,
                        "  <text class=\"relation-label\" x=\"{}\" y=\"{}\" \
                         text-anchor=\"middle\">{}</text>",
                        mid.x,
                        mid.y,
                        escape(&text)
                    )
                } else {
                    Ok(())
                }
            }
            DrawCmd::ItemBox { rect, .. } => writeln!(
                out,
                "  <rect class=\"item\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                 fill=\"#fff\" stroke=\"#333\"/>",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            ),
            DrawCmd::ItemLabel { at, text, .. } => writeln!(
                out,
                "  <text class=\"item-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
                 dominant-baseline=\"middle\">{}</text>",
                at.x,
                at.y,
                escape(&text)
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

/// Escapes text content for XML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chronica_model::{Entity, EntityId, Lane, LaneId};
    use chronica_scene::{SceneInput, SceneParams, estimate_label_size, export_layout};

    use super::{escape, scene_to_svg};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a & b < \"c\">"), "a &amp; b &lt; &quot;c&quot;&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn document_contains_scene_geometry() {
        let lanes = [Lane {
            id: LaneId(1),
            name: "Rationalists & co".into(),
            declared_start: Some(1600.0),
            declared_end: Some(1700.0),
        }];
        let entities = [Entity {
            id: EntityId(1),
            lane: LaneId(1),
            label: "Spinoza".into(),
            primary_year: Some(1632.0),
            secondary_year: Some(1677.0),
            override_year: None,
        }];
        let input = SceneInput {
            lanes: &lanes,
            entities: &entities,
            events: &[],
            relations: &[],
        };
        let scene = export_layout(&input, 640.0, 200.0, &SceneParams::default(), estimate_label_size);
        let svg = scene_to_svg(&scene);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("viewBox=\"0 0 640 200\""));
        assert!(svg.contains("class=\"lane-rule\""));
        assert!(svg.contains("Spinoza"));
        // Escaped lane name, not raw markup.
        assert!(svg.contains("Rationalists &amp; co"));
        assert!(!svg.contains("Rationalists & co<"));
    }
}
