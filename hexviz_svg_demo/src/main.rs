// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexbin scatter demo for `hexviz_visual`.
//!
//! Drives the visual through a couple of update cycles plus a simulated
//! hover and click, dumping each resulting frame to an SVG file.

mod svg;

use hexviz_charts::Size;
use hexviz_core::{MarkDiff, MarkId, MarkPayload};
use hexviz_visual::{
    AxisSettings, BinSettings, CategoryColumn, DataView, HexbinScatter, Role, TooltipEvent,
    UpdateInput, ValueColumn, VisualSettings,
};
use kurbo::{Point, Rect};

/// Deterministic pseudo-random stream so repeat runs produce identical SVGs.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn sample_data(rows: usize) -> DataView {
    let mut rng = Lcg(0x5DEE_CE66);
    let regions = ["North", "South", "East", "West"];

    let mut categories = Vec::with_capacity(rows);
    let mut xs = Vec::with_capacity(rows);
    let mut ys = Vec::with_capacity(rows);
    let mut measures = Vec::with_capacity(rows);
    for row in 0..rows {
        categories.push(Some(format!("{} {}", regions[row % regions.len()], row)));
        let x = rng.next_f64() * 90.0 + rng.next_f64() * 10.0;
        let y = x * 8.0 + rng.next_f64() * 300.0 - 150.0;
        xs.push(Some(x));
        // Sprinkle a few nulls; the visual substitutes zero for them.
        ys.push((row % 17 != 13).then_some(y));
        measures.push(Some(rng.next_f64() * 5_000.0));
    }

    DataView {
        categories: Some(CategoryColumn {
            display_name: "Region".to_string(),
            values: categories,
        }),
        values: vec![
            (
                Role::X,
                ValueColumn {
                    display_name: "Price".to_string(),
                    format: "$0.00".to_string(),
                    values: xs,
                },
            ),
            (
                Role::Y,
                ValueColumn {
                    display_name: "Units".to_string(),
                    format: "#,0".to_string(),
                    values: ys,
                },
            ),
            (
                Role::Measure,
                ValueColumn {
                    display_name: "Revenue".to_string(),
                    format: "$#,0.00".to_string(),
                    values: measures,
                },
            ),
        ],
    }
}

/// Circle marks are the dots; everything else is hexes, labels, or axes.
fn entered_dot_ids(diffs: &[MarkDiff]) -> Vec<MarkId> {
    diffs
        .iter()
        .filter_map(|diff| match diff {
            MarkDiff::Enter { id, new, .. } if matches!(**new, MarkPayload::Circle(_)) => Some(*id),
            _ => None,
        })
        .collect()
}

fn write_svg(name: &str, scene: &svg::SvgScene) {
    let svg = scene.to_svg_string();
    std::fs::write(name, svg).expect("write svg");
    println!("wrote {name}");
}

fn main() {
    let data = sample_data(120);
    let viewport = Size::new(640.0, 480.0);
    let mut visual = HexbinScatter::new();
    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(Rect::new(0.0, 0.0, viewport.width, viewport.height));

    // First update: everything enters.
    let frame = visual
        .update(&UpdateInput {
            data: Some(&data),
            viewport,
            settings: VisualSettings::default(),
        })
        .expect("update");
    println!("update 1: visible={} diffs={}", frame.visible, frame.diffs.len());
    let dot_ids = entered_dot_ids(&frame.diffs);
    svg_scene.apply_diffs(&frame.diffs);
    write_svg("hexviz_scatter.svg", &svg_scene);

    // Hover a dot: the tooltip payload goes to the host, the radius effect
    // to the renderer.
    let hovered = dot_ids[0];
    let out = visual.pointer_enter(hovered, Point::new(200.0, 200.0));
    if let Some(TooltipEvent::Show { items, pos }) = &out.tooltip {
        println!("tooltip at ({}, {}):", pos.x, pos.y);
        for item in items {
            println!("  [{}] {}: {}", item.header, item.display_name, item.value);
        }
    }
    svg_scene.apply_effects(&out.effects);
    write_svg("hexviz_scatter_hover.svg", &svg_scene);

    // Click it: the selection dims every other dot.
    let out = visual.click(Some(hovered));
    println!("click: handled={} effects={}", out.handled, out.effects.len());
    svg_scene.apply_effects(&out.effects);
    let out = visual.pointer_leave();
    svg_scene.apply_effects(&out.effects);
    write_svg("hexviz_scatter_selected.svg", &svg_scene);

    // Second update: anchor the domains at the origin and drop the bin
    // labels. Retained dots move instead of re-entering, and the selection
    // persists across the re-render.
    let settings = VisualSettings {
        axes: AxisSettings {
            origin_zero_zero: true,
            ..AxisSettings::default()
        },
        bins: BinSettings {
            show_labels: false,
            ..BinSettings::default()
        },
        ..VisualSettings::default()
    };
    let frame = visual
        .update(&UpdateInput {
            data: Some(&data),
            viewport,
            settings,
        })
        .expect("update");
    let updates = frame
        .diffs
        .iter()
        .filter(|d| matches!(d, MarkDiff::Update { .. }))
        .count();
    let exits = frame
        .diffs
        .iter()
        .filter(|d| matches!(d, MarkDiff::Exit { .. }))
        .count();
    println!(
        "update 2: diffs={} (updates={} exits={})",
        frame.diffs.len(),
        updates,
        exits
    );
    svg_scene.apply_diffs(&frame.diffs);
    write_svg("hexviz_scatter_zero_origin.svg", &svg_scene);
}
