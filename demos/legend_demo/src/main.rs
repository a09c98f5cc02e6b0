//! Lays out a chart legend and prints what the surface would draw.
//!
//! ```text
//! legend_demo [horizontal|vertical] [max-extent] [start|middle|end]
//! RUST_LOG=debug legend_demo vertical 60 middle
//! ```

use std::time::Instant;

use anyhow::Context;
use trellis_core::prelude::*;
use trellis_devtools::{Inspector, Metrics};
use trellis_layout::{FlowPanel, Icon, Label};

const SERIES: &[(&str, &str)] = &[
    ("Revenue", "#E6194B"),
    ("Operating costs", "#3CB44B"),
    ("Margin", "#4363D8"),
    ("Headcount", "#F58231"),
    ("Forecast", "#911EB4"),
];

fn config_from_args() -> anyhow::Result<FlowConfig> {
    let mut args = std::env::args().skip(1);
    let orientation: Orientation = match args.next() {
        Some(s) => s.parse()?,
        None => Orientation::Horizontal,
    };
    let max_extent = args
        .next()
        .map(|s| s.parse::<f64>().with_context(|| format!("max extent `{s}`")))
        .transpose()?
        .unwrap_or(240.0);
    let alignment: Alignment = match args.next() {
        Some(s) => s.parse()?,
        None => Alignment::Middle,
    };

    let config = FlowConfig::new()
        .orientation(orientation)
        .padding(Padding::all(6.0))
        .horizontal_alignment(alignment)
        .vertical_alignment(alignment);
    Ok(match orientation {
        Orientation::Horizontal => config.max_width(max_extent),
        Orientation::Vertical => config.max_height(max_extent),
    })
}

fn legend(config: FlowConfig) -> anyhow::Result<FlowPanel> {
    let text = PaintHandle::solid(Color::from_hex("#222222"));
    let mut legend = FlowPanel::with_config(config)?.background(PaintHandle::solid(Color::WHITE));
    for (name, swatch) in SERIES {
        let entry = FlowPanel::new()
            .vertical_alignment(Alignment::Middle)
            .padding(Padding::symmetric(4.0, 2.0))
            .push(Icon::new(
                Size::new(10.0, 10.0),
                PaintHandle::solid(Color::from_hex(swatch)),
            ))
            .push(
                Label::new(*name)
                    .font_size(12.0)
                    .padding(Padding::new(4.0, 0.0, 0.0, 0.0))
                    .paint(text.clone()),
            );
        legend.add_child(entry);
    }
    Ok(legend)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config_from_args()?;
    log::info!(
        "legend: {} flow, limit {}",
        config.orientation,
        config.main_axis_limit()
    );

    let mut legend = legend(config)?;
    legend.set_position(Vec2::new(16.0, 16.0));

    let mut surface = RecordingSurface::new();
    let started = Instant::now();
    let size = {
        let mut ctx = LayoutContext::new(&mut surface, Size::new(800.0, 600.0));
        let size = legend.measure(&mut ctx);
        legend.on_attach(&mut ctx);
        size
    };

    let mut inspector = Inspector::new();
    inspector.metrics = Some(Metrics {
        layout_ms: started.elapsed().as_secs_f64() * 1_000.0,
        panels: 1 + legend.len(),
    });
    inspector.enabled = true;
    inspector.log_report(&surface);

    println!("legend size: {} x {}", size.width, size.height);
    println!("{}", inspector.report(&surface));
    Ok(())
}
