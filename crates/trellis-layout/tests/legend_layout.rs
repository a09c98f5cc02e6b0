use trellis_core::prelude::*;
use trellis_layout::{FlowPanel, Icon, Label};

fn entry(swatch: &str, text: &str, text_paint: &PaintHandle) -> FlowPanel {
    FlowPanel::new()
        .vertical_alignment(Alignment::Middle)
        .push(Icon::new(
            Size::new(8.0, 8.0),
            PaintHandle::solid(Color::from_hex(swatch)),
        ))
        .push(Label::new(text).font_size(10.0).paint(text_paint.clone()))
}

fn dump(surface: &RecordingSurface) -> String {
    surface
        .drawables()
        .iter()
        .map(|d| {
            format!(
                "{} z={} {}x{} at ({}, {})",
                d.color, d.z_index, d.bounds.w, d.bounds.h, d.bounds.x, d.bounds.y
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout(legend: &mut FlowPanel, surface: &mut RecordingSurface) -> Size {
    let mut ctx = LayoutContext::new(surface, Size::new(640.0, 480.0));
    let size = legend.measure(&mut ctx);
    legend.on_attach(&mut ctx);
    size
}

#[test]
fn legend_wraps_entries_and_reflows_after_removal() {
    let text = PaintHandle::solid(Color::from_hex("#333333"));
    let mut legend = FlowPanel::new()
        .max_width(80.0)
        .padding(Padding::all(2.0))
        .background(PaintHandle::solid(Color::WHITE));
    legend.set_position(Vec2::new(10.0, 10.0));

    legend.add_child(entry("#E6194B", "North", &text));
    let south = legend.add_child(entry("#3CB44B", "South", &text));
    legend.add_child(entry("#4363D8", "East", &text));

    let mut surface = RecordingSurface::new();
    assert_eq!(layout(&mut legend, &mut surface), Size::new(80.0, 28.0));
    insta::assert_snapshot!(dump(&surface), @r"
    #00000000 z=-1 38x12 at (12, 12)
    #00000000 z=-1 38x12 at (50, 12)
    #00000000 z=-1 32x12 at (12, 24)
    #FFFFFFFF z=-1 80x28 at (10, 10)
    #E6194BFF z=0 8x8 at (12, 14)
    #333333FF z=0 30x12 at (20, 12)
    #3CB44BFF z=0 8x8 at (50, 14)
    #333333FF z=0 30x12 at (58, 12)
    #4363D8FF z=0 8x8 at (12, 26)
    #333333FF z=0 24x12 at (20, 24)
    ");

    {
        let mut ctx = LayoutContext::new(&mut surface, Size::new(640.0, 480.0));
        legend
            .remove_child(&mut ctx, south)
            .expect("south entry is in the legend");
    }
    assert_eq!(layout(&mut legend, &mut surface), Size::new(74.0, 16.0));
    insta::assert_snapshot!(dump(&surface), @r"
    #00000000 z=-1 38x12 at (12, 12)
    #00000000 z=-1 32x12 at (50, 12)
    #FFFFFFFF z=-1 74x16 at (10, 10)
    #E6194BFF z=0 8x8 at (12, 14)
    #333333FF z=0 30x12 at (20, 12)
    #4363D8FF z=0 8x8 at (50, 14)
    #333333FF z=0 24x12 at (58, 12)
    ");

    let hit = surface.hit_test(Vec2::new(55.0, 15.0)).map(|d| d.color);
    assert_eq!(hit, Some(Color::from_hex("#4363D8")));
    // the shared text paint is registered once
    assert!(surface.is_registered(&text));
}

#[test]
fn vertical_legend_from_config() {
    let config = FlowConfig::new()
        .orientation("vertical".parse().unwrap())
        .max_height(40.0)
        .horizontal_alignment("end".parse().unwrap());
    let text = PaintHandle::solid(Color::BLACK);
    let mut legend = FlowPanel::with_config(config).unwrap();
    legend.add_child(entry("#E6194B", "North", &text));
    legend.add_child(entry("#3CB44B", "South", &text));
    legend.add_child(entry("#4363D8", "East", &text));

    let mut surface = RecordingSurface::new();
    // all three fit in one 36 tall column; the narrower entry is pushed right
    assert_eq!(layout(&mut legend, &mut surface), Size::new(38.0, 36.0));
    let xs: Vec<f64> = legend.children().map(|(_, c)| c.position().x).collect();
    assert_eq!(xs, vec![0.0, 0.0, 6.0]);

    legend.set_orientation(Orientation::Horizontal);
    assert_eq!(layout(&mut legend, &mut surface), Size::new(108.0, 12.0));
}

#[test]
fn legend_config_loads_from_json() {
    let config: FlowConfig = serde_json::from_str(
        r#"{ "max_width": 60.0, "padding": { "left": 1.0, "top": 1.0, "right": 1.0, "bottom": 1.0 } }"#,
    )
    .expect("valid legend config");
    let text = PaintHandle::solid(Color::BLACK);
    let mut legend = FlowPanel::with_config(config).expect("config validates");
    legend.add_child(entry("#E6194B", "North", &text));
    legend.add_child(entry("#3CB44B", "South", &text));

    let mut surface = RecordingSurface::new();
    // 1 + 38 + 38 crosses 60, so the second entry wraps
    assert_eq!(layout(&mut legend, &mut surface), Size::new(40.0, 26.0));

    let bad: FlowConfig = serde_json::from_str(r#"{ "max_height": -1.0 }"#).expect("parses");
    assert!(FlowPanel::with_config(bad).is_err());
}
