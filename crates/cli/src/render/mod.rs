//! Renders the frozen catalogue into a complete SVG document.

mod projector;
pub mod style;
mod svg;

use std::collections::BTreeSet;

use transit_catalogue::catalogue::Catalogue;

use projector::SphereProjector;
use style::{Color, RenderSettings};
use svg::{Circle, Document, Element, Point, Polyline, Text};

/// Renders every non-empty bus and every stop it visits into one SVG
/// document, back-to-front: bus polylines, bus labels, stop circles, stop
/// labels, each pass in lexicographic order for deterministic output.
pub fn render_map(catalogue: &Catalogue, settings: &RenderSettings) -> String {
    let buses: Vec<_> = catalogue.buses().iter().filter(|b| !b.route.is_empty()).collect();

    let mut stop_names: BTreeSet<&str> = BTreeSet::new();
    for bus in &buses {
        for stop in &bus.route {
            stop_names.insert(stop.as_ref());
        }
    }

    let projector = SphereProjector::new(
        stop_names
            .iter()
            .copied()
            .filter_map(|name| catalogue.get_stop(name))
            .map(|stop| stop.coordinate),
        settings.width,
        settings.height,
        settings.padding,
    );

    let mut doc = Document::new();

    for (color_index, bus) in buses.iter().enumerate() {
        let color = palette_color(settings, color_index);
        let points: Vec<Point> = bus
            .traversal()
            .iter()
            .filter_map(|name| catalogue.get_stop(name))
            .map(|stop| projector.project(stop.coordinate))
            .collect();
        doc.add(Element::Polyline(Polyline {
            points,
            stroke: color,
            stroke_width: settings.line_width,
        }));
    }

    for (color_index, bus) in buses.iter().enumerate() {
        let color = palette_color(settings, color_index);
        let first = &bus.route[0];
        let last = bus.route.last().unwrap();
        add_bus_label(&mut doc, catalogue, &projector, settings, first, &bus.name, color.clone());
        if first != last {
            add_bus_label(&mut doc, catalogue, &projector, settings, last, &bus.name, color);
        }
    }

    for name in stop_names.iter().copied() {
        let Some(stop) = catalogue.get_stop(name) else {
            continue;
        };
        doc.add(Element::Circle(Circle {
            center: projector.project(stop.coordinate),
            radius: settings.stop_radius,
            fill: Color::Named("white".into()),
        }));
    }

    for name in stop_names.iter().copied() {
        let Some(stop) = catalogue.get_stop(name) else {
            continue;
        };
        let position = projector.project(stop.coordinate);
        doc.add(Element::Text(Text {
            position,
            offset: Point {
                x: settings.stop_label_offset.0,
                y: settings.stop_label_offset.1,
            },
            font_size: settings.stop_label_font_size,
            font_weight: None,
            content: name.to_string(),
            fill: Color::Named("black".into()),
            underlayer: Some((settings.underlayer_color.clone(), settings.underlayer_width)),
        }));
    }

    doc.to_string()
}

fn palette_color(settings: &RenderSettings, index: usize) -> Color {
    if settings.color_palette.is_empty() {
        return Color::Named("black".into());
    }
    settings.color_palette[index % settings.color_palette.len()].clone()
}

fn add_bus_label(
    doc: &mut Document,
    catalogue: &Catalogue,
    projector: &SphereProjector,
    settings: &RenderSettings,
    stop_name: &str,
    bus_name: &str,
    color: Color,
) {
    let Some(stop) = catalogue.get_stop(stop_name) else {
        return;
    };
    let position = projector.project(stop.coordinate);
    doc.add(Element::Text(Text {
        position,
        offset: Point {
            x: settings.bus_label_offset.0,
            y: settings.bus_label_offset.1,
        },
        font_size: settings.bus_label_font_size,
        font_weight: Some("bold"),
        content: bus_name.to_string(),
        fill: color,
        underlayer: Some((settings.underlayer_color.clone(), settings.underlayer_width)),
    }));
}
