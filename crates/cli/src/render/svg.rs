//! A minimal internal SVG document builder: an ordered list of elements,
//! each owning its own attributes, rendered to XML text by one `Display`
//! pass over the list. Deliberately small — just the three element kinds
//! the map renderer needs — rather than a general-purpose SVG crate.

use std::fmt;

use super::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

#[derive(Debug, Clone)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: f64,
    pub font_weight: Option<&'static str>,
    pub content: String,
    pub fill: Color,
    /// `Some((color, width))` draws an underlayer stroke behind the glyphs
    /// for legibility over busy backgrounds.
    pub underlayer: Option<(Color, f64)>,
}

#[derive(Debug, Clone)]
pub enum Element {
    Polyline(Polyline),
    Circle(Circle),
    Text(Text),
}

/// An ordered list of elements. Rendered back-to-front in insertion order,
/// matching SVG's own paint order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#
        )?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        write!(f, "</svg>")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Polyline(p) => p.fmt(f),
            Element::Circle(c) => c.fmt(f),
            Element::Text(t) => t.fmt(f),
        }
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points = self
            .points
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke, self.stroke_width,
        )
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.center.x, self.center.y, self.radius, self.fill,
        )
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self
            .font_weight
            .map(|w| format!(r#" font-weight="{w}""#))
            .unwrap_or_default();
        if let Some((color, width)) = &self.underlayer {
            write!(
                f,
                r#"<text x="{x}" y="{y}" dx="{dx}" dy="{dy}" font-size="{size}" font-family="Verdana"{weight} fill="{color}" stroke="{color}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round">{content}</text>"#,
                x = self.position.x,
                y = self.position.y,
                dx = self.offset.x,
                dy = self.offset.y,
                size = self.font_size,
                content = self.content,
            )?;
            write!(f, " ")?;
        }
        write!(
            f,
            r#"<text x="{x}" y="{y}" dx="{dx}" dy="{dy}" font-size="{size}" font-family="Verdana"{weight} fill="{fill}">{content}</text>"#,
            x = self.position.x,
            y = self.position.y,
            dx = self.offset.x,
            dy = self.offset.y,
            size = self.font_size,
            fill = self.fill,
            content = self.content,
        )
    }
}
