// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vizir_fill_demo`.

use kurbo::{Point, Rect};
use peniko::Brush;
use vizir_fill_charts::{Mark, sort_marks};

/// A centered text label (subplot and figure titles).
#[derive(Debug)]
struct SvgText {
    pos: Point,
    font_size: f64,
    text: String,
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: Vec<Mark>,
    texts: Vec<SvgText>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn extend_marks(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Adds a label centered horizontally on `pos`, with `pos.y` as its baseline.
    pub(crate) fn push_text(&mut self, pos: Point, font_size: f64, text: &str) {
        self.texts.push(SvgText {
            pos,
            font_size,
            text: text.to_string(),
        });
    }

    pub(crate) fn mark_count(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .or_else(|| self.marks_bounds())
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut marks = self.marks.clone();
        sort_marks(&mut marks);
        for mark in &marks {
            let d = mark.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(&mut out, "fill", &mark.fill);
            if mark.has_stroke() {
                write_paint_attr(&mut out, "stroke", &mark.stroke);
                out.push_str(&format!(
                    r#" stroke-width="{}" stroke-linejoin="round""#,
                    mark.stroke_width
                ));
            }
            out.push_str("/>\n");
        }

        // Labels always paint above the marks.
        for t in &self.texts {
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="middle" fill="{}">"#,
                t.pos.x, t.pos.y, t.font_size, "#2a3f5f"
            ));
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn marks_bounds(&self) -> Option<Rect> {
        let rect = self
            .marks
            .iter()
            .map(Mark::bounds)
            .reduce(|a, b| a.union(b))?;
        // Add a small padding margin.
        let pad = 10.0;
        Some(rect.inflate(pad, pad))
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
