//! Scene → SVG serialization.
//!
//! The scene model is the real output contract; SVG is a convenience
//! surface for web views and for eyeballing test output.

use super::scene::{Prim, Scene};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub(super) fn scene_to_svg(scene: &Scene) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Georgia', 'Times New Roman', serif;">"#,
        scene.width, scene.height, scene.width, scene.height
    );
    svg.push('\n');

    for prim in &scene.prims {
        svg.push_str("  ");
        match prim {
            Prim::Line { x1, y1, x2, y2, color, width } => {
                svg.push_str(&format!(
                    r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{color}" stroke-width="{width:.1}" stroke-linecap="round"/>"#,
                ));
            }
            Prim::Ellipse { cx, cy, rx, ry, rotation, fill, stroke, stroke_width } => {
                svg.push_str(&format!(
                    r#"<ellipse cx="{cx:.1}" cy="{cy:.1}" rx="{rx:.1}" ry="{ry:.1}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width:.1}" transform="rotate({rotation:.0},{cx:.1},{cy:.1})"/>"#,
                ));
            }
            Prim::Path { d, fill, stroke, stroke_width } => {
                svg.push_str(&format!(
                    r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width:.1}" stroke-linecap="round"/>"#,
                ));
            }
            Prim::Rect { x, y, w, h, fill } => {
                svg.push_str(&format!(
                    r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"/>"#,
                ));
            }
            Prim::Circle { cx, cy, r, fill } => {
                svg.push_str(&format!(
                    r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{fill}"/>"#,
                ));
            }
            Prim::Text { x, y, content, size, weight, style, color, anchor } => {
                svg.push_str(&format!(
                    r#"<text x="{x:.1}" y="{y:.1}" font-size="{size:.0}" font-weight="{weight}" font-style="{style}" fill="{color}" text-anchor="{anchor}">{}</text>"#,
                    escape(content),
                ));
            }
        }
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}
