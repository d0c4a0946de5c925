use crate::domain::chart::ChartScene;
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Standalone SVG document for a scene: gradient area, stroke, then label markers.
pub fn render_svg(scene: &ChartScene) -> String {
    let size = scene.geometry.size;
    let style = &scene.style;
    let id = &scene.gradient_id;

    let mut svg = String::with_capacity(scene.geometry.fill_d.len() * 2 + 512);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="none">"#,
        w = size.width,
        h = size.height,
    );
    let _ = writeln!(
        svg,
        r#"<defs><linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{c}" stop-opacity="{o}"/><stop offset="100%" stop-color="{c}" stop-opacity="0"/></linearGradient></defs>"#,
        c = style.color,
        o = style.top_opacity,
    );
    let _ = writeln!(
        svg,
        r#"<path d="{}" fill="url(#{id})" stroke="none"/>"#,
        scene.geometry.fill_d
    );
    let _ = writeln!(
        svg,
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        scene.geometry.stroke_d, style.color, style.stroke_width,
    );
    for marker in &scene.geometry.markers {
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="white"/>"#,
            marker.x, marker.y, style.marker_radius,
        );
    }
    svg.push_str("</svg>");
    svg
}
