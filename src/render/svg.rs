//! SVG output for composed scenes

use std::fmt::Write;
use crate::config::ForestConfig;
use crate::math::Hsl;
use crate::scene::{generators, ElementKind, Paint, Scene, SceneElement, Shape, Sprite};

/// Drawing for one element.
///
/// This is the single dispatch point from element kind to generator.
pub fn sprite_for(element: &SceneElement, config: &ForestConfig) -> Sprite {
    match element.kind {
        ElementKind::Sky => generators::sky(),
        ElementKind::Sun => generators::sun(),
        ElementKind::Cloud { variant } => generators::cloud(variant),
        ElementKind::Ground { stratum } => generators::ground(stratum),
        ElementKind::Water => generators::water(),
        ElementKind::Tree { size, .. } => generators::tree(size),
        ElementKind::Bush { .. } => generators::bush(),
        ElementKind::Flower { color_index, .. } => {
            let petal = config
                .flower_palette
                .get(color_index % config.flower_palette.len().max(1))
                .copied()
                .unwrap_or(Hsl::WHITE);
            generators::flower(petal)
        }
        ElementKind::Bird { .. } => generators::bird(),
        ElementKind::Rabbit => generators::rabbit(),
        ElementKind::Deer => generators::deer(),
        ElementKind::Hud { growth_level } => generators::hud(growth_level),
    }
}

/// Render a scene as a standalone SVG document sized to its canvas
pub fn render_svg(scene: &Scene, config: &ForestConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-growth="{g}">"#,
        w = scene.canvas.x,
        h = scene.canvas.y,
        g = scene.growth_level,
    );

    for (i, element) in scene.elements.iter().enumerate() {
        let sprite = sprite_for(element, config);
        write_element(&mut out, i, element, &sprite);
    }

    out.push_str("</svg>");
    out
}

fn write_element(out: &mut String, id: usize, element: &SceneElement, sprite: &Sprite) {
    let frame = &element.frame;
    let classes: Vec<&str> = element.animations.iter().map(|a| a.kind.class_name()).collect();
    let delay = element.delay().as_secs_f32();

    let _ = write!(
        out,
        r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}""#,
        frame.origin.x, frame.origin.y, frame.size.x, frame.size.y, sprite.view_box.x, sprite.view_box.y,
    );
    if sprite.stretch {
        out.push_str(r#" preserveAspectRatio="none""#);
    }
    let _ = write!(out, r#" data-kind="{}" data-layer="{}""#, element.kind_name(), element.layer.name());
    if let ElementKind::Tree { index, is_newest, .. } = element.kind {
        let _ = write!(out, r#" data-index="{}""#, index);
        if is_newest {
            out.push_str(r#" data-newest="true""#);
        }
    }
    if !classes.is_empty() {
        let _ = write!(
            out,
            r#" class="{}" data-delay="{}" style="animation-delay: {}s""#,
            classes.join(" "),
            delay,
            delay
        );
    }
    out.push('>');

    for shape in &sprite.shapes {
        write_shape(out, id, sprite, shape);
    }

    out.push_str("</svg>");
}

fn write_shape(out: &mut String, id: usize, sprite: &Sprite, shape: &Shape) {
    let _ = match shape {
        Shape::Ellipse { center, radius, paint } => write!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
            center.x, center.y, radius.x, radius.y, paint_attrs(paint)
        ),
        Shape::Circle { center, r, paint } => write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            center.x, center.y, r, paint_attrs(paint)
        ),
        Shape::Rect { origin, size, corner, paint } => write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
            origin.x, origin.y, size.x, size.y, corner, paint_attrs(paint)
        ),
        Shape::Line { from, to, paint } => write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            from.x, from.y, to.x, to.y, paint_attrs(paint)
        ),
        Shape::Path { d, paint } => write!(out, r#"<path d="{}"{}/>"#, d, paint_attrs(paint)),
        Shape::Gradient { stops } => {
            let gradient_id = format!("gradient-{}", id);
            let _ = write!(
                out,
                r#"<defs><linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#,
                gradient_id
            );
            for (offset, color, opacity) in stops {
                let _ = write!(
                    out,
                    r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                    offset, color, opacity
                );
            }
            write!(
                out,
                r#"</linearGradient></defs><rect width="{}" height="{}" fill="url(#{})"/>"#,
                sprite.view_box.x, sprite.view_box.y, gradient_id
            )
        }
        Shape::Text { origin, content, size, bold, paint } => write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}"{}{}>{}</text>"#,
            origin.x,
            origin.y,
            size,
            if *bold { r#" font-weight="bold""# } else { "" },
            paint_attrs(paint),
            escape_xml(content)
        ),
    };
}

fn paint_attrs(paint: &Paint) -> String {
    let mut attrs = String::new();
    match paint.fill {
        Some(color) => {
            let _ = write!(attrs, r#" fill="{}""#, color);
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(color) = paint.stroke {
        let _ = write!(attrs, r#" stroke="{}" stroke-width="{}""#, color, paint.stroke_width);
    }
    if paint.opacity < 1.0 {
        let _ = write!(attrs, r#" opacity="{}""#, paint.opacity);
    }
    attrs
}

/// Escape special characters for XML text and attributes
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
