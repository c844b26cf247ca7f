use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, vec2};

use crate::data::EdgeKind;

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.left_top() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.left_top() - pan) / zoom
}

pub(super) fn canvas_size(rect: Rect) -> Vec2 {
    let mut size = rect.size();
    if size.x < 1.0 {
        size.x = 800.0;
    }
    if size.y < 1.0 {
        size.y = 600.0;
    }
    size
}

pub(super) struct EdgeStyle {
    pub(super) width: f32,
    pub(super) color: Color32,
    pub(super) dash: Option<(f32, f32)>,
}

pub(super) fn edge_style(kind: EdgeKind) -> EdgeStyle {
    match kind {
        EdgeKind::Spouse => EdgeStyle {
            width: 2.5,
            color: Color32::from_rgb(231, 76, 60),
            dash: None,
        },
        EdgeKind::Coauthor => EdgeStyle {
            width: 2.5,
            color: Color32::from_rgb(52, 152, 219),
            dash: None,
        },
        EdgeKind::Friendship => EdgeStyle {
            width: 2.0,
            color: Color32::from_rgb(39, 174, 96),
            dash: Some((5.0, 3.0)),
        },
        EdgeKind::Collaboration => EdgeStyle {
            width: 1.5,
            color: Color32::from_rgb(153, 153, 153),
            dash: None,
        },
    }
}

pub(super) fn node_radius(is_central: bool) -> f32 {
    if is_central { 28.0 } else { 22.0 }
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.5 + factor * 0.5)) as u8,
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(20, 24, 30));

    let step = (60.0 * zoom.clamp(0.5, 2.0)).max(24.0);
    let origin = rect.left_top() + pan;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(58, 68, 79, 60));

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn world_and_screen_transforms_round_trip() {
        let rect = Rect::from_min_size(pos2(40.0, 60.0), vec2(900.0, 700.0));
        let pan = vec2(12.0, -33.0);
        let zoom = 1.7;
        let world = vec2(123.4, -56.7);

        let screen = world_to_screen(rect, pan, zoom, world);
        let back = screen_to_world(rect, pan, zoom, screen);
        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn identity_camera_maps_world_origin_to_canvas_corner() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(800.0, 600.0));
        let screen = world_to_screen(rect, Vec2::ZERO, 1.0, Vec2::ZERO);
        assert_eq!(screen, pos2(100.0, 50.0));
    }

    #[test]
    fn canvas_size_falls_back_per_axis() {
        let degenerate = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 0.0));
        assert_eq!(canvas_size(degenerate), vec2(800.0, 600.0));

        let flat = Rect::from_min_size(pos2(0.0, 0.0), vec2(1024.0, 0.0));
        assert_eq!(canvas_size(flat), vec2(1024.0, 600.0));

        let normal = Rect::from_min_size(pos2(0.0, 0.0), vec2(1024.0, 768.0));
        assert_eq!(canvas_size(normal), vec2(1024.0, 768.0));
    }

    #[test]
    fn every_edge_kind_has_a_style_and_label() {
        let mut dashed = 0;
        for kind in EdgeKind::ALL {
            let style = edge_style(kind);
            assert!(style.width > 0.0);
            assert!(!kind.legend_label().is_empty());
            if style.dash.is_some() {
                dashed += 1;
            }
        }
        assert_eq!(dashed, 1);
        assert!(edge_style(EdgeKind::Friendship).dash.is_some());
    }
}
