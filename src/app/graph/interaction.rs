use eframe::egui::{self, Pos2, Rect, Ui, Vec2, vec2};

use super::super::ViewModel;
use super::super::render_utils::screen_to_world;

pub(in crate::app) const MIN_ZOOM: f32 = 0.3;
pub(in crate::app) const MAX_ZOOM: f32 = 3.0;

const DRAG_ALPHA_TARGET: f32 = 0.3;

const TOOLTIP_OFFSET: f32 = 15.0;

pub(super) fn zoom_toward(
    pan: Vec2,
    zoom: f32,
    rect: Rect,
    pointer: Pos2,
    zoom_factor: f32,
) -> (Vec2, f32) {
    let world_before = screen_to_world(rect, pan, zoom, pointer);
    let zoom_after = (zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);
    let pan_after = (pointer - rect.left_top()) - world_before * zoom_after;
    (pan_after, zoom_after)
}

pub(super) fn hit_test(pointer: Pos2, positions: &[Pos2], radii: &[f32]) -> Option<(usize, f32)> {
    positions
        .iter()
        .zip(radii)
        .enumerate()
        .filter_map(|(index, (position, radius))| {
            let distance = position.distance(pointer);
            (distance <= *radius).then_some((index, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

pub(super) fn tooltip_anchor(pointer: Pos2, size: Vec2, bounds: Rect) -> Pos2 {
    let mut anchor = pointer + vec2(TOOLTIP_OFFSET, TOOLTIP_OFFSET);
    if anchor.x + size.x > bounds.right() {
        anchor.x = pointer.x - size.x - TOOLTIP_OFFSET;
    }
    if anchor.y + size.y > bounds.bottom() {
        anchor.y = pointer.y - size.y - TOOLTIP_OFFSET;
    }
    anchor
}

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        (self.pan, self.zoom) = zoom_toward(self.pan, self.zoom, rect, pointer, factor);
    }

    pub(in crate::app) fn handle_graph_drag(
        &mut self,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(index) = hovered
            && let Some(layout) = self.layout.as_mut()
            && let Some(node) = layout.nodes().get(index)
        {
            self.dragged = Some(index);
            self.drag_world = node.pos;
            layout.pin(index, self.drag_world);
            layout.set_alpha_target(DRAG_ALPHA_TARGET);
        }

        if response.dragged() {
            match self.dragged {
                Some(index) => {
                    self.drag_world += response.drag_delta() / self.zoom;
                    if let Some(layout) = self.layout.as_mut() {
                        layout.pin(index, self.drag_world);
                    }
                }
                None => self.pan += response.drag_delta(),
            }
        }

        if response.drag_stopped()
            && let Some(index) = self.dragged.take()
            && let Some(layout) = self.layout.as_mut()
        {
            layout.unpin(index);
            layout.set_alpha_target(0.0);
        }
    }

    pub(in crate::app) fn resolve_click(&mut self, hit: Option<usize>) {
        match hit {
            Some(index) => self.open_panel(index),
            None => self.close_panel(),
        }
    }
}
