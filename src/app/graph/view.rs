use std::collections::HashSet;

use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Ui, Vec2, pos2,
    vec2,
};
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::data::EdgeKind;
use crate::util::{initials, short_name};

use super::super::render_utils::{
    blend_color, canvas_size, dim_color, draw_background, edge_style, node_radius, world_to_screen,
};
use super::super::sim::Simulation;
use super::super::{ViewModel, fuzzy_match_score};
use super::interaction::{hit_test, tooltip_anchor};

const EDGE_LABEL_MIN_ZOOM: f32 = 1.2;

const RESIZE_REHEAT_ALPHA: f32 = 0.3;

const NODE_FILL: Color32 = Color32::from_rgb(74, 111, 165);
const CENTRAL_FILL: Color32 = Color32::from_rgb(192, 82, 66);
const SELECTED_RING: Color32 = Color32::from_rgb(241, 196, 15);
const SEARCH_RING: Color32 = Color32::from_rgb(103, 196, 255);

impl ViewModel {
    fn ensure_layout(&mut self, canvas: Vec2) {
        match self.layout.as_mut() {
            None => {
                let edges = self
                    .graph
                    .edges
                    .iter()
                    .map(|edge| (edge.source, edge.target))
                    .collect();
                self.layout = Some(Simulation::new(
                    self.graph.scholars.len(),
                    edges,
                    canvas * 0.5,
                ));
                self.canvas = Some(canvas);
            }
            Some(layout) => {
                if self.canvas != Some(canvas) {
                    layout.recenter(canvas * 0.5);
                    layout.reheat(RESIZE_REHEAT_ALPHA);
                    self.canvas = Some(canvas);
                }
            }
        }
    }

    fn search_matches(&self) -> Option<HashSet<usize>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        Some(
            self.graph
                .scholars
                .iter()
                .enumerate()
                .filter_map(|(index, scholar)| {
                    fuzzy_match_score(&matcher, &scholar.name, query).map(|_| index)
                })
                .collect(),
        )
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);

        self.ensure_layout(canvas_size(rect));
        self.handle_graph_zoom(ui, rect, &response);

        let matches = self.search_matches();
        let search_active = matches.as_ref().is_some_and(|found| !found.is_empty());

        let physics_moving = match self.layout.as_mut() {
            Some(layout) => layout.step(),
            None => false,
        };
        if physics_moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        let (screen_positions, screen_radii) = {
            let Some(layout) = self.layout.as_ref() else {
                return;
            };
            let mut positions = Vec::with_capacity(layout.nodes().len());
            let mut radii = Vec::with_capacity(layout.nodes().len());
            for (node, scholar) in layout.nodes().iter().zip(&self.graph.scholars) {
                positions.push(world_to_screen(rect, self.pan, self.zoom, node.pos));
                radii.push(node_radius(scholar.is_central) * self.zoom);
            }
            (positions, radii)
        };

        let pointer = ui.input(|input| input.pointer.hover_pos());
        let hovered = pointer
            .filter(|pos| rect.contains(*pos))
            .and_then(|pos| hit_test(pos, &screen_positions, &screen_radii))
            .map(|(index, _distance)| index);

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        self.handle_graph_drag(&response, hovered);

        let pending_click = response
            .clicked_by(egui::PointerButton::Primary)
            .then_some(hovered);

        for edge in &self.graph.edges {
            if edge.source >= screen_positions.len() || edge.target >= screen_positions.len() {
                continue;
            }

            let start = screen_positions[edge.source];
            let end = screen_positions[edge.target];
            let style = edge_style(edge.kind);
            let stroke = Stroke::new(style.width * self.zoom, style.color);
            match style.dash {
                Some((dash, gap)) => painter.extend(Shape::dashed_line(
                    &[start, end],
                    stroke,
                    dash * self.zoom,
                    gap * self.zoom,
                )),
                None => {
                    painter.line_segment([start, end], stroke);
                }
            }

            if self.zoom >= EDGE_LABEL_MIN_ZOOM
                && let Some(label) = &edge.label
            {
                let mid = start + (end - start) * 0.5;
                painter.text(
                    mid - vec2(0.0, 6.0 * self.zoom),
                    Align2::CENTER_BOTTOM,
                    label,
                    FontId::proportional(10.0 * self.zoom),
                    Color32::from_gray(168),
                );
            }
        }

        let mut selection_animating = false;
        for (index, scholar) in self.graph.scholars.iter().enumerate() {
            let position = screen_positions[index];
            let radius = screen_radii[index];

            let is_selected = self.selected == Some(index);
            let is_hovered = hovered == Some(index);
            let is_match = matches
                .as_ref()
                .is_some_and(|found| found.contains(&index));

            let mut fill = if scholar.is_central {
                CENTRAL_FILL
            } else {
                NODE_FILL
            };
            if search_active && !is_match {
                fill = dim_color(fill, 0.45);
            }
            if is_hovered {
                fill = blend_color(fill, Color32::WHITE, 0.18);
            }

            painter.circle_filled(position, radius, fill);
            painter.circle_stroke(
                position,
                radius,
                Stroke::new(2.0 * self.zoom, Color32::from_gray(235)),
            );

            if is_match {
                painter.circle_stroke(
                    position,
                    radius + 3.0 * self.zoom,
                    Stroke::new(1.5 * self.zoom, SEARCH_RING),
                );
            }

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("scholar-selection", index)),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }
            if selection_mix > 0.0 {
                painter.circle_stroke(
                    position,
                    radius + (4.0 + (1.0 - selection_mix) * 4.0) * self.zoom,
                    Stroke::new(
                        2.5 * self.zoom,
                        SELECTED_RING.gamma_multiply(selection_mix),
                    ),
                );
            }

            painter.text(
                position,
                Align2::CENTER_CENTER,
                initials(&scholar.name),
                FontId::proportional(12.0 * self.zoom),
                Color32::WHITE,
            );
            painter.text(
                position + vec2(0.0, 40.0 * self.zoom),
                Align2::CENTER_CENTER,
                short_name(&scholar.name),
                FontId::proportional(11.0 * self.zoom),
                Color32::from_gray(225),
            );
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        Self::draw_legend(&painter, rect);

        if self.dragged.is_none()
            && let Some(index) = hovered
            && let Some(pointer_pos) = pointer
        {
            self.draw_tooltip(&painter, rect, index, pointer_pos);
        }

        if let Some(hit) = pending_click {
            self.resolve_click(hit);
        }
    }

    fn draw_legend(painter: &egui::Painter, rect: Rect) {
        let origin = rect.left_bottom() + vec2(20.0, -130.0);
        let box_rect = Rect::from_min_size(origin, vec2(150.0, 120.0));

        painter.rect_filled(box_rect, 8.0, Color32::from_rgba_unmultiplied(255, 255, 255, 242));
        painter.rect_stroke(
            box_rect,
            8.0,
            Stroke::new(1.0, Color32::from_rgb(212, 197, 176)),
            StrokeKind::Inside,
        );

        painter.text(
            origin + vec2(10.0, 20.0),
            Align2::LEFT_BOTTOM,
            "Типы связей:",
            FontId::proportional(12.0),
            Color32::from_rgb(44, 62, 80),
        );

        for (row, kind) in EdgeKind::ALL.into_iter().enumerate() {
            let y = origin.y + 40.0 + row as f32 * 20.0;
            let style = edge_style(kind);
            let stroke = Stroke::new(2.0, style.color);
            let start = pos2(origin.x + 10.0, y);
            let end = pos2(origin.x + 40.0, y);
            match style.dash {
                Some((dash, gap)) => {
                    painter.extend(Shape::dashed_line(&[start, end], stroke, dash, gap));
                }
                None => {
                    painter.line_segment([start, end], stroke);
                }
            }

            painter.text(
                pos2(origin.x + 50.0, y + 4.0),
                Align2::LEFT_BOTTOM,
                kind.legend_label(),
                FontId::proportional(11.0),
                Color32::from_rgb(51, 51, 51),
            );
        }
    }

    fn draw_tooltip(&self, painter: &egui::Painter, rect: Rect, index: usize, pointer: Pos2) {
        let Some(scholar) = self.graph.scholars.get(index) else {
            return;
        };

        let mut job = LayoutJob::default();
        job.wrap.max_width = 240.0;
        job.append(
            &scholar.name,
            0.0,
            TextFormat {
                font_id: FontId::proportional(14.0),
                color: Color32::WHITE,
                ..Default::default()
            },
        );
        if !scholar.years.is_empty() {
            job.append(
                &format!("\n{}", scholar.years),
                0.0,
                TextFormat {
                    font_id: FontId::proportional(11.5),
                    color: Color32::from_gray(180),
                    ..Default::default()
                },
            );
        }
        if !scholar.short_bio.is_empty() {
            job.append(
                &format!("\n{}", scholar.short_bio),
                0.0,
                TextFormat {
                    font_id: FontId::proportional(11.5),
                    color: Color32::from_gray(215),
                    ..Default::default()
                },
            );
        }

        let galley = painter.layout_job(job);
        let size = galley.size() + vec2(16.0, 16.0);
        let anchor = tooltip_anchor(pointer, size, rect);
        let bubble = Rect::from_min_size(anchor, size);

        painter.rect_filled(bubble, 6.0, Color32::from_rgba_unmultiplied(33, 39, 48, 245));
        painter.rect_stroke(
            bubble,
            6.0,
            Stroke::new(1.0, Color32::from_gray(70)),
            StrokeKind::Inside,
        );
        painter.galley(bubble.min + vec2(8.0, 8.0), galley, Color32::WHITE);
    }
}
