use eframe::egui::{self, Align, Context, Layout, Vec2};
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::data::ScholarGraph;

use super::super::{ViewModel, fuzzy_match_score};

impl ViewModel {
    pub(in crate::app) fn new(graph: ScholarGraph) -> Self {
        Self {
            graph,
            layout: None,
            canvas: None,
            pan: Vec2::ZERO,
            zoom: 1.0,
            search: String::new(),
            selected: None,
            dragged: None,
            drag_world: Vec2::ZERO,
            scroll_to_top: false,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            self.close_panel();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Scholar Atlas");
                    ui.separator();
                    ui.label(format!("scholars: {}", self.graph.scholars.len()));
                    ui.label(format!("connections: {}", self.graph.edges.len()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let search_box = ui.add(
                            egui::TextEdit::singleline(&mut self.search)
                                .hint_text("Search scholars")
                                .desired_width(220.0),
                        );
                        if search_box.lost_focus()
                            && ui.input(|input| input.key_pressed(egui::Key::Enter))
                            && let Some(index) = self.best_search_match()
                        {
                            self.open_panel(index);
                        }
                    });
                });
            });

        egui::SidePanel::right("details")
            .resizable(false)
            .default_width(360.0)
            .show_animated(ctx, self.selected.is_some(), |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }

    fn best_search_match(&self) -> Option<usize> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        self.graph
            .scholars
            .iter()
            .enumerate()
            .filter_map(|(index, scholar)| {
                fuzzy_match_score(&matcher, &scholar.name, query).map(|score| (index, score))
            })
            .max_by_key(|(_, score)| *score)
            .map(|(index, _score)| index)
    }

    pub(in crate::app) fn open_panel(&mut self, index: usize) {
        if index >= self.graph.scholars.len() {
            return;
        }
        self.selected = Some(index);
        self.scroll_to_top = true;
    }

    pub(in crate::app) fn close_panel(&mut self) {
        self.selected = None;
    }
}
