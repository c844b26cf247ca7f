use eframe::egui::{self, Context, Vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::data::{ScholarGraph, load_graph};

mod graph;
mod render_utils;
mod sim;
mod ui;

pub struct ScholarAtlasApp {
    state: AppState,
}

enum AppState {
    Empty,
    Ready(Box<ViewModel>),
}

struct ViewModel {
    graph: ScholarGraph,
    layout: Option<sim::Simulation>,
    canvas: Option<Vec2>,
    pan: Vec2,
    zoom: f32,
    search: String,
    selected: Option<usize>,
    dragged: Option<usize>,
    drag_world: Vec2,
    scroll_to_top: bool,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

impl ScholarAtlasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset_path: String) -> Self {
        let state = match load_graph(&dataset_path) {
            Ok(graph) => {
                log::info!(
                    "loaded {} scholars and {} connections from {dataset_path}",
                    graph.scholars.len(),
                    graph.edges.len()
                );
                AppState::Ready(Box::new(ViewModel::new(graph)))
            }
            Err(error) => {
                log::warn!("failed to load dataset {dataset_path}: {error:#}");
                AppState::Empty
            }
        };

        Self { state }
    }
}

impl eframe::App for ScholarAtlasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.state {
            AppState::Empty => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("No scholar dataset loaded");
                        ui.add_space(8.0);
                        ui.label("Check the --dataset path and restart.");
                    });
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }
    }
}
