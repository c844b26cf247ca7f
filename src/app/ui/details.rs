use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::util::short_name;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(scholar) = self.graph.scholars.get(index) else {
            self.selected = None;
            return;
        };

        let name = scholar.name.clone();
        let years = scholar.years.clone();
        let full_bio = scholar.full_bio.clone();
        let interests = scholar.interests.clone();
        let achievements = scholar.achievements.clone();
        let works = scholar.works.clone();
        let tags = self
            .graph
            .relation_tags(index)
            .into_iter()
            .filter_map(|tag| {
                self.graph
                    .scholars
                    .get(tag.target)
                    .map(|other| (tag.target, short_name(&other.name), tag.kind))
            })
            .collect::<Vec<_>>();

        let mut navigate_to = None;
        let mut close_requested = false;

        ui.horizontal(|ui| {
            ui.heading(&name);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("✖").clicked() {
                    close_requested = true;
                }
            });
        });
        if !years.is_empty() {
            ui.small(&years);
        }
        ui.add_space(6.0);

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("details_scroll")
            .auto_shrink([false, false]);
        if self.scroll_to_top {
            scroll = scroll.vertical_scroll_offset(0.0);
            self.scroll_to_top = false;
        }

        scroll.show(ui, |ui| {
            if !full_bio.is_empty() {
                ui.label(RichText::new("Биография").strong());
                ui.label(&full_bio);
                ui.add_space(8.0);
            }

            if !interests.is_empty() {
                ui.label(RichText::new("Научные интересы").strong());
                for interest in &interests {
                    ui.label(format!("- {interest}"));
                }
                ui.add_space(8.0);
            }

            if !achievements.is_empty() {
                ui.label(RichText::new("Достижения").strong());
                for achievement in &achievements {
                    ui.label(format!("- {achievement}"));
                }
                ui.add_space(8.0);
            }

            if !works.is_empty() {
                ui.label(RichText::new("Основные труды").strong());
                for work in &works {
                    ui.label(format!("- {work}"));
                }
                ui.add_space(8.0);
            }

            if !tags.is_empty() {
                ui.label(RichText::new("Связи").strong());
                ui.horizontal_wrapped(|ui| {
                    for (target, target_name, kind) in &tags {
                        if ui
                            .link(target_name.as_str())
                            .on_hover_text(kind.label())
                            .clicked()
                        {
                            navigate_to = Some(*target);
                        }
                    }
                });
            }
        });

        if let Some(target) = navigate_to {
            self.open_panel(target);
        }
        if close_requested {
            self.close_panel();
        }
    }
}
