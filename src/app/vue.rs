// src/app/vue.rs
//
// Vue (UI egui + egui_plot)
// -------------------------
// Objectifs :
// - Saisie : formule "f (x) =", curseurs x minimum / x maximum
// - Cinq boutons avec info-bulles (Action::TOUTES)
// - Figure : courbes + légende + grille, marqueurs et étiquettes "[x, y]"
// - Menu Aide → Utilisation (fenêtre)
//
// Note :
// - Enter dans le champ = "Nouveau tracé"
// - Axes réinitialisés seulement quand la figure est effacée (generation)

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::noyau::echantillon::{X_MAX_BORNE, X_MIN_BORNE};

use super::etat::{Action, AppTraceur};

impl AppTraceur {
    /// Barre de menu (à appeler dans un TopBottomPanel).
    pub fn ui_menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Aide", |ui| {
                if ui.button("Utilisation").clicked() {
                    self.ouvrir_aide();
                    ui.close();
                }
            });
        });
    }

    /// Panneau de saisie : formule, curseurs, boutons, messages.
    pub fn ui_saisie(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.label("f (x) =");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.formule)
                    .desired_width(ui.available_width())
                    .hint_text("Ex: x^2 - 2x, e^x, sin(x)/x, fac(x)")
                    .id_salt("formule_edit")
                    .code_editor(),
            );

            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.lost_focus() && enter {
                self.executer(Action::NouveauTrace);
            }
        });

        ui.add(egui::Slider::new(&mut self.x_min, X_MIN_BORNE..=0).text("x minimum"));
        ui.add(egui::Slider::new(&mut self.x_max, 0..=X_MAX_BORNE).text("x maximum"));

        ui.horizontal_wrapped(|ui| {
            for action in Action::TOUTES {
                let resp = ui
                    .add_sized([128.0, 28.0], egui::Button::new(action.libelle()))
                    .on_hover_text(action.info_bulle());
                if resp.clicked() {
                    self.executer(action);
                }
            }
        });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        } else if !self.statut.is_empty() {
            ui.horizontal(|ui| {
                ui.label(&self.statut);
                if let Some(t) = self.session.courant() {
                    ui.weak(format!("({} échantillons)", t.echantillons));
                }
            });
        } else if self.figure.est_vide() {
            ui.weak("Saisir une formule puis « Nouveau tracé » (Aide → Utilisation).");
        }
    }

    /// Figure : courbes, puis marqueurs + étiquettes par-dessus.
    pub fn ui_figure(&self, ui: &mut egui::Ui, reinitialiser: bool) {
        let mut plot = Plot::new("figure_traceur")
            .legend(Legend::default())
            .show_grid(true)
            .x_axis_label("x")
            .y_axis_label("f (x)");
        if reinitialiser {
            plot = plot.reset();
        }

        let figure = &self.figure;
        plot.show(ui, |plot_ui| {
            for trace in figure.traces() {
                let points = PlotPoints::from(trace.points.clone());
                plot_ui.line(Line::new(trace.legende.as_str(), points));
            }

            for (i, groupe) in figure.marqueurs().iter().enumerate() {
                let nom = format!("marqueurs {}", i + 1);
                let points: Vec<[f64; 2]> = groupe.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(nom.as_str(), PlotPoints::from(points))
                        .radius(4.0)
                        .color(egui::Color32::RED),
                );

                for p in &groupe.points {
                    let position = PlotPoint::new(p.x, p.y);
                    let texte = Text::new(nom.as_str(), position, p.etiquette.as_str())
                        .anchor(egui::Align2::LEFT_BOTTOM);
                    plot_ui.text(texte);
                }
            }
        });
    }

    /// Fenêtre Aide → Utilisation (texte ou erreur de lecture).
    pub fn ui_aide(&mut self, ctx: &egui::Context) {
        if !self.aide.ouverte {
            return;
        }

        let mut ouverte = true;
        egui::Window::new("Utilisation")
            .open(&mut ouverte)
            .default_width(480.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match &self.aide.contenu {
                    Some(Ok(texte)) => {
                        ui.monospace(texte);
                    }
                    Some(Err(e)) => {
                        ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                    }
                    None => {
                        ui.label("…");
                    }
                });
            });

        if !ouverte {
            self.fermer_aide();
        }
    }
}
