// src/app.rs
//
// Traceur de formules : module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, figure, aide)
// - Ré-exporter AppTraceur (pour main.rs: use crate::app::AppTraceur;)
// - Fournir l’impl eframe::App (mise en page des panneaux)

pub mod aide;
pub mod etat;
pub mod figure;
pub mod vue;

pub use etat::AppTraceur;

use eframe::egui;

impl eframe::App for AppTraceur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC ferme la fenêtre d’aide
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.fermer_aide();
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.ui_menu(ui);
        });

        egui::TopBottomPanel::bottom("saisie").show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_saisie(ui);
            ui.add_space(4.0);
        });

        // lue APRÈS les boutons : un effacement réinitialise les axes dès cette frame
        let generation = self.figure.generation();
        let reinitialiser = generation != self.generation_affichee;
        self.generation_affichee = generation;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_figure(ui, reinitialiser);
        });

        self.ui_aide(ctx);
    }
}
