// src/main.rs
//
// Traceur de formules : point d’entrée NATIF
// ------------------------------------------
// But:
// - Journalisation (tracing) : RUST_LOG, sinon "info,traceur_formules=debug"
// - Réglages : traceur.toml (facultatif) dans le répertoire courant
// - eframe::run_native + NativeOptions
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppTraceur` vit dans src/app.rs
// - Le noyau (src/noyau/) ne dépend ni d’egui ni d’eframe

use eframe::egui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod erreur;
mod noyau;

use app::AppTraceur;
use config::{Reglages, FICHIER_REGLAGES};

const TITRE_APP: &str = "Traceur de formules";

fn init_journal() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,traceur_formules=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> eframe::Result<()> {
    init_journal();

    let reglages = Reglages::charger_ou_defaut(FICHIER_REGLAGES);
    tracing::info!(
        pas = reglages.pas,
        pas_fin = reglages.pas_fin,
        formule = %reglages.formule_defaut,
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppTraceur::new(&reglages)))),
    )
}
