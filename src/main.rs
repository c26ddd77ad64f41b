// src/main.rs
//
// Calculatrice clavier — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap + journal tracing, puis
//   eframe::run_native ; avec `--eval EXPR` : évaluation sans fenêtre
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Le calcul vit dans la bibliothèque (src/noyau), jamais dans l’UI

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use calculatrice_clavier::config::{Args, Config};
    use clap::Parser;

    let config = Config::from(Args::parse());
    installer_journal(&config.log);

    if config.sans_fenetre() {
        let echecs = evaluer_sans_fenetre(&config);
        if echecs > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 620.0])
            .with_min_inner_size([300.0, 520.0]),
        ..Default::default()
    };

    tracing::info!(separateur = ?config.separateur, historique = config.capacite_historique, "démarrage");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config)))),
    )
}

/// RUST_LOG prime ; sinon le filtre passé en option.
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(defaut: &str) {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/// Une ligne par expression : "expr = résultat". Rend le nombre d’échecs.
#[cfg(not(target_arch = "wasm32"))]
fn evaluer_sans_fenetre(config: &calculatrice_clavier::config::Config) -> usize {
    use calculatrice_clavier::noyau::affichage::avec_separateur;
    use calculatrice_clavier::noyau::evaluer_commit;

    let mut echecs = 0;
    for expr in &config.evals {
        match evaluer_commit(expr) {
            Ok(resultat) => {
                println!("{expr} = {}", avec_separateur(&resultat, config.separateur));
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "évaluation impossible");
                println!("{expr} = {}", calculatrice_clavier::noyau::eval::ERREUR);
                echecs += 1;
            }
        }
    }
    echecs
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (configuration par défaut)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
