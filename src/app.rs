// src/app.rs
//
// Calculatrice clavier — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier physique (ici, une seule fois par frame) :
// - texte saisi : chiffres, . , + - * / x × ÷ = %
// - Enter = "=", Backspace = DEL, Escape = C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use calculatrice_clavier::noyau::Commande;
use eframe::egui;

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        for ev in events {
            match ev {
                egui::Event::Text(txt) => {
                    for c in txt.chars() {
                        self.caractere_clavier(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.commande(Commande::Egal),
                    egui::Key::Backspace => self.commande(Commande::Supprimer),
                    egui::Key::Escape => self.commande(Commande::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
