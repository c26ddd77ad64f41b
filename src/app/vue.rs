// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : expression (glyphes × ÷ −) + aperçu du résultat
// - Pavé : gros boutons tactiles, 4 colonnes
// - Historique : plus récent en tête, bouton pour vider
//
// La vue ne calcule rien : elle lit la session et renvoie des touches.

use calculatrice_clavier::noyau::affichage::{avec_separateur, format_expression};
use calculatrice_clavier::noyau::Commande;
use eframe::egui;

use super::etat::AppCalc;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let expression = self.session.display_expression();
        let apercu = self.session.preview_result();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(expression).monospace().size(28.0));
                    ui.label(
                        egui::RichText::new(format!("= {apercu}"))
                            .monospace()
                            .size(18.0)
                            .weak(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_commande(ui, "C", Commande::Effacer);
                self.bouton_commande(ui, "DEL", Commande::Supprimer);
                self.bouton_commande(ui, "%", Commande::Pourcent);
                self.bouton_touche(ui, "÷", '/');
                ui.end_row();

                self.bouton_touche(ui, "7", '7');
                self.bouton_touche(ui, "8", '8');
                self.bouton_touche(ui, "9", '9');
                self.bouton_touche(ui, "×", '*');
                ui.end_row();

                self.bouton_touche(ui, "4", '4');
                self.bouton_touche(ui, "5", '5');
                self.bouton_touche(ui, "6", '6');
                self.bouton_touche(ui, "−", '-');
                ui.end_row();

                self.bouton_touche(ui, "1", '1');
                self.bouton_touche(ui, "2", '2');
                self.bouton_touche(ui, "3", '3');
                self.bouton_touche(ui, "+", '+');
                ui.end_row();

                self.bouton_commande(ui, "±", Commande::Signe);
                self.bouton_touche(ui, "0", '0');
                let sep = self.session.separateur().as_char().to_string();
                self.bouton_touche(ui, &sep, '.');
                self.bouton_commande(ui, "=", Commande::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.session.history().is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }

                let sep = self.session.separateur();
                for e in self.session.history() {
                    let expr = format_expression(&e.expression, sep);
                    let res = avec_separateur(&e.resultat, sep);
                    let ligne = egui::RichText::new(format!("{expr} = {res}")).monospace();
                    if self.dernier_commit == Some(e.id) {
                        ui.label(ligne.strong());
                    } else {
                        ui.label(ligne);
                    }
                }

                ui.add_space(6.0);
                if ui.button("Vider l’historique").clicked() {
                    self.vider_historique();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, c: char) {
        if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label)).clicked() {
            self.touche(c);
        }
    }

    fn bouton_commande(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande) {
        if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label)).clicked() {
            self.commande(commande);
        }
    }
}
