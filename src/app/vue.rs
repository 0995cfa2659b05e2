// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/point, Enter empile, Backspace efface/annule
//   (sauf si une touche a le focus clavier)
// - Tactile : gros boutons en grille (pavé RPN)
//
// Note :
// - Les symboles d’opérations sont ceux du registre du moteur (×, ÷, −, √…),
//   pas les caractères ASCII du clavier.

use eframe::egui;

use super::etat::AppCalc;
use calculatrice_rpn::noyau::jetons::format_pile;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier_physique(ui);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_pile(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn clavier_physique(&mut self, ui: &mut egui::Ui) {
        let (texte, enter, backspace) = ui.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                texte,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        // focus clavier (Tab) sur une touche : Enter l’active déjà
        let widget_focus = ui.memory(|m| m.focused().is_some());

        self.clavier(&texte, enter, backspace, widget_focus);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : " " si pile vide (hauteur stable)
                    let historique = if self.historique.is_empty() {
                        " "
                    } else {
                        self.historique.as_str()
                    };
                    ui.monospace(historique);
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "7", Touche::Chiffre('7'));
                self.touche(ui, "8", Touche::Chiffre('8'));
                self.touche(ui, "9", Touche::Chiffre('9'));
                self.touche(ui, "÷", Touche::Operation("÷"));
                ui.end_row();

                self.touche(ui, "4", Touche::Chiffre('4'));
                self.touche(ui, "5", Touche::Chiffre('5'));
                self.touche(ui, "6", Touche::Chiffre('6'));
                self.touche(ui, "×", Touche::Operation("×"));
                ui.end_row();

                self.touche(ui, "1", Touche::Chiffre('1'));
                self.touche(ui, "2", Touche::Chiffre('2'));
                self.touche(ui, "3", Touche::Chiffre('3'));
                self.touche(ui, "−", Touche::Operation("−"));
                ui.end_row();

                self.touche(ui, "0", Touche::Chiffre('0'));
                self.touche(ui, ".", Touche::Chiffre('.'));
                self.touche(ui, "±", Touche::Operation("±"));
                self.touche(ui, "+", Touche::Operation("+"));
                ui.end_row();

                self.touche(ui, "√", Touche::Operation("√"));
                self.touche(ui, "sin", Touche::Operation("sin"));
                self.touche(ui, "cos", Touche::Operation("cos"));
                self.touche(ui, "π", Touche::Operation("π"));
                ui.end_row();

                self.touche(ui, "→M", Touche::StockerMemoire);
                self.touche(ui, "M", Touche::RappelMemoire);
                self.touche(ui, "←", Touche::Backspace);
                self.touche(ui, "C", Touche::Clear);
                ui.end_row();
            });

        ui.add_space(6.0);
        let enter = ui.add_sized(
            [TAILLE_TOUCHE[0] * 4.0 + 18.0, TAILLE_TOUCHE[1]],
            egui::Button::new("enter"),
        );
        if enter.clicked() {
            enter.surrender_focus();
            self.enter();
        }
    }

    fn ui_pile(&self, ui: &mut egui::Ui) {
        let pile = self.moteur().pile();
        egui::CollapsingHeader::new(format!("Pile ({} jetons)", pile.len()))
            .default_open(false)
            .show(ui, |ui| {
                ui.monospace(format_pile(pile));
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        // Opération absente du registre : touche grisée
        let active = match touche {
            Touche::Operation(s) => self.moteur().registre().chercher(s).is_some(),
            _ => true,
        };

        let resp = ui.add_enabled(
            active,
            egui::Button::new(label).min_size(egui::vec2(TAILLE_TOUCHE[0], TAILLE_TOUCHE[1])),
        );
        if !resp.clicked() {
            return;
        }
        // clic souris : le focus ne doit pas capturer Enter/Backspace ensuite
        resp.surrender_focus();

        match touche {
            Touche::Chiffre(c) => self.append_chiffre(c),
            Touche::Operation(s) => self.operer(s),
            Touche::Backspace => self.backspace(),
            Touche::Clear => self.clear(),
            Touche::StockerMemoire => self.stocker_memoire(),
            Touche::RappelMemoire => self.rappel_memoire(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operation(&'static str),
    Backspace,
    Clear,
    StockerMemoire,
    RappelMemoire,
}
