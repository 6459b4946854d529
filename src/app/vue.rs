// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : historique (description infixe) + résultat
// - Tactile : gros boutons, pavé RPN (↵ = Entrée)
// - Démarche : programme (jetons) + variables, pour voir ce que contient la pile

use eframe::egui;

use super::etat::{AppCalc, VARIABLE_MEMOIRE};
use crate::noyau::format::FRACTION_MAX;
use crate::noyau::operations::Registre;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(egui::RichText::new(&self.historique).monospace().weak());

                let texte = egui::RichText::new(&self.affichage).monospace().size(28.0);
                if self.valeur_affichee().is_some() || self.en_saisie {
                    ui.label(texte);
                } else {
                    // message d’erreur du noyau
                    ui.label(texte.color(ui.visuals().error_fg_color));
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let sep = self.calc.format().separateur_decimal;

        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Efface la pile et les variables", Touche::Effacer);
                self.bouton(ui, "⌫", "Efface un chiffre / retire le dernier jeton", Touche::Retour);
                self.bouton(ui, "±", "Change le signe", Touche::PlusMoins);
                self.bouton(ui, "÷", "Division", Touche::Operation("÷"));
                ui.end_row();

                self.chiffres_ligne(ui, ['7', '8', '9']);
                self.bouton(ui, "×", "Multiplication", Touche::Operation("×"));
                ui.end_row();

                self.chiffres_ligne(ui, ['4', '5', '6']);
                self.bouton(ui, "−", "Soustraction", Touche::Operation("−"));
                ui.end_row();

                self.chiffres_ligne(ui, ['1', '2', '3']);
                self.bouton(ui, "+", "Addition", Touche::Operation("+"));
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Chiffre('0'));
                self.bouton(ui, &sep.to_string(), "Séparateur décimal", Touche::Chiffre(sep));
                self.bouton(ui, "↵", "Entrée : pousse le nombre affiché", Touche::Entree);
                self.bouton(ui, "π", "Constante π", Touche::Operation("π"));
                ui.end_row();

                self.bouton(ui, "√", "Racine carrée", Touche::Operation("√"));
                self.bouton(ui, "sin", "Sinus (radians)", Touche::Operation("sin"));
                self.bouton(ui, "cos", "Cosinus (radians)", Touche::Operation("cos"));
                ui.label("");
                ui.end_row();

                let fixer = format!("→{VARIABLE_MEMOIRE}");
                self.bouton(ui, &fixer, "Range la valeur affichée en mémoire", Touche::FixerMemoire);
                self.bouton(ui, VARIABLE_MEMOIRE, "Pousse la variable mémoire", Touche::Memoire);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn chiffres_ligne(&mut self, ui: &mut egui::Ui, chiffres: [char; 3]) {
        for c in chiffres {
            self.bouton(ui, &c.to_string(), "", Touche::Chiffre(c));
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Décimales :");
            let mut d = self.chiffres() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=FRACTION_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let programme = self.calc.programme().join("  ");
                Self::champ_demarche(ui, "Programme", "demarche_programme", &programme);

                let variables = self
                    .calc
                    .variables()
                    .iter()
                    .map(|(nom, v)| format!("{nom} = {}", self.calc.format().formater(v)))
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::champ_demarche(ui, "Variables", "demarche_variables", &variables);

                let symboles = Registre::global().symboles().join("  ");
                Self::champ_demarche(ui, "Opérations", "demarche_operations", &symboles);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.appliquer(touche);
        }
    }

    fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.ajouter_chiffre(c),
            Touche::Operation(s) => self.operer(s),
            Touche::Entree => self.entree(),
            Touche::Retour => self.retour_arriere(),
            Touche::PlusMoins => self.plus_moins(),
            Touche::Effacer => self.tout_effacer(),
            Touche::FixerMemoire => self.fixer_variable(VARIABLE_MEMOIRE),
            Touche::Memoire => self.pousser_variable(VARIABLE_MEMOIRE),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operation(&'static str),
    Entree,
    Retour,
    PlusMoins,
    Effacer,
    FixerMemoire,
    Memoire,
}
