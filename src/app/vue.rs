// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Boutons de mots (plus, percent of, ...) pour taper des phrases sans clavier
//
// Note : PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;
use super::requete;

/// Mots-phrases proposés en boutons (libellé, texte inséré).
const MOTS: &[(&str, &str)] = &[
    ("plus", "plus"),
    ("minus", "minus"),
    ("times", "times"),
    ("over", "over"),
    ("percent of", "percent of"),
    ("√ of", "square root of"),
    ("add", "add"),
    ("and", "and"),
    ("subtract", "subtract"),
    ("from", "from"),
    ("multiply", "multiply"),
    ("divide", "divide"),
    ("by", "by"),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice en langage naturel");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: add five and three, 10 percent of 200, 2^10")
                .char_limit(requete::LONGUEUR_MAX_ENTREE)
                .id_source("entree_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // lost_focus : egui retire le focus d’un singleline sur Enter
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer_requete();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer_requete();
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);
            for op in ["+", "-", "*", "/", "//", "%", "^"] {
                self.bouton_insert(ui, op, op, InsertKind::Op);
            }
        });

        ui.horizontal_wrapped(|ui| {
            for (label, mot) in MOTS {
                self.bouton_insert(ui, label, mot, InsertKind::Word);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", ""]] {
                    for chiffre in ligne {
                        if chiffre.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, chiffre, chiffre, InsertKind::Digit);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        if !self.expression.is_empty() {
            ui.add_space(4.0);
            ui.label("Expression utilisée :");
            Self::champ_monospace(ui, "expression_out", &self.expression, 1);
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            let rouge = ui.visuals().error_fg_color;
            ui.colored_label(rouge, &self.erreur);
            if !self.detail.is_empty() {
                ui.colored_label(rouge, &self.detail);
            }
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                let d = &self.demarche;
                Self::champ_demarche(ui, "Conversion", "demarche_conversion", &d.conversion);
                Self::champ_demarche(ui, "Filtrée", "demarche_filtree", &d.filtree);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &d.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule : Frame + Label monospace, pas de TextEdit
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add(egui::Button::new(label).min_size(egui::vec2(40.0, 28.0)));
        if !resp.clicked() {
            return;
        }
        inserer(&mut self.entree, to_insert, kind);
        self.focus_entree = true;
    }

    /// Passe l’entrée au gestionnaire de requêtes, puis dépose résultat ou erreur.
    fn evaluer_requete(&mut self) {
        match requete::traiter(&self.entree) {
            Ok(r) => self.set_resultats(r),
            Err(e) => self.set_erreur(e.kind(), e.detail()),
        }
        self.focus_entree = true;
    }
}

/// Insertion avec espacement automatique (mots séparés, opérateurs aérés).
fn inserer(entree: &mut String, to_insert: &str, kind: InsertKind) {
    match kind {
        InsertKind::CloseParen => {
            entree.truncate(entree.trim_end().len());
            entree.push_str(to_insert);
        }
        InsertKind::OpenParen => {
            if entree.ends_with(|c: char| c.is_alphanumeric() || c == ')') {
                entree.push(' ');
            }
            entree.push_str(to_insert);
        }
        InsertKind::Op => {
            entree.truncate(entree.trim_end().len());
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(to_insert);
            entree.push(' ');
        }
        InsertKind::Digit => entree.push_str(to_insert),
        InsertKind::Word => {
            if !entree.is_empty() && !entree.ends_with(char::is_whitespace) {
                entree.push(' ');
            }
            entree.push_str(to_insert);
            entree.push(' ');
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Word,
    Op,
    OpenParen,
    CloseParen,
}
