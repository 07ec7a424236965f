// Hazard-scene progress: which hazards were spotted and what to tell the user
use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

use crate::model::{HAZARDS, HazardId, HazardZone, Point, SoundCue, hazard};

pub const INTRO_TEXT: &str = "Observa con atención la imagen. Existen 3 situaciones de riesgo. Haz clic sobre los lugares que consideres peligrosos.";
pub const ALREADY_FOUND_TEXT: &str = "⚠️ Este riesgo ya fue identificado. Continúa observando el área.";
pub const MISS_TEXT: &str = "❌ Este punto no representa un riesgo en este escenario. Continúa observando el área.";
pub const SUMMARY_TEXT: &str = "🎉 Actividad completada\n\n\
Has identificado correctamente todos los riesgos presentes en el área.\n\n\
• Derrames de líquidos: pueden causar resbalones.\n\
• Pisos sucios o desordenados: aumentan el riesgo de caídas.\n\
• Máquinas averiadas: pueden provocar accidentes graves.\n\n\
Reconocer los peligros es el primer paso para prevenir accidentes y proteger tu vida y la de tus compañeros.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneStage {
    /// Clicks are hit-tested against the hazard zones.
    Searching,
    /// Every hazard found; the "continue" action is offered.
    Completed,
    /// Closing summary shown; the next action leaves for the assembly.
    Summary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Found(HazardId),
    AlreadyFound(HazardId),
    Miss,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HazardScene {
    pub found: BTreeSet<HazardId>,
    pub stage: SceneStage,
    pub feedback: String,
    pub shake: bool,
    /// Cue to play for the latest outcome; paired with `version` so the same
    /// cue twice in a row still replays.
    pub last_cue: Option<SoundCue>,
    pub version: u64,
}

impl Default for HazardScene {
    fn default() -> Self {
        Self {
            found: BTreeSet::new(),
            stage: SceneStage::Searching,
            feedback: INTRO_TEXT.to_string(),
            shake: false,
            last_cue: None,
            version: 0,
        }
    }
}

impl HazardScene {
    pub fn total(&self) -> usize {
        HAZARDS.len()
    }

    pub fn is_found(&self, id: HazardId) -> bool {
        self.found.contains(&id)
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == HAZARDS.len()
    }

    pub fn click(&mut self, p: Point) -> ClickOutcome {
        if self.stage != SceneStage::Searching {
            return ClickOutcome::Ignored;
        }
        // first zone in declaration order wins when zones overlap
        match HAZARDS.iter().find(|z| z.contains(p)) {
            Some(zone) if self.found.contains(&zone.id) => {
                self.feedback = ALREADY_FOUND_TEXT.to_string();
                ClickOutcome::AlreadyFound(zone.id)
            }
            Some(zone) => {
                self.found.insert(zone.id);
                self.feedback = found_text(zone.id);
                self.cue(SoundCue::Success);
                if self.is_complete() {
                    self.stage = SceneStage::Completed;
                }
                ClickOutcome::Found(zone.id)
            }
            None => {
                self.feedback = MISS_TEXT.to_string();
                self.shake = true;
                self.cue(SoundCue::Error);
                ClickOutcome::Miss
            }
        }
    }

    pub fn clear_shake(&mut self) {
        self.shake = false;
    }

    /// Moves from the completed state to the closing summary. No-op otherwise.
    pub fn show_summary(&mut self) -> bool {
        if self.stage != SceneStage::Completed {
            return false;
        }
        self.stage = SceneStage::Summary;
        self.feedback = SUMMARY_TEXT.to_string();
        true
    }

    /// Hazards already found, in definition order (marker rendering order).
    pub fn found_zones(&self) -> impl Iterator<Item = &'static HazardZone> + '_ {
        HAZARDS.iter().filter(|z| self.is_found(z.id))
    }

    fn cue(&mut self, cue: SoundCue) {
        self.last_cue = Some(cue);
        self.version = self.version.wrapping_add(1);
    }
}

pub enum HazardAction {
    Click(Point),
    ClearShake,
    ShowSummary,
}

impl Reducible for HazardScene {
    type Action = HazardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let changed = match action {
            HazardAction::Click(p) => new.click(p) != ClickOutcome::Ignored,
            HazardAction::ClearShake => {
                let was = new.shake;
                new.clear_shake();
                was
            }
            HazardAction::ShowSummary => new.show_summary(),
        };
        if changed { Rc::new(new) } else { self }
    }
}

/// Message shown for a specific hazard once found.
pub fn found_text(id: HazardId) -> String {
    let z = hazard(id);
    format!("✅ {}\n\n{}", z.message, z.explanation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_all(scene: &mut HazardScene) {
        for z in &HAZARDS {
            scene.click(z.center());
        }
    }

    #[test]
    fn click_on_spill_finds_it() {
        let mut scene = HazardScene::default();
        let out = scene.click(Point::new(65.0, 80.0));
        assert_eq!(out, ClickOutcome::Found(HazardId::Derrame));
        assert!(scene.is_found(HazardId::Derrame));
        assert_eq!(scene.last_cue, Some(SoundCue::Success));
        assert_eq!(scene.feedback, found_text(HazardId::Derrame));
        assert!(scene.feedback.contains("Derrame de líquido identificado"));
        assert!(!scene.shake);
    }

    #[test]
    fn click_at_origin_misses() {
        let mut scene = HazardScene::default();
        let out = scene.click(Point::new(0.0, 0.0));
        assert_eq!(out, ClickOutcome::Miss);
        assert!(scene.found.is_empty());
        assert!(scene.shake);
        assert_eq!(scene.last_cue, Some(SoundCue::Error));
        assert_eq!(scene.feedback, MISS_TEXT);
        scene.clear_shake();
        assert!(!scene.shake);
    }

    #[test]
    fn every_point_inside_radius_hits() {
        for z in &HAZARDS {
            for step in 0..16 {
                let angle = step as f64 * std::f64::consts::TAU / 16.0;
                for r in [0.0, z.radius * 0.5, z.radius * 0.999] {
                    let mut scene = HazardScene::default();
                    let p = Point::new(z.x + r * angle.cos(), z.y + r * angle.sin());
                    assert_eq!(scene.click(p), ClickOutcome::Found(z.id), "{p:?}");
                }
            }
        }
    }

    #[test]
    fn points_outside_all_zones_leave_found_unchanged() {
        let mut scene = HazardScene::default();
        scene.click(Point::new(15.0, 85.0));
        let before = scene.found.clone();
        for p in [
            Point::new(50.0, 50.0),
            Point::new(100.0, 0.0),
            Point::new(65.0, 89.5),
            Point::new(30.0, 30.0),
        ] {
            assert_eq!(scene.click(p), ClickOutcome::Miss);
            assert_eq!(scene.found, before);
        }
    }

    #[test]
    fn repeat_hit_reports_already_found_without_cue() {
        let mut scene = HazardScene::default();
        scene.click(Point::new(77.0, 45.0));
        let version = scene.version;
        let out = scene.click(Point::new(78.0, 46.0));
        assert_eq!(out, ClickOutcome::AlreadyFound(HazardId::Maquina));
        assert_eq!(scene.found.len(), 1);
        assert_eq!(scene.version, version);
        assert_eq!(scene.feedback, ALREADY_FOUND_TEXT);
    }

    #[test]
    fn found_set_grows_monotonically_and_completes_only_with_all_ids() {
        let mut scene = HazardScene::default();
        let clicks = [
            Point::new(65.0, 80.0),
            Point::new(65.0, 80.0),
            Point::new(1.0, 1.0),
            Point::new(15.0, 85.0),
        ];
        let mut last = 0;
        for p in clicks {
            scene.click(p);
            assert!(scene.found.len() >= last);
            assert!(scene.found.len() <= 3);
            last = scene.found.len();
        }
        assert!(!scene.is_complete());
        assert_eq!(scene.stage, SceneStage::Searching);
        scene.click(Point::new(77.0, 45.0));
        assert!(scene.is_complete());
        assert_eq!(scene.stage, SceneStage::Completed);
    }

    #[test]
    fn clicks_ignored_after_completion() {
        let mut scene = HazardScene::default();
        find_all(&mut scene);
        let snapshot = scene.clone();
        assert_eq!(scene.click(Point::new(0.0, 0.0)), ClickOutcome::Ignored);
        assert_eq!(scene, snapshot);
    }

    #[test]
    fn summary_only_after_completion() {
        let mut scene = HazardScene::default();
        assert!(!scene.show_summary());
        find_all(&mut scene);
        assert!(scene.show_summary());
        assert_eq!(scene.stage, SceneStage::Summary);
        assert_eq!(scene.feedback, SUMMARY_TEXT);
        assert!(!scene.show_summary());
        assert_eq!(scene.click(Point::new(65.0, 80.0)), ClickOutcome::Ignored);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let scene = Rc::new(HazardScene::default());
        let same = scene.clone().reduce(HazardAction::ClearShake);
        assert!(Rc::ptr_eq(&scene, &same));
        let next = scene.clone().reduce(HazardAction::Click(Point::new(0.0, 0.0)));
        assert!(next.shake);
        let cleared = next.reduce(HazardAction::ClearShake);
        assert!(!cleared.shake);
    }
}
