// Machine assembly progress: placed parts and the zone under the pointer
use std::collections::BTreeMap;
use std::rc::Rc;

use yew::Reducible;

use crate::model::{DROP_THRESHOLD, PARTS, Part, PartId, Point, SoundCue, ZONES, distance, part, zone};

pub const INTRO_TEXT: &str = "Arrastra cada parte y colócala en su posición correcta.";
pub const MISMATCH_TEXT: &str = "❌ Esta pieza no corresponde a esa zona.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub image: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(PartId),
    Mismatch,
    /// Dropped while no zone was highlighted.
    NoTarget,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assembly {
    pub placed: BTreeMap<PartId, Placement>,
    pub hovered: Option<PartId>,
    pub feedback: String,
    pub last_cue: Option<SoundCue>,
    pub version: u64,
}

impl Default for Assembly {
    fn default() -> Self {
        Self {
            placed: BTreeMap::new(),
            hovered: None,
            feedback: INTRO_TEXT.to_string(),
            last_cue: None,
            version: 0,
        }
    }
}

impl Assembly {
    pub fn is_placed(&self, id: PartId) -> bool {
        self.placed.contains_key(&id)
    }

    pub fn is_complete(&self) -> bool {
        ZONES.iter().all(|z| self.placed.contains_key(&z.id))
    }

    /// Parts still waiting in the palette, in palette order.
    pub fn available_parts(&self) -> impl Iterator<Item = &'static Part> + '_ {
        PARTS.iter().filter(|p| !self.placed.contains_key(&p.id))
    }

    /// Highlights the unfilled zone under the pointer. When several zones
    /// are within reach the last one in zone order wins.
    pub fn drag_over(&mut self, p: Point) -> Option<PartId> {
        let mut hit = None;
        for z in ZONES.iter().filter(|z| !self.placed.contains_key(&z.id)) {
            if distance(p, z.center()) < DROP_THRESHOLD {
                hit = Some(z.id);
            }
        }
        self.hovered = hit;
        hit
    }

    pub fn drag_leave(&mut self) {
        self.hovered = None;
    }

    /// `dragged` is `None` when the drag payload could not be read.
    pub fn drop_part(&mut self, dragged: Option<PartId>) -> DropOutcome {
        let Some(target) = self.hovered.take() else {
            return DropOutcome::NoTarget;
        };
        match dragged {
            Some(id) if id == target && !self.placed.contains_key(&id) => {
                let z = zone(id);
                self.placed.insert(
                    id,
                    Placement {
                        image: part(id).image,
                        x: z.x,
                        y: z.y,
                    },
                );
                self.feedback = format!("✅ {} colocada correctamente", id.as_str());
                self.cue(SoundCue::Success);
                DropOutcome::Placed(id)
            }
            _ => {
                self.feedback = MISMATCH_TEXT.to_string();
                self.cue(SoundCue::Error);
                DropOutcome::Mismatch
            }
        }
    }

    fn cue(&mut self, cue: SoundCue) {
        self.last_cue = Some(cue);
        self.version = self.version.wrapping_add(1);
    }
}

pub enum AssemblyAction {
    DragOver(Point),
    DragLeave,
    Drop(Option<PartId>),
}

impl Reducible for Assembly {
    type Action = AssemblyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            AssemblyAction::DragOver(p) => {
                // dragover fires continuously; skip re-renders while the target is stable
                if new.drag_over(p) == self.hovered {
                    return self;
                }
            }
            AssemblyAction::DragLeave => {
                if self.hovered.is_none() {
                    return self;
                }
                new.drag_leave();
            }
            AssemblyAction::Drop(dragged) => {
                if new.drop_part(dragged) == DropOutcome::NoTarget {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}
