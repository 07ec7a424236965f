//! Static configuration and geometry for the training activities.
//! Zones are expressed in percentage-of-image space so hit-testing follows
//! the rendered size of the image.

use serde::{Deserialize, Serialize};

/// Maximum distance (exclusive) between the pointer and a drop zone centre.
pub const DROP_THRESHOLD: f64 = 8.0;
/// How long the scene keeps the shake class after a miss.
pub const SHAKE_MS: u32 = 400;
/// localStorage key written once the hazard activity is finished.
pub const COMPLETION_KEY: &str = "riesgos_completados";
/// DataTransfer format used for the dragged part.
pub const DRAG_FORMAT: &str = "parteId";

pub const SCENE_IMAGE: &str = "assets/fabrica.png";
pub const MACHINE_IMAGE: &str = "assets/maquina.png";

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box snapshot of a rendered element, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Converts a client-space pointer position into percentages of `rect`.
/// Returns `None` while the element has no layout (zero width or height).
pub fn to_percent(client_x: f64, client_y: f64, rect: Rect) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some(Point {
        x: (client_x - rect.left) / rect.width * 100.0,
        y: (client_y - rect.top) / rect.height * 100.0,
    })
}

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardId {
    Derrame,
    Piso,
    Maquina,
}

impl HazardId {
    pub fn as_str(self) -> &'static str {
        match self {
            HazardId::Derrame => "derrame",
            HazardId::Piso => "piso",
            HazardId::Maquina => "maquina",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardZone {
    pub id: HazardId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub message: &'static str,
    pub explanation: &'static str,
}

impl HazardZone {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        distance(p, self.center()) <= self.radius
    }
}

pub static HAZARDS: [HazardZone; 3] = [
    HazardZone {
        id: HazardId::Derrame,
        x: 65.0,
        y: 80.0,
        radius: 9.0,
        message: "Derrame de líquido identificado",
        explanation: "Los derrames de líquidos aumentan el riesgo de resbalones y caídas, lo que puede provocar lesiones graves.",
    },
    HazardZone {
        id: HazardId::Piso,
        x: 15.0,
        y: 85.0,
        radius: 9.0,
        message: "Piso sucio identificado",
        explanation: "Un piso sucio o desordenado dificulta la movilidad segura y aumenta el riesgo de accidentes.",
    },
    HazardZone {
        id: HazardId::Maquina,
        x: 77.0,
        y: 45.0,
        radius: 9.0,
        message: "Máquina averiada identificada",
        explanation: "Las máquinas en mal estado representan un riesgo mecánico que puede causar atrapamientos o quemaduras.",
    },
];

pub fn hazard(id: HazardId) -> &'static HazardZone {
    // HAZARDS holds exactly one entry per id, in declaration order
    match id {
        HazardId::Derrame => &HAZARDS[0],
        HazardId::Piso => &HAZARDS[1],
        HazardId::Maquina => &HAZARDS[2],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartId {
    Motor,
    Engranaje,
    Correa,
}

impl PartId {
    pub fn as_str(self) -> &'static str {
        match self {
            PartId::Motor => "motor",
            PartId::Engranaje => "engranaje",
            PartId::Correa => "correa",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartZone {
    pub id: PartId,
    pub x: f64,
    pub y: f64,
}

impl PartZone {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub static PARTS: [Part; 3] = [
    Part { id: PartId::Motor, image: "assets/motor.png" },
    Part { id: PartId::Engranaje, image: "assets/engranaje.png" },
    Part { id: PartId::Correa, image: "assets/correa.png" },
];

pub static ZONES: [PartZone; 3] = [
    PartZone { id: PartId::Motor, x: 78.0, y: 57.0 },
    PartZone { id: PartId::Engranaje, x: 75.0, y: 26.0 },
    PartZone { id: PartId::Correa, x: 28.0, y: 40.0 },
];

pub fn part(id: PartId) -> &'static Part {
    match id {
        PartId::Motor => &PARTS[0],
        PartId::Engranaje => &PARTS[1],
        PartId::Correa => &PARTS[2],
    }
}

pub fn zone(id: PartId) -> &'static PartZone {
    match id {
        PartId::Motor => &ZONES[0],
        PartId::Engranaje => &ZONES[1],
        PartId::Correa => &ZONES[2],
    }
}

/// Payload attached to the DataTransfer when a part starts being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub part: PartId,
}

impl DragPayload {
    pub fn encode(&self) -> String {
        // a struct of one unit enum cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Anything unreadable comes back as `None`, which the drop handler
    /// treats like a wrong part.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Success,
    Error,
}

impl SoundCue {
    pub fn src(self) -> &'static str {
        match self {
            SoundCue::Success => "assets/sounds/success.mp3",
            SoundCue::Error => "assets/sounds/error.mp3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_follows_rendered_rect() {
        let rect = Rect { left: 100.0, top: 50.0, width: 800.0, height: 400.0 };
        let p = to_percent(500.0, 250.0, rect).unwrap();
        assert_eq!(p, Point::new(50.0, 50.0));
        let corner = to_percent(100.0, 50.0, rect).unwrap();
        assert_eq!(corner, Point::new(0.0, 0.0));
    }

    #[test]
    fn percent_rejects_empty_layout() {
        let rect = Rect { left: 0.0, top: 0.0, width: 0.0, height: 300.0 };
        assert!(to_percent(10.0, 10.0, rect).is_none());
    }

    #[test]
    fn hazard_radius_is_inclusive() {
        let z = hazard(HazardId::Derrame);
        assert!(z.contains(Point::new(74.0, 80.0)));
        assert!(!z.contains(Point::new(74.01, 80.0)));
    }

    #[test]
    fn lookups_match_tables() {
        for z in &HAZARDS {
            assert_eq!(hazard(z.id), z);
        }
        for p in &PARTS {
            assert_eq!(part(p.id), p);
            assert_eq!(zone(p.id).id, p.id);
        }
    }

    #[test]
    fn drag_payload_uses_lowercase_ids() {
        let raw = DragPayload { part: PartId::Engranaje }.encode();
        assert_eq!(raw, r#"{"part":"engranaje"}"#);
        assert_eq!(DragPayload::decode(&raw).map(|p| p.part), Some(PartId::Engranaje));
        assert_eq!(DragPayload::decode("motor"), None);
        assert_eq!(DragPayload::decode(""), None);
    }
}
