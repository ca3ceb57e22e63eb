//! Snap continuous poses onto the fixed step tables and render the view
//! descriptor text.

use crate::constants::AZIMUTH_PERIOD;
use crate::pose::{Axis, Pose};
use std::fmt;

/// One legal discrete value of an axis and the phrase that names it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub value: f32,
    pub phrase: &'static str,
}

const fn step(value: f32, phrase: &'static str) -> Step {
    Step { value, phrase }
}

pub static AZIMUTH_STEPS: [Step; 8] = [
    step(0.0, "front view"),
    step(45.0, "front-right quarter view"),
    step(90.0, "right side view"),
    step(135.0, "back-right quarter view"),
    step(180.0, "back view"),
    step(225.0, "back-left quarter view"),
    step(270.0, "left side view"),
    step(315.0, "front-left quarter view"),
];

pub static ELEVATION_STEPS: [Step; 4] = [
    step(-30.0, "low-angle shot"),
    step(0.0, "eye-level shot"),
    step(30.0, "elevated shot"),
    step(60.0, "high-angle shot"),
];

pub static DISTANCE_STEPS: [Step; 3] = [
    step(0.6, "close-up"),
    step(1.0, "medium shot"),
    step(1.4, "wide shot"),
];

/// Token the downstream image model was fine-tuned to expect before a view
/// descriptor.
pub const TRIGGER_TOKEN: &str = "<sks>";

pub fn steps_for(axis: Axis) -> &'static [Step] {
    match axis {
        Axis::Azimuth => &AZIMUTH_STEPS,
        Axis::Elevation => &ELEVATION_STEPS,
        Axis::Distance => &DISTANCE_STEPS,
    }
}

/// Entry of `table` closest to `value`; on exact ties the earlier (smaller)
/// entry wins. Returns `None` only for an empty table.
pub fn nearest_step(value: f32, table: &[f32]) -> Option<f32> {
    nearest_index(table.len(), |i| (table[i] - value).abs()).map(|i| table[i])
}

/// Snap one axis value to its table entry. Azimuth is measured around the
/// circle, the other axes linearly.
pub fn snap_step(axis: Axis, value: f32) -> &'static Step {
    let table = steps_for(axis);
    let best = nearest_index(table.len(), |i| match axis {
        Axis::Azimuth => circular_distance(table[i].value, value, AZIMUTH_PERIOD),
        _ => (table[i].value - value).abs(),
    });
    // step tables are non-empty statics
    &table[best.unwrap_or(0)]
}

fn nearest_index(len: usize, dist: impl Fn(usize) -> f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for i in 0..len {
        let d = dist(i);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[inline]
fn circular_distance(a: f32, b: f32, period: f32) -> f32 {
    let d = (a - b).rem_euclid(period);
    d.min(period - d)
}

/// Snap every axis independently.
pub fn quantize(pose: Pose) -> Pose {
    Pose {
        azimuth: snap_step(Axis::Azimuth, pose.azimuth).value,
        elevation: snap_step(Axis::Elevation, pose.elevation).value,
        distance: snap_step(Axis::Distance, pose.distance).value,
    }
}

/// True when every component equals an entry of its step table.
pub fn is_quantized(pose: &Pose) -> bool {
    Axis::ALL
        .iter()
        .all(|&a| steps_for(a).iter().any(|s| s.value == pose.get(a)))
}

/// The three snapped phrases for a pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub azimuth: &'static str,
    pub elevation: &'static str,
    pub distance: &'static str,
}

impl Descriptor {
    pub fn of(pose: &Pose) -> Self {
        Self {
            azimuth: snap_step(Axis::Azimuth, pose.azimuth).phrase,
            elevation: snap_step(Axis::Elevation, pose.elevation).phrase,
            distance: snap_step(Axis::Distance, pose.distance).phrase,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.azimuth, self.elevation, self.distance)
    }
}

/// `"<azimuth phrase> <elevation phrase> <distance phrase>"`
pub fn describe(pose: &Pose) -> String {
    Descriptor::of(pose).to_string()
}

/// Overlay text: the descriptor prefixed with the trigger token.
pub fn trigger_prompt(pose: &Pose) -> String {
    format!("{} {}", TRIGGER_TOKEN, Descriptor::of(pose))
}

/// Instruction sentence handed to the image generation service together with
/// the source image.
pub fn edit_instruction(pose: &Pose) -> String {
    let d = Descriptor::of(pose);
    format!(
        "Maintain the exact identity and details of the person or subject in this image. \
         Change the camera perspective to a {}, {}, and {}. \
         Ensure consistent lighting and environmental details.",
        d.azimuth, d.elevation, d.distance
    )
}
