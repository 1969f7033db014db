use crate::constants::MIN_STROKE_POINTS;
use crate::core::fade::{age_at, FadeParams};
use std::time::Duration;

/// Surface-local position in CSS pixels.
pub type Point = glam::Vec2;

/// Identifier handed out when a stroke is committed. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// A committed ink stroke.
///
/// The point sequence is frozen at commit; only `opacity` is refreshed by
/// `StrokeStore::update`.
#[derive(Clone, Debug)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    created_at: Duration,
    opacity: f32,
}

impl Stroke {
    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Opacity as of the last update pass.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Committed strokes in commit order.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    next_id: u64,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a finished gesture. Gestures with too few points to draw a
    /// segment are dropped and yield `None`.
    pub fn commit(&mut self, points: Vec<Point>, created_at: Duration) -> Option<StrokeId> {
        if points.len() < MIN_STROKE_POINTS {
            return None;
        }
        let id = StrokeId(self.next_id);
        self.next_id += 1;
        self.strokes.push(Stroke {
            id,
            points,
            created_at,
            opacity: 1.0,
        });
        Some(id)
    }

    /// Refreshes every stroke's opacity for `now` and evicts the expired ones.
    /// Returns how many strokes were removed.
    pub fn update(&mut self, now: Duration, fade: &FadeParams) -> usize {
        let before = self.strokes.len();
        self.strokes.retain_mut(|stroke| {
            let age = age_at(stroke.created_at, now);
            if fade.is_expired(age) {
                return false;
            }
            stroke.opacity = fade.opacity(age);
            true
        });
        before - self.strokes.len()
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}
