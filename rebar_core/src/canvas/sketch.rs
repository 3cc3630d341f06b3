//! In-memory recording canvas.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::entities::{
    Alignment, Arc, Circle, Entity, Hatch, Line, LinearDimension, Polyline, Text, Transformable,
};
use super::Canvas;
use crate::geometry::{Point, Transform};

/// Index of an entity inside a [`Sketch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub usize);

/// A canvas that just keeps every entity in a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    entities: Vec<Entity>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities behind `ids`, skipping unknown ids
    pub fn resolve<'a>(&'a self, ids: &'a [EntityId]) -> impl Iterator<Item = &'a Entity> + 'a {
        ids.iter().filter_map(move |id| self.get(*id))
    }

    fn push(&mut self, entity: Entity) -> EntityId {
        trace!(kind = entity.type_name(), index = self.entities.len(), "sketch entity");
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }
}

impl Canvas for Sketch {
    type Handle = EntityId;

    fn draw_line(&mut self, start: Point, end: Point) -> EntityId {
        self.push(Entity::Line(Line { start, end }))
    }

    fn draw_arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> EntityId {
        self.push(Entity::Arc(Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }))
    }

    fn draw_circle(&mut self, center: Point, radius: f64) -> EntityId {
        self.push(Entity::Circle(Circle { center, radius }))
    }

    fn draw_polyline(&mut self, points: &[Point], closed: bool) -> EntityId {
        self.push(Entity::Polyline(Polyline {
            points: points.to_vec(),
            closed,
        }))
    }

    fn draw_text(
        &mut self,
        text: &str,
        height: f64,
        position: Point,
        rotation: f64,
        alignment: Alignment,
    ) -> EntityId {
        self.push(Entity::Text(Text {
            content: text.to_string(),
            height,
            position,
            rotation,
            alignment,
        }))
    }

    fn draw_linear_dimension(
        &mut self,
        base: Point,
        p1: Point,
        p2: Point,
        rotation: f64,
        style: &str,
    ) -> EntityId {
        self.push(Entity::Dimension(LinearDimension {
            base,
            p1,
            p2,
            rotation,
            style: style.to_string(),
        }))
    }

    fn draw_filled_rect(&mut self, corners: &[Point]) -> EntityId {
        self.push(Entity::Hatch(Hatch {
            boundary: corners.to_vec(),
        }))
    }

    fn transform(&mut self, handles: &[EntityId], transform: &Transform) {
        for id in handles {
            if let Some(entity) = self.entities.get_mut(id.0) {
                entity.apply(transform);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut sketch = Sketch::new();
        let a = sketch.draw_line(Point::origin(), Point::new(1.0, 0.0));
        let b = sketch.draw_circle(Point::origin(), 0.5);
        assert_eq!(a, EntityId(0));
        assert_eq!(b, EntityId(1));
        assert_eq!(sketch.get(b).map(Entity::type_name), Some("CIRCLE"));
    }

    #[test]
    fn test_transform_only_touches_given_handles() {
        let mut sketch = Sketch::new();
        let a = sketch.draw_line(Point::origin(), Point::new(1.0, 0.0));
        let b = sketch.draw_line(Point::origin(), Point::new(1.0, 0.0));
        sketch.transform(&[a], &Transform::translation(0.0, 1.0));

        match (sketch.get(a), sketch.get(b)) {
            (Some(Entity::Line(moved)), Some(Entity::Line(still))) => {
                assert_eq!(moved.start, Point::new(0.0, 1.0));
                assert_eq!(still.start, Point::origin());
            }
            other => panic!("unexpected entities {:?}", other),
        }
    }

    #[test]
    fn test_resolve_and_serialize() {
        let mut sketch = Sketch::new();
        let t = sketch.draw_text("#1 2Ø12", 0.05, Point::new(1.0, 1.0), 0.0, Alignment::BottomCenter);
        let h = sketch.draw_filled_rect(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(sketch.resolve(&[t, h, EntityId(99)]).count(), 2);

        let json = serde_json::to_string(&sketch).unwrap();
        let back: Sketch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sketch);
    }
}
