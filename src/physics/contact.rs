//! Collision records produced by the collision sweep.

/// A pair of entities found intersecting during one sweep.
///
/// GJK only answers "do they intersect", so a record carries no contact
/// normal or penetration depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collision {
    /// The entity that sorts first.
    pub a: hecs::Entity,
    /// The entity that sorts second.
    pub b: hecs::Entity,
}

impl Collision {
    /// Whether `entity` is one side of this record.
    #[inline]
    pub fn involves(&self, entity: hecs::Entity) -> bool {
        self.a == entity || self.b == entity
    }

    /// The other side of the record, if `entity` takes part in it.
    pub fn other(&self, entity: hecs::Entity) -> Option<hecs::Entity> {
        if self.a == entity {
            Some(self.b)
        } else if self.b == entity {
            Some(self.a)
        } else {
            None
        }
    }
}
