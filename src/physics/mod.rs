//! Convex collision detection for scene entities.
//!
//! # Architecture
//!
//! Every call to [`CollisionSystem::update`] runs one full sweep:
//!
//! 1. Collect collidable entities (sorted by entity handle)
//! 2. Transform each entity's local vertices into world space
//! 3. Broadphase: enumerate every unordered pair (no spatial culling)
//! 4. Narrowphase: GJK boolean intersection test per pair
//! 5. Record a [`Collision`] for every intersecting pair
//!
//! The collision set is rebuilt from scratch on each sweep.

pub mod broadphase;
pub mod contact;
pub mod error;
pub mod narrowphase;
pub mod simplex;
pub mod support;
pub mod world_space;

use glam::Vec3;

use crate::ecs::components::physics::Collidable;
use crate::ecs::components::rendering::Mesh;
use crate::ecs::components::transform::GlobalTransform;

use self::contact::Collision;
use self::error::{CollisionError, CollisionResult};
use self::narrowphase::{gjk_intersection, GjkOutcome};
use self::support::ConvexPointSet;

pub use self::narrowphase::{gjk3d, try_gjk3d};

/// Configuration for the GJK test and the collision sweep.
#[derive(Debug, Clone)]
pub struct CollisionConfig {
    /// Upper bound on GJK iterations before giving up as "not intersecting". Default: 64.
    pub max_iterations: u32,
    /// Seed search direction of the first support point. Default: (1, 0, 0).
    pub initial_direction: Vec3,
    /// Relative squared size under which a search direction counts as zero,
    /// meaning the origin lies on the simplex. Scaled by the simplex and
    /// Minkowski-difference extents, so it is unit-independent. Default: 1e-10.
    pub degenerate_epsilon: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            initial_direction: Vec3::X,
            degenerate_epsilon: 1e-10,
        }
    }
}

/// Counters from the most recent sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Collidable entities seen.
    pub entities: usize,
    /// Pairs handed to GJK.
    pub pairs_tested: usize,
    /// Pairs skipped because one side had unusable geometry.
    pub pairs_skipped: usize,
    /// Pairs reported intersecting.
    pub collisions: usize,
}

enum PairOutcome {
    Skipped,
    Tested(GjkOutcome),
}

/// Owns the collision set and rebuilds it once per update tick.
#[derive(Debug, Default)]
pub struct CollisionSystem {
    config: CollisionConfig,
    collisions: Vec<Collision>,
    stats: SweepStats,
}

impl CollisionSystem {
    /// Create a collision system with the given configuration.
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            collisions: Vec::new(),
            stats: SweepStats::default(),
        }
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Collisions found by the last [`update`](Self::update).
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Counters of the last sweep.
    pub fn last_sweep(&self) -> SweepStats {
        self.stats
    }

    /// Whether `entity` took part in any collision during the last sweep.
    pub fn is_colliding(&self, entity: hecs::Entity) -> bool {
        self.collisions.iter().any(|c| c.involves(entity))
    }

    /// Run one sweep over all collidable entities and rebuild the collision set.
    ///
    /// Entities without usable geometry are logged and skipped; they never
    /// abort the sweep for the rest of the scene.
    pub fn update(&mut self, world: &hecs::World) {
        self.collisions.clear();

        let bodies = collect_world_points(world);
        let shapes: Vec<Option<ConvexPointSet<'_>>> = bodies
            .iter()
            .map(|(entity, points)| match points {
                Ok(points) => ConvexPointSet::from_points(points).ok(),
                Err(e) => {
                    tracing::warn!(?entity, "skipping entity in collision sweep: {e}");
                    None
                }
            })
            .collect();

        let pairs: Vec<(usize, usize)> = broadphase::unordered_pairs(shapes.len()).collect();
        let test_pair = |&(i, j): &(usize, usize)| match (&shapes[i], &shapes[j]) {
            (Some(a), Some(b)) => PairOutcome::Tested(gjk_intersection(a, b, &self.config)),
            _ => PairOutcome::Skipped,
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<PairOutcome> = {
            use rayon::prelude::*;
            pairs.par_iter().map(test_pair).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<PairOutcome> = pairs.iter().map(test_pair).collect();

        let mut stats = SweepStats {
            entities: bodies.len(),
            ..Default::default()
        };
        for (&(i, j), outcome) in pairs.iter().zip(outcomes) {
            match outcome {
                PairOutcome::Skipped => stats.pairs_skipped += 1,
                PairOutcome::Tested(result) => {
                    stats.pairs_tested += 1;
                    tracing::trace!(a = ?bodies[i].0, b = ?bodies[j].0, ?result, "pair tested");
                    if result.is_intersecting() {
                        self.collisions.push(Collision {
                            a: bodies[i].0,
                            b: bodies[j].0,
                        });
                    }
                }
            }
        }
        stats.collisions = self.collisions.len();
        self.stats = stats;

        tracing::debug!(
            entities = stats.entities,
            pairs_tested = stats.pairs_tested,
            pairs_skipped = stats.pairs_skipped,
            collisions = stats.collisions,
            "collision sweep finished"
        );
    }
}

/// World-space vertices of every collidable entity, sorted by entity.
fn collect_world_points(world: &hecs::World) -> Vec<(hecs::Entity, CollisionResult<Vec<Vec3>>)> {
    let mut bodies: Vec<(hecs::Entity, CollisionResult<Vec<Vec3>>)> = world
        .query::<hecs::With<(&GlobalTransform, Option<&Mesh>), &Collidable>>()
        .iter()
        .map(|(entity, (transform, mesh))| {
            let points = match mesh {
                Some(mesh) => ConvexPointSet::from_flat(&mesh.geometry().positions)
                    .map(|local| world_space::transform_points(local.points(), &transform.0)),
                None => Err(CollisionError::MissingGeometry { entity }),
            };
            (entity, points)
        })
        .collect();
    bodies.sort_by_key(|(entity, _)| *entity);
    bodies
}
