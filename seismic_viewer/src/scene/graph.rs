//! Scene graph: the set of primitives under one rotating root.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::assets::SeismicTextures;
use crate::scene::primitive::{Placement, PrimitiveId, VisualPrimitive};

/// Parent of every primitive. Its Y rotation spins the whole scene.
#[derive(Component, Default)]
pub struct SceneRoot;

/// Primitives currently in the scene, keyed by identity. At most one entity
/// per `PrimitiveId`.
#[derive(Resource)]
pub struct SceneGraph {
    root: Entity,
    members: HashMap<PrimitiveId, Entity>,
}

impl SceneGraph {
    pub fn new(root: Entity) -> Self {
        Self {
            root,
            members: HashMap::new(),
        }
    }

    /// Spawns a root entity and returns a graph built on it.
    pub fn spawn(commands: &mut Commands) -> Self {
        let root = commands
            .spawn((
                SceneRoot,
                Transform::default(),
                Visibility::Visible,
                Name::new("seismic_scene"),
            ))
            .id();
        Self::new(root)
    }

    pub fn root(&self) -> Entity {
        self.root
    }

    /// Places `primitive` and inserts it under the root. Adding a primitive
    /// that is already present only moves it.
    #[allow(clippy::too_many_arguments)]
    pub fn add_to_scene(
        &mut self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        textures: &SeismicTextures,
        primitive: &dyn VisualPrimitive,
        placement: Placement,
    ) -> Entity {
        let id = primitive.id();
        if let Some(&entity) = self.members.get(&id) {
            commands.entity(entity).insert(placement.transform());
            return entity;
        }
        let entity = primitive.spawn(commands, meshes, materials, textures, placement.transform());
        commands.entity(self.root).add_child(entity);
        self.members.insert(id, entity);
        debug!("added {} to scene", id.name());
        entity
    }

    pub fn entity(&self, id: PrimitiveId) -> Option<Entity> {
        self.members.get(&id).copied()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn remove(&mut self, commands: &mut Commands, id: PrimitiveId) -> bool {
        match self.members.remove(&id) {
            Some(entity) => {
                commands.entity(entity).despawn_recursive();
                true
            }
            None => false,
        }
    }

    /// Despawns every primitive. The root stays so the graph can be refilled.
    pub fn clear(&mut self, commands: &mut Commands) {
        for (_, entity) in self.members.drain() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Requests removal of all primitives.
#[derive(Event, Default)]
pub struct ClearScene;

pub fn clear_scene_system(
    mut events: EventReader<ClearScene>,
    mut commands: Commands,
    graph: Option<ResMut<SceneGraph>>,
) {
    if events.read().count() == 0 {
        return;
    }
    let Some(mut graph) = graph else {
        return;
    };
    let removed = graph.len();
    graph.clear(&mut commands);
    info!("cleared {removed} primitives from scene");
}
