//! Visual primitives: the single-faced slice and the six-faced volume cube.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::assets::{SeismicImage, SeismicTextures};
use crate::error::ViewerError;
use crate::scene::materials;
use crate::scene::picking::PickShape;

/// Stable identity of every primitive the picker can report.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Inline,
    Crossline,
    Zplane,
    Cube,
}

impl PrimitiveId {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveId::Inline => "inline",
            PrimitiveId::Crossline => "crossline",
            PrimitiveId::Zplane => "zplane",
            PrimitiveId::Cube => "cube",
        }
    }

    /// Image shown in the inspection panel when this primitive is clicked.
    pub fn inspection_image(self) -> SeismicImage {
        match self {
            PrimitiveId::Inline => SeismicImage::InLine,
            PrimitiveId::Crossline => SeismicImage::CrossLine,
            PrimitiveId::Zplane => SeismicImage::ZPlane,
            PrimitiveId::Cube => SeismicImage::Cube,
        }
    }
}

/// Marker + hit geometry on the entity that represents a whole primitive.
#[derive(Component, Clone, Copy, Debug)]
pub struct SeismicPrimitive {
    pub id: PrimitiveId,
    pub shape: PickShape,
}

/// Position and XYZ Euler rotation in scene space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    pub rotation: Vec3,
}

impl Placement {
    pub fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}

/// What the scene graph needs from a primitive. Geometry and textures are
/// fixed at construction; only the placement changes afterwards.
pub trait VisualPrimitive {
    fn id(&self) -> PrimitiveId;

    fn pick_shape(&self) -> PickShape;

    /// Spawns the renderable entity (and any child faces) at `transform`.
    fn spawn(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        textures: &SeismicTextures,
        transform: Transform,
    ) -> Entity;
}

/// A flat double-sided rectangle in its local XY plane.
#[derive(Clone, Debug, PartialEq)]
pub struct SlicePrimitive {
    id: PrimitiveId,
    width: f32,
    height: f32,
    image: SeismicImage,
}

impl SlicePrimitive {
    pub fn new(
        id: PrimitiveId,
        width: f32,
        height: f32,
        image: SeismicImage,
    ) -> Result<Self, ViewerError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ViewerError::InvalidDimensions(Vec3::new(width, height, 0.0)));
        }
        Ok(Self {
            id,
            width,
            height,
            image,
        })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Front and back faces draw the same image.
    pub fn face_images(&self) -> [SeismicImage; 2] {
        [self.image, self.image]
    }
}

impl VisualPrimitive for SlicePrimitive {
    fn id(&self) -> PrimitiveId {
        self.id
    }

    fn pick_shape(&self) -> PickShape {
        PickShape::Rect {
            half_size: self.size() * 0.5,
        }
    }

    fn spawn(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        textures: &SeismicTextures,
        transform: Transform,
    ) -> Entity {
        let material = materials::seismic_surface_material(materials, textures.get(self.image));
        commands
            .spawn((
                Mesh3d(meshes.add(Rectangle::new(self.width, self.height))),
                MeshMaterial3d(material),
                transform,
                Visibility::Visible,
                Name::new(self.id.name()),
                SeismicPrimitive {
                    id: self.id,
                    shape: self.pick_shape(),
                },
            ))
            .id()
    }
}

/// Cube faces in the order face images are assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeFace {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Front,
        CubeFace::Back,
    ];

    /// Size and local transform of the face quad on a `size` box centered at the origin.
    fn quad(self, size: Vec3) -> (Vec2, Transform) {
        let half = size * 0.5;
        match self {
            CubeFace::Right => (
                Vec2::new(size.z, size.y),
                Transform::from_xyz(half.x, 0.0, 0.0).with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            ),
            CubeFace::Left => (
                Vec2::new(size.z, size.y),
                Transform::from_xyz(-half.x, 0.0, 0.0)
                    .with_rotation(Quat::from_rotation_y(-FRAC_PI_2)),
            ),
            CubeFace::Top => (
                Vec2::new(size.x, size.z),
                Transform::from_xyz(0.0, half.y, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            ),
            CubeFace::Bottom => (
                Vec2::new(size.x, size.z),
                Transform::from_xyz(0.0, -half.y, 0.0)
                    .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ),
            CubeFace::Front => (
                Vec2::new(size.x, size.y),
                Transform::from_xyz(0.0, 0.0, half.z),
            ),
            CubeFace::Back => (
                Vec2::new(size.x, size.y),
                Transform::from_xyz(0.0, 0.0, -half.z).with_rotation(Quat::from_rotation_y(PI)),
            ),
        }
    }
}

/// Marker for the quads that make up a cube's faces. They carry no pick shape;
/// the parent cube is hit-tested as a whole.
#[derive(Component, Clone, Copy, Debug)]
pub struct CubeFaceQuad(pub CubeFace);

/// The survey volume: a box with one image per face.
#[derive(Clone, Debug, PartialEq)]
pub struct CubePrimitive {
    size: Vec3,
    faces: [SeismicImage; 6],
}

impl CubePrimitive {
    /// Faces take images in `CubeFace::ALL` order. With fewer than six images the
    /// last one carries forward to the remaining faces; extra images are ignored.
    pub fn new(
        width: f32,
        height: f32,
        depth: f32,
        images: &[SeismicImage],
    ) -> Result<Self, ViewerError> {
        if !(width > 0.0 && height > 0.0 && depth > 0.0) {
            return Err(ViewerError::InvalidDimensions(Vec3::new(width, height, depth)));
        }
        let last = *images.last().ok_or(ViewerError::NoCubeImages)?;
        let faces = std::array::from_fn(|i| images.get(i).copied().unwrap_or(last));
        Ok(Self {
            size: Vec3::new(width, height, depth),
            faces,
        })
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn face_image(&self, face: CubeFace) -> SeismicImage {
        self.faces[face as usize]
    }

    pub fn face_images(&self) -> [SeismicImage; 6] {
        self.faces
    }
}

impl VisualPrimitive for CubePrimitive {
    fn id(&self) -> PrimitiveId {
        PrimitiveId::Cube
    }

    fn pick_shape(&self) -> PickShape {
        PickShape::Cuboid {
            half_size: self.size * 0.5,
        }
    }

    fn spawn(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        textures: &SeismicTextures,
        transform: Transform,
    ) -> Entity {
        let cube = commands
            .spawn((
                transform,
                Visibility::Visible,
                Name::new(PrimitiveId::Cube.name()),
                SeismicPrimitive {
                    id: PrimitiveId::Cube,
                    shape: self.pick_shape(),
                },
            ))
            .id();

        for face in CubeFace::ALL {
            let (quad_size, quad_transform) = face.quad(self.size);
            let material =
                materials::seismic_surface_material(materials, textures.get(self.face_image(face)));
            let quad = commands
                .spawn((
                    Mesh3d(meshes.add(Rectangle::from_size(quad_size))),
                    MeshMaterial3d(material),
                    quad_transform,
                    Visibility::Inherited,
                    CubeFaceQuad(face),
                ))
                .id();
            commands.entity(cube).add_child(quad);
        }

        cube
    }
}
