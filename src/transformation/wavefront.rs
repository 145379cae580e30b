//! Export of capsule meshes to Wavefront `.obj` files.

use crate::math::{Point, Real};
use crate::topology::MeshTopology;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl MeshTopology {
    /// Outputs a Wavefront (`.obj`) file at the given path, with `points` as
    /// the vertex buffer.
    ///
    /// Faces keep their arity, so capsule meshes are written as quads and
    /// triangles. This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, points: &[Point<Real>], path: &Path) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: points
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .faces()
                        .map(|face| {
                            SimplePolygon(
                                face.iter()
                                    .map(|i| IndexTuple(*i as usize, None, None))
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: "capsule".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "capsule".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
