use core::fmt;

/// The winding convention of the faces of a [`MeshTopology`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Counter-clockwise faces, seen from outside, have outward normals.
    #[default]
    RightHanded,
    /// Clockwise faces, seen from outside, have outward normals.
    LeftHanded,
}

/// The subdivision scheme a renderer should apply to a [`MeshTopology`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SubdivisionScheme {
    /// Catmull-Clark subdivision, suited for quad-dominant meshes.
    #[default]
    CatmullClark,
}

/// Errors raised when building a [`MeshTopology`] from raw face data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A face has fewer than three vertices.
    #[error("face {face} has {count} vertices, at least 3 are required")]
    DegenerateFace {
        /// The index of the offending face.
        face: usize,
        /// Its vertex count.
        count: u32,
    },
    /// The face vertex counts don't add up to the number of indices.
    #[error("face vertex counts sum to {expected} but {actual} indices were given")]
    IndexCountMismatch {
        /// The sum of the face vertex counts.
        expected: usize,
        /// The number of face vertex indices.
        actual: usize,
    },
}

/// The face/vertex connectivity of a polygonal mesh.
///
/// The topology says nothing about point positions: face vertex indices
/// refer to entries of a separate point buffer, consumed positionally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshTopology {
    face_vertex_counts: Vec<u32>,
    face_vertex_indices: Vec<u32>,
    orientation: Orientation,
    scheme: SubdivisionScheme,
}

impl MeshTopology {
    /// Creates a topology from its face vertex counts and indices.
    ///
    /// Fails if a face has fewer than three vertices, or if the counts don't
    /// sum to the length of `face_vertex_indices`.
    pub fn new(
        face_vertex_counts: Vec<u32>,
        face_vertex_indices: Vec<u32>,
        orientation: Orientation,
        scheme: SubdivisionScheme,
    ) -> Result<Self, TopologyError> {
        if let Some((face, &count)) = face_vertex_counts
            .iter()
            .enumerate()
            .find(|(_, count)| **count < 3)
        {
            return Err(TopologyError::DegenerateFace { face, count });
        }

        let expected = face_vertex_counts.iter().map(|c| *c as usize).sum();
        if expected != face_vertex_indices.len() {
            return Err(TopologyError::IndexCountMismatch {
                expected,
                actual: face_vertex_indices.len(),
            });
        }

        Ok(Self::from_raw_parts(
            face_vertex_counts,
            face_vertex_indices,
            orientation,
            scheme,
        ))
    }

    pub(crate) fn from_raw_parts(
        face_vertex_counts: Vec<u32>,
        face_vertex_indices: Vec<u32>,
        orientation: Orientation,
        scheme: SubdivisionScheme,
    ) -> Self {
        Self {
            face_vertex_counts,
            face_vertex_indices,
            orientation,
            scheme,
        }
    }

    /// The number of vertices of each face.
    #[inline]
    pub fn face_vertex_counts(&self) -> &[u32] {
        &self.face_vertex_counts
    }

    /// The point indices of every face, concatenated.
    #[inline]
    pub fn face_vertex_indices(&self) -> &[u32] {
        &self.face_vertex_indices
    }

    /// The winding convention of the faces.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The subdivision scheme.
    #[inline]
    pub fn scheme(&self) -> SubdivisionScheme {
        self.scheme
    }

    /// The number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_vertex_counts.len()
    }

    /// The total number of face vertex indices.
    #[inline]
    pub fn num_indices(&self) -> usize {
        self.face_vertex_indices.len()
    }

    /// Returns `true` if this topology has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_vertex_counts.is_empty()
    }

    /// The largest point index referenced by a face, if any.
    pub fn max_point_index(&self) -> Option<u32> {
        self.face_vertex_indices.iter().copied().max()
    }

    /// Iterates through the point indices of each face.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        let mut remaining = &self.face_vertex_indices[..];
        self.face_vertex_counts.iter().map(move |count| {
            let (face, rest) = remaining.split_at(*count as usize);
            remaining = rest;
            face
        })
    }

    /// Splits every face into a fan of triangles.
    ///
    /// The winding of each face is preserved. Left-handed topologies are
    /// flipped so the returned triangles are always counter-clockwise.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let num_tris = self
            .face_vertex_counts
            .iter()
            .map(|c| *c as usize - 2)
            .sum();
        let mut out = Vec::with_capacity(num_tris);

        for face in self.faces() {
            for i in 1..face.len() - 1 {
                match self.orientation {
                    Orientation::RightHanded => out.push([face[0], face[i], face[i + 1]]),
                    Orientation::LeftHanded => out.push([face[0], face[i + 1], face[i]]),
                }
            }
        }

        out
    }
}

impl fmt::Display for MeshTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MeshTopology({} faces, {} indices, {:?}, {:?})",
            self.num_faces(),
            self.face_vertex_indices.len(),
            self.orientation,
            self.scheme
        )
    }
}
