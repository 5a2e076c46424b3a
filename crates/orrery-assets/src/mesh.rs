//! OBJ mesh loading via tobj.

use std::path::Path;

use glam::{Vec2, Vec3};

use crate::AssetError;

/// Mesh data in parallel arrays, single-indexed and triangulated.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    /// One normal per position; zero vector where the source had none.
    pub normals: Vec<Vec3>,
    /// One UV per position; zero where the source had none.
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// An empty mesh draws as nothing; used when the source failed to parse.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Loads an OBJ file, merging all of its models into one mesh. On failure,
/// logs a diagnostic and returns an empty mesh.
pub fn load_obj_mesh(path: &Path) -> MeshData {
    match parse_obj(path) {
        Ok(mesh) => {
            log::info!(
                "Loaded mesh {}: {} vertices, {} triangles",
                path.display(),
                mesh.positions.len(),
                mesh.indices.len() / 3
            );
            mesh
        }
        Err(err) => {
            log::error!("{err}");
            MeshData::default()
        }
    }
}

fn parse_obj(path: &Path) -> Result<MeshData, AssetError> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| AssetError::ObjParse {
        path: path.display().to_string(),
        source,
    })?;

    let mut mesh = MeshData::default();
    for model in &models {
        let m = &model.mesh;
        let base = mesh.positions.len() as u32;

        mesh.positions
            .extend(m.positions.chunks_exact(3).map(|v| Vec3::new(v[0], v[1], v[2])));

        if m.normals.is_empty() {
            mesh.normals
                .extend(std::iter::repeat_n(Vec3::ZERO, m.positions.len() / 3));
        } else {
            mesh.normals
                .extend(m.normals.chunks_exact(3).map(|n| Vec3::new(n[0], n[1], n[2])));
        }

        if m.texcoords.is_empty() {
            mesh.uvs
                .extend(std::iter::repeat_n(Vec2::ZERO, m.positions.len() / 3));
        } else {
            mesh.uvs
                .extend(m.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));
        }

        mesh.indices.extend(m.indices.iter().map(|i| i + base));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
vn 0.0 0.0 1.0
vn 0.0 0.0 1.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
f 1/1/1 2/2/2 3/3/3
";

    #[test]
    fn test_triangle_obj_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        std::fs::write(&path, TRIANGLE_OBJ).unwrap();

        let mesh = load_obj_mesh(&path);
        assert!(!mesh.is_empty());
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.normals.len(), 3);
        assert_eq!(mesh.uvs.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.positions[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.normals[0], Vec3::Z);
        assert_eq!(mesh.uvs[2], Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_quad_triangulated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.obj");
        std::fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        )
        .unwrap();

        let mesh = load_obj_mesh(&path);
        assert_eq!(mesh.indices.len(), 6);
        // Normals and UVs zero-filled to match positions.
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.uvs.len(), mesh.positions.len());
        assert!(mesh.normals.iter().all(|n| *n == Vec3::ZERO));
    }

    #[test]
    fn test_missing_file_yields_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = load_obj_mesh(&dir.path().join("missing.obj"));
        assert!(mesh.is_empty());
        assert!(mesh.positions.is_empty());
    }

    #[test]
    fn test_multiple_objects_merge_with_offset_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.obj");
        std::fs::write(
            &path,
            "o first\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n\
             o second\nv 0 0 1\nv 1 0 1\nv 0 1 1\nf 4 5 6\n",
        )
        .unwrap();

        let mesh = load_obj_mesh(&path);
        assert_eq!(mesh.positions.len(), 6);
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.indices[3..].iter().all(|&i| i >= 3));
    }
}
