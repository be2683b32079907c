use crate::rendering::Vertex;

/// CPU-side UV-sphere geometry. Built once at startup and uploaded to the
/// GPU; never mutated afterwards.
#[derive(Debug, Default)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Unit sphere centered at the origin from a stack/slice grid.
    ///
    /// Rows run pole to pole (`phi` in [0, PI]), columns wrap around the
    /// equator (`theta` in [0, 2*PI]). Normals equal positions since the
    /// radius is one. The triangles touching either pole collapse to zero
    /// area, the usual UV-sphere artifact. Zero stacks or slices yields an
    /// empty mesh.
    pub fn generate(stacks: u32, slices: u32) -> Self {
        if stacks == 0 || slices == 0 {
            return Self::default();
        }

        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

        for i in 0..=stacks {
            let phi = i as f32 / stacks as f32 * std::f32::consts::PI;
            for j in 0..=slices {
                let theta = j as f32 / slices as f32 * std::f32::consts::TAU;
                let p = [
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(Vertex {
                    position: p,
                    normal: p,
                });
            }
        }

        // Two triangles per grid quad between stack rows i and i+1.
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * (slices + 1) + j;
                let b = a + slices + 1;
                indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vertex_and_index_counts() {
        for (stacks, slices) in [(2, 2), (3, 5), (16, 32), (1, 1)] {
            let mesh = SphereMesh::generate(stacks, slices);
            assert_eq!(mesh.vertices.len() as u32, (stacks + 1) * (slices + 1));
            assert_eq!(mesh.indices.len() as u32, stacks * slices * 6);
        }
    }

    #[test]
    fn two_by_two_sphere() {
        let mesh = SphereMesh::generate(2, 2);
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mesh = SphereMesh::generate(7, 11);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn unit_sphere_invariants() {
        let mesh = SphereMesh::generate(8, 12);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            let len = (x * x + y * y + z * z).sqrt();
            assert_abs_diff_eq!(len, 1.0, epsilon = 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn poles_sit_on_the_y_axis() {
        let mesh = SphereMesh::generate(4, 6);
        let top = mesh.vertices.first().unwrap();
        let bottom = mesh.vertices.last().unwrap();
        assert_abs_diff_eq!(top.position[1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bottom.position[1], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_subdivisions_yield_empty_mesh() {
        assert!(SphereMesh::generate(0, 8).vertices.is_empty());
        assert!(SphereMesh::generate(8, 0).indices.is_empty());
    }
}
