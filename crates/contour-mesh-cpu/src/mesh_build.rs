use contour_geom::{Vec2, triangle_signed_area};

/// Flat vertex and index buffers for one chunk. Every polygon appends its own
/// vertices; nothing is shared between cells.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<Vec2>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears both arrays but retains capacity for the next pass.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.idx.clear();
    }

    /// Pre-reserve for roughly `n_cells` full cells (one quad each).
    #[inline]
    pub fn reserve_cells(&mut self, n_cells: usize) {
        self.pos.reserve(n_cells * 4);
        self.idx.reserve(n_cells * 6);
    }

    #[inline]
    fn base(&self) -> u32 {
        self.pos.len() as u32
    }

    pub fn add_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        let base = self.base();
        self.pos.extend_from_slice(&[a, b, c]);
        self.idx.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Two triangles sharing the `a`-`c` diagonal.
    pub fn add_quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2) {
        let base = self.base();
        self.pos.extend_from_slice(&[a, b, c, d]);
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Three triangles fanned from `a`.
    pub fn add_pentagon(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, e: Vec2) {
        let base = self.base();
        self.pos.extend_from_slice(&[a, b, c, d, e]);
        self.idx.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
            base,
            base + 3,
            base + 4,
        ]);
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.pos
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Index triples in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.idx.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex triples in emission order.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.triangles().map(|[a, b, c]| {
            [
                self.pos[a as usize],
                self.pos[b as usize],
                self.pos[c as usize],
            ]
        })
    }

    /// Sum of signed triangle areas. The table winds clockwise, so a
    /// well-formed chunk mesh yields a value `<= 0`.
    pub fn signed_area(&self) -> f32 {
        self.triangle_positions()
            .map(|[a, b, c]| triangle_signed_area(a, b, c))
            .sum()
    }

    /// Covered area, independent of winding.
    pub fn area(&self) -> f32 {
        self.triangle_positions()
            .map(|[a, b, c]| triangle_signed_area(a, b, c).abs())
            .sum()
    }

    /// Copy of this mesh with every vertex moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> MeshBuild {
        MeshBuild {
            pos: self.pos.iter().map(|&p| p + offset).collect(),
            idx: self.idx.clone(),
        }
    }

    /// Appends `other`, rebasing its indices.
    pub fn append(&mut self, other: &MeshBuild) {
        let base = self.base();
        self.pos.extend_from_slice(&other.pos);
        self.idx.extend(other.idx.iter().map(|&i| i + base));
    }
}
