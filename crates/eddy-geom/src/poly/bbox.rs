use nalgebra::Vector2;

/// Axis-aligned bounding box (closed intervals).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox {
    /// Bounding box of a ring; `None` for an empty ring.
    pub fn from_ring(ring: &[Vector2<f64>]) -> Option<Self> {
        let first = *ring.first()?;
        let mut bb = Self {
            min: first,
            max: first,
        };
        for p in &ring[1..] {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    /// Closed-interval overlap; touching boxes intersect.
    #[inline]
    pub fn intersects(&self, other: &BBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Index pairs `(i, j)` whose ring bounding boxes overlap.
///
/// Cheap pre-filter before exact polygon overlap. Empty rings never match.
/// Pairs are ordered by `i`, then `j`.
pub fn bbox_intersection(a: &[Vec<Vector2<f64>>], b: &[Vec<Vector2<f64>>]) -> Vec<(usize, usize)> {
    let boxes_b: Vec<Option<BBox>> = b.iter().map(|r| BBox::from_ring(r)).collect();
    let mut out = Vec::new();
    for (i, ring) in a.iter().enumerate() {
        let Some(bi) = BBox::from_ring(ring) else {
            continue;
        };
        for (j, bj) in boxes_b.iter().enumerate() {
            if bj.as_ref().is_some_and(|bj| bi.intersects(bj)) {
                out.push((i, j));
            }
        }
    }
    out
}
