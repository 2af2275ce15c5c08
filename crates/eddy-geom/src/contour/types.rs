use std::ops::Range;

use crate::error::{check_finite, check_same_len, GeomError};

/// Immutable multi-level contour collection in CSR layout.
///
/// Invariants (checked by [`ContourCollection::new`]):
/// - `x_value`/`y_value` have equal length; so do the two per-contour arrays
///   and the two per-level arrays. Every coordinate is finite.
/// - `indices_of_first_pts` is non-decreasing and every contour is a
///   non-empty range inside the coordinate buffers.
/// - Every level's contour range lies inside the per-contour arrays, and its
///   contours are stored back to back, so the level's point span is the sum
///   of its contours' point counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContourCollection {
    x_value: Vec<f64>,
    y_value: Vec<f64>,
    indices_of_first_pts: Vec<usize>,
    nb_pt_per_c: Vec<usize>,
    nb_c_per_l: Vec<usize>,
    l_i: Vec<usize>,
}

impl ContourCollection {
    /// Validate and wrap raw CSR arrays.
    pub fn new(
        x_value: Vec<f64>,
        y_value: Vec<f64>,
        indices_of_first_pts: Vec<usize>,
        nb_pt_per_c: Vec<usize>,
        nb_c_per_l: Vec<usize>,
        l_i: Vec<usize>,
    ) -> Result<Self, GeomError> {
        check_same_len("x_value/y_value", x_value.len(), y_value.len())?;
        check_finite(&x_value, &y_value, 0)?;
        check_same_len(
            "indices_of_first_pts/nb_pt_per_c",
            indices_of_first_pts.len(),
            nb_pt_per_c.len(),
        )?;
        check_same_len("nb_c_per_l/l_i", nb_c_per_l.len(), l_i.len())?;

        if let Some(k) = indices_of_first_pts.windows(2).position(|w| w[0] > w[1]) {
            return Err(GeomError::collection(format!(
                "indices_of_first_pts decreases at contour {}",
                k + 1
            )));
        }
        let n_pts = x_value.len();
        for (c, (&first, &count)) in indices_of_first_pts.iter().zip(&nb_pt_per_c).enumerate() {
            if count == 0 {
                return Err(GeomError::collection(format!("contour {c} has no points")));
            }
            match first.checked_add(count) {
                Some(end) if end <= n_pts => {}
                _ => {
                    return Err(GeomError::collection(format!(
                        "contour {c} spans past the {n_pts} stored points"
                    )))
                }
            }
        }
        let n_contours = nb_pt_per_c.len();
        for (l, (&start, &count)) in l_i.iter().zip(&nb_c_per_l).enumerate() {
            let end = match start.checked_add(count) {
                Some(end) if end <= n_contours => end,
                _ => {
                    return Err(GeomError::collection(format!(
                        "level {l} spans past the {n_contours} stored contours"
                    )))
                }
            };
            for c in start..end.saturating_sub(1) {
                if indices_of_first_pts[c + 1] != indices_of_first_pts[c] + nb_pt_per_c[c] {
                    return Err(GeomError::collection(format!(
                        "level {l}: contour {} does not follow contour {c}",
                        c + 1
                    )));
                }
            }
        }

        Ok(Self {
            x_value,
            y_value,
            indices_of_first_pts,
            nb_pt_per_c,
            nb_c_per_l,
            l_i,
        })
    }

    /// Build the CSR layout from nested `levels → contours → (x, y)`.
    ///
    /// Levels and contours are stored in iteration order.
    pub fn from_levels(levels: Vec<Vec<(Vec<f64>, Vec<f64>)>>) -> Result<Self, GeomError> {
        let mut x_value = Vec::new();
        let mut y_value = Vec::new();
        let mut indices_of_first_pts = Vec::new();
        let mut nb_pt_per_c = Vec::new();
        let mut nb_c_per_l = Vec::with_capacity(levels.len());
        let mut l_i = Vec::with_capacity(levels.len());
        for contours in levels {
            l_i.push(nb_pt_per_c.len());
            nb_c_per_l.push(contours.len());
            for (x, y) in contours {
                check_same_len("contour x/y", x.len(), y.len())?;
                indices_of_first_pts.push(x_value.len());
                nb_pt_per_c.push(x.len());
                x_value.extend(x);
                y_value.extend(y);
            }
        }
        Self::new(
            x_value,
            y_value,
            indices_of_first_pts,
            nb_pt_per_c,
            nb_c_per_l,
            l_i,
        )
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.nb_c_per_l.len()
    }

    #[inline]
    pub fn contours(&self) -> usize {
        self.nb_pt_per_c.len()
    }

    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x_value
    }

    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y_value
    }

    #[inline]
    pub fn indices_of_first_pts(&self) -> &[usize] {
        &self.indices_of_first_pts
    }

    #[inline]
    pub fn nb_pt_per_c(&self) -> &[usize] {
        &self.nb_pt_per_c
    }

    #[inline]
    pub fn nb_c_per_l(&self) -> &[usize] {
        &self.nb_c_per_l
    }

    #[inline]
    pub fn l_i(&self) -> &[usize] {
        &self.l_i
    }

    /// Global contour indices of `level`.
    pub fn level_contours(&self, level: usize) -> Result<Range<usize>, GeomError> {
        if level >= self.levels() {
            return Err(GeomError::InvalidLevel {
                level,
                levels: self.levels(),
            });
        }
        let start = self.l_i[level];
        Ok(start..start + self.nb_c_per_l[level])
    }

    /// Point span of `level` in the coordinate buffers (`0..0` when empty).
    pub fn level_points(&self, level: usize) -> Result<Range<usize>, GeomError> {
        let contours = self.level_contours(level)?;
        if contours.is_empty() {
            return Ok(0..0);
        }
        let last = contours.end - 1;
        Ok(self.indices_of_first_pts[contours.start]
            ..self.indices_of_first_pts[last] + self.nb_pt_per_c[last])
    }

    /// Point range of the global contour `c`.
    pub fn contour_points(&self, c: usize) -> Option<Range<usize>> {
        let first = *self.indices_of_first_pts.get(c)?;
        Some(first..first + self.nb_pt_per_c[c])
    }

    /// Coordinates of the global contour `c`.
    pub fn contour_xy(&self, c: usize) -> Option<(&[f64], &[f64])> {
        let r = self.contour_points(c)?;
        Some((&self.x_value[r.clone()], &self.y_value[r]))
    }

    /// Global index of the `within`-th contour of `level`.
    pub fn global_contour(&self, level: usize, within: usize) -> Option<usize> {
        let r = self.level_contours(level).ok()?;
        let c = r.start + within;
        (c < r.end).then_some(c)
    }
}
