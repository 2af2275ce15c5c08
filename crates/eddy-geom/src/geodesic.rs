//! Haversine great-circle distances on a spherical Earth.
//!
//! Degrees in, meters out, radius [`EARTH_RADIUS_M`]. The formula is fixed so
//! results stay bit-compatible with the reference toolkit:
//!
//! `a = sin²(Δlat/2) + cos(lat0)·cos(lat1)·sin²(Δlon/2)`,
//! `d = 2·R·atan2(√a, √(1−a))`.
//!
//! With the `rayon` feature, the vector and matrix forms split their work
//! across threads; each element is computed by the same scalar kernel, so the
//! output does not depend on the feature.

use nalgebra::DMatrix;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::cfg::{D2R, EARTH_RADIUS_M};
use crate::error::{check_same_len, GeomError};

/// Great-circle distance in meters between `(lon0, lat0)` and `(lon1, lat1)`.
///
/// Total: identical and antipodal points are well-behaved. Out-of-range
/// angles are accepted (the formula is periodic), just less meaningful.
#[inline]
pub fn distance(lon0: f64, lat0: f64, lon1: f64, lat1: f64) -> f64 {
    let sin_dlat = ((lat1 - lat0) * 0.5 * D2R).sin();
    let sin_dlon = ((lon1 - lon0) * 0.5 * D2R).sin();
    let cos_lat0 = (lat0 * D2R).cos();
    let cos_lat1 = (lat1 * D2R).cos();
    let a = sin_dlon * sin_dlon * cos_lat0 * cos_lat1 + sin_dlat * sin_dlat;
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Element-wise distances: `out[i] = distance(lon0[i], lat0[i], lon1[i], lat1[i])`.
pub fn distance_vector(
    lon0: &[f64],
    lat0: &[f64],
    lon1: &[f64],
    lat1: &[f64],
) -> Result<Vec<f64>, GeomError> {
    let n = lon0.len();
    check_same_len("lon0/lat0", n, lat0.len())?;
    check_same_len("lon0/lon1", n, lon1.len())?;
    check_same_len("lon0/lat1", n, lat1.len())?;

    #[cfg(feature = "rayon")]
    let out = (0..n)
        .into_par_iter()
        .map(|i| distance(lon0[i], lat0[i], lon1[i], lat1[i]))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let out = (0..n)
        .map(|i| distance(lon0[i], lat0[i], lon1[i], lat1[i]))
        .collect();
    Ok(out)
}

/// All-pairs distances, `n0 × n1`: `m[(i, j)] = distance(lon0[i], lat0[i], lon1[j], lat1[j])`.
///
/// The only allocation is the output matrix. Empty inputs give an empty
/// matrix with the matching shape.
pub fn distance_matrix(
    lon0: &[f64],
    lat0: &[f64],
    lon1: &[f64],
    lat1: &[f64],
) -> Result<DMatrix<f64>, GeomError> {
    check_same_len("lon0/lat0", lon0.len(), lat0.len())?;
    check_same_len("lon1/lat1", lon1.len(), lat1.len())?;
    let (n0, n1) = (lon0.len(), lon1.len());
    let mut m = DMatrix::<f64>::zeros(n0, n1);
    if n0 == 0 || n1 == 0 {
        return Ok(m);
    }

    // nalgebra storage is column-major: one column per target point j.
    #[cfg(feature = "rayon")]
    m.as_mut_slice()
        .par_chunks_mut(n0)
        .enumerate()
        .for_each(|(j, col)| fill_column(col, lon0, lat0, lon1[j], lat1[j]));
    #[cfg(not(feature = "rayon"))]
    for (j, col) in m.as_mut_slice().chunks_mut(n0).enumerate() {
        fill_column(col, lon0, lat0, lon1[j], lat1[j]);
    }
    Ok(m)
}

#[inline]
fn fill_column(col: &mut [f64], lon0: &[f64], lat0: &[f64], lon1: f64, lat1: f64) {
    for (i, d) in col.iter_mut().enumerate() {
        *d = distance(lon0[i], lat0[i], lon1, lat1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn one_degree_of_latitude() {
        let d = distance(0.0, 0.0, 0.0, 1.0);
        // 2πR/360
        assert!((d - 111_195.0).abs() / 111_195.0 < 1e-4, "d = {d}");
        let expected = EARTH_RADIUS_M * D2R;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn identical_and_antipodal_points() {
        assert_eq!(distance(12.5, -40.0, 12.5, -40.0), 0.0);
        let half = distance(0.0, 0.0, 180.0, 0.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((half - expected).abs() < 1e-6);
        let poles = distance(0.0, 90.0, 0.0, -90.0);
        assert!((poles - expected).abs() < 1e-6);
    }

    #[test]
    fn vector_rejects_mismatched_lengths() {
        let err = distance_vector(&[0.0, 1.0], &[0.0, 1.0], &[0.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, GeomError::LengthMismatch { .. }));
        assert!(err.is_precondition());
    }

    #[test]
    fn matrix_shape_and_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let lon0: Vec<f64> = (0..5).map(|_| rng.gen_range(-180.0..180.0)).collect();
        let lat0: Vec<f64> = (0..5).map(|_| rng.gen_range(-90.0..90.0)).collect();
        let lon1: Vec<f64> = (0..3).map(|_| rng.gen_range(-180.0..180.0)).collect();
        let lat1: Vec<f64> = (0..3).map(|_| rng.gen_range(-90.0..90.0)).collect();
        let m = distance_matrix(&lon0, &lat0, &lon1, &lat1).unwrap();
        assert_eq!(m.shape(), (5, 3));
        for i in 0..5 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], distance(lon0[i], lat0[i], lon1[j], lat1[j]));
            }
        }
    }

    #[test]
    fn matrix_empty_and_mismatched() {
        let m = distance_matrix(&[], &[], &[1.0, 2.0], &[0.0, 0.0]).unwrap();
        assert_eq!(m.shape(), (0, 2));
        assert!(distance_matrix(&[1.0], &[], &[1.0], &[1.0]).is_err());
        assert!(distance_matrix(&[1.0], &[1.0], &[1.0, 2.0], &[1.0]).is_err());
    }

    proptest! {
        #[test]
        fn symmetric_and_vector_consistent(
            pts in prop::collection::vec(
                (-180.0f64..180.0, -90.0f64..90.0, -180.0f64..180.0, -90.0f64..90.0),
                1..32,
            ),
        ) {
            let lon0: Vec<f64> = pts.iter().map(|p| p.0).collect();
            let lat0: Vec<f64> = pts.iter().map(|p| p.1).collect();
            let lon1: Vec<f64> = pts.iter().map(|p| p.2).collect();
            let lat1: Vec<f64> = pts.iter().map(|p| p.3).collect();
            let v = distance_vector(&lon0, &lat0, &lon1, &lat1).unwrap();
            for (i, &(a, b, c, d)) in pts.iter().enumerate() {
                prop_assert_eq!(v[i], distance(a, b, c, d));
                let back = distance(c, d, a, b);
                prop_assert!((v[i] - back).abs() <= 1e-6 * v[i].max(1.0));
                prop_assert_eq!(distance(a, b, a, b), 0.0);
            }
        }
    }
}
