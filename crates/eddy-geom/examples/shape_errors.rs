//! Show how the shape error grows with radial jitter.
//!
//! Usage:
//!   cargo run -p eddy-geom --example shape_errors
//!   cargo run -p eddy-geom --example shape_errors -- 64
//!
//! The optional argument is the vertex count per ring (default 32).

use eddy_geom::circle::fit_circle;
use eddy_geom::rand::{draw_ring, ReplayToken, RingCfg, VertexCount};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(32);
    println!("{:>8} {:>10} {:>10} {:>10}", "jitter", "radius", "err_min", "err_max");
    for &jitter in &[0.0, 0.05, 0.1, 0.2, 0.4] {
        let cfg = RingCfg {
            vertex_count: VertexCount::Fixed(n),
            radial_jitter: jitter,
            base_radius: 50.0,
            closed: true,
            ..RingCfg::default()
        };
        let mut err_min = f64::INFINITY;
        let mut err_max = f64::NEG_INFINITY;
        let mut radius = 0.0;
        for index in 0..100 {
            let (x, y) = draw_ring(cfg, ReplayToken { seed: 2025, index });
            match fit_circle(&x, &y) {
                Ok(fit) => {
                    err_min = err_min.min(fit.shape_error);
                    err_max = err_max.max(fit.shape_error);
                    radius += fit.radius / 100.0;
                }
                Err(e) => eprintln!("ring {index}: {e}"),
            }
        }
        println!("{jitter:>8.2} {radius:>10.3} {err_min:>10.3} {err_max:>10.3}");
    }
}
