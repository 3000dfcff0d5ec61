//! Decompose a few hand-made shapes and random stars; print piece counts.
//!
//! Usage:
//!   cargo run -p bayazit --example decompose_shapes
//!   cargo run -p bayazit --example decompose_shapes -- 40   # star vertex count

use bayazit::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(24);

    let shapes: Vec<(&str, Vec<Vec2<f64>>)> = vec![
        (
            "l-shape",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(2.0, 4.0),
                Vec2::new(0.0, 4.0),
            ],
        ),
        (
            "notch",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 3.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 4.0),
                Vec2::new(0.0, 4.0),
            ],
        ),
    ];
    for (name, pts) in shapes {
        match decompose_with_defaults(&pts) {
            Ok(parts) => println!("{name}: {} pieces", parts.len()),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }

    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    for index in 0..5 {
        let Some(star) = draw_star_radial(cfg, ReplayToken { seed: 2025, index }) else {
            continue;
        };
        match Decomposer::default().decompose_polygon(&star) {
            Ok(parts) => println!(
                "star sample {index}: n={}, reflex={}, pieces={}",
                star.len(),
                star.reflex_indices().len(),
                parts.len()
            ),
            Err(e) => eprintln!("star sample {index}: {e}"),
        }
    }
}
