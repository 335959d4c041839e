use heightmap::{
    GenerationParameters, Heightmap, HeightmapError, Normalization, RandomSource, SeededSource,
};

// Fixed 4×4 run: size 4, samples 2, scale 1.0, seed 42, blur 1, 4 bands,
// one 4×4 ladder block with at most 2 ladders
fn fixture_params() -> GenerationParameters {
    GenerationParameters::new(4, 2, 1.0, 42)
        .with_blur_radius(1)
        .with_quantization_levels(4)
        .with_block_step(4)
        .with_ladders_per_block(2)
}

#[test]
fn pipeline_regression_fixture() {
    let mut map = Heightmap::new(fixture_params()).unwrap();
    map.generate();
    map.blur(1);
    map.normalize();
    map.ladder_generate().unwrap();
    let out = map.into_output();

    #[rustfmt::skip]
    let expected_grid = [
        0.25, 0.75, 0.50, 0.75,
        0.25, 0.50, 0.25, 0.75,
        0.00, 0.00, 0.25, 0.50,
        0.50, 1.00, 0.50, 1.00,
    ];
    #[rustfmt::skip]
    let expected_ladders = [
        false, true,  true,  false,
        false, false, false, false,
        false, false, false, false,
        false, false, false, false,
    ];

    assert_eq!(out.grid.cells(), &expected_grid);
    assert_eq!(out.ladders.cells(), &expected_ladders);
    assert!(matches!(out.normalization, Normalization::Scaled { .. }));
}

#[test]
fn pipeline_regression_fixture_small_blocks() {
    // Same heights; 2×2 blocks with one ladder each
    let params = fixture_params().with_block_step(2).with_ladders_per_block(1);
    let out = Heightmap::run(params).unwrap();

    #[rustfmt::skip]
    let expected_ladders = [
        false, true,  true,  false,
        false, false, false, false,
        false, false, false, true,
        false, true,  false, false,
    ];
    assert_eq!(out.ladders.cells(), &expected_ladders);
}

#[test]
fn pipeline_determinism() {
    let params = GenerationParameters::new(64, 16, 1.0, 2025).with_blur_radius(2);
    let a = Heightmap::run(params.clone()).unwrap();
    let b = Heightmap::run(params).unwrap();

    let bits = |cells: &[f64]| cells.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.grid.cells()), bits(b.grid.cells()));
    assert_eq!(a.ladders, b.ladders);
}

#[test]
fn pipeline_seed_changes_terrain() {
    let a = Heightmap::run(GenerationParameters::new(32, 16, 1.0, 1)).unwrap();
    let b = Heightmap::run(GenerationParameters::new(32, 16, 1.0, 2)).unwrap();
    assert_ne!(a.grid, b.grid);
}

#[test]
fn pipeline_injected_source_matches_seed() {
    let params = GenerationParameters::new(16, 8, 1.0, 5);
    let seeded = Heightmap::run(params.clone()).unwrap();

    let mut map = Heightmap::with_source(params, SeededSource::new(5)).unwrap();
    map.generate();
    map.blur(1);
    map.normalize();
    map.ladder_generate().unwrap();
    assert_eq!(map.into_output(), seeded);
}

#[test]
fn pipeline_rejects_size_ten() {
    let err = Heightmap::run(GenerationParameters::new(10, 2, 1.0, 42)).unwrap_err();
    assert_eq!(err, HeightmapError::InvalidDimension { size: 10 });
}

#[test]
fn pipeline_rejects_default_block_on_small_grid() {
    let err = Heightmap::run(GenerationParameters::new(4, 2, 1.0, 42)).unwrap_err();
    assert_eq!(
        err,
        HeightmapError::InvalidBlockConfiguration {
            size: 4,
            block_step: 8
        }
    );
}

struct Flat;

impl RandomSource for Flat {
    fn sample(&mut self) -> f64 {
        0.25
    }
}

#[test]
fn pipeline_uniform_grid_is_defined() {
    // Constant noise keeps every cell equal through generation and blur
    let params = GenerationParameters::new(8, 4, 0.0, 0);
    let mut map = Heightmap::with_source(params, Flat).unwrap();
    map.generate();
    map.blur(1);
    let n = map.normalize();
    map.ladder_generate().unwrap();
    let out = map.into_output();

    assert!(n.is_uniform());
    assert!(out.grid.cells().iter().all(|&v| v == 0.0));
    assert!(out.ladders.cells().iter().all(|&m| !m));
}

#[test]
fn pipeline_output_contract() {
    let params = GenerationParameters::default().with_seed(11);
    let out = Heightmap::run(params.clone()).unwrap();

    assert_eq!(out.grid.size(), params.size);
    assert_eq!(out.ladders.size(), params.size);

    let levels = params.quantization_levels as f64;
    for &v in out.grid.cells() {
        assert!((0.0..=1.0).contains(&v));
        assert_eq!(v, (v * levels).round() / levels);
    }

    let blocks = params.size / params.block_step;
    for by in 0..blocks {
        for bx in 0..blocks {
            let mut count = 0;
            for y in 0..params.block_step {
                for x in 0..params.block_step {
                    let gx = (bx * params.block_step + x) as isize;
                    let gy = (by * params.block_step + y) as isize;
                    if out.ladders.get(gx, gy) {
                        count += 1;
                    }
                }
            }
            assert!(count <= params.ladders_per_block);
        }
    }
}
