//! Generated routes run through the estimator.

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;

fn routes(seed: u64) -> Vec<GeneratedRoute> {
    let mut rng = StdRng::seed_from_u64(seed);
    [Region::SIERRA, Region::FOOTHILLS, Region::LOWLANDS]
        .into_iter()
        .map(|region| {
            RouteGenerator::for_region(region, seed as u32)
                .with_distance(4000.0)
                .with_elevation_jitter(1.5)
                .generate(&mut rng)
        })
        .collect()
}

#[test]
fn test_estimates_are_non_negative_and_cumulative() {
    let mut rng = StdRng::seed_from_u64(100);
    for route in routes(100) {
        for preset in TravelerPreset::ALL {
            let traveler = sample_traveler(preset, &mut rng);
            let estimate = estimate_path(&route.instructions, &traveler).unwrap();

            assert_eq!(estimate.segments.len(), route.instructions.len());
            assert!(estimate.segments.iter().all(|s| s.result.kcal >= 0.0));
            assert!(
                estimate
                    .segments
                    .windows(2)
                    .all(|w| w[1].cumulative_kcal >= w[0].cumulative_kcal)
            );

            let last = estimate.segments.last().unwrap();
            assert!((last.cumulative_kcal - estimate.total_kcal).abs() < 1e-9);
            assert_eq!(last.result, SegmentResult::ZERO);
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let estimator = PathEstimator::new(TravelerPreset::Backpacker.profile()).unwrap();
    for route in routes(7) {
        let sequential = estimator.estimate(&route.instructions).unwrap();
        let parallel = estimator.estimate_parallel(&route.instructions).unwrap();
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_load_and_terrain_cost_more() {
    let route = &routes(31)[1];
    let base = TravelerPreset::Reference.profile();
    let loaded = base.clone().with_load(20.0);
    let brush = base.clone().with_terrain(Terrain::HeavyBrush);

    let total = |profile: &TravelerProfile| {
        estimate_path(&route.instructions, profile)
            .unwrap()
            .total_kcal
    };
    assert!(total(&loaded) > total(&base));
    assert!(total(&brush) > total(&base));
}

#[test]
fn test_mountains_cost_more_than_lowlands() {
    let mut rng = StdRng::seed_from_u64(2);
    let profile = TravelerProfile::default();
    let mut per_km = |region| {
        let route = RouteGenerator::for_region(region, 2)
            .with_distance(6000.0)
            .generate(&mut rng);
        let estimate = estimate_path(&route.instructions, &profile).unwrap();
        estimate.total_kcal / route.total_distance() * 1000.0
    };
    let sierra = per_km(Region::SIERRA);
    let lowlands = per_km(Region::LOWLANDS);
    assert!(sierra > lowlands, "sierra {sierra} lowlands {lowlands}");
}

#[test]
fn test_fixture_files_load() {
    let mut rng = StdRng::seed_from_u64(55);
    let route = RouteGenerator::new(55).with_distance(1500.0).generate(&mut rng);
    let dir = std::env::temp_dir();
    let name = format!("generated-{}", std::process::id());
    let profile = TravelerProfile::default();

    let direct = estimate_path(&route.instructions, &profile).unwrap();
    for format in [
        FixtureFormat::RoutingResponse,
        FixtureFormat::Gpx(GpxLayout::Route),
        FixtureFormat::Gpx(GpxLayout::Track),
    ] {
        let path = write_route(&dir, &name, &route, format).unwrap();
        let instructions = load_instructions(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let distance: f64 = instructions.iter().map(|i| i.distance).sum();
        assert!((distance - route.total_distance()).abs() < 1.0);

        let estimate = estimate_path(&instructions, &profile).unwrap();
        let relative = (estimate.total_kcal - direct.total_kcal).abs() / direct.total_kcal;
        match format {
            // same instructions, so the same estimate
            FixtureFormat::RoutingResponse => assert!(relative < 1e-9),
            // one instruction per leg, with its own elevation deltas
            FixtureFormat::Gpx(_) => assert!(relative < 0.5, "{format:?} differs by {relative}"),
        }
    }
}
