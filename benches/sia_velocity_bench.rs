//! Benchmarks for the SIA edge velocity kernel.
//!
//! Run with: `cargo bench --bench sia_velocity_bench`
//!
//! Compares serial and parallel kernels over mesh sizes and level counts.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sia_rs::solver::SiaInputs;
use sia_rs::{EdgeMask, MeshGeometry, SiaConfig, SigmaLevels, VelocityField, compute_sia_velocity};

#[cfg(feature = "parallel")]
use sia_rs::compute_sia_velocity_parallel;

/// Inclined ice sheet with a bumpy surface and every edge dynamic.
struct Setup {
    mesh: MeshGeometry,
    thickness: Vec<f64>,
    surface: Vec<f64>,
    surface_vertex: Vec<f64>,
    mask: Vec<EdgeMask>,
}

impl Setup {
    fn new(n: usize, n_levels: usize) -> Self {
        let mesh = MeshGeometry::structured_quad(n, n, 1000.0, 1000.0, SigmaLevels::uniform(n_levels));
        let elevation = |(x, y): (f64, f64)| {
            2500.0 - 0.005 * x - 0.002 * y + 20.0 * (x / 7000.0).sin() * (y / 5000.0).cos()
        };

        let surface = mesh.cell_positions.iter().copied().map(elevation).collect();
        let surface_vertex = mesh.vertex_positions.iter().copied().map(elevation).collect();
        let thickness = mesh
            .cell_positions
            .iter()
            .map(|&(x, _)| 1500.0 - 0.003 * x)
            .collect();
        let mask = vec![EdgeMask::ICE | EdgeMask::DYNAMIC_ICE; mesh.n_edges];

        Self {
            mesh,
            thickness,
            surface,
            surface_vertex,
            mask,
        }
    }

    fn inputs(&self) -> SiaInputs<'_> {
        SiaInputs {
            thickness: &self.thickness,
            upper_surface: &self.surface,
            upper_surface_vertex: &self.surface_vertex,
            edge_mask: &self.mask,
        }
    }
}

/// Benchmark the kernel over mesh sizes.
fn bench_mesh_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sia_mesh_size");
    let config = SiaConfig::default();

    for n in [16, 64, 128] {
        let setup = Setup::new(n, 10);
        let inputs = setup.inputs();
        let label = format!("{}x{}", n, n);

        group.throughput(Throughput::Elements(setup.mesh.n_edges as u64));

        group.bench_with_input(BenchmarkId::new("serial", &label), &setup, |b, setup| {
            let mut velocity = VelocityField::zeros(setup.mesh.n_edges, setup.mesh.n_levels());
            b.iter(|| {
                compute_sia_velocity(
                    black_box(&setup.mesh),
                    black_box(&inputs),
                    black_box(&config),
                    black_box(&mut velocity),
                )
            });
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", &label), &setup, |b, setup| {
            let mut velocity = VelocityField::zeros(setup.mesh.n_edges, setup.mesh.n_levels());
            b.iter(|| {
                compute_sia_velocity_parallel(
                    black_box(&setup.mesh),
                    black_box(&inputs),
                    black_box(&config),
                    black_box(&mut velocity),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark the kernel over vertical resolution.
fn bench_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("sia_levels");
    let config = SiaConfig::default();

    for n_levels in [1, 10, 40] {
        let setup = Setup::new(64, n_levels);
        let inputs = setup.inputs();

        group.throughput(Throughput::Elements((setup.mesh.n_edges * n_levels) as u64));

        group.bench_with_input(BenchmarkId::new("serial", n_levels), &setup, |b, setup| {
            let mut velocity = VelocityField::zeros(setup.mesh.n_edges, setup.mesh.n_levels());
            b.iter(|| {
                compute_sia_velocity(
                    black_box(&setup.mesh),
                    black_box(&inputs),
                    black_box(&config),
                    black_box(&mut velocity),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mesh_size, bench_levels);
criterion_main!(benches);
