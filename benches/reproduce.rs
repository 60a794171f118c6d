use criterion::Criterion;
use rabbits::{create_population, random::default_rng, reproduce::reproduce, Trait};

const POPULATION: usize = 1000;

fn bench_reproduce(bench: &mut Criterion) {
    let mut rng = default_rng();
    let parents = create_population(POPULATION, &mut rng);

    for rate in [0., 0.1, 1.] {
        bench.bench_function(&format!("reproduce-{POPULATION}-rate-{rate}"), |b| {
            b.iter(|| reproduce(&parents, rate, &Trait::ALL, &mut rng))
        });
    }
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_reproduce(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
