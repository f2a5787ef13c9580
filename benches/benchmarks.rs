use adaptive_play::analysis::Analyzer;
use adaptive_play::analysis::Markov;
use adaptive_play::dynamics::Matrix;
use adaptive_play::game::Payoffs;
use adaptive_play::game::Player;
use adaptive_play::history::Space;
use adaptive_play::response::BestResponse;
use adaptive_play::response::Sampling;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        enumerating_state_space,
        sampling_best_response,
        building_unperturbed_matrix,
        building_perturbed_matrix,
        solving_stationary_distribution,
}

fn enumerating_state_space(c: &mut criterion::Criterion) {
    c.bench_function("enumerate 3x3 histories of memory 3", |b| {
        b.iter(|| Space::new(3, 3).expect("valid space"))
    });
}

fn sampling_best_response(c: &mut criterion::Criterion) {
    let space = Space::new(6, 2).expect("valid space");
    let history = space.get(space.len() / 3).expect("in range");
    let payoffs = Payoffs::coordination();
    c.bench_function("k=3 best response over memory 6", |b| {
        b.iter(|| Sampling.distribution(history, Player::P1, 3, &payoffs))
    });
}

fn building_unperturbed_matrix(c: &mut criterion::Criterion) {
    let space = Space::new(3, 3).expect("valid space");
    let payoffs = Payoffs::young();
    c.bench_function("build unperturbed 729x729 matrix", |b| {
        b.iter(|| Matrix::unperturbed(&space, 1, &payoffs).expect("valid model"))
    });
}

fn building_perturbed_matrix(c: &mut criterion::Criterion) {
    let space = Space::new(3, 3).expect("valid space");
    let payoffs = Payoffs::young();
    c.bench_function("build perturbed 729x729 matrix", |b| {
        b.iter(|| Matrix::perturbed(&space, 1, 0.01, &payoffs).expect("valid model"))
    });
}

fn solving_stationary_distribution(c: &mut criterion::Criterion) {
    let space = Space::new(4, 2).expect("valid space");
    let matrix = Matrix::perturbed(&space, 2, 0.01, &Payoffs::coordination()).expect("valid model");
    c.bench_function("stationary distribution of 256-state chain", |b| {
        b.iter(|| Markov.stationary_distributions(&matrix))
    });
}
