use criterion::{black_box, Criterion};
use casteljau_viz::casteljau::evaluate;
use casteljau_viz::draw::DrawList;
use casteljau_viz::{Command, Visualizer};
use crate::common::samples::CHAINS;

pub fn eval(c: &mut Criterion) {
    for (name, chain) in CHAINS.iter() {
        c.bench_function(&format!("eval {}", name), |b| {
            b.iter(|| black_box(evaluate(chain, black_box(0.5))))
        });
    }
}

pub fn frame(c: &mut Criterion) {
    for (name, chain) in CHAINS.iter() {
        let mut visualizer = Visualizer::new();
        for &point in chain.iter() {
            visualizer.apply(Command::Append(point));
        }
        visualizer.apply(Command::TogglePlay);

        let mut list = DrawList::default();
        c.bench_function(&format!("frame {}", name), |b| {
            b.iter(|| {
                list.0.clear();
                black_box(visualizer.frame(1.0 / 60.0, &mut list))
            })
        });
    }
}

pub fn all(c: &mut Criterion) {
    eval(c);
    frame(c);
}
