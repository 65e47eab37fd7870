use animation::geometry::display_slope;
use animation::segment::{SegmentWalker, INITIAL_SEGMENT_BUDGET};
use animation::{Addition, AnimationConfig, Coord, RecordingSurface, RenderSession, StepOutcome};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Curve, Point};

fn bench_walk(c: &mut Criterion) {
    let walker = SegmentWalker::new(97, display_slope(59, 97));

    c.bench_function("walk full tangent", |b| {
        b.iter(|| {
            let mut at = Coord::new(3.0, 6.0);
            let mut left = 77.0;
            let mut budget = INITIAL_SEGMENT_BUDGET;
            while left > 1e-7 {
                let walk = walker.walk(black_box(at), left.min(2.5), budget);
                left -= walk.consumed_x;
                at = walk.end;
                budget = walk.budget;
            }
            at
        })
    });
}

fn bench_animation(c: &mut Criterion) {
    c.bench_function("animate doubling at 60 Hz", |b| {
        b.iter(|| {
            let mut session = RenderSession::new(
                RecordingSurface::new(),
                Curve::demo(),
                AnimationConfig::default(),
            );
            session.start_addition(Addition::doubling(black_box(Point::new(3, 6))));
            let mut t = 0.0;
            loop {
                t += 1000.0 / 60.0;
                if let Some(StepOutcome::Done(result)) = session.advance(t) {
                    break result;
                }
            }
        })
    });
}

criterion_group!(benches, bench_walk, bench_animation);
criterion_main!(benches);
