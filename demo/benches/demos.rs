use animation::{LabelOptions, RecordingSurface, RenderSession};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curve::Point;
use demo::{DemoConfig, DemoEvent, DoubleAndAdd, PrivateKey, PublicKey};

fn bench_double_and_add(c: &mut Criterion) {
    let config = DemoConfig::default();
    let curve = config.curve().expect("curve");

    c.bench_function("double-and-add 141P at 60 Hz", |b| {
        b.iter(|| {
            let mut session = RenderSession::new(RecordingSurface::new(), curve, config.animation);
            let mut run = DoubleAndAdd::new(
                &curve,
                curve.base_point(),
                black_box(141),
                LabelOptions::default(),
                config.doubling,
            );
            let mut t = 0.0;
            loop {
                t += 1000.0 / 60.0;
                if let Some(DemoEvent::Finished(point)) = run.advance(t, &mut session) {
                    break point;
                }
            }
        })
    });
}

fn bench_public_key_encoding(c: &mut Criterion) {
    let curve = DemoConfig::default()
        .curve()
        .expect("curve")
        .with_base_point(Point::new(0, 10))
        .expect("base");
    let key = PrivateKey::new(21).expect("key").public_key(&curve);

    c.bench_function("public key bincode round trip", |b| {
        b.iter(|| {
            let bytes = black_box(&key).to_bytes().expect("serialize");
            PublicKey::from_bytes(&curve, &bytes).expect("deserialize")
        })
    });
}

criterion_group!(benches, bench_double_and_add, bench_public_key_encoding);
criterion_main!(benches);
