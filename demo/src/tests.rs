use super::*;
use animation::{AnimationConfig, RecordingSurface, RenderSession};
use curve::{Curve, Point};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sessions(curve: Curve, config: &DemoConfig) -> (RenderSession<RecordingSurface>, RenderSession<RecordingSurface>) {
    (
        RenderSession::new(RecordingSurface::new(), curve, config.animation),
        RenderSession::new(RecordingSurface::new(), curve, config.animation),
    )
}

fn exchange_on(base: Point, a: u64, b: u64) -> (KeyExchange, Vec<ExchangeEvent>, RenderSession<RecordingSurface>) {
    let curve = Curve::demo().with_base_point(base).expect("base on curve");
    let config = DemoConfig::default().sped_up(20.0);
    let (mut alice, mut bob) = sessions(curve, &config);
    let mut exchange = KeyExchange::new(
        curve,
        config,
        PrivateKey::new(a).expect("key"),
        PrivateKey::new(b).expect("key"),
    );

    let mut events = Vec::new();
    for i in 1..100_000 {
        events.extend(exchange.advance(i as f64 * 16.0, &mut alice, &mut bob).expect("advance"));
        if exchange.is_finished() {
            break;
        }
    }
    (exchange, events, bob)
}

#[test]
fn test_key_exchange_shared_secret() {
    let g = Point::new(0, 10);
    let (exchange, events, bob) = exchange_on(g, 21, 29);

    assert!(exchange.is_finished());
    assert_eq!(exchange.shared_secret(Party::Alice), Some(Point::new(11, 80)));
    assert_eq!(exchange.shared_secret(Party::Bob), Some(Point::new(11, 80)));
    assert_eq!(
        exchange.narration(Party::Bob),
        "Bob has found the shared secret: (11, 80)"
    );

    let published: Vec<(Party, DemoEvent)> = events
        .iter()
        .filter(|e| matches!(e.event, DemoEvent::Step { multiple, .. } if multiple == 21 || multiple == 29))
        .map(|e| (e.party, e.event))
        .collect();
    assert!(published.contains(&(
        Party::Alice,
        DemoEvent::Step {
            multiple: 21,
            point: Point::new(47, 79)
        }
    )));
    assert!(published.contains(&(
        Party::Bob,
        DemoEvent::Step {
            multiple: 29,
            point: Point::new(47, 18)
        }
    )));

    let finished: Vec<Party> = events
        .iter()
        .filter(|e| matches!(e.event, DemoEvent::Finished(_)))
        .map(|e| e.party)
        .collect();
    assert_eq!(finished.len(), 2);
    assert!(bob.surface().has_text("(11, 80)"));
    assert!(bob.surface().has_text("29A"));
}

#[test]
fn test_bob_waits_for_alice() {
    let curve = Curve::demo();
    let config = DemoConfig::default();
    let (mut alice, mut bob) = sessions(curve, &config);
    let mut exchange = KeyExchange::new(
        curve,
        config,
        PrivateKey::new(3).expect("key"),
        PrivateKey::new(4).expect("key"),
    );

    for i in 1..20 {
        exchange.advance(i as f64 * 16.0, &mut alice, &mut bob).expect("advance");
    }
    assert!(bob.surface().has_text(IDLE_BANNER));
    assert!(exchange.narration(Party::Alice).starts_with("Alice multiplies P by their private key (3)"));
    assert_eq!(exchange.narration(Party::Bob), "");
}

#[test]
fn test_key_exchange_agrees_for_random_keys() {
    let mut rng = StdRng::seed_from_u64(42);
    let curve = Curve::demo();
    for _ in 0..3 {
        let a = PrivateKey::random(&mut rng, &curve);
        let b = PrivateKey::random(&mut rng, &curve);
        let (exchange, _, _) = exchange_on(curve.base_point(), a.scalar(), b.scalar());

        let expected = a.shared_secret(&curve, &b.public_key(&curve));
        assert_eq!(expected, b.shared_secret(&curve, &a.public_key(&curve)));
        assert_eq!(exchange.shared_secret(Party::Alice), Some(expected));
        assert_eq!(exchange.shared_secret(Party::Bob), Some(expected));
    }
}

#[test]
fn test_public_key_round_trip() {
    let curve = Curve::demo().with_base_point(Point::new(0, 10)).expect("base");
    let key = PrivateKey::new(21).expect("key").public_key(&curve);
    assert_eq!(key.point(), Point::new(47, 79));

    let bytes = key.to_bytes().expect("serialize");
    let decoded = PublicKey::from_bytes(&curve, &bytes).expect("deserialize");
    assert_eq!(decoded, key);
}

#[test]
fn test_public_key_at_infinity_is_canonical() {
    let curve = Curve::demo();
    let flagged = Point {
        x: 5,
        y: 9,
        is_infinity: true,
    };
    let bytes = bincode::serialize(&flagged).expect("serialize");
    let decoded = PublicKey::from_bytes(&curve, &bytes).expect("deserialize");
    assert_eq!(decoded.point(), Point::INFINITY);

    // the order of P gives a public key at infinity
    let key = PrivateKey::new(5).expect("key").public_key(&curve);
    assert_eq!(decoded, key);
}

#[test]
fn test_public_key_rejects_bad_input() {
    let curve = Curve::demo();
    assert!(matches!(
        PublicKey::from_point(&curve, Point::new(1, 1)),
        Err(DemoError::InvalidPublicKey { x: 1, y: 1 })
    ));
    assert!(matches!(
        PublicKey::from_bytes(&curve, &[1, 2]),
        Err(DemoError::Encoding(_))
    ));
    assert!(matches!(PrivateKey::new(0), Err(DemoError::ZeroPrivateKey)));
}

#[test]
fn test_random_private_keys_are_below_the_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let curve = Curve::demo();
    let order = curve.order_of(&curve.base_point()).expect("base point is on the curve");
    for _ in 0..64 {
        let key = PrivateKey::random(&mut rng, &curve);
        assert!((1..order).contains(&key.scalar()));
    }
}

#[test]
fn test_config_from_json() {
    let config = DemoConfig::from_json(
        r#"{
            "curve": { "base": { "x": 0, "y": 10 } },
            "doubling": { "move_ms": 250 },
            "exchange_pause_ms": 1000
        }"#,
    )
    .expect("config");

    assert_eq!(config.doubling.move_ms, 250.0);
    assert_eq!(config.doubling.pause_ms, 100.0);
    assert_eq!(config.exchange_pause_ms, 1000.0);
    assert_eq!(config.add_pause_ms, 1500.0);
    assert_eq!(config.animation, AnimationConfig::default());
    assert_eq!(config.curve().expect("curve").base_point(), Point::new(0, 10));
}

#[test]
fn test_config_rejects_bad_curves() {
    let err = DemoConfig::from_json(r#"{ "curve": { "p": 91 } }"#).unwrap_err();
    assert!(matches!(err, DemoError::Curve(curve::CurveError::NotPrime(91))));

    let err = DemoConfig::from_json(r#"{ "curve": { "base": { "x": 1, "y": 1 } } }"#).unwrap_err();
    assert!(matches!(err, DemoError::Curve(_)));

    let err = DemoConfig::from_json(r#"{ "animation": { "durations": { "done": -5 } } }"#).unwrap_err();
    assert!(matches!(err, DemoError::Animation(_)));

    let err = DemoConfig::from_json("[").unwrap_err();
    assert!(matches!(err, DemoError::Config(_)));
}
