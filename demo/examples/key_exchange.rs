use animation::{FixedStepClock, FrameClock, RecordingSurface, RenderSession};
use curve::Point;
use demo::{DemoConfig, KeyExchange, Party, PrivateKey};

fn main() {
    let config = DemoConfig::default();
    let curve = config
        .curve()
        .expect("default curve")
        .with_base_point(Point::new(0, 10))
        .expect("base point");

    let mut alice = RenderSession::new(RecordingSurface::new(), curve, config.animation);
    let mut bob = RenderSession::new(RecordingSurface::new(), curve, config.animation);
    let mut exchange = KeyExchange::new(
        curve,
        config,
        PrivateKey::new(21).expect("alice key"),
        PrivateKey::new(29).expect("bob key"),
    );

    let mut clock = FixedStepClock::sixty_hz();
    let mut said = [String::new(), String::new()];
    while !exchange.is_finished() {
        exchange
            .advance(clock.next_frame(), &mut alice, &mut bob)
            .expect("exchange");

        for (i, party) in [Party::Alice, Party::Bob].into_iter().enumerate() {
            let line = exchange.narration(party);
            if line != said[i] {
                println!("[{:>8.0} ms] {line}", clock.now());
                said[i] = line.to_string();
            }
        }
    }

    let secret = exchange.shared_secret(Party::Alice).expect("alice secret");
    assert_eq!(Some(secret), exchange.shared_secret(Party::Bob));
    println!(
        "alice drew {} commands, bob drew {}",
        alice.surface().commands().len(),
        bob.surface().commands().len()
    );
}
