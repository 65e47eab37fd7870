use animation::{
    drive, Addition, AdditionResult, AnimationConfig, CompletionState, FixedStepClock, FrameClock,
    Phase, RecordingSurface, RenderSession, StepOutcome,
};
use curve::{Curve, Point};

fn session() -> RenderSession<RecordingSurface> {
    RenderSession::new(RecordingSurface::new(), Curve::demo(), AnimationConfig::default())
}

#[test]
fn test_new_animation_cancels_one_mid_sweep() {
    let mut session = session();
    let mut clock = FixedStepClock::sixty_hz();
    let curve = *session.curve();
    let p = curve.base_point();

    let mut first = session.start_addition(Addition::doubling(p));
    let reached_sweep = drive(&mut clock, 1000, |t| {
        session.advance(t);
        (session.phase() == Some(Phase::Sweep)).then_some(())
    });
    assert!(reached_sweep.is_some());
    session.advance(clock.next_frame());
    assert_eq!(session.phase(), Some(Phase::Sweep));

    let restores = session.surface().restores();
    let q = curve.point_mult(&p, 2);
    let mut second = session.start_addition(Addition::new(p, q).with_multiples(1, 2));
    assert!(session.surface().restores() > restores);
    assert_eq!(first.poll(), CompletionState::Cancelled);

    let done = drive(&mut clock, 1000, |t| match session.advance(t) {
        Some(StepOutcome::Done(result)) => Some(result),
        _ => None,
    });
    let expected = AdditionResult {
        multiple: 3,
        point: curve.point_mult(&p, 3),
    };
    assert_eq!(done, Some(expected));
    assert_eq!(second.poll(), CompletionState::Ready(expected));
    assert_eq!(first.poll(), CompletionState::Cancelled);
}

#[test]
fn test_sessions_are_independent() {
    let curve = Curve::demo();
    let mut alice = session();
    let mut bob = session();
    let g = Point::new(0, 10);

    let mut a = alice.start_addition(Addition::doubling(g));
    let mut b = bob.start_addition(Addition::new(g, curve.point_mult(&g, 2)).with_multiples(1, 2));

    let mut clock = FixedStepClock::sixty_hz();
    let both = drive(&mut clock, 2000, |t| {
        alice.advance(t);
        bob.advance(t);
        (!alice.is_animating() && !bob.is_animating()).then_some(())
    });
    assert!(both.is_some());

    assert!(matches!(a.poll(), CompletionState::Ready(r) if r.point == curve.point_mult(&g, 2)));
    assert!(matches!(b.poll(), CompletionState::Ready(r) if r.point == curve.point_mult(&g, 3)));
}
