//! Diffie-Hellman key exchange drawn on two plots, one per party.

use std::collections::BTreeMap;
use std::fmt;
use std::mem;

use animation::{LabelOptions, RenderSession, RenderSurface};
use curve::{Curve, Point};

use crate::config::DemoConfig;
use crate::constants::IDLE_BANNER;
use crate::double_add::DoubleAndAdd;
use crate::errors::DemoError;
use crate::events::DemoEvent;
use crate::keys::{PrivateKey, PublicKey};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    Alice,
    Bob,
}

impl Party {
    pub fn name(&self) -> &'static str {
        match self {
            Party::Alice => "Alice",
            Party::Bob => "Bob",
        }
    }

    /// How this party's public key is labelled on the plots.
    pub fn key_label(&self) -> &'static str {
        match self {
            Party::Alice => "A",
            Party::Bob => "B",
        }
    }

    pub fn other(&self) -> Party {
        match self {
            Party::Alice => Party::Bob,
            Party::Bob => Party::Alice,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened on one party's plot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExchangeEvent {
    pub party: Party,
    pub event: DemoEvent,
}

struct Actor {
    key: PrivateKey,
    narration: String,
    /// The public key as sent over the wire.
    published: Option<Vec<u8>>,
    shared: Option<Point>,
}

impl Actor {
    fn new(key: PrivateKey) -> Self {
        Actor {
            key,
            narration: String::new(),
            published: None,
            shared: None,
        }
    }
}

enum Stage {
    Start,
    Publishing(Party, DoubleAndAdd),
    Pausing { started: Option<f64> },
    Deriving {
        alice: Option<DoubleAndAdd>,
        bob: Option<DoubleAndAdd>,
    },
    Finished,
}

/// Alice and Bob each derive a public key, swap them, and multiply the
/// other's key by their own private key to reach the same shared point.
///
/// Alice goes first while Bob's plot shows an idle banner, then Bob. After a
/// pause both derive the shared secret side by side.
pub struct KeyExchange {
    curve: Curve,
    config: DemoConfig,
    alice: Actor,
    bob: Actor,
    stage: Stage,
}

impl KeyExchange {
    pub fn new(curve: Curve, config: DemoConfig, alice: PrivateKey, bob: PrivateKey) -> Self {
        KeyExchange {
            curve,
            config,
            alice: Actor::new(alice),
            bob: Actor::new(bob),
            stage: Stage::Start,
        }
    }

    /// The line of text describing what `party` is doing.
    pub fn narration(&self, party: Party) -> &str {
        &self.actor(party).narration
    }

    /// The shared point `party` has derived, once it has.
    pub fn shared_secret(&self, party: Party) -> Option<Point> {
        self.actor(party).shared
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    fn actor(&self, party: Party) -> &Actor {
        match party {
            Party::Alice => &self.alice,
            Party::Bob => &self.bob,
        }
    }

    fn actor_mut(&mut self, party: Party) -> &mut Actor {
        match party {
            Party::Alice => &mut self.alice,
            Party::Bob => &mut self.bob,
        }
    }

    pub fn advance<S: RenderSurface>(
        &mut self,
        timestamp: f64,
        alice: &mut RenderSession<S>,
        bob: &mut RenderSession<S>,
    ) -> Result<Vec<ExchangeEvent>, DemoError> {
        let mut events = Vec::new();

        self.stage = match mem::replace(&mut self.stage, Stage::Finished) {
            Stage::Start => {
                bob.reset();
                bob.canvas_mut().banner(IDLE_BANNER);
                Stage::Publishing(Party::Alice, self.start_publishing(Party::Alice))
            }
            Stage::Publishing(party, mut run) => {
                let session = match party {
                    Party::Alice => &mut *alice,
                    Party::Bob => &mut *bob,
                };
                match run.advance(timestamp, session) {
                    Some(DemoEvent::Finished(point)) => {
                        self.publish(party, point, session)?;
                        events.push(ExchangeEvent {
                            party,
                            event: DemoEvent::Step {
                                multiple: run.scalar(),
                                point,
                            },
                        });
                        match party {
                            Party::Alice => Stage::Publishing(Party::Bob, self.start_publishing(Party::Bob)),
                            Party::Bob => Stage::Pausing { started: None },
                        }
                    }
                    Some(event) => {
                        events.push(ExchangeEvent { party, event });
                        Stage::Publishing(party, run)
                    }
                    None => Stage::Publishing(party, run),
                }
            }
            Stage::Pausing { started } => {
                let started = started.unwrap_or(timestamp);
                if timestamp - started > self.config.exchange_pause_ms {
                    Stage::Deriving {
                        alice: Some(self.start_deriving(Party::Alice)?),
                        bob: Some(self.start_deriving(Party::Bob)?),
                    }
                } else {
                    Stage::Pausing { started: Some(started) }
                }
            }
            Stage::Deriving {
                alice: mut alice_run,
                bob: mut bob_run,
            } => {
                for (party, run, session) in [
                    (Party::Alice, &mut alice_run, &mut *alice),
                    (Party::Bob, &mut bob_run, &mut *bob),
                ] {
                    let Some(current) = run.as_mut() else {
                        continue;
                    };
                    match current.advance(timestamp, session) {
                        Some(DemoEvent::Finished(point)) => {
                            *run = None;
                            self.found_secret(party, point, session);
                            events.push(ExchangeEvent {
                                party,
                                event: DemoEvent::Finished(point),
                            });
                        }
                        Some(event) => events.push(ExchangeEvent { party, event }),
                        None => {}
                    }
                }

                if alice_run.is_none() && bob_run.is_none() {
                    if self.alice.shared != self.bob.shared {
                        log::warn!(
                            "shared secrets disagree: {:?} and {:?}",
                            self.alice.shared,
                            self.bob.shared
                        );
                    }
                    Stage::Finished
                } else {
                    Stage::Deriving {
                        alice: alice_run,
                        bob: bob_run,
                    }
                }
            }
            Stage::Finished => Stage::Finished,
        };

        Ok(events)
    }

    fn start_publishing(&mut self, party: Party) -> DoubleAndAdd {
        let scalar = self.actor(party).key.scalar();
        self.actor_mut(party).narration = format!(
            "{party} multiplies P by their private key ({scalar}) to find their public key, {}:",
            party.key_label()
        );
        DoubleAndAdd::new(
            &self.curve,
            self.curve.base_point(),
            scalar,
            LabelOptions::default(),
            self.config.doubling,
        )
    }

    /// Encode `party`'s public key for the other side and show it.
    fn publish<S: RenderSurface>(
        &mut self,
        party: Party,
        point: Point,
        session: &mut RenderSession<S>,
    ) -> Result<(), DemoError> {
        let bytes = PublicKey::from_point(&self.curve, point)?.to_bytes()?;
        log::info!(
            "{party} published {} = {point} as {} bytes",
            party.key_label(),
            bytes.len()
        );

        let actor = self.actor_mut(party);
        actor.published = Some(bytes);
        actor.narration = format!(
            "{party} gives their public key ({}) to the other party.",
            party.key_label()
        );

        session.reset();
        session.canvas_mut().draw_and_label_points(
            &BTreeMap::from([(1, point)]),
            &LabelOptions::named(party.key_label()).with_coords(),
        );
        Ok(())
    }

    /// Decode the other party's key and start multiplying it.
    fn start_deriving(&mut self, party: Party) -> Result<DoubleAndAdd, DemoError> {
        let theirs = party.other();
        let bytes = self.actor(theirs).published.clone().unwrap_or_default();
        let key = PublicKey::from_bytes(&self.curve, &bytes)?;
        let scalar = self.actor(party).key.scalar();

        self.actor_mut(party).narration = format!(
            "{party} multiplies {} by their private key ({scalar}):",
            theirs.key_label()
        );
        Ok(DoubleAndAdd::new(
            &self.curve,
            key.point(),
            scalar,
            LabelOptions::named(theirs.key_label()),
            self.config.doubling,
        ))
    }

    fn found_secret<S: RenderSurface>(&mut self, party: Party, point: Point, session: &mut RenderSession<S>) {
        let scalar = self.actor(party).key.scalar();
        let label = party.other().key_label();
        log::info!("{party} found the shared secret {point}");

        let actor = self.actor_mut(party);
        actor.shared = Some(point);
        actor.narration = format!("{party} has found the shared secret: {point}");

        session.reset();
        session.canvas_mut().draw_and_label_points(
            &BTreeMap::from([(scalar, point)]),
            &LabelOptions::named(label).with_coords(),
        );
    }
}
