use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use curve::Curve;

use crate::canvas::Canvas;
use crate::config::AnimationConfig;
use crate::machine::{AddAnimation, Addition, AdditionResult, StepOutcome};
use crate::phase::Phase;
use crate::render::RenderSurface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompletionState {
    Pending,
    Ready(AdditionResult),
    /// The animation was replaced or cancelled and will never deliver.
    Cancelled,
}

/// The receiving end of an addition started on a [`RenderSession`].
#[derive(Debug)]
pub struct Completion {
    receiver: Receiver<AdditionResult>,
    result: Option<AdditionResult>,
}

impl Completion {
    fn new(receiver: Receiver<AdditionResult>) -> Self {
        Completion {
            receiver,
            result: None,
        }
    }

    pub fn poll(&mut self) -> CompletionState {
        if let Some(result) = self.result {
            return CompletionState::Ready(result);
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.result = Some(result);
                CompletionState::Ready(result)
            }
            Err(TryRecvError::Empty) => CompletionState::Pending,
            Err(TryRecvError::Disconnected) => CompletionState::Cancelled,
        }
    }
}

struct InFlight {
    animation: AddAnimation,
    sender: Sender<AdditionResult>,
}

/// One render target with at most one addition animating on it.
pub struct RenderSession<S: RenderSurface> {
    canvas: Canvas<S>,
    config: AnimationConfig,
    in_flight: Option<InFlight>,
}

impl<S: RenderSurface> RenderSession<S> {
    pub fn new(surface: S, curve: Curve, config: AnimationConfig) -> Self {
        let mut canvas = Canvas::new(surface, curve);
        canvas.reset();
        RenderSession {
            canvas,
            config,
            in_flight: None,
        }
    }

    pub fn curve(&self) -> &Curve {
        self.canvas.curve()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas<S> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<S> {
        &mut self.canvas
    }

    pub fn surface(&self) -> &S {
        self.canvas.surface()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.in_flight.as_ref().map(|flight| flight.animation.phase())
    }

    /// Start animating `request`, cancelling whatever was running.
    pub fn start_addition(&mut self, request: Addition) -> Completion {
        self.reset();

        let (sender, receiver) = mpsc::channel();
        let animation = AddAnimation::new(self.canvas.curve(), request, &self.config);
        log::debug!(
            "animating {} + {} as {:?}",
            animation.request().p,
            animation.request().q,
            animation.variant()
        );
        self.in_flight = Some(InFlight { animation, sender });

        Completion::new(receiver)
    }

    /// Drop the in-flight animation, if any. Its completion never fires.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(mut flight) => {
                flight.animation.cancel();
                log::debug!("cancelled animation in {}", flight.animation.phase());
                true
            }
            None => false,
        }
    }

    /// Cancel anything in flight and restore the baseline plot.
    pub fn reset(&mut self) {
        self.cancel();
        self.canvas.reset();
    }

    /// Advance the in-flight animation. `None` when nothing is running.
    pub fn advance(&mut self, timestamp: f64) -> Option<StepOutcome> {
        let flight = self.in_flight.as_mut()?;
        let outcome = flight.animation.advance(timestamp, &mut self.canvas);

        match outcome {
            StepOutcome::Running => {}
            StepOutcome::Done(result) => {
                if let Some(flight) = self.in_flight.take() {
                    // the caller may have dropped its completion
                    let _ = flight.sender.send(result);
                }
            }
            StepOutcome::Cancelled => self.in_flight = None,
        }
        Some(outcome)
    }
}
