use crate::mvu::round::{AppModel, Effect, Msg, update};

/// Receives every effect produced by the runtime, after the model has been updated.
pub trait Observer {
    fn notify(&mut self, model: &AppModel, effect: Effect);
}

impl<F> Observer for F
where
    F: FnMut(&AppModel, Effect),
{
    fn notify(&mut self, model: &AppModel, effect: Effect) {
        self(model, effect);
    }
}

/// Owns the model and drives the MVU loop: each dispatched message is applied
/// in full and its effects delivered to all observers before returning.
pub struct Runtime<'a> {
    model: AppModel,
    observers: Vec<Box<dyn Observer + 'a>>,
}

impl<'a> Runtime<'a> {
    #[must_use]
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'a) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Returns the effects that were delivered, empty when the message was ignored.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = update(&mut self.model, msg);
        for &effect in &effects {
            for observer in &mut self.observers {
                observer.notify(&self.model, effect);
            }
        }
        effects
    }
}
