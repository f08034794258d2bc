use super::InteractionSignal;

/// Anything that reacts to interaction lifecycle signals.
///
/// Adapters subscribed to the host's event bus only see this trait, so the
/// same dispatch loop can drive a bare tracker or a full widget.
pub trait InteractionHandler {
    fn handle_signal(&mut self, signal: &InteractionSignal);

    fn handle_signals(&mut self, signals: &[InteractionSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
