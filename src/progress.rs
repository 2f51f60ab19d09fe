use crate::Degenerate;
use crate::Energy;

/// Informational progress emitted by the engines.
/// Never required for correctness.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial centers have been sampled.
    Seeded { k: usize, n: usize, dimension: usize },
    /// One assignment + update pass finished.
    /// `shifts[i]` is how far center `i` moved; `delta` is the convergence scalar.
    Step {
        iteration: usize,
        shifts: Vec<Energy>,
        delta: Energy,
    },
    /// A cluster ended an assignment pass with no points.
    Degenerate {
        iteration: usize,
        cluster: usize,
        policy: Degenerate,
    },
    /// `delta` fell below epsilon after `iterations` passes.
    Converged { iterations: usize, delta: Energy },
    /// The iteration budget ran out first.
    Exhausted { iterations: usize, delta: Energy },
}

/// Sink for [`Event`]s.
pub trait Observer {
    fn observe(&mut self, event: &Event);
}

/// Discards everything.
impl Observer for () {
    fn observe(&mut self, _: &Event) {}
}

impl<F> Observer for F
where
    F: FnMut(&Event),
{
    fn observe(&mut self, event: &Event) {
        self(event)
    }
}

/// Forwards events to the `log` facade under a fixed label.
#[derive(Debug, Clone, Copy)]
pub struct Logger(pub &'static str);

impl Default for Logger {
    fn default() -> Self {
        Self("clustering")
    }
}

impl Observer for Logger {
    fn observe(&mut self, event: &Event) {
        match event {
            Event::Seeded { k, n, dimension } => log::info!(
                "{:<16}{:<24}k {:<6} n {:<8} d {}",
                self.0,
                "initialized",
                k,
                n,
                dimension
            ),
            Event::Step {
                iteration,
                shifts,
                delta,
            } => log::debug!(
                "{:<16}{:<24}{:>6} delta {:.6} shifts {:?}",
                self.0,
                "iteration",
                iteration,
                delta,
                shifts
            ),
            Event::Degenerate {
                iteration,
                cluster,
                policy,
            } => log::warn!(
                "{:<16}{:<24}{:>6} cluster {} empty, policy {}",
                self.0,
                "degenerate",
                iteration,
                cluster,
                policy
            ),
            Event::Converged { iterations, delta } => log::info!(
                "{:<16}{:<24}{:>6} delta {:.6}",
                self.0,
                "converged",
                iterations,
                delta
            ),
            Event::Exhausted { iterations, delta } => log::warn!(
                "{:<16}{:<24}{:>6} delta {:.6}",
                self.0,
                "not converged",
                iterations,
                delta
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_collect() {
        let mut seen = Vec::new();
        let mut observer = |e: &Event| seen.push(e.clone());
        observer.observe(&Event::Converged {
            iterations: 3,
            delta: 0.,
        });
        observer.observe(&Event::Exhausted {
            iterations: 9,
            delta: 1.,
        });
        assert_eq!(seen.len(), 2);
    }
}
