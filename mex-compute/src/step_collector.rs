/// A type that collects the steps applied by a rewrite pass.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// care which rewrites were applied and only want the transformed tree.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
