/// LIFO stack of integers.
///
/// Popping keeps the backing capacity around, so a scanner that repeatedly
/// descends to the same depth doesn't reallocate.
#[derive(Debug, Default, Clone)]
pub struct IntStack {
    store: Vec<i64>,
}

impl IntStack {
    pub fn new() -> Self {
        Self { store: Vec::new() }
    }

    pub fn push(&mut self, v: i64) {
        self.store.push(v)
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.store.pop()
    }

    pub fn peek(&self) -> Option<i64> {
        self.store.last().copied()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::IntStack;

    #[test]
    fn push_increments_len() {
        let mut s = IntStack::new();

        s.push(5);
        assert_eq!(s.len(), 1);

        s.push(12);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn pop_returns_top() {
        let mut s = IntStack::new();

        s.push(99);
        assert_eq!(s.len(), 1);

        assert_eq!(s.pop(), Some(99));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn peek_follows_pushes_and_pops() {
        let mut s = IntStack::new();

        s.push(99);
        assert_eq!(s.peek(), Some(99));

        s.push(54);
        assert_eq!(s.peek(), Some(54));

        s.pop();
        assert_eq!(s.peek(), Some(99));

        s.pop();
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn empty_stack_yields_nothing() {
        let mut s = IntStack::new();

        assert_eq!(s.peek(), None);
        assert_eq!(s.pop(), None);
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());

        let mut d = IntStack::default();
        assert_eq!(d.pop(), None);
    }

    #[test]
    fn repeated_peek_on_empty_is_stable() {
        let mut s = IntStack::new();

        assert_eq!(s.peek(), None);
        assert_eq!(s.peek(), None);
        assert_eq!(s.peek(), None);

        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), None);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn pops_come_back_reversed() {
        let values = [3, -7, 0, i64::MAX, i64::MIN, 42];
        let mut s = IntStack::new();

        for v in values {
            s.push(v);
        }
        assert_eq!(s.len(), values.len());

        for v in values.iter().rev() {
            assert_eq!(s.pop(), Some(*v));
        }

        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut s = IntStack::new();
        s.push(1);
        s.push(2);

        for _ in 0..10 {
            assert_eq!(s.peek(), Some(2));
        }

        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
    }

    #[test]
    fn zero_is_not_absence() {
        let mut s = IntStack::new();
        s.push(0);

        assert_eq!(s.peek(), Some(0));
        assert_eq!(s.pop(), Some(0));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn interleaved_push_pop_stays_lifo() {
        let mut s = IntStack::new();

        s.push(1);
        s.push(2);
        assert_eq!(s.pop(), Some(2));
        s.push(3);
        s.push(4);
        assert_eq!(s.pop(), Some(4));
        assert_eq!(s.peek(), Some(3));
        s.push(5);
        assert_eq!(s.len(), 3);

        assert_eq!(s.pop(), Some(5));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut s = IntStack::new();

        for i in 0..10_000 {
            s.push(i);
        }
        assert_eq!(s.len(), 10_000);
        assert_eq!(s.peek(), Some(9_999));

        for i in (0..10_000).rev() {
            assert_eq!(s.pop(), Some(i));
        }
        assert!(s.is_empty());
    }
}
