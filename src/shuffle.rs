use rand::Rng;

/// An option placed at a display position, remembering where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledOption<T> {
    pub value: T,
    /// Position of `value` in the canonical option list.
    pub original_index: usize,
}

/// Identity of one question within one session.
///
/// The generation changes on every restart, so a key never matches a
/// display order produced by an earlier session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionKey {
    pub generation: u64,
    pub index: usize,
}

/// Returns `items` in uniformly random order, each paired with its original index.
///
/// Runs an in-place Fisher–Yates pass from the last position down to 1.
pub fn shuffle_options<R, T, I>(rng: &mut R, items: I) -> Vec<ShuffledOption<T>>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut options: Vec<ShuffledOption<T>> = items
        .into_iter()
        .enumerate()
        .map(|(original_index, value)| ShuffledOption {
            value,
            original_index,
        })
        .collect();

    fisher_yates(rng, &mut options);
    options
}

/// Random permutation of `0..len`.
pub fn display_order<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    fisher_yates(rng, &mut order);
    order
}

fn fisher_yates<R: Rng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Remembers the display order of the question currently on screen.
///
/// Renders may ask for the order any number of times; a new permutation is
/// drawn only when the question key changes.
#[derive(Debug, Clone, Default)]
pub struct DisplayOrderCache {
    current: Option<(QuestionKey, Vec<usize>)>,
}

impl DisplayOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_for<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        key: QuestionKey,
        len: usize,
    ) -> &[usize] {
        let stale = match &self.current {
            Some((cached_key, order)) => *cached_key != key || order.len() != len,
            None => true,
        };

        if stale {
            log::debug!(
                "drawing display order for question {} (generation {})",
                key.index,
                key.generation
            );
            self.current = Some((key, display_order(rng, len)));
        }

        match &self.current {
            Some((_, order)) => order,
            None => &[],
        }
    }

    pub fn key(&self) -> Option<QuestionKey> {
        self.current.as_ref().map(|(key, _)| *key)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
