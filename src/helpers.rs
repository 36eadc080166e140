use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a freshly shuffled copy of a sequence, leaving the original
/// order untouched.
pub trait Shuffled {
    type Item;

    fn shuffled(&self, rng: &mut impl Rng) -> Vec<Self::Item>;
}

impl<T: Clone> Shuffled for [T] {
    type Item = T;

    fn shuffled(&self, rng: &mut impl Rng) -> Vec<T> {
        let mut items = self.to_vec();
        items.shuffle(rng);
        items
    }
}
