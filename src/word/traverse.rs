/*
    Higher-order word traversals

    The arithmetic layers express their word loops through these instead
    of open-coding index arithmetic; a ripple-carry addition, for example,
    is a `zip_with_state` whose closure threads the carry.
*/

use crate::word::WordArray;

impl<const N: usize> WordArray<N> {
    /// Applies `f` to every backing word, re-masking the top word.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(u64) -> u64,
    {
        let words: Vec<u64> = self.words().iter().map(|w| f(*w)).collect();
        Self::from_words(&words)
    }

    /// Combines two same-width arrays word by word.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(u64, u64) -> u64,
    {
        let words: Vec<u64> = self
            .words()
            .iter()
            .zip(other.words())
            .map(|(a, b)| f(*a, *b))
            .collect();
        Self::from_words(&words)
    }

    /// Combines two same-width arrays word by word with a stateful
    /// closure, rippling from the least significant word upward.
    pub fn zip_with_state<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(u64, u64) -> u64,
    {
        let words: Vec<u64> = self
            .words()
            .iter()
            .zip(other.words())
            .map(|(a, b)| f(*a, *b))
            .collect();
        Self::from_words(&words)
    }

    /// Combines arrays of possibly different widths word by word, the
    /// narrower operand read as zero-extended. `R` must equal the wider
    /// of the two widths.
    pub fn zip_with_expand<const V: usize, const R: usize, F>(
        &self,
        other: &WordArray<V>,
        mut f: F,
    ) -> WordArray<R>
    where
        F: FnMut(u64, u64) -> u64,
    {
        assert_eq!(R, if N > V { N } else { V }, "zip_with_expand output width mismatch");
        let a = self.width_cast::<R>();
        let b = other.width_cast::<R>();
        let words: Vec<u64> = a
            .words()
            .iter()
            .zip(b.words())
            .map(|(a, b)| f(*a, *b))
            .collect();
        WordArray::from_words(&words)
    }

    /// Folds the backing words from least significant to most.
    pub fn reduce<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, u64) -> T,
    {
        self.words().iter().fold(init, |acc, w| f(acc, *w))
    }

    /// Folds two same-width arrays word-parallel.
    pub fn zip_reduce<T, F>(&self, other: &Self, init: T, mut f: F) -> T
    where
        F: FnMut(T, u64, u64) -> T,
    {
        self.words()
            .iter()
            .zip(other.words())
            .fold(init, |acc, (a, b)| f(acc, *a, *b))
    }

    /// Folds two arrays of possibly different widths word-parallel, the
    /// narrower operand read as zero-extended.
    pub fn zip_reduce_expand<const V: usize, T, F>(&self, other: &WordArray<V>, init: T, mut f: F) -> T
    where
        F: FnMut(T, u64, u64) -> T,
    {
        let count = Self::word_count().max(WordArray::<V>::word_count());
        let mut acc = init;
        for i in 0..count {
            let a = self.words().get(i).copied().unwrap_or(0);
            let b = other.words().get(i).copied().unwrap_or(0);
            acc = f(acc, a, b);
        }
        acc
    }
}
