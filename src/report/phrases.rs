use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Uniform phrase and number picker over an injected generator
pub(crate) struct Phrases<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> Phrases<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }

    pub fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut *self.rng).copied().unwrap_or_default()
    }

    pub fn int(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    /// Uniform float rendered with `decimals` places
    pub fn float(&mut self, low: f64, high: f64, decimals: usize) -> String {
        let value: f64 = self.rng.random_range(low..high);
        format!("{:.*}", decimals, value)
    }

    pub fn raw_float(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..high)
    }

    pub fn sign(&mut self) -> &'static str {
        self.pick(&["+", "-"])
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut *self.rng);
    }
}

/// Number `items` as a markdown ordered list.
pub(crate) fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill `findings` up to `target` from shuffled generic candidates.
///
/// Candidates are drawn without replacement, so this always terminates; if
/// there are too few, the list simply stays shorter.
pub(crate) fn top_up<R: Rng>(
    findings: &mut Vec<String>,
    mut generic: Vec<String>,
    target: usize,
    phrases: &mut Phrases<'_, R>,
) {
    phrases.shuffle(&mut generic);
    let needed = target.saturating_sub(findings.len());
    findings.extend(generic.into_iter().take(needed));
    findings.truncate(target);
}

/// Join themes as "a, b and c".
pub(crate) fn join_natural(items: &[String]) -> Option<String> {
    match items {
        [] => None,
        [only] => Some(only.clone()),
        [init @ .., last] => Some(format!("{} and {}", init.join(", "), last)),
    }
}
