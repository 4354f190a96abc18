use super::choice::Choice;
use super::error::ChooserError;
use super::random::RandomSource;
use log::{debug, trace, warn};

///
/// A precomputed table for repeated weighted random selection.
///
/// Building sorts the choices by ascending weight and records the running
/// total of weights alongside them. Each pick is then one draw from a
/// [`RandomSource`] plus a binary search over the running totals, so picks cost
/// O(log n) after an O(n log n) build.
///
/// A chooser is never modified after it is built. To change the weights, build
/// a new one. Since picking only reads, a single chooser can be shared between
/// threads (for example behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct Chooser<T> {
    choices: Vec<Choice<T>>,
    totals: Vec<u64>,
    max: u64,
}

impl<T> Chooser<T> {
    ///
    /// Builds a chooser from the given choices.
    ///
    /// The first negative weight (by input position) fails the build with
    /// [`ChooserError::InvalidWeight`]. Ties keep their input order.
    ///
    pub fn new(mut choices: Vec<Choice<T>>) -> Result<Chooser<T>, ChooserError> {
        if let Some((index, choice)) = choices
            .iter()
            .enumerate()
            .find(|(_, choice)| choice.weight < 0)
        {
            return Err(ChooserError::InvalidWeight {
                index,
                weight: choice.weight,
            });
        }

        choices.sort_by_key(|choice| choice.weight);

        let mut totals = Vec::with_capacity(choices.len());
        let mut running_total: u64 = 0;
        for choice in choices.iter() {
            // Non-negative after the check above
            running_total = running_total
                .checked_add(choice.weight as u64)
                .ok_or(ChooserError::WeightOverflow)?;
            totals.push(running_total);
        }

        debug!(
            "Built chooser with {} choices, total weight {}",
            choices.len(),
            running_total
        );

        Ok(Chooser {
            choices,
            totals,
            max: running_total,
        })
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Chooser<T>, ChooserError>
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        Chooser::new(pairs.into_iter().map(Choice::from).collect())
    }

    /// Picks an item using the thread local generator.
    pub fn pick(&self) -> Result<&T, ChooserError> {
        self.pick_with(&mut rand::thread_rng())
    }

    ///
    /// Picks an item, drawing exactly one value from `rng` when there is
    /// anything to pick.
    ///
    /// Fails with [`ChooserError::NoChoices`] if the chooser is empty or every
    /// weight is 0. In both cases `rng` is not touched.
    ///
    pub fn pick_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&T, ChooserError> {
        let index = self.pick_index_with(rng)?;
        Ok(&self.choices[index].item)
    }

    /// As [`Chooser::pick_with`], returning the position in [`Chooser::choices`].
    pub fn pick_index_with<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<usize, ChooserError> {
        if self.max == 0 {
            if !self.choices.is_empty() {
                warn!(
                    "Picking from {} choices with a total weight of 0",
                    self.choices.len()
                );
            }
            return Err(ChooserError::NoChoices);
        }
        let r = rng.below(self.max) + 1;
        // First running total >= r. Always in bounds as the last total is max.
        let index = self.totals.partition_point(|total| *total < r);
        trace!("Drew {} of {}, picked index {}", r, self.max, index);
        Ok(index)
    }

    /// Number of choices, including those with weight 0.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// True when the chooser was built from at least one choice.
    pub fn is_ready(&self) -> bool {
        !self.choices.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.max
    }

    /// The choices in the chooser's internal (ascending weight) order.
    pub fn choices(&self) -> &[Choice<T>] {
        &self.choices
    }

    /// Running totals matching [`Chooser::choices`].
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    /// Chance of the choice at `index` (internal order) being picked.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let choice = self.choices.get(index)?;
        if self.max == 0 {
            return Some(0.0);
        }
        Some(choice.weight as f64 / self.max as f64)
    }
}
