//! Per-generation trait averages, and the history of them a run accumulates.

use crate::{Organism, Trait};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean of each trait over one population, keyed by trait
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitAverages(BTreeMap<Trait, f64>);

impl TraitAverages {
    /// Arithmetic mean of every trait in `traits` over `population`. None for an empty
    /// population, which has no mean.
    pub fn of(population: &[Organism], traits: &[Trait]) -> Option<Self> {
        if population.is_empty() {
            return None;
        }

        let n = population.len() as f64;
        Some(Self(
            traits
                .iter()
                .map(|&t| (t, population.iter().map(|rabbit| rabbit.get(t)).sum::<f64>() / n))
                .collect(),
        ))
    }

    #[inline]
    pub fn get(&self, t: Trait) -> Option<f64> {
        self.0.get(&t).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        self.0.iter().map(|(t, v)| (*t, *v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One labeled data point of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub population: usize,
    pub averages: TraitAverages,
}

/// Every [GenerationRecord] of a run, in generation order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<GenerationRecord>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GenerationRecord) {
        self.0.push(record);
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.0
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.0.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trajectory of a single trait, one value per recorded generation that tracked it.
    /// This is what a plotter wants for one line.
    pub fn series(&self, t: Trait) -> Vec<(usize, f64)> {
        self.0
            .iter()
            .filter_map(|record| record.averages.get(t).map(|v| (record.generation, v)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_f64_approx;

    fn pair() -> [Organism; 2] {
        [
            Organism::new(2., 2., 0.5, 2.),
            Organism::new(4., 4., 0.25, 3.),
        ]
    }

    #[test]
    fn test_averages() {
        let averages = TraitAverages::of(&pair(), &Trait::ALL).unwrap();
        assert_eq!(4, averages.len());
        assert_f64_approx!(averages.get(Trait::Size).unwrap(), 3.);
        assert_f64_approx!(averages.get(Trait::Speed).unwrap(), 3.);
        assert_f64_approx!(averages.get(Trait::Camouflage).unwrap(), 0.375);
        assert_f64_approx!(averages.get(Trait::ReproductiveRate).unwrap(), 2.5);
    }

    #[test]
    fn test_averages_subset() {
        let averages = TraitAverages::of(&pair(), &[Trait::Speed]).unwrap();
        assert_eq!(vec![(Trait::Speed, 3.)], averages.iter().collect::<Vec<_>>());
        assert_eq!(None, averages.get(Trait::Size));
    }

    #[test]
    fn test_averages_empty_population() {
        assert_eq!(None, TraitAverages::of(&[], &Trait::ALL));
    }

    #[test]
    fn test_averages_json() {
        let averages = TraitAverages::of(&pair(), &Trait::ALL).unwrap();
        assert_eq!(
            r#"{"size":3.0,"speed":3.0,"camouflage":0.375,"reproductiveRate":2.5}"#,
            serde_json::to_string(&averages).unwrap()
        );
    }

    #[test]
    fn test_history_series() {
        let mut history = History::new();
        let [a, b] = pair();
        for (generation, population) in [(1, vec![a, a]), (2, vec![a, b]), (3, vec![b, b])] {
            history.push(GenerationRecord {
                generation,
                population: population.len(),
                averages: TraitAverages::of(&population, &Trait::ALL).unwrap(),
            });
        }

        assert_eq!(3, history.len());
        assert_eq!(
            vec![(1, 2.), (2, 3.), (3, 4.)],
            history.series(Trait::Size)
        );
        assert_eq!(3, history.last().unwrap().generation);

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.starts_with(r#"[{"generation":1,"population":2,"averages":{"size":2.0"#));
        assert_eq!(history, serde_json::from_str(&json).unwrap());
    }
}
