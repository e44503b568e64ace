use log::trace;

use super::TabuList;
use crate::job::JobIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRecord {
    /// Job that came first when the record was made.
    i: JobIndex,
    /// Job that came second.
    j: JobIndex,
}

#[derive(Debug, Clone)]
pub struct SimpleTabuList {
    /// Current index at tabu list. (circular buffer)
    cur_idx: usize,
    /// Array of tabu list items. It is tabu list.
    tabu: Vec<Option<ListRecord>>,
    /// Occupancy table (number of jobs x number of jobs). Counts how often a pair is held,
    /// so evicting one of two equal records keeps the pair forbidden.
    tabu_search: Vec<Vec<u32>>,
    /// Number of occupied slots.
    len: usize,
}

impl SimpleTabuList {
    pub fn new(number_of_jobs: usize, length: usize) -> Self {
        Self {
            cur_idx: 0,
            tabu: vec![None; length],
            tabu_search: vec![vec![0; number_of_jobs]; number_of_jobs],
            len: 0,
        }
    }

    /// Records from oldest to newest.
    pub fn records(&self) -> impl Iterator<Item = (JobIndex, JobIndex)> + '_ {
        let (newer, older) = self.tabu.split_at(self.cur_idx);
        older
            .iter()
            .chain(newer)
            .flatten()
            .map(|record| (record.i, record.j))
    }
}

impl TabuList for SimpleTabuList {
    fn contains(&self, a: JobIndex, b: JobIndex) -> bool {
        self.tabu_search
            .get(a)
            .and_then(|tsv| tsv.get(b))
            .map_or(false, |&count| count > 0)
    }

    fn record(&mut self, a: JobIndex, b: JobIndex) {
        let tabu_length = self.tabu.len();
        if tabu_length == 0 {
            return;
        }

        if let Some(evicted) = self.tabu[self.cur_idx].take() {
            trace!("evicting tabu pair ({}, {})", evicted.i, evicted.j);
            if let Some(ts) = self
                .tabu_search
                .get_mut(evicted.i)
                .and_then(|tsv| tsv.get_mut(evicted.j))
            {
                *ts -= 1;
            }
            self.len -= 1;
        }

        if let Some(ts) = self.tabu_search.get_mut(a).and_then(|tsv| tsv.get_mut(b)) {
            *ts += 1;
        }
        self.tabu[self.cur_idx] = Some(ListRecord { i: a, j: b });
        self.len += 1;

        self.cur_idx = (self.cur_idx + 1) % tabu_length;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.tabu.len()
    }

    fn job_count(&self) -> usize {
        self.tabu_search.len()
    }
}
