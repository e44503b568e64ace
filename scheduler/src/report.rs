use tardiness::{Fitness, Job};

/// Column widths for the textual progress output, taken from the widest value
/// of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    iteration_width: usize,
    id_width: usize,
    processing_width: usize,
    due_width: usize,
    weight_width: usize,
}

fn width<T: ToString>(values: impl Iterator<Item = T>) -> usize {
    values.map(|value| value.to_string().len()).max().unwrap_or(1)
}

impl Report {
    pub fn new(jobs: &[Job], iterations: u32) -> Self {
        Self {
            iteration_width: iterations.to_string().len(),
            id_width: width(jobs.iter().map(|job| job.id)),
            processing_width: width(jobs.iter().map(|job| job.processing_time)),
            due_width: width(jobs.iter().map(|job| job.due_date)),
            weight_width: width(jobs.iter().map(|job| job.weight)),
        }
    }

    /// Job table, initial fitness and the line for iteration 0.
    pub fn initial(&self, jobs: &[Job], fitness: Fitness) -> String {
        let mut lines = vec![String::from("Initial schedule (Id: Pj, Dj, Wj):")];

        lines.extend(jobs.iter().map(|job| {
            format!(
                "{:>iw$}: {:>pw$}, {:>dw$}, {:>ww$}",
                job.id,
                job.processing_time,
                job.due_date,
                job.weight,
                iw = self.id_width,
                pw = self.processing_width,
                dw = self.due_width,
                ww = self.weight_width,
            )
        }));

        lines.push(format!("Fitness: {fitness}"));
        lines.push(String::new());
        lines.push(String::from("Iteration step: best schedule, (fitness):"));
        lines.push(self.iteration_line(
            0,
            &jobs.iter().map(|job| job.id).collect::<Vec<_>>(),
            fitness,
        ));

        lines.join("\n")
    }

    /// `iteration: id, id, ..., (fitness)`
    pub fn iteration_line(&self, iteration: u32, job_ids: &[u32], fitness: Fitness) -> String {
        let ids: String = job_ids
            .iter()
            .map(|id| format!("{id:>w$}, ", w = self.id_width))
            .collect();

        format!(
            "{iteration:>w$}: {ids}({fitness})",
            w = self.iteration_width
        )
    }
}
