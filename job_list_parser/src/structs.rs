use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobList {
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRecord {
    pub id: u32,
    pub processing_time: u32,
    pub due_date: i64,
    pub weight: u32,
}

impl fmt::Display for JobRecord {
    /// Writes the record in the same `id: pj, dj, wj` form the parser reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}, {}",
            self.id, self.processing_time, self.due_date, self.weight
        )
    }
}

impl fmt::Display for JobList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Id: Pj, Dj, Wj")?;
        for job in &self.jobs {
            writeln!(f, "{job}")?;
        }
        Ok(())
    }
}
