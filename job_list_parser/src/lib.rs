// One job per line, `id: processing, due, weight`, same as the scheduler prints it.
// Comments start with '#' and run to the end of the line.

use std::collections::HashSet;

use chumsky::{prelude::*, Parser};
use structs::{JobList, JobRecord};
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum JobListParseError {
    #[error("ParseError occurred")]
    ParseError(Vec<Simple<char>>),
    #[error("job list does not contain any job")]
    Empty,
    #[error("job id {0} is listed more than once")]
    DuplicateId(u32),
}

pub fn parse_job_list(content: &str) -> Result<JobList, JobListParseError> {
    let jobs = crate::job_list_parser()
        .parse(content)
        .map_err(JobListParseError::ParseError)?;

    if jobs.is_empty() {
        return Err(JobListParseError::Empty);
    }

    let mut seen = HashSet::with_capacity(jobs.len());
    for job in &jobs {
        if !seen.insert(job.id) {
            return Err(JobListParseError::DuplicateId(job.id));
        }
    }

    Ok(JobList { jobs })
}

fn inline_whitespace() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(|c: &char| *c == ' ' || *c == '\t')
        .repeated()
        .ignored()
}

pub(crate) fn unsigned_parser() -> impl Parser<char, u32, Error = Simple<char>> + Clone {
    text::int(10)
        .try_map(|digits: String, span| {
            digits
                .parse::<u32>()
                .map_err(|err| Simple::custom(span, format!("{digits}: {err}")))
        })
        .labelled("unsigned integer")
}

pub(crate) fn signed_parser() -> impl Parser<char, i64, Error = Simple<char>> + Clone {
    just('-')
        .or_not()
        .then(text::int(10))
        .try_map(|(sign, digits): (Option<char>, String), span| {
            let literal = match sign {
                Some(_) => format!("-{digits}"),
                None => digits,
            };
            literal
                .parse::<i64>()
                .map_err(|err| Simple::custom(span, format!("{literal}: {err}")))
        })
        .labelled("integer")
}

pub(crate) fn job_record_parser() -> impl Parser<char, JobRecord, Error = Simple<char>> + Clone {
    let comma = just(',').padded_by(inline_whitespace());

    unsigned_parser()
        .then_ignore(just(':').padded_by(inline_whitespace()))
        .then(unsigned_parser())
        .then_ignore(comma.clone())
        .then(signed_parser())
        .then_ignore(comma)
        .then(unsigned_parser())
        .map(|(((id, processing_time), due_date), weight)| JobRecord {
            id,
            processing_time,
            due_date,
            weight,
        })
        .labelled("job")
}

pub(crate) fn comment_parser() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    just('#')
        .then(filter(|c: &char| *c != '\n' && *c != '\r').repeated())
        .ignored()
        .labelled("comment")
}

pub(crate) fn job_list_parser() -> impl Parser<char, Vec<JobRecord>, Error = Simple<char>> {
    let line = inline_whitespace()
        .ignore_then(job_record_parser().or_not())
        .then_ignore(inline_whitespace())
        .then_ignore(comment_parser().or_not());

    line.separated_by(text::newline())
        .then_ignore(end())
        .map(|lines: Vec<Option<JobRecord>>| lines.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use chumsky::Parser;

    use crate::{parse_job_list, structs::JobRecord, JobListParseError};

    static TEST_FILE: &str = include_str!("../../instances/reference_15.txt");

    #[test]
    fn job_record_parsing() {
        let record = crate::job_record_parser().parse("15: 12,   8, 80");

        assert_eq!(
            record.unwrap(),
            JobRecord {
                id: 15,
                processing_time: 12,
                due_date: 8,
                weight: 80,
            }
        );
    }

    #[test]
    fn negative_due_date_parsing() {
        let record = crate::job_record_parser().parse("1:3,-4,2").unwrap();

        assert_eq!(record.due_date, -4);
    }

    #[test]
    fn unsigned_overflow_fails() {
        let record = crate::unsigned_parser().parse("99999999999");

        assert!(record.is_err());
    }

    #[test]
    fn comment_parsing() {
        assert!(crate::comment_parser().parse("# Id: Pj, Dj, Wj").is_ok());
    }

    #[test]
    fn parse_job_list_test() {
        let output = parse_job_list(TEST_FILE);

        dbg!(&output);
        let job_list = output.unwrap();
        assert_eq!(job_list.jobs.len(), 15);
        assert_eq!(job_list.jobs[0].id, 2);
        assert_eq!(job_list.jobs[14].weight, 51);
    }

    #[test]
    fn trailing_comment_and_crlf() {
        let output = parse_job_list("1: 3, 10, 1 # first\r\n\r\n2: 5, 2, 4\r\n").unwrap();

        assert_eq!(output.jobs.len(), 2);
        assert_eq!(output.jobs[1].processing_time, 5);
    }

    #[test]
    fn display_round_trips_through_parser() {
        let job_list = parse_job_list(TEST_FILE).unwrap();

        let reparsed = parse_job_list(&job_list.to_string()).unwrap();

        assert_eq!(reparsed, job_list);
    }

    #[test]
    fn empty_list_fails() {
        let output = parse_job_list("# nothing here\n\n");

        assert!(matches!(output, Err(JobListParseError::Empty)));
    }

    #[test]
    fn duplicate_id_fails() {
        let output = parse_job_list("1: 3, 10, 1\n1: 5, 2, 4\n");

        assert!(matches!(output, Err(JobListParseError::DuplicateId(1))));
    }

    #[test]
    fn garbage_fails() {
        let content = "asd";

        let output = parse_job_list(content);

        assert!(output.is_err());
    }
}
