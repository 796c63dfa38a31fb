use shared_types::{Job, JobStatus, StatusParseError};
use std::str::FromStr;

/// List filter selection. Purely local, never sent to the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => job.status == *status,
        }
    }

    /// `All` followed by each status in display order.
    pub fn choices() -> impl Iterator<Item = StatusFilter> {
        std::iter::once(StatusFilter::All).chain(JobStatus::ALL.into_iter().map(StatusFilter::Only))
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "ALL"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Interview".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(JobStatus::Interview)
        );
        assert!("pending".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_choices_order() {
        let labels: Vec<String> = StatusFilter::choices().map(|f| f.to_string()).collect();
        assert_eq!(
            labels,
            vec!["ALL", "APPLIED", "INTERVIEW", "OFFER", "REJECTED", "ACCEPTED"]
        );
    }
}
