//! Boundary to the external position-evaluation service. The solver is an
//! opaque collaborator reached over HTTP; the engine never depends on it,
//! and everything here is best-effort. Callers inject an [`Evaluator`] so
//! the rest of the application stays deterministic and offline in tests.

use std::time::Duration;

use crate::error::EvalError;

/// A capability that scores a position. The position is the engine's digit
/// encoding (one digit per move, `'1'`..`'7'`); the result is one score per
/// move the solver reports on, passed through to the display untouched.
pub trait Evaluator {
    fn evaluate(&self, position: &str) -> Result<Vec<i64>, EvalError>;
}

/// Talks to the solver over HTTP: `GET {url}?{query_param}={digits}`. The
/// parameter name is configurable because deployments have differed: the
/// Rocket backend reads `pos`, the Next.js proxy in front of it reads
/// `position`.
pub struct HttpEvaluator {
    client: reqwest::blocking::Client,
    url: String,
    query_param: String,
}

impl HttpEvaluator {
    pub fn new(
        url: impl Into<String>,
        query_param: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EvalError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpEvaluator {
            client,
            url: url.into(),
            query_param: query_param.into(),
        })
    }

    fn build_request(&self, position: &str) -> Result<reqwest::blocking::Request, EvalError> {
        let request = self
            .client
            .get(&self.url)
            .query(&[(self.query_param.as_str(), position)])
            .build()?;
        Ok(request)
    }
}

impl Evaluator for HttpEvaluator {
    fn evaluate(&self, position: &str) -> Result<Vec<i64>, EvalError> {
        let response = self.client.execute(self.build_request(position)?)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EvalError::Status(status.as_u16()));
        }

        parse_scores(&response.text()?)
    }
}

/// Parse a solver response body. The service has shipped two shapes over
/// time: a JSON integer array and a whitespace-separated integer list; both
/// are accepted here.
pub fn parse_scores(body: &str) -> Result<Vec<i64>, EvalError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(EvalError::Malformed("empty body".into()));
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| EvalError::Malformed(format!("bad JSON array: {e}")));
    }

    trimmed
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| EvalError::Malformed(format!("non-integer score {token:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_scores() {
        assert_eq!(parse_scores("1 -2 0 3 -1 2 1").unwrap(), vec![1, -2, 0, 3, -1, 2, 1]);
        assert_eq!(parse_scores("  5\n").unwrap(), vec![5]);
    }

    #[test]
    fn test_parse_json_scores() {
        assert_eq!(parse_scores("[1,-2,0,3,-1,2,1]").unwrap(), vec![1, -2, 0, 3, -1, 2, 1]);
        assert_eq!(parse_scores(" [0] ").unwrap(), vec![0]);
    }

    #[test]
    fn test_parse_rejects_empty_body() {
        assert!(matches!(parse_scores("   "), Err(EvalError::Malformed(_))));
    }

    #[test]
    fn test_request_uses_configured_query_param() {
        let evaluator = HttpEvaluator::new(
            "http://localhost:8000/analyze",
            "pos",
            Duration::from_secs(1),
        )
        .unwrap();
        let request = evaluator.build_request("4455").unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/analyze?pos=4455"
        );

        let evaluator = HttpEvaluator::new(
            "https://example.com/api/connect-four",
            "position",
            Duration::from_secs(1),
        )
        .unwrap();
        let request = evaluator.build_request("12").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://example.com/api/connect-four?position=12"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_scores("Backend not available"),
            Err(EvalError::Malformed(_))
        ));
        assert!(matches!(
            parse_scores("[1, \"two\"]"),
            Err(EvalError::Malformed(_))
        ));
    }
}
