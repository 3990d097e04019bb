//! 詳細表示の状態機械
//!
//! IDごとに1回だけ取得する。同じIDで再度 `activate` されても再取得しない。

use crate::error::Result;
use crate::request::DetailRequest;
use crate::search::Completion;
use crate::types::MovieDetail;
use crate::wire::DetailOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// IDが無い。リクエストは発行しない
    Unspecified,
    Loading,
    Found(MovieDetail),
    NotFound,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub request: DetailRequest,
}

#[derive(Debug, Clone)]
pub struct DetailMachine {
    id: Option<String>,
    state: DetailState,
    latest_seq: u64,
}

impl Default for DetailMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailMachine {
    pub fn new() -> Self {
        Self {
            id: None,
            state: DetailState::Unspecified,
            latest_seq: 0,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        match &self.state {
            DetailState::Found(detail) => Some(detail),
            _ => None,
        }
    }

    /// 表示対象のIDを設定。IDが変わったときだけチケットを返す
    pub fn activate(&mut self, id: Option<&str>) -> Option<DetailTicket> {
        let id = id.map(str::trim).filter(|s| !s.is_empty());

        let Some(id) = id else {
            // 進行中の応答も無効にする
            self.latest_seq += 1;
            self.id = None;
            self.state = DetailState::Unspecified;
            return None;
        };

        if self.id.as_deref() == Some(id) {
            return None;
        }

        self.latest_seq += 1;
        self.id = Some(id.to_string());
        self.state = DetailState::Loading;
        tracing::debug!(seq = self.latest_seq, id, "detail request issued");

        Some(DetailTicket {
            seq: self.latest_seq,
            request: DetailRequest::new(id),
        })
    }

    pub fn complete(&mut self, seq: u64, result: Result<DetailOutcome>) -> Completion {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "stale detail response discarded");
            return Completion::Stale;
        }

        self.state = match result {
            Ok(DetailOutcome::Found(detail)) => DetailState::Found(detail),
            Ok(DetailOutcome::NotFound { reason }) => {
                tracing::debug!(id = ?self.id, reason = ?reason, "detail not found");
                DetailState::NotFound
            }
            Err(e) => {
                tracing::warn!(id = ?self.id, error = %e, "detail request failed");
                DetailState::Error
            }
        };
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn begins() -> MovieDetail {
        MovieDetail {
            id: "tt0372784".into(),
            title: "Batman Begins".into(),
            year: "2005".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_id_issues_no_request() {
        let mut machine = DetailMachine::new();
        assert_eq!(machine.activate(None), None);
        assert_eq!(machine.activate(Some("")), None);
        assert_eq!(machine.activate(Some("  ")), None);
        assert_eq!(machine.state(), &DetailState::Unspecified);
    }

    #[test]
    fn test_found() {
        let mut machine = DetailMachine::new();
        let ticket = machine.activate(Some("tt0372784")).unwrap();
        assert_eq!(ticket.request, DetailRequest::new("tt0372784"));
        assert!(machine.is_loading());

        machine.complete(ticket.seq, Ok(DetailOutcome::Found(begins())));
        assert_eq!(machine.detail().map(|d| d.title.as_str()), Some("Batman Begins"));
    }

    #[test]
    fn test_not_found_issues_no_further_requests() {
        let mut machine = DetailMachine::new();
        let ticket = machine.activate(Some("tt0000000")).unwrap();
        machine.complete(ticket.seq, Ok(DetailOutcome::NotFound { reason: None }));
        assert_eq!(machine.state(), &DetailState::NotFound);
        assert_eq!(machine.activate(Some("tt0000000")), None);
    }

    #[test]
    fn test_transport_failure_is_error() {
        let mut machine = DetailMachine::new();
        let ticket = machine.activate(Some("tt0372784")).unwrap();
        machine.complete(ticket.seq, Err(Error::Transport("offline".into())));
        assert_eq!(machine.state(), &DetailState::Error);
    }

    #[test]
    fn test_body_without_title_is_error() {
        let mut machine = DetailMachine::new();
        let ticket = machine.activate(Some("tt0372784")).unwrap();
        let result = crate::wire::parse_detail_response(r#"{"Response":"True","imdbID":"tt0372784"}"#);
        machine.complete(ticket.seq, result);
        assert_eq!(machine.state(), &DetailState::Error);
        assert_eq!(machine.detail(), None);
    }

    #[test]
    fn test_same_id_does_not_refetch() {
        let mut machine = DetailMachine::new();
        assert!(machine.activate(Some("tt0372784")).is_some());
        assert_eq!(machine.activate(Some("tt0372784")), None);
        assert!(machine.is_loading());
    }

    #[test]
    fn test_id_change_resets_and_discards_old_response() {
        let mut machine = DetailMachine::new();
        let first = machine.activate(Some("tt0372784")).unwrap();
        let second = machine.activate(Some("tt0096895")).unwrap();
        assert!(machine.is_loading());

        assert_eq!(
            machine.complete(first.seq, Ok(DetailOutcome::Found(begins()))),
            Completion::Stale
        );
        assert!(machine.is_loading());

        let batman_89 = MovieDetail {
            id: "tt0096895".into(),
            title: "Batman".into(),
            ..Default::default()
        };
        machine.complete(second.seq, Ok(DetailOutcome::Found(batman_89)));
        assert_eq!(machine.detail().map(|d| d.id.as_str()), Some("tt0096895"));
    }

    #[test]
    fn test_clearing_id_discards_in_flight_response() {
        let mut machine = DetailMachine::new();
        let ticket = machine.activate(Some("tt0372784")).unwrap();
        machine.activate(None);
        assert_eq!(
            machine.complete(ticket.seq, Ok(DetailOutcome::Found(begins()))),
            Completion::Stale
        );
        assert_eq!(machine.state(), &DetailState::Unspecified);
    }
}
