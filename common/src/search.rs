//! 検索・ページ送りの状態機械
//!
//! 入力中のテキスト（draft）と確定済みの検索語（query）を分けて持ち、
//! 検索語かページが変わる遷移だけがリクエスト（`FetchTicket`）を1件発行する。
//! I/O は行わない。呼び出し側がチケットを `MovieApi` に渡し、
//! 結果を `complete` で戻す。
//!
//! レスポンスは発行順の連番で照合し、最新の連番以外は破棄する。
//! 先に投げた "batman" の応答が後から届いても "superman" の結果は上書きされない。

use crate::error::Result;
use crate::pagination::{clamp_page, total_pages, Pagination};
use crate::request::SearchRequest;
use crate::types::MovieSummary;
use crate::wire::SearchOutcome;

/// 初回表示用の検索語
pub const DEFAULT_QUERY: &str = "batman";

/// 状態
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Loaded {
        results: Vec<MovieSummary>,
        total_results: u32,
    },
    Empty,
    Failed,
}

/// 表示の切り替えに使う状態の種類（結果は持たない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed,
}

impl SearchState {
    pub fn status(&self) -> SearchStatus {
        match self {
            SearchState::Idle => SearchStatus::Idle,
            SearchState::Loading => SearchStatus::Loading,
            SearchState::Loaded { .. } => SearchStatus::Loaded,
            SearchState::Empty => SearchStatus::Empty,
            SearchState::Failed => SearchStatus::Failed,
        }
    }
}

/// 発行されたリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: SearchRequest,
}

/// `complete` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// 後続のリクエストに追い越されたので捨てた
    Stale,
}

#[derive(Debug, Clone)]
pub struct SearchMachine {
    draft: String,
    query: String,
    page: u32,
    state: SearchState,
    /// 最後に発行した連番（0 は未発行）
    latest_seq: u64,
    /// 直近に完了したレスポンスの総件数
    total_results: u32,
}

impl Default for SearchMachine {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl SearchMachine {
    pub fn new(initial_query: impl Into<String>) -> Self {
        let query = initial_query.into();
        Self {
            draft: query.clone(),
            query,
            page: 1,
            state: SearchState::Idle,
            latest_seq: 0,
            total_results: 0,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    /// 現在の結果（Loaded 以外は空）
    pub fn results(&self) -> &[MovieSummary] {
        match &self.state {
            SearchState::Loaded { results, .. } => results,
            _ => &[],
        }
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_results)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_pages())
    }

    /// 入力欄の更新。検索語には影響しない
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// 初期検索語で最初のリクエストを発行（Idle のときのみ）
    pub fn start(&mut self) -> Option<FetchTicket> {
        match self.state {
            SearchState::Idle => Some(self.issue()),
            _ => None,
        }
    }

    /// 入力中のテキストを検索語として確定し、1ページ目を取得
    pub fn submit(&mut self) -> FetchTicket {
        self.query = self.draft.clone();
        self.page = 1;
        self.issue()
    }

    /// ページ移動（Loaded のときのみ）。範囲外は端に寄せ、動かなければ何もしない
    pub fn change_page(&mut self, delta: i64) -> Option<FetchTicket> {
        if !matches!(self.state, SearchState::Loaded { .. }) {
            return None;
        }
        let candidate = self.pagination().step(delta)?;
        self.page = candidate;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.change_page(1)
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        self.change_page(-1)
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state = SearchState::Loading;
        tracing::debug!(
            seq = self.latest_seq,
            query = %self.query,
            page = self.page,
            "search request issued"
        );
        FetchTicket {
            seq: self.latest_seq,
            request: SearchRequest::new(self.query.clone(), self.page),
        }
    }

    /// リクエスト結果を反映
    pub fn complete(&mut self, seq: u64, result: Result<SearchOutcome>) -> Completion {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "stale search response discarded");
            return Completion::Stale;
        }

        match result {
            Ok(SearchOutcome::Found { results, total_results })
                if !results.is_empty() && self.page <= total_pages(total_results) =>
            {
                self.total_results = total_results;
                self.state = SearchState::Loaded { results, total_results };
            }
            Ok(SearchOutcome::Found { total_results, .. }) => {
                // 件数が減って今のページが範囲外になった応答も空扱い
                tracing::debug!(query = %self.query, page = self.page, total_results, "page out of range");
                self.total_results = 0;
                self.state = SearchState::Empty;
            }
            Ok(SearchOutcome::NotFound { reason }) => {
                tracing::debug!(query = %self.query, reason = ?reason, "no search results");
                self.total_results = 0;
                self.state = SearchState::Empty;
            }
            Err(e) => {
                tracing::warn!(query = %self.query, page = self.page, error = %e, "search request failed");
                self.total_results = 0;
                self.state = SearchState::Failed;
            }
        }

        self.page = clamp_page(self.page, self.total_pages());
        Completion::Applied
    }
}
