//! 検索サービスの抽象
//!
//! 状態機械はこのトレイト越しにしか外部に触れない。
//! ブラウザは `fetch`、CLIは reqwest で実装し、テストではフェイクに差し替える。

use crate::error::Result;
use crate::request::{DetailRequest, SearchRequest};
use crate::search::{Completion, FetchTicket, SearchMachine};
use crate::detail::{DetailMachine, DetailTicket};
use crate::wire::{DetailOutcome, SearchOutcome};

/// OMDb相当の検索サービス
///
/// WASMのfutureは `Send` にならないので境界を付けない。
#[allow(async_fn_in_trait)]
pub trait MovieApi {
    /// タイトル検索（1ページ分）
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome>;

    /// ID指定の詳細取得
    async fn lookup(&self, request: &DetailRequest) -> Result<DetailOutcome>;
}

impl<T: MovieApi> MovieApi for &T {
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        (**self).search(request).await
    }

    async fn lookup(&self, request: &DetailRequest) -> Result<DetailOutcome> {
        (**self).lookup(request).await
    }
}

/// チケットを実行して結果を状態機械に戻す（リクエストが1本ずつの呼び出し側向け）
pub async fn run_search<A: MovieApi>(
    api: &A,
    machine: &mut SearchMachine,
    ticket: FetchTicket,
) -> Completion {
    let result = api.search(&ticket.request).await;
    machine.complete(ticket.seq, result)
}

pub async fn run_detail<A: MovieApi>(
    api: &A,
    machine: &mut DetailMachine,
    ticket: DetailTicket,
) -> Completion {
    let result = api.lookup(&ticket.request).await;
    machine.complete(ticket.seq, result)
}
