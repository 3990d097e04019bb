//! 対話式ブラウズ
//!
//! ブラウザ版と同じ `SearchMachine` / `DetailMachine` を端末から操作する。
//! リクエストは1本ずつ実行するので追い越しは起きないが、
//! 照合は状態機械側の連番に任せている。

use crate::error::Result;
use crate::render;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use movie_search_common::{
    run_detail, run_search, DetailMachine, MovieApi, SearchMachine, SearchState,
};
use std::time::Duration;

/// メニューの選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Prev,
    /// 結果一覧のインデックス
    Open(usize),
    NewSearch,
    Quit,
}

/// 現在の状態で選べる操作（無効なページ送りは出さない）
pub fn available_actions(machine: &SearchMachine) -> Vec<BrowseAction> {
    let mut actions = Vec::new();
    if matches!(machine.state(), SearchState::Loaded { .. }) {
        let pagination = machine.pagination();
        if pagination.can_next() {
            actions.push(BrowseAction::Next);
        }
        if pagination.can_prev() {
            actions.push(BrowseAction::Prev);
        }
        actions.extend((0..machine.results().len()).map(BrowseAction::Open));
    }
    actions.push(BrowseAction::NewSearch);
    actions.push(BrowseAction::Quit);
    actions
}

pub fn action_label(action: &BrowseAction, machine: &SearchMachine) -> String {
    match action {
        BrowseAction::Next => "Next page ▶".to_string(),
        BrowseAction::Prev => "◀ Previous page".to_string(),
        BrowseAction::Open(i) => match machine.results().get(*i) {
            Some(movie) => format!("Open: {} ({})", movie.title, movie.year),
            None => format!("Open #{}", i + 1),
        },
        BrowseAction::NewSearch => "New search...".to_string(),
        BrowseAction::Quit => "Quit".to_string(),
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn run_browse<A: MovieApi>(api: &A, initial_query: &str) -> Result<()> {
    let mut machine = SearchMachine::new(initial_query);
    let mut detail = DetailMachine::new();
    let mut pending = machine.start();

    loop {
        if let Some(ticket) = pending.take() {
            let pb = spinner(format!(
                "\"{}\" page {} を検索中...",
                ticket.request.title, ticket.request.page
            ));
            run_search(api, &mut machine, ticket).await;
            pb.finish_and_clear();
        }

        println!("\n🔎 {}", machine.query());
        println!("{}\n", render::search_state_block(machine.state(), machine.pagination()));

        let actions = available_actions(&machine);
        let labels: Vec<String> = actions.iter().map(|a| action_label(a, &machine)).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()?;

        match &actions[choice] {
            BrowseAction::Next => pending = machine.next_page(),
            BrowseAction::Prev => pending = machine.prev_page(),
            BrowseAction::Open(i) => {
                let id = machine.results().get(*i).map(|m| m.id.clone());
                if let Some(ticket) = detail.activate(id.as_deref()) {
                    let pb = spinner(format!("{} を取得中...", ticket.request.id));
                    run_detail(api, &mut detail, ticket).await;
                    pb.finish_and_clear();
                }
                println!("\n{}\n", render::detail_state_block(detail.state()));
            }
            BrowseAction::NewSearch => {
                let text: String = Input::new()
                    .with_prompt("検索語")
                    .with_initial_text(machine.query().to_string())
                    .interact_text()?;
                machine.set_draft(text);
                pending = Some(machine.submit());
            }
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_search_common::{MediaType, MovieSummary, Poster, SearchOutcome};

    fn loaded(total: u32, page_moves: u32) -> SearchMachine {
        let mut machine = SearchMachine::new("batman");
        let ticket = machine.start().unwrap();
        let outcome = || {
            Ok(SearchOutcome::Found {
                results: vec![MovieSummary {
                    id: "tt0372784".into(),
                    title: "Batman Begins".into(),
                    year: "2005".into(),
                    poster: Poster::Missing,
                    kind: MediaType::Movie,
                }],
                total_results: total,
            })
        };
        machine.complete(ticket.seq, outcome());
        for _ in 0..page_moves {
            let ticket = machine.next_page().unwrap();
            machine.complete(ticket.seq, outcome());
        }
        machine
    }

    #[test]
    fn test_actions_on_first_page() {
        let actions = available_actions(&loaded(23, 0));
        assert_eq!(
            actions,
            vec![BrowseAction::Next, BrowseAction::Open(0), BrowseAction::NewSearch, BrowseAction::Quit]
        );
    }

    #[test]
    fn test_actions_on_last_page() {
        let actions = available_actions(&loaded(23, 2));
        assert!(!actions.contains(&BrowseAction::Next));
        assert!(actions.contains(&BrowseAction::Prev));
    }

    #[test]
    fn test_actions_before_loading() {
        let machine = SearchMachine::new("batman");
        assert_eq!(available_actions(&machine), vec![BrowseAction::NewSearch, BrowseAction::Quit]);
    }

    #[test]
    fn test_open_label_uses_title() {
        let machine = loaded(1, 0);
        assert_eq!(
            action_label(&BrowseAction::Open(0), &machine),
            "Open: Batman Begins (2005)"
        );
    }
}
