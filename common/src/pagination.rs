//! ページ計算

use serde::Serialize;

/// 1ページあたりの件数（OMDbは1リクエスト10件固定）
pub const PAGE_SIZE: u32 = 10;

/// 総件数から総ページ数を求める（切り上げ）
pub fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

/// 現在ページと総ページ数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: clamp_page(page, total_pages),
            total_pages,
        }
    }

    pub fn from_total_results(page: u32, total_results: u32) -> Self {
        Self::new(page, total_pages(total_results))
    }

    /// 「前へ」が押せるか（1ページ目では無効）
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// 「次へ」が押せるか（最終ページ、または0ページでは無効）
    pub fn can_next(&self) -> bool {
        self.total_pages > 0 && self.page < self.total_pages
    }

    /// delta だけ移動した先。範囲外は端に寄せ、動かなければ None
    pub fn step(&self, delta: i64) -> Option<u32> {
        let candidate = i64::from(self.page).saturating_add(delta);
        let upper = i64::from(self.total_pages.max(1));
        let candidate = candidate.clamp(1, upper) as u32;
        (candidate != self.page).then_some(candidate)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// ページ番号を [1, max(1, total_pages)] に収める
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(95), 10);
        assert_eq!(total_pages(23), 3);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(0), 0);
    }

    #[test]
    fn test_prev_disabled_only_on_first_page() {
        assert!(!Pagination::new(1, 3).can_prev());
        assert!(Pagination::new(2, 3).can_prev());
        assert!(Pagination::new(3, 3).can_prev());
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        assert!(Pagination::new(1, 3).can_next());
        assert!(Pagination::new(2, 3).can_next());
        assert!(!Pagination::new(3, 3).can_next());
    }

    #[test]
    fn test_next_disabled_without_pages() {
        let pagination = Pagination::new(1, 0);
        assert!(!pagination.can_next());
        assert!(!pagination.can_prev());
    }

    #[test]
    fn test_step_clamps_and_reports_noop() {
        let pagination = Pagination::new(1, 3);
        assert_eq!(pagination.step(-1), None);
        assert_eq!(pagination.step(1), Some(2));
        assert_eq!(pagination.step(10), Some(3));

        let last = Pagination::new(3, 3);
        assert_eq!(last.step(1), None);
        assert_eq!(last.step(-5), Some(1));
    }

    #[test]
    fn test_new_clamps_page() {
        assert_eq!(Pagination::new(0, 3).page, 1);
        assert_eq!(Pagination::new(9, 3).page, 3);
        assert_eq!(Pagination::new(4, 0).page, 1);
    }

    #[test]
    fn test_step_stays_in_range_for_any_delta() {
        for total in 0..6u32 {
            for page in 1..=total.max(1) {
                for delta in -7..=7i64 {
                    let pagination = Pagination::new(page, total);
                    let next = pagination.step(delta).unwrap_or(page);
                    assert!(next >= 1 && next <= total.max(1), "page={page} total={total} delta={delta}");
                }
            }
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Pagination::from_total_results(2, 23).label(), "Page 2 of 3");
    }
}
