//! Pagination helpers shared by every list screen.
//!
//! [`page_window`] computes the 5-button sliding window rendered under list
//! tables, [`summary`] renders the "Показано a-b из n" caption, and
//! [`PerPage`] is the closed set of page sizes the article list offers.

use serde::{Deserialize, Serialize};

use crate::models::PaginationMeta;

/// Number of page buttons in the sliding window.
pub const WINDOW_SIZE: u32 = 5;

/// Page numbers to render for `current` out of `last` pages.
///
/// - `last <= 5`: every page
/// - `current <= 3`: `1..=5`
/// - `current >= last - 2`: the last five pages
/// - otherwise `current - 2 ..= current + 2`
///
/// Out-of-range input is clamped: `last` to at least 1, `current` into `1..=last`.
pub fn page_window(current: u32, last: u32) -> Vec<u32> {
    let last = last.max(1);
    let current = current.clamp(1, last);

    let (start, end) = if last <= WINDOW_SIZE {
        (1, last)
    } else if current <= 3 {
        (1, WINDOW_SIZE)
    } else if current >= last - 2 {
        (last - WINDOW_SIZE + 1, last)
    } else {
        (current - 2, current + 2)
    };

    (start..=end).collect()
}

/// Allowed page sizes of the article list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerPage {
    #[default]
    Fifteen,
    Thirty,
    Fifty,
    Hundred,
}

impl PerPage {
    pub const ALL: [PerPage; 4] = [
        PerPage::Fifteen,
        PerPage::Thirty,
        PerPage::Fifty,
        PerPage::Hundred,
    ];

    pub fn get(self) -> u32 {
        match self {
            PerPage::Fifteen => 15,
            PerPage::Thirty => 30,
            PerPage::Fifty => 50,
            PerPage::Hundred => 100,
        }
    }

    /// Accepts only the four allowed sizes.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.get() == value)
    }
}

/// Russian noun in the genitive after "из N": из 1 статьи, из 2 статей,
/// из 5 статей. `one` is the singular genitive, `few` and `many` the plural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Noun {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl Noun {
    pub const ARTICLES: Noun = Noun {
        one: "статьи",
        few: "статей",
        many: "статей",
    };
    pub const COMMENTS: Noun = Noun {
        one: "комментария",
        few: "комментариев",
        many: "комментариев",
    };
    pub const USERS: Noun = Noun {
        one: "пользователя",
        few: "пользователей",
        many: "пользователей",
    };

    /// Form agreeing with `n`.
    pub fn form(&self, n: u64) -> &'static str {
        let rem100 = n % 100;
        let rem10 = n % 10;
        if rem10 == 1 && rem100 != 11 {
            self.one
        } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
            self.few
        } else {
            self.many
        }
    }
}

/// First and last 1-based item numbers shown on the current page.
pub fn shown_range(meta: &PaginationMeta) -> (u64, u64) {
    if meta.total == 0 {
        return (0, 0);
    }
    let per_page = u64::from(meta.per_page.max(1));
    let page = u64::from(meta.current_page.max(1));
    let from = (page - 1) * per_page + 1;
    let to = (page * per_page).min(meta.total);
    (from.min(meta.total), to)
}

/// Caption such as "Показано 46-47 из 47 статей".
///
/// The noun follows "из N", so it is always in the genitive case.
pub fn summary(meta: &PaginationMeta, noun: Noun) -> String {
    let (from, to) = shown_range(meta);
    format!(
        "Показано {from}-{to} из {} {}",
        meta.total,
        noun.form(meta.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_examples() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_invariants_hold_for_all_small_inputs() {
        for last in 1..=20u32 {
            for current in 1..=last {
                let window = page_window(current, last);
                assert!(window.contains(&current), "current {current} of {last}");
                assert!(window.iter().all(|&p| p >= 1 && p <= last));
                assert_eq!(window.len() as u32, last.min(WINDOW_SIZE));
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn test_window_clamps_out_of_range() {
        assert_eq!(page_window(0, 0), vec![1]);
        assert_eq!(page_window(99, 7), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_summary_last_partial_page() {
        let meta = PaginationMeta {
            current_page: 4,
            last_page: 4,
            per_page: 15,
            total: 47,
        };
        assert_eq!(summary(&meta, Noun::ARTICLES), "Показано 46-47 из 47 статей");
    }

    #[test]
    fn test_summary_plural_forms() {
        let meta = PaginationMeta {
            current_page: 1,
            last_page: 1,
            per_page: 15,
            total: 1,
        };
        assert_eq!(summary(&meta, Noun::ARTICLES), "Показано 1-1 из 1 статьи");
        let meta = PaginationMeta { total: 11, ..meta };
        assert_eq!(summary(&meta, Noun::COMMENTS), "Показано 1-11 из 11 комментариев");
        let meta = PaginationMeta { total: 0, ..meta };
        assert_eq!(summary(&meta, Noun::USERS), "Показано 0-0 из 0 пользователей");
    }

    #[test]
    fn test_per_page_accepts_only_allowed_sizes() {
        assert_eq!(PerPage::from_value(50), Some(PerPage::Fifty));
        assert_eq!(PerPage::from_value(20), None);
        assert_eq!(PerPage::default().get(), 15);
    }
}
