use crate::commands::CmdResult;
use crate::error::Result;
use crate::notify::Notification;
use crate::search::filter_by_title;
use crate::shelves;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>, keyword: &str) -> Result<CmdResult> {
    let found = filter_by_title(store.books(), keyword);
    let mut result = CmdResult::default().with_view(shelves::render(&found.books));

    if found.is_empty() {
        result.add_notification(Notification::info(
            "Search Results",
            format!(
                "No books found with a title containing \"{}\".",
                found.keyword
            ),
        ));
    }

    Ok(result)
}
