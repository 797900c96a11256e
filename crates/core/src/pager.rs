//! Page-by-page loader for list-shaped remote resources.
//!
//! A [`Paginator`] owns the pagination bookkeeping (current page index,
//! total page count, latest content, loading flag) so that consumers
//! only supply a [`PageFetcher`] and react to state. Fetch failures
//! never escape the loader: they are reported through a [`Notify`]
//! sink and the state falls back to a single, possibly-empty page.
//!
//! Each fetch is tagged with a generation number. When page changes
//! overlap in flight, a completion whose generation is no longer
//! current is discarded, so a slow earlier response can never
//! overwrite the state of a later request.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::page::PageData;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Asynchronous source of pages for a [`Paginator`].
///
/// Implemented for any `Fn(page, size) -> Future<Output = Result<PageData<T>, E>>`
/// closure, and by the API client adapters in the storefront and admin
/// crates.
pub trait PageFetcher<T>: Send + Sync {
    /// Error produced by a failed fetch.
    type Error: std::fmt::Display;

    /// Fetch one page. `page` is zero-based.
    fn fetch_page(
        &self,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<PageData<T>, Self::Error>> + Send;
}

impl<T, F, Fut, E> PageFetcher<T> for F
where
    F: Fn(u32, u32) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageData<T>, E>> + Send,
    E: std::fmt::Display,
{
    type Error = E;

    fn fetch_page(
        &self,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<PageData<T>, Self::Error>> + Send {
        self(page, size)
    }
}

/// Sink for user-facing load-failure notifications.
///
/// The default sink logs a `warn`; a UI embedding the loader installs
/// its own implementation (toast, status bar, ...).
pub trait Notify: Send + Sync {
    /// Report a user-facing error message.
    fn error(&self, message: &str);
}

impl<N: Notify + ?Sized> Notify for Arc<N> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

struct LogNotifier;

impl Notify for LogNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(message, "paginated load failed");
    }
}

#[derive(Debug)]
struct PagerState<T> {
    page: u32,
    total_pages: u32,
    data: Vec<T>,
    loading: bool,
}

/// Paginated resource loader.
///
/// State lives behind a mutex so every method takes `&self`; calls may
/// interleave across await points (rapid page flipping) and the
/// generation counter keeps the newest request authoritative.
///
/// # Example
///
/// ```
/// # use tienda_core::page::PageData;
/// # use tienda_core::pager::Paginator;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pager = Paginator::new(|page: u32, _size: u32| async move {
///     Ok::<_, std::convert::Infallible>(PageData::new(vec![page], 3))
/// });
/// pager.reload().await;
/// assert_eq!(pager.data(), vec![0]);
/// assert_eq!(pager.total_pages(), 3);
/// # }
/// ```
pub struct Paginator<T, F> {
    fetcher: F,
    size: u32,
    notifier: Box<dyn Notify>,
    generation: AtomicU64,
    state: Mutex<PagerState<T>>,
}

impl<T, F> Paginator<T, F>
where
    F: PageFetcher<T>,
{
    /// Create a loader with the default page size.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_page_size(fetcher, DEFAULT_PAGE_SIZE)
    }

    /// Create a loader with an explicit page size.
    #[must_use]
    pub fn with_page_size(fetcher: F, size: u32) -> Self {
        Self {
            fetcher,
            size,
            notifier: Box::new(LogNotifier),
            generation: AtomicU64::new(0),
            state: Mutex::new(PagerState {
                page: 0,
                total_pages: 1,
                data: Vec::new(),
                loading: false,
            }),
        }
    }

    /// Replace the failure-notification sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notify + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    fn state(&self) -> MutexGuard<'_, PagerState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request a transition to page `page` and fetch it.
    ///
    /// Out-of-range indices are passed through unchanged; the remote
    /// contract returns an empty page for a nonexistent index.
    pub async fn set_page(&self, page: u32) {
        self.state().page = page;
        self.load().await;
    }

    /// Re-fetch the current page (after an external mutation).
    pub async fn reload(&self) {
        self.load().await;
    }

    async fn load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let page = {
            let mut state = self.state();
            state.loading = true;
            state.page
        };

        // Fetch with no lock held; other calls may start newer loads.
        let result = self.fetcher.fetch_page(page, self.size).await;

        let mut state = self.state();
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer load owns the state now; drop this completion.
            tracing::debug!(page, "discarding superseded page load");
            return;
        }

        match result {
            Ok(fetched) => {
                match fetched.total_pages {
                    Some(total) => state.total_pages = total.max(1),
                    None => {
                        tracing::warn!(page, "page response is missing totalPages");
                        self.notifier.error("Failed to load the list");
                        state.total_pages = 1;
                    }
                }
                state.data = fetched.content;
            }
            Err(err) => {
                tracing::error!(page, error = %err, "page fetch failed");
                self.notifier.error("Failed to load the list");
                state.total_pages = 1;
                // Previous content stays visible.
            }
        }
        state.loading = false;
    }

    /// Current page index (zero-based).
    #[must_use]
    pub fn page(&self) -> u32 {
        self.state().page
    }

    /// Last known total page count; 1 until a response reports one.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.state().total_pages
    }

    /// Whether a fetch for the current request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Page size this loader fetches with.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.size
    }
}

impl<T, F> Paginator<T, F>
where
    T: Clone,
    F: PageFetcher<T>,
{
    /// Snapshot of the current page's content.
    #[must_use]
    pub fn data(&self) -> Vec<T> {
        self.state().data.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn count(&self) -> usize {
            self.messages.lock().unwrap().len()
        }
    }

    impl Notify for RecordingNotifier {
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_initial_load_applies_page() {
        let pager = Paginator::new(|_page: u32, _size: u32| async move {
            Ok::<_, std::convert::Infallible>(PageData::new(vec![1, 2, 3], 5))
        });

        assert_eq!(pager.total_pages(), 1);
        pager.reload().await;

        assert_eq!(pager.data(), vec![1, 2, 3]);
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.total_pages(), 5);
        assert!(!pager.is_loading());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_data_and_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let pager = Paginator::new(|page: u32, _size: u32| async move {
            if page == 2 {
                Err("boom".to_string())
            } else {
                Ok(PageData::new(vec!["a", "b"], 4))
            }
        })
        .with_notifier(Arc::clone(&notifier));

        pager.reload().await;
        assert_eq!(pager.total_pages(), 4);

        pager.set_page(2).await;

        assert_eq!(pager.page(), 2);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.data(), vec!["a", "b"]);
        assert!(!pager.is_loading());
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_total_pages_degrades_to_single_page() {
        let notifier = Arc::new(RecordingNotifier::default());
        let pager = Paginator::new(|_page: u32, _size: u32| async move {
            let mut page = PageData::new(vec![7], 9);
            page.total_pages = None;
            Ok::<_, std::convert::Infallible>(page)
        })
        .with_notifier(Arc::clone(&notifier));

        pager.reload().await;

        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.data(), vec![7]);
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_reload_refetches_same_page_and_size() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&calls);
        let pager = Paginator::with_page_size(
            move |page: u32, size: u32| {
                seen.lock().unwrap().push((page, size));
                async move { Ok::<_, std::convert::Infallible>(PageData::new(vec![0u8], 2)) }
            },
            25,
        );

        pager.set_page(1).await;
        pager.reload().await;

        assert_eq!(*calls.lock().unwrap(), vec![(1, 25), (1, 25)]);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let counter = Arc::new(AtomicUsize::new(0));
        let fetched = Arc::clone(&counter);
        let pager = Paginator::new(move |page: u32, _size: u32| {
            fetched.fetch_add(1, Ordering::SeqCst);
            async move {
                if page == 1 {
                    // Slow response for the first request.
                    tokio::time::sleep(Duration::from_millis(30)).await;
                }
                Ok::<_, std::convert::Infallible>(PageData::new(vec![page], 10))
            }
        });

        // Flip pages quickly: the page-2 load starts after the page-1
        // load but completes first.
        tokio::join!(pager.set_page(1), pager.set_page(2));

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.data(), vec![2]);
        assert!(!pager.is_loading());
    }

    #[tokio::test]
    async fn test_empty_page_replaces_content() {
        let pager = Paginator::new(|page: u32, _size: u32| async move {
            if page == 0 {
                Ok::<_, std::convert::Infallible>(PageData::new(vec![1], 3))
            } else {
                Ok(PageData::new(Vec::new(), 3))
            }
        });

        pager.reload().await;
        assert_eq!(pager.data(), vec![1]);

        pager.set_page(9).await;
        assert!(pager.data().is_empty());
        assert_eq!(pager.total_pages(), 3);
    }
}
