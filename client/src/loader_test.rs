use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Source that counts fetches and can be scripted to fail or hang.
#[derive(Clone, Default)]
struct ScriptedSource {
    fetches: Rc<RefCell<Vec<PageId>>>,
    script: Rc<RefCell<VecDeque<Outcome>>>,
}

#[derive(Clone, Copy)]
enum Outcome {
    Fail,
    Hang,
}

impl ScriptedSource {
    fn then(self, outcome: Outcome) -> Self {
        self.script.borrow_mut().push_back(outcome);
        self
    }

    fn fetch_count(&self, page: PageId) -> usize {
        self.fetches.borrow().iter().filter(|p| **p == page).count()
    }
}

impl PageSource for ScriptedSource {
    type Module = String;

    async fn fetch(&self, page: PageId) -> Result<String, LoadError> {
        self.fetches.borrow_mut().push(page);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Outcome::Fail) => Err(LoadError::Failed { page, reason: "chunk 404".to_owned() }),
            Some(Outcome::Hang) => futures::future::pending().await,
            None => Ok(format!("module:{}", page.title())),
        }
    }
}

fn never(_: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    Box::pin(futures::future::pending())
}

fn immediately(_: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    Box::pin(futures::future::ready(()))
}

const POLICY: LoadPolicy = LoadPolicy { timeout: Duration::from_secs(10), retries: 1 };

/// Simulate a navigation: returns `true` if the fallback had to be shown.
fn navigate(loader: &PageLoader<ScriptedSource>, page: PageId) -> bool {
    match loader.visit(page) {
        Visit::Ready(_) => false,
        Visit::Pending => {
            block_on(loader.load(page)).unwrap();
            true
        }
    }
}

// =============================================================
// Caching
// =============================================================

#[test]
fn fallback_shown_once_per_first_load() {
    let source = ScriptedSource::default();
    let loader = PageLoader::new(source.clone(), POLICY, never);

    let shown: Vec<bool> = [PageId::Dashboard, PageId::Guests, PageId::Dashboard, PageId::Guests, PageId::Dashboard]
        .into_iter()
        .map(|page| navigate(&loader, page))
        .collect();

    assert_eq!(shown, vec![true, true, false, false, false]);
    assert_eq!(source.fetch_count(PageId::Dashboard), 1);
    assert_eq!(source.fetch_count(PageId::Guests), 1);
}

#[test]
fn visit_reports_ready_after_load() {
    let loader = PageLoader::new(ScriptedSource::default(), POLICY, never);
    assert_eq!(loader.visit(PageId::Tasks), Visit::Pending);
    let module = block_on(loader.load(PageId::Tasks)).unwrap();
    assert_eq!(module, "module:Tasks");
    assert_eq!(loader.visit(PageId::Tasks), Visit::Ready("module:Tasks".to_owned()));
    assert!(loader.is_cached(PageId::Tasks));
}

#[test]
fn clones_share_the_cache() {
    let loader = PageLoader::new(ScriptedSource::default(), POLICY, never);
    let other = loader.clone();
    block_on(loader.load(PageId::Billing)).unwrap();
    assert!(other.is_cached(PageId::Billing));
}

// =============================================================
// Failure handling
// =============================================================

#[test]
fn failed_attempt_is_retried() {
    let source = ScriptedSource::default().then(Outcome::Fail);
    let loader = PageLoader::new(source.clone(), POLICY, never);

    assert!(block_on(loader.load(PageId::Reports)).is_ok());
    assert_eq!(source.fetch_count(PageId::Reports), 2);
}

#[test]
fn exhausted_retries_return_last_error_and_cache_nothing() {
    let source = ScriptedSource::default().then(Outcome::Fail).then(Outcome::Fail);
    let loader = PageLoader::new(source.clone(), POLICY, never);

    let err = block_on(loader.load(PageId::Reports)).unwrap_err();
    assert!(matches!(err, LoadError::Failed { page: PageId::Reports, .. }));
    assert!(!loader.is_cached(PageId::Reports));

    // A later visit starts over and succeeds.
    assert!(block_on(loader.load(PageId::Reports)).is_ok());
    assert_eq!(source.fetch_count(PageId::Reports), 3);
}

#[test]
fn hanging_fetch_times_out() {
    let source = ScriptedSource::default().then(Outcome::Hang).then(Outcome::Hang);
    let loader = PageLoader::new(source.clone(), POLICY, immediately);

    let err = block_on(loader.load(PageId::Services)).unwrap_err();
    assert_eq!(err, LoadError::TimedOut { page: PageId::Services, after: Duration::from_secs(10) });
    assert_eq!(source.fetch_count(PageId::Services), 2);
}

#[test]
fn timeout_then_success_on_retry() {
    let source = ScriptedSource::default().then(Outcome::Hang);
    let loader = PageLoader::new(source, LoadPolicy { timeout: Duration::from_millis(1), retries: 1 }, immediately);
    assert!(block_on(loader.load(PageId::Services)).is_ok());
}

#[test]
fn policy_follows_client_config() {
    let config = ClientConfig::with_api_url(None);
    let policy = LoadPolicy::from(&config);
    assert_eq!(policy.timeout, config.page_load_timeout);
    assert_eq!(policy.retries, config.page_load_retries);
}
