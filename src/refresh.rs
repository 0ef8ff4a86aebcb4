/// View refresher: active tab → rendered view
use crate::checklist::ChecklistRegistry;
use crate::config::{SidebarConfig, Variant};
use crate::error::SidebarError;
use crate::hostname::hostname_of;
use crate::render::{RenderedView, build_view};
use crate::tab_data::ActiveTab;
use std::cell::Cell;
use std::rc::Rc;

/// Access to the host's active tab
#[allow(async_fn_in_trait)]
pub trait TabQuery {
    /// The tab that is active in the current window, if any
    async fn active_tab(&self) -> Result<Option<ActiveTab>, SidebarError>;
}

/// Outcome of one refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    /// Leave the container as it is
    Unchanged,
    /// Replace the container contents with this view
    Replace(RenderedView),
}

impl Refresh {
    /// The view to put in the container, or `None` to keep the current one
    pub fn into_view(self) -> Option<RenderedView> {
        match self {
            Refresh::Replace(view) => Some(view),
            Refresh::Unchanged => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Refreshing,
}

pub struct Refresher<Q: TabQuery> {
    variant: Variant,
    registry: Rc<ChecklistRegistry>,
    query: Q,
    in_flight: Cell<usize>,
}

// Decrements the in-flight count even if the refresh future is dropped early.
struct InFlight<'a>(&'a Cell<usize>);

impl<'a> InFlight<'a> {
    fn enter(count: &'a Cell<usize>) -> Self {
        count.set(count.get() + 1);
        InFlight(count)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl<Q: TabQuery> Refresher<Q> {
    pub fn new(config: &SidebarConfig, query: Q) -> Self {
        Refresher {
            variant: config.variant,
            registry: config.registry.clone(),
            query,
            in_flight: Cell::new(0),
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        if self.in_flight.get() > 0 {
            RefreshPhase::Refreshing
        } else {
            RefreshPhase::Idle
        }
    }

    /// Query the active tab and work out what the container should show.
    ///
    /// Never fails: host errors, missing URLs and unparseable URLs all come
    /// back as `Refresh::Unchanged`.
    pub async fn refresh(&self) -> Refresh {
        let _in_flight = InFlight::enter(&self.in_flight);

        let tab = match self.query.active_tab().await {
            Ok(Some(tab)) => tab,
            Ok(None) => {
                log::debug!("no active tab in current window");
                return Refresh::Unchanged;
            }
            Err(e) => {
                log::warn!("active tab query failed: {}", e);
                return Refresh::Unchanged;
            }
        };

        let Some(url) = tab.url() else {
            log::debug!("active tab {:?} has no URL", tab.id);
            return Refresh::Unchanged;
        };

        match self.variant {
            Variant::UrlEcho => Refresh::Replace(RenderedView::Url(url.to_string())),
            Variant::Checklists => match self.view_for(url) {
                Ok(view) => Refresh::Replace(view),
                Err(e) => {
                    log::debug!("skipping refresh: {}", e);
                    Refresh::Unchanged
                }
            },
        }
    }

    fn view_for(&self, url: &str) -> Result<RenderedView, SidebarError> {
        let hostname = hostname_of(url)?;
        let checklists = self.registry.resolve(&hostname);
        log::debug!("{} → {} checklist(s)", hostname, checklists.len());
        Ok(build_view(&checklists))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PLACEHOLDER;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers every query with the same result
    struct FixedTab(Result<Option<ActiveTab>, SidebarError>);

    impl TabQuery for FixedTab {
        async fn active_tab(&self) -> Result<Option<ActiveTab>, SidebarError> {
            self.0.clone()
        }
    }

    /// Each query waits on the next queued channel
    struct PendingTabs(RefCell<VecDeque<oneshot::Receiver<ActiveTab>>>);

    impl TabQuery for PendingTabs {
        async fn active_tab(&self) -> Result<Option<ActiveTab>, SidebarError> {
            let rx = self.0.borrow_mut().pop_front().ok_or(SidebarError::NoDocument)?;
            Ok(rx.await.ok())
        }
    }

    fn checklist_refresher(url: &str) -> Refresher<FixedTab> {
        Refresher::new(
            &SidebarConfig::checklists(),
            FixedTab(Ok(Some(ActiveTab::with_url(url)))),
        )
    }

    /// Apply an outcome to a container the way the sidebar does
    fn apply(container: &RefCell<RenderedView>, outcome: Refresh) {
        if let Some(view) = outcome.into_view() {
            *container.borrow_mut() = view;
        }
    }

    #[test]
    fn test_into_view() {
        assert_eq!(Refresh::Unchanged.into_view(), None);
        assert_eq!(
            Refresh::Replace(RenderedView::Placeholder).into_view(),
            Some(RenderedView::Placeholder)
        );
    }

    #[test]
    fn test_refresh_meet_renders_one_section() {
        let refresher = checklist_refresher("https://meet.google.com/abc-defg-hij");

        let outcome = block_on(refresher.refresh());

        let Refresh::Replace(RenderedView::Checklists(sections)) = outcome else {
            panic!("expected checklists, got {:?}", outcome);
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "1:1");
        let labels: Vec<&str> = sections[0].items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "What are they learning? What am I learning?",
                "Clarify current responsibilities",
                "Feedback from striving for excellence angle",
                "Anything I can do for them?",
            ]
        );
    }

    #[test]
    fn test_refresh_unlisted_host_shows_placeholder() {
        let refresher = checklist_refresher("https://example.com/some/page");

        let outcome = block_on(refresher.refresh());

        assert_eq!(outcome, Refresh::Replace(RenderedView::Placeholder));
        assert_eq!(PLACEHOLDER, "No checklist items for this site");
    }

    #[test]
    fn test_refresh_hostless_url_shows_placeholder() {
        let refresher = checklist_refresher("about:blank");

        assert_eq!(block_on(refresher.refresh()), Refresh::Replace(RenderedView::Placeholder));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let refresher = checklist_refresher("https://skit.hire.trakstar.com/reviews");

        let first = block_on(refresher.refresh());
        let second = block_on(refresher.refresh());

        assert!(matches!(first, Refresh::Replace(RenderedView::Checklists(_))));
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_missing_url_leaves_container_unchanged() {
        let refresher = Refresher::new(
            &SidebarConfig::checklists(),
            FixedTab(Ok(Some(ActiveTab::default()))),
        );
        let container = RefCell::new(RenderedView::Placeholder);
        let before = container.borrow().clone();

        let outcome = block_on(refresher.refresh());
        apply(&container, outcome.clone());

        assert_eq!(outcome, Refresh::Unchanged);
        assert_eq!(*container.borrow(), before);
    }

    #[test]
    fn test_refresh_degrades_to_unchanged() {
        let cases = vec![
            FixedTab(Ok(None)),
            FixedTab(Err(SidebarError::HostQuery("tabs permission missing".to_string()))),
            FixedTab(Ok(Some(ActiveTab::with_url("not a url")))),
        ];

        for query in cases {
            let refresher = Refresher::new(&SidebarConfig::checklists(), query);
            assert_eq!(block_on(refresher.refresh()), Refresh::Unchanged);
        }
    }

    #[test]
    fn test_refresh_uses_injected_registry() {
        let registry = ChecklistRegistry::new()
            .with_checklist("standup", &["Yesterday", "Today"])
            .with_rule("meet.google.com", &["standup"]);
        let config = SidebarConfig::checklists().with_registry(registry);
        let refresher = Refresher::new(
            &config,
            FixedTab(Ok(Some(ActiveTab::with_url("https://meet.google.com/x")))),
        );

        let outcome = block_on(refresher.refresh());

        let Refresh::Replace(view) = outcome else {
            panic!("expected a render");
        };
        assert_eq!(view.checkbox_ids(), vec!["checkbox-standup-0", "checkbox-standup-1"]);
    }

    #[test]
    fn test_url_echo_variant() {
        let refresher = Refresher::new(
            &SidebarConfig::url_echo(),
            FixedTab(Ok(Some(ActiveTab::with_url("https://example.com/a?b=c")))),
        );

        assert_eq!(
            block_on(refresher.refresh()),
            Refresh::Replace(RenderedView::Url("https://example.com/a?b=c".to_string()))
        );
    }

    #[test]
    fn test_url_echo_missing_url_is_noop() {
        let refresher = Refresher::new(&SidebarConfig::url_echo(), FixedTab(Ok(Some(ActiveTab::default()))));

        assert_eq!(block_on(refresher.refresh()), Refresh::Unchanged);
    }

    #[test]
    fn test_phase_tracks_pending_queries() {
        let (tx, rx) = oneshot::channel();
        let refresher = Rc::new(Refresher::new(
            &SidebarConfig::checklists(),
            PendingTabs(RefCell::new(VecDeque::from([rx]))),
        ));
        let mut pool = LocalPool::new();

        assert_eq!(refresher.phase(), RefreshPhase::Idle);

        let task_refresher = refresher.clone();
        pool.spawner()
            .spawn_local(async move {
                task_refresher.refresh().await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(refresher.phase(), RefreshPhase::Refreshing);

        tx.send(ActiveTab::with_url("https://app.slack.com/client")).unwrap();
        pool.run_until_stalled();
        assert_eq!(refresher.phase(), RefreshPhase::Idle);
    }

    #[test]
    fn test_overlapping_refreshes_last_resolved_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let refresher = Rc::new(Refresher::new(
            &SidebarConfig::checklists(),
            PendingTabs(RefCell::new(VecDeque::from([first_rx, second_rx]))),
        ));
        let container = Rc::new(RefCell::new(RenderedView::Empty));
        let mut pool = LocalPool::new();

        // Trigger twice: first for meet, then for slack.
        for _ in 0..2 {
            let refresher = refresher.clone();
            let container = container.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome = refresher.refresh().await;
                    apply(&container, outcome);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        // The later trigger's query resolves first, the earlier one last.
        second_tx.send(ActiveTab::with_url("https://app.slack.com/client")).unwrap();
        pool.run_until_stalled();
        assert_eq!(container.borrow().checkbox_ids()[0], "checkbox-communication-0");

        first_tx.send(ActiveTab::with_url("https://meet.google.com/x")).unwrap();
        pool.run_until_stalled();
        assert_eq!(container.borrow().checkbox_ids()[0], "checkbox-1:1-0");
        assert_eq!(refresher.phase(), RefreshPhase::Idle);
    }
}
