/*!
 * Stateful pagination for long result sets.
 *
 * Result sets above [`PAGINATION_THRESHOLD`] entries are published as a
 * paged message with navigation controls. The [`PaginationManager`] keeps
 * one [`ViewState`] per published message, keyed by the platform message id,
 * and turns navigation interactions into page edits.
 *
 * Publishing is two-phase: the first page is sent with placeholder control
 * ids (the real message id does not exist yet), then edited in place so the
 * controls embed the id the platform assigned.
 */

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use parking_lot::RwLock;

use crate::chat::ChatClient;
use crate::errors::ChatError;

/// Entries shown on a single page
pub const PROBLEMS_PER_PAGE: usize = 10;
/// Result sets at or below this size are published as a single plain message
pub const PAGINATION_THRESHOLD: usize = 10;
/// Views are stamped with this lifetime at creation
const VIEW_LIFETIME_MINUTES: i64 = 15;

/// Rendered content of one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    pub footer: String,
    pub color: u32,
}

/// Lazily renders pages of a fixed-size result set
pub struct Paginator {
    render: Box<dyn Fn(usize) -> PageContent + Send + Sync>,
    total_pages: usize,
}

impl Paginator {
    /// `render` receives a zero-based page index and must be pure
    pub fn new(
        total_pages: usize,
        render: impl Fn(usize) -> PageContent + Send + Sync + 'static,
    ) -> Self {
        Self {
            render: Box::new(render),
            total_pages: total_pages.max(1),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn render_page(&self, page: usize) -> PageContent {
        (self.render)(page.min(self.total_pages - 1))
    }
}

/// Navigation action carried by a control interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Back,
    Next,
    Last,
}

impl NavAction {
    /// Apply the action to a current page, clamped to `[0, total)`
    pub fn apply(self, current: usize, total: usize) -> usize {
        let last = total.saturating_sub(1);
        match self {
            NavAction::First => 0,
            NavAction::Back => current.saturating_sub(1),
            NavAction::Next => (current + 1).min(last),
            NavAction::Last => last,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavAction::First => "first",
            NavAction::Back => "back",
            NavAction::Next => "next",
            NavAction::Last => "last",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NavAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(NavAction::First),
            "back" => Ok(NavAction::Back),
            "next" => Ok(NavAction::Next),
            "last" => Ok(NavAction::Last),
            _ => Err(()),
        }
    }
}

/// Build the control id for a navigation button
pub fn control_id(view_id: &str, action: NavAction) -> String {
    format!("pager:{view_id}:{}", action.as_str())
}

/// Split a control id back into its view id and action
pub fn parse_control_id(id: &str) -> Option<(&str, NavAction)> {
    let rest = id.strip_prefix("pager:")?;
    let (view_id, action) = rest.rsplit_once(':')?;
    Some((view_id, action.parse().ok()?))
}

/// Navigation control row attached to a paged message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControls {
    pub view_id: String,
    pub at_first: bool,
    pub at_last: bool,
}

impl NavControls {
    pub fn for_page(view_id: &str, page: usize, total: usize) -> Self {
        Self {
            view_id: view_id.to_string(),
            at_first: page == 0,
            at_last: page + 1 >= total,
        }
    }
}

/// State behind one published paged message
pub struct ViewState {
    paginator: Paginator,
    owner_id: String,
    channel_id: String,
    message_id: String,
    current_page: usize,
    #[allow(dead_code)]
    expires_at: DateTime<Utc>,
}

/// Decision computed under the view table lock; I/O happens after release
enum NavOutcome {
    Ignore,
    Denied {
        channel_id: String,
    },
    Update {
        channel_id: String,
        message_id: String,
        page: PageContent,
        controls: NavControls,
    },
}

/// Tracks every live paged view and services navigation interactions
pub struct PaginationManager {
    views: RwLock<HashMap<String, ViewState>>,
    rejection_notice: String,
}

impl PaginationManager {
    pub fn new() -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            rejection_notice: "Only the person who requested this list can turn its pages."
                .to_string(),
        }
    }

    /// Publish a paginator as a new paged message in `channel_id`.
    ///
    /// An empty `owner_id` makes the view public. Returns the message id the
    /// platform assigned, which doubles as the view id.
    pub async fn create_view(
        &self,
        client: &dyn ChatClient,
        channel_id: &str,
        owner_id: &str,
        paginator: Paginator,
    ) -> Result<String, ChatError> {
        let total = paginator.total_pages();
        let first_page = paginator.render_page(0);

        // The real view id is the message id, which does not exist until the
        // send completes. Publish with a placeholder, then edit the controls
        // in place.
        let placeholder = format!("pending-{}", Utc::now().timestamp_nanos_opt().unwrap_or(0));
        let provisional = NavControls::for_page(&placeholder, 0, total);
        let message_id = client.send_page(channel_id, &first_page, &provisional).await?;

        let controls = NavControls::for_page(&message_id, 0, total);
        client
            .edit_page(channel_id, &message_id, &first_page, &controls)
            .await?;

        let state = ViewState {
            paginator,
            owner_id: owner_id.to_string(),
            channel_id: channel_id.to_string(),
            message_id: message_id.clone(),
            current_page: 0,
            expires_at: Utc::now() + Duration::minutes(VIEW_LIFETIME_MINUTES),
        };
        self.views.write().insert(message_id.clone(), state);
        debug!("Created paged view {message_id} in channel {channel_id} ({total} pages)");
        Ok(message_id)
    }

    /// Service a navigation interaction against a view.
    ///
    /// Unknown views are ignored. An interaction from anyone other than the
    /// owner of a non-public view triggers a notice instead of a page turn.
    pub async fn handle_navigation(
        &self,
        client: &dyn ChatClient,
        view_id: &str,
        requester_id: &str,
        action: NavAction,
    ) -> Result<(), ChatError> {
        let outcome = {
            let mut views = self.views.write();
            match views.get_mut(view_id) {
                None => NavOutcome::Ignore,
                Some(view) if !view.owner_id.is_empty() && view.owner_id != requester_id => {
                    NavOutcome::Denied {
                        channel_id: view.channel_id.clone(),
                    }
                }
                Some(view) => {
                    let total = view.paginator.total_pages();
                    view.current_page = action.apply(view.current_page, total);
                    NavOutcome::Update {
                        channel_id: view.channel_id.clone(),
                        message_id: view.message_id.clone(),
                        page: view.paginator.render_page(view.current_page),
                        controls: NavControls::for_page(view_id, view.current_page, total),
                    }
                }
            }
        };

        match outcome {
            NavOutcome::Ignore => {
                debug!("Ignoring navigation for unknown view {view_id}");
                Ok(())
            }
            NavOutcome::Denied { channel_id } => {
                client
                    .send_notice(&channel_id, requester_id, &self.rejection_notice)
                    .await
            }
            NavOutcome::Update {
                channel_id,
                message_id,
                page,
                controls,
            } => {
                let result = client
                    .edit_page(&channel_id, &message_id, &page, &controls)
                    .await;
                if let Err(e) = &result {
                    warn!("Failed to update paged view {view_id}: {e}");
                }
                result
            }
        }
    }

    /// Current page of a view, if it exists
    pub fn current_page(&self, view_id: &str) -> Option<usize> {
        self.views.read().get(view_id).map(|v| v.current_page)
    }

    pub fn contains_view(&self, view_id: &str) -> bool {
        self.views.read().contains_key(view_id)
    }

    pub fn view_count(&self) -> usize {
        self.views.read().len()
    }
}

impl Default for PaginationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a result set of `count` entries needs a paged view
pub fn needs_pagination(count: usize) -> bool {
    count > PAGINATION_THRESHOLD
}
